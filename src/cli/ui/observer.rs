use super::spinner::Spinner;
use colored::Colorize;
use sheet_autofill::{LookupError, LookupObserver};

/// Shows a spinner during the fetch and a colored result line afterwards
#[derive(Default)]
pub struct CliObserver {
    spinner: Option<Spinner>,
}

impl LookupObserver for CliObserver {
    fn loading(&mut self, active: bool) {
        // Dropping the old spinner clears its line
        self.spinner = None;
        if active {
            self.spinner = Some(Spinner::start("טוען נתונים..."));
        }
    }

    fn success(&mut self, filled: usize) {
        if filled == 0 {
            eprintln!("{}", "לא נמצאו שדות למילוי ברשומה".yellow());
        } else {
            eprintln!("{}", format!("נטענו {} שדות בהצלחה", filled).green());
        }
    }

    fn error(&mut self, err: &LookupError) {
        eprintln!("{}", err.user_message().red());
    }
}
