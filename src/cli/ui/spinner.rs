//! Spinner shown on stderr while a lookup is in flight

use is_terminal::IsTerminal;
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::oneshot;

const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Animated progress indicator that stops when dropped.
///
/// Nothing is drawn when stderr is not a terminal, so piped output stays clean.
pub struct Spinner {
    stop_tx: Option<oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl Spinner {
    /// Start a new spinner with the given message
    pub fn start(message: impl Into<String>) -> Self {
        if !io::stderr().is_terminal() {
            return Self {
                stop_tx: None,
                handle: None,
            };
        }

        let (stop_tx, stop_rx) = oneshot::channel();
        let handle = tokio::spawn(Self::run_spinner(message.into(), stop_rx));

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    fn stop_internal(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }

        if let Some(handle) = self.handle.take() {
            // Can't await in Drop
            handle.abort();
            Self::clear_line();
        }
    }

    async fn run_spinner(message: String, mut stop_rx: oneshot::Receiver<()>) {
        let mut frame = 0;
        let mut stderr = io::stderr();

        loop {
            let spinner_char = SPINNER_CHARS[frame % SPINNER_CHARS.len()];
            let _ = write!(stderr, "\r{} {}", spinner_char, message);
            let _ = stderr.flush();

            frame += 1;

            tokio::select! {
                _ = tokio::time::sleep(SPINNER_INTERVAL) => {},
                _ = &mut stop_rx => break,
            }
        }

        Self::clear_line();
    }

    fn clear_line() {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "\r\x1b[K");
        let _ = stderr.flush();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop_internal();
    }
}
