//! Error taxonomy for record lookups
//!
//! Every failure of a lookup call falls into one of three kinds:
//! the caller supplied no identifier, the identifier has no row, or the
//! store could not be reached / was misconfigured / returned bad data.
//! All of them end the call; nothing is retried and nothing is filled.

use std::time::Duration;
use thiserror::Error;

/// Coarse classification used by callers to decide how to surface an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingInput,
    NotFound,
    Transport,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no identifier was supplied")]
    MissingInput,

    #[error("no row matches identifier '{id}': {message}")]
    NotFound { id: String, message: String },

    #[error("the sheet is empty or could not be found")]
    EmptySheet,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store did not answer within {0:?}")]
    Timeout(Duration),

    #[error("no usable record store configuration: {0}")]
    Config(String),

    #[error("failed to read workbook: {0}")]
    Workbook(String),
}

impl LookupError {
    pub fn not_found(id: &str) -> Self {
        LookupError::NotFound {
            id: id.to_string(),
            message: "no matching row".to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::MissingInput => ErrorKind::MissingInput,
            LookupError::NotFound { .. } => ErrorKind::NotFound,
            LookupError::EmptySheet
            | LookupError::Transport(_)
            | LookupError::Http(_)
            | LookupError::Timeout(_)
            | LookupError::Config(_)
            | LookupError::Workbook(_) => ErrorKind::Transport,
        }
    }

    /// Message shown to the end user. Transport details stay in the log.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::MissingInput => "יש להזין תעודת זהות".to_string(),
            LookupError::NotFound { .. } => "לא נמצאו נתונים עבור תעודת הזהות הזו".to_string(),
            LookupError::EmptySheet => "הגיליון ריק או לא נמצא".to_string(),
            LookupError::Config(_) => "לא הוגדרו פרטי חיבור לגוגל שיטס".to_string(),
            _ => "אירעה שגיאה בטעינת הנתונים".to_string(),
        }
    }
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(LookupError::MissingInput.kind(), ErrorKind::MissingInput);
        assert_eq!(LookupError::not_found("1").kind(), ErrorKind::NotFound);
        assert_eq!(LookupError::EmptySheet.kind(), ErrorKind::Transport);
        assert_eq!(
            LookupError::Timeout(Duration::from_secs(1)).kind(),
            ErrorKind::Transport
        );
        assert_eq!(LookupError::Config("x".into()).kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_user_message_hides_transport_detail() {
        let err = LookupError::Transport("503 Service Unavailable from 10.0.0.1".into());
        assert!(!err.user_message().contains("10.0.0.1"));
        assert!(err.to_string().contains("10.0.0.1"));
    }
}
