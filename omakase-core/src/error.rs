//! Error types for narration failures

use thiserror::Error;

/// Failures raised while serving a vignette.
#[derive(Error, Debug)]
pub enum NarrationError {
    /// A raw style code did not map to any known style
    #[error("unsupported style code: {code}")]
    UnsupportedStyle {
        /// The rejected raw code
        code: u8,
    },

    /// An undo was requested with nothing left to undo
    #[error("nothing to undo: the history is empty")]
    EmptyHistory,

    /// The vending machine was asked for a ticket it cannot issue
    #[error("no ticket issued: {reason}")]
    MissingTicket {
        /// Why the ticket could not be issued
        reason: String,
    },

    /// An order named something the menu does not carry
    #[error("'{0}' is not on the menu")]
    UnknownMenuItem(String),

    /// A vignette key did not match anything in the catalogue
    #[error("no vignette named '{0}' on the menu")]
    UnknownVignette(String),

    /// The output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for narration operations
pub type Result<T> = std::result::Result<T, NarrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_style_display() {
        let error = NarrationError::UnsupportedStyle { code: 7 };
        assert_eq!(error.to_string(), "unsupported style code: 7");
    }

    #[test]
    fn test_empty_history_display() {
        let error = NarrationError::EmptyHistory;
        assert_eq!(error.to_string(), "nothing to undo: the history is empty");
    }

    #[test]
    fn test_missing_ticket_display() {
        let error = NarrationError::MissingTicket {
            reason: "no money inserted".to_string(),
        };
        assert_eq!(error.to_string(), "no ticket issued: no money inserted");
    }

    #[test]
    fn test_unknown_menu_item_display() {
        let error = NarrationError::UnknownMenuItem("pizza".to_string());
        assert_eq!(error.to_string(), "'pizza' is not on the menu");
    }

    #[test]
    fn test_unknown_vignette_display() {
        let error = NarrationError::UnknownVignette("monad".to_string());
        assert_eq!(error.to_string(), "no vignette named 'monad' on the menu");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: NarrationError = io_error.into();
        assert!(matches!(error, NarrationError::Io(_)));
        assert!(error.to_string().starts_with("I/O error:"));
    }
}
