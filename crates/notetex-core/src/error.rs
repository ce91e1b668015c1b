//! Error types for notetex

use thiserror::Error;

/// Main error type for notetex operations.
///
/// The converter and previewer are total functions; these errors only come
/// from the collaborators around them.
#[derive(Error, Debug)]
pub enum NotetexError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document store error (save/open failures)
    #[error("{0}")]
    Store(String),
}

/// Result type alias for notetex operations
pub type Result<T> = std::result::Result<T, NotetexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_message_is_verbatim() {
        let err = NotetexError::Store("No LaTeX to save".into());
        assert_eq!(err.to_string(), "No LaTeX to save");
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: NotetexError = io.into();
        assert!(err.to_string().starts_with("IO error:"));
    }
}
