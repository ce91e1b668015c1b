//! Notetex Store
//!
//! The persistence capability a host provides around the converter:
//! saving a LaTeX document and opening a text file. Neither transform does
//! file I/O itself.
//!
//! Cancellation (the user dismissed a dialog, or no path was given) is a
//! normal outcome, distinct from a failure.
//!
//! # Example
//!
//! ```no_run
//! use notetex_store::{DocumentStore, FsStore, SaveOutcome, SaveRequest};
//!
//! let mut store = FsStore::new().with_save_path("out/");
//! match store.save("\\documentclass{article}", &SaveRequest::default()).unwrap() {
//!     SaveOutcome::Saved(path) => println!("saved {}", path.display()),
//!     SaveOutcome::Canceled => println!("canceled"),
//! }
//! ```

mod fs;

pub use fs::FsStore;

use notetex_core::{NotetexError, Result};
use std::path::PathBuf;

/// Message used when there is nothing to save.
pub const NOTHING_TO_SAVE: &str = "No LaTeX to save. Please convert some text first.";

/// Parameters for a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    /// Suggested file name when the target is a directory
    pub default_name: String,
    /// Extension added when the target has none
    pub extension: String,
}

impl Default for SaveRequest {
    fn default() -> Self {
        Self {
            default_name: "notes.tex".to_string(),
            extension: "tex".to_string(),
        }
    }
}

/// Parameters for an open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    /// Expected extensions; other files are still accepted
    pub extensions: Vec<String>,
}

impl Default for OpenRequest {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string(), "md".to_string()],
        }
    }
}

/// Result of a successful save call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to this path
    Saved(PathBuf),
    /// The user declined to choose a target
    Canceled,
}

/// A file read by [`DocumentStore::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Result of a successful open call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The chosen file and its content
    Opened(OpenedFile),
    /// The user declined to choose a file
    Canceled,
}

/// Host-provided persistence.
///
/// Failures are returned as errors carrying a message for the user; there is
/// no retry.
pub trait DocumentStore {
    /// Persist `content` to a target chosen by the host.
    fn save(&mut self, content: &str, request: &SaveRequest) -> Result<SaveOutcome>;

    /// Read a text file chosen by the host.
    fn open(&mut self, request: &OpenRequest) -> Result<OpenOutcome>;
}

/// Save `latex` unless it is empty.
///
/// Empty LaTeX means nothing has been converted yet, which is refused before
/// the store is asked for a target.
pub fn save_latex<S: DocumentStore + ?Sized>(
    store: &mut S,
    latex: &str,
    request: &SaveRequest,
) -> Result<SaveOutcome> {
    if latex.is_empty() {
        return Err(NotetexError::Store(NOTHING_TO_SAVE.to_string()));
    }
    store.save(latex, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory store that records saves.
    #[derive(Default)]
    struct MemoryStore {
        saved: Vec<String>,
        cancel: bool,
    }

    impl DocumentStore for MemoryStore {
        fn save(&mut self, content: &str, request: &SaveRequest) -> Result<SaveOutcome> {
            if self.cancel {
                return Ok(SaveOutcome::Canceled);
            }
            self.saved.push(content.to_string());
            Ok(SaveOutcome::Saved(PathBuf::from(&request.default_name)))
        }

        fn open(&mut self, _request: &OpenRequest) -> Result<OpenOutcome> {
            Ok(OpenOutcome::Canceled)
        }
    }

    #[test]
    fn test_save_latex_refuses_empty() {
        let mut store = MemoryStore::default();
        let err = save_latex(&mut store, "", &SaveRequest::default()).unwrap_err();
        assert_eq!(err.to_string(), NOTHING_TO_SAVE);
        assert!(store.saved.is_empty());
    }

    #[test]
    fn test_save_latex_delegates() {
        let mut store = MemoryStore::default();
        let outcome = save_latex(&mut store, "doc", &SaveRequest::default()).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(PathBuf::from("notes.tex")));
        assert_eq!(store.saved, vec!["doc"]);
    }

    #[test]
    fn test_cancel_is_not_an_error() {
        let mut store = MemoryStore {
            cancel: true,
            ..Default::default()
        };
        let outcome = save_latex(&mut store, "doc", &SaveRequest::default()).unwrap();
        assert_eq!(outcome, SaveOutcome::Canceled);
    }

    #[test]
    fn test_default_requests() {
        assert_eq!(SaveRequest::default().default_name, "notes.tex");
        assert_eq!(OpenRequest::default().extensions, vec!["txt", "md"]);
    }
}
