//! Filesystem-backed store for hosts that take paths instead of dialogs.

use crate::{DocumentStore, OpenOutcome, OpenRequest, OpenedFile, SaveOutcome, SaveRequest};
use log::{debug, warn};
use notetex_core::{NotetexError, Result};
use std::path::{Path, PathBuf};

/// Store that reads and writes UTF-8 files at preconfigured paths.
///
/// A missing path stands for a canceled dialog.
#[derive(Debug, Clone, Default)]
pub struct FsStore {
    save_path: Option<PathBuf>,
    open_path: Option<PathBuf>,
}

impl FsStore {
    /// Create a store with no paths (every call is canceled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the save target (a file or a directory).
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }

    /// Set the file to open.
    pub fn with_open_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.open_path = Some(path.into());
        self
    }

    /// Where a save would land, after applying the request's defaults.
    pub fn resolve_save_target(&self, request: &SaveRequest) -> Option<PathBuf> {
        let path = self.save_path.as_deref()?;
        Some(resolve_target(path, request))
    }
}

fn resolve_target(path: &Path, request: &SaveRequest) -> PathBuf {
    let trailing_separator = path
        .as_os_str()
        .to_string_lossy()
        .ends_with(|c: char| c == '/' || c == '\\');
    let is_dir = path.is_dir() || trailing_separator;
    if is_dir {
        return path.join(&request.default_name);
    }
    if path.extension().is_none() && !request.extension.is_empty() {
        return path.with_extension(&request.extension);
    }
    path.to_path_buf()
}

impl DocumentStore for FsStore {
    fn save(&mut self, content: &str, request: &SaveRequest) -> Result<SaveOutcome> {
        let Some(target) = self.resolve_save_target(request) else {
            debug!("save canceled: no target path");
            return Ok(SaveOutcome::Canceled);
        };

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| store_error("saving", &target, e))?;
        }
        std::fs::write(&target, content).map_err(|e| store_error("saving", &target, e))?;

        debug!("saved {} bytes to {}", content.len(), target.display());
        Ok(SaveOutcome::Saved(target))
    }

    fn open(&mut self, request: &OpenRequest) -> Result<OpenOutcome> {
        let Some(path) = self.open_path.clone() else {
            debug!("open canceled: no input path");
            return Ok(OpenOutcome::Canceled);
        };

        let expected = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| request.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)));
        if !expected && !request.extensions.is_empty() {
            warn!(
                "{} is not a {} file; reading it anyway",
                path.display(),
                request.extensions.join("/")
            );
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| store_error("opening", &path, e))?;
        Ok(OpenOutcome::Opened(OpenedFile { path, content }))
    }
}

fn store_error(action: &str, path: &Path, err: std::io::Error) -> NotetexError {
    NotetexError::Store(format!("Error {} file {}: {}", action, path.display(), err))
}
