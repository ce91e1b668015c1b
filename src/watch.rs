//! Debounced polling of an input file.

use log::{debug, trace};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant, SystemTime};

/// How often the input file's mtime is checked.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Fires once after `interval` has passed with no new input event.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    pending: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    /// Record an input event, restarting the quiet period.
    pub fn touch(&mut self, now: Instant) {
        self.pending = Some(now);
    }

    /// True exactly once per burst of events, after the quiet period.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(last) if now.saturating_duration_since(last) >= self.interval => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

/// Watches one file and yields its content after it settles.
#[derive(Debug)]
pub struct FileWatcher {
    path: PathBuf,
    last_modified: Option<SystemTime>,
    debouncer: Debouncer,
}

impl FileWatcher {
    pub fn new(path: impl Into<PathBuf>, interval: Duration) -> Self {
        Self {
            path: path.into(),
            last_modified: None,
            debouncer: Debouncer::new(interval),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check the file once. Returns the new content when a change has settled.
    ///
    /// A file that is missing (for example mid-save by an editor) counts as
    /// unchanged.
    pub fn poll(&mut self, now: Instant) -> io::Result<Option<String>> {
        match fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(modified) if Some(modified) != self.last_modified => {
                trace!("{} modified", self.path.display());
                self.last_modified = Some(modified);
                self.debouncer.touch(now);
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                trace!("{} missing, waiting", self.path.display());
            }
            Err(e) => return Err(e),
        }

        if !self.debouncer.ready(now) {
            return Ok(None);
        }

        debug!("change settled, reloading {}", self.path.display());
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                trace!("{} removed before reload, waiting", self.path.display());
                self.last_modified = None;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Poll forever, calling `on_change` with each settled content.
    pub fn run<F>(&mut self, mut on_change: F) -> io::Result<()>
    where
        F: FnMut(&str),
    {
        loop {
            if let Some(content) = self.poll(Instant::now())? {
                on_change(&content);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_debouncer_waits_for_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(500 * MS);
        assert!(!debouncer.ready(start));

        debouncer.touch(start);
        assert!(!debouncer.ready(start + 499 * MS));
        assert!(debouncer.ready(start + 500 * MS));
        assert!(!debouncer.ready(start + 900 * MS));
    }

    #[test]
    fn test_debouncer_restarts_on_new_event() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(500 * MS);
        debouncer.touch(start);
        debouncer.touch(start + 300 * MS);
        assert!(!debouncer.ready(start + 600 * MS));
        assert!(debouncer.ready(start + 800 * MS));
        assert!(!debouncer.ready(start + 801 * MS));
    }

    #[test]
    fn test_watcher_reports_initial_content_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "x squared").unwrap();

        let start = Instant::now();
        let mut watcher = FileWatcher::new(&path, 100 * MS);
        assert_eq!(watcher.poll(start).unwrap(), None);
        assert_eq!(
            watcher.poll(start + 100 * MS).unwrap().as_deref(),
            Some("x squared")
        );
        assert_eq!(watcher.poll(start + 300 * MS).unwrap(), None);
    }

    #[test]
    fn test_watcher_missing_file_is_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let mut watcher = FileWatcher::new(dir.path().join("absent.txt"), MS);
        let start = Instant::now();
        assert_eq!(watcher.poll(start).unwrap(), None);
        assert_eq!(watcher.poll(start + 10 * MS).unwrap(), None);
        assert!(watcher.path().ends_with("absent.txt"));
    }

    #[test]
    fn test_watcher_file_removed_while_settling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "alpha").unwrap();

        let start = Instant::now();
        let mut watcher = FileWatcher::new(&path, 100 * MS);
        assert_eq!(watcher.poll(start).unwrap(), None);

        fs::remove_file(&path).unwrap();
        assert_eq!(watcher.poll(start + 100 * MS).unwrap(), None);

        fs::write(&path, "beta").unwrap();
        assert_eq!(watcher.poll(start + 200 * MS).unwrap(), None);
        assert_eq!(
            watcher.poll(start + 300 * MS).unwrap().as_deref(),
            Some("beta")
        );
    }
}
