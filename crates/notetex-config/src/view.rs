//! View configuration.
//!
//! Host-side presentation settings: which view is shown and how long input
//! must be quiet before it is reconverted.

use notetex_core::ViewMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// View configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewConfig {
    /// Initial view mode.
    /// Default: code
    #[serde(default)]
    pub mode: ViewMode,

    /// Quiet period before reconverting, in milliseconds.
    /// Default: 500
    #[serde(default = "default_debounce")]
    pub debounce: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            mode: ViewMode::Code,
            debounce: default_debounce(),
        }
    }
}

impl ViewConfig {
    /// Merge another ViewConfig into this one.
    ///
    /// All fields are copied from `other`.
    pub fn merge(&mut self, other: &ViewConfig) {
        self.mode = other.mode;
        self.debounce = other.debounce;
    }

    /// The debounce interval as a duration.
    pub fn debounce_interval(&self) -> Duration {
        Duration::from_millis(self.debounce)
    }
}

fn default_debounce() -> u64 {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let view = ViewConfig::default();
        assert_eq!(view.mode, ViewMode::Code);
        assert_eq!(view.debounce_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_serde_pascal_case() {
        let view: ViewConfig = toml::from_str("Mode = \"rendered\"\nDebounce = 250").unwrap();
        assert_eq!(view.mode, ViewMode::Rendered);
        assert_eq!(view.debounce, 250);
    }

    #[test]
    fn test_missing_fields_default() {
        let view: ViewConfig = toml::from_str("").unwrap();
        assert_eq!(view, ViewConfig::default());
    }
}
