//! Notetex Config
//!
//! This crate handles configuration loading and management
//! for notetex, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/notetex/config.toml`
//! - macOS: `~/Library/Application Support/notetex/config.toml`
//! - Windows: `%APPDATA%\notetex\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use notetex_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod files;
mod view;

pub use files::FilesConfig;
pub use view::ViewConfig;

use notetex_core::{NotetexError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[view]
Mode     = "code"
Debounce = 500

[files]
DefaultName    = "notes.tex"
Extension      = "tex"
OpenExtensions = ["txt", "md"]
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// View configuration
    #[serde(default)]
    pub view: ViewConfig,

    /// File defaults
    #[serde(default)]
    pub files: FilesConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use notetex_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[view]"));
    /// assert!(toml.contains("[files]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "notetex")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| NotetexError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| NotetexError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or inline TOML string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it,
    ///    otherwise parse it as TOML and merge that
    ///
    /// # Example
    ///
    /// ```no_run
    /// use notetex_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[view]\nMode = \"rendered\"")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override given as a file path or inline TOML.
    pub fn parse_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);
        let override_toml = if override_path.is_file() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| NotetexError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use notetex_config::Config;
    /// use notetex_core::ViewMode;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [view]
    ///     Mode = "rendered"
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.view.mode, ViewMode::Rendered);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.view.merge(&other.view);
        self.files.merge(&other.files);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| NotetexError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
