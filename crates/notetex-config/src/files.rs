//! File defaults used when saving and opening documents.

use serde::{Deserialize, Serialize};

/// File configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilesConfig {
    /// Suggested name for saved documents.
    /// Default: "notes.tex"
    #[serde(default = "default_name")]
    pub default_name: String,

    /// Extension added to save targets that have none.
    /// Default: "tex"
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Extensions expected for input text files.
    /// Default: ["txt", "md"]
    #[serde(default = "default_open_extensions")]
    pub open_extensions: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            default_name: default_name(),
            extension: default_extension(),
            open_extensions: default_open_extensions(),
        }
    }
}

impl FilesConfig {
    /// Merge another FilesConfig into this one.
    pub fn merge(&mut self, other: &FilesConfig) {
        self.default_name = other.default_name.clone();
        self.extension = other.extension.clone();
        self.open_extensions = other.open_extensions.clone();
    }
}

fn default_name() -> String {
    "notes.tex".to_string()
}

fn default_extension() -> String {
    "tex".to_string()
}

fn default_open_extensions() -> Vec<String> {
    vec!["txt".to_string(), "md".to_string()]
}
