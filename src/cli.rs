//! Command-line interface for notetex.

use clap::Parser;
use notetex_core::ViewMode;
use std::path::PathBuf;

/// Notetex - plain-text notes with verbal math to LaTeX.
///
/// Converts headings, theorem/proof/equation blocks and phrases such as
/// "x squared" or "integral from 0 to 5 of x" into a LaTeX document, and can
/// show a simplified HTML preview of the result.
#[derive(Parser, Debug)]
#[command(
    name = "ntx",
    author = "Notetex Contributors",
    version,
    about = "Convert plain-text notes with verbal math into LaTeX",
    after_help = "Examples:\n  \
                  echo 'x squared' | ntx\n  \
                  ntx notes.txt -o notes.tex\n  \
                  ntx --view rendered notes.md\n  \
                  ntx --watch notes.txt -o build/"
)]
pub struct Cli {
    /// Input text file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Save the LaTeX to this file or directory
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// What to print: code (LaTeX) or rendered (HTML preview)
    #[arg(long = "view", value_name = "MODE")]
    pub view: Option<ViewMode>,

    /// Flip the configured view mode
    #[arg(long = "toggle")]
    pub toggle: bool,

    /// Reconvert whenever the input file changes
    #[arg(short = 'W', long = "watch", requires = "file")]
    pub watch: bool,

    /// Quiet period in milliseconds before reconverting (with --watch)
    #[arg(long = "debounce", value_name = "MS")]
    pub debounce: Option<u64>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Print the input syntax guide and exit
    #[arg(long = "guide")]
    pub show_guide: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.file.is_none()
    }
}

/// Show paths information.
pub fn show_paths() {
    use notetex_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
