//! Core enums shared by the converter and the previewer.
//!
//! The converter emits these markers and the previewer recognises them, so
//! both sides agree on the exact LaTeX spelling through this module.

use serde::{Deserialize, Serialize};

/// Heading depth, mapped to the three LaTeX sectioning commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// `# text` → `\section{text}`
    Section,
    /// `## text` → `\subsection{text}`
    Subsection,
    /// `### text` → `\subsubsection{text}`
    Subsubsection,
}

impl HeadingLevel {
    /// All levels, shallowest first.
    pub const ALL: [HeadingLevel; 3] = [
        HeadingLevel::Section,
        HeadingLevel::Subsection,
        HeadingLevel::Subsubsection,
    ];

    /// The source marker including its trailing space (`"# "`, `"## "`, `"### "`).
    pub fn marker(&self) -> &'static str {
        match self {
            HeadingLevel::Section => "# ",
            HeadingLevel::Subsection => "## ",
            HeadingLevel::Subsubsection => "### ",
        }
    }

    /// The LaTeX command name without backslash.
    pub fn command(&self) -> &'static str {
        match self {
            HeadingLevel::Section => "section",
            HeadingLevel::Subsection => "subsection",
            HeadingLevel::Subsubsection => "subsubsection",
        }
    }

    /// The HTML tag used in previews.
    pub fn html_tag(&self) -> &'static str {
        match self {
            HeadingLevel::Section => "h1",
            HeadingLevel::Subsection => "h2",
            HeadingLevel::Subsubsection => "h3",
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// A LaTeX environment delimited by `\begin{..}` / `\end{..}`.
///
/// Nesting is never validated; an unmatched end marker is emitted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// `theorem` environment, left open until `end theorem`
    Theorem,
    /// `proof` environment, closed by `end proof` or `qed`
    Proof,
    /// `equation` environment, always self-closing
    Equation,
    /// The `document` environment wrapping the whole body
    Document,
}

impl BlockKind {
    /// Environment name as written inside the braces.
    pub fn environment(&self) -> &'static str {
        match self {
            BlockKind::Theorem => "theorem",
            BlockKind::Proof => "proof",
            BlockKind::Equation => "equation",
            BlockKind::Document => "document",
        }
    }

    /// `\begin{name}`
    pub fn begin_marker(&self) -> String {
        format!("\\begin{{{}}}", self.environment())
    }

    /// `\end{name}`
    pub fn end_marker(&self) -> String {
        format!("\\end{{{}}}", self.environment())
    }

    /// CSS class of the preview `<div>`, if this block gets one.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            BlockKind::Document => None,
            other => Some(other.environment()),
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.environment())
    }
}

/// What a host shows for the converted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// HTML preview of the document
    Rendered,
    /// The raw LaTeX source
    #[default]
    Code,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Rendered => ViewMode::Code,
            ViewMode::Code => ViewMode::Rendered,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Rendered => write!(f, "rendered"),
            ViewMode::Code => write!(f, "code"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rendered" | "preview" | "html" => Ok(ViewMode::Rendered),
            "code" | "latex" | "tex" => Ok(ViewMode::Code),
            other => Err(format!("unknown view mode '{}' (expected rendered or code)", other)),
        }
    }
}
