//! Classification of LaTeX lines for the preview.

use notetex_core::{BlockKind, HeadingLevel};
use regex::Regex;
use std::sync::LazyLock;

/// `\section{..}` argument (non-greedy up to the first closing brace)
static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\section\{(.*?)\}").unwrap());

/// `\subsection{..}` argument
static SUBSECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\subsection\{(.*?)\}").unwrap());

/// `\subsubsection{..}` argument
static SUBSUBSECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\subsubsection\{(.*?)\}").unwrap());

/// Environments that become `<div>` blocks, in matching order.
const PREVIEW_BLOCKS: [BlockKind; 3] = [BlockKind::Theorem, BlockKind::Proof, BlockKind::Equation];

/// One trimmed line of a LaTeX document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatexLine<'a> {
    /// Contains `\begin{document}`
    DocumentStart,
    /// Contains `\end{document}`
    DocumentEnd,
    /// Empty after trimming
    Blank,
    /// Sectioning command; text is empty when the brace is never closed
    Heading { level: HeadingLevel, text: &'a str },
    /// Contains `\begin{theorem|proof|equation}`
    Begin(BlockKind),
    /// Contains `\end{theorem|proof|equation}`
    End(BlockKind),
    /// Anything else, passed through verbatim
    Content(&'a str),
}

/// Classify a line. Document markers are recognised anywhere in the line.
pub fn classify(line: &str) -> LatexLine<'_> {
    let line = line.trim();

    if line.contains("\\begin{document}") {
        return LatexLine::DocumentStart;
    }
    if line.contains("\\end{document}") {
        return LatexLine::DocumentEnd;
    }
    if line.is_empty() {
        return LatexLine::Blank;
    }

    for level in HeadingLevel::ALL {
        if line.starts_with(&format!("\\{}{{", level.command())) {
            let text = heading_re(level)
                .captures(line)
                .and_then(|c| c.get(1))
                .map_or("", |m| m.as_str());
            return LatexLine::Heading { level, text };
        }
    }

    for block in PREVIEW_BLOCKS {
        if line.contains(&block.begin_marker()) {
            return LatexLine::Begin(block);
        }
        if line.contains(&block.end_marker()) {
            return LatexLine::End(block);
        }
    }

    LatexLine::Content(line)
}

fn heading_re(level: HeadingLevel) -> &'static Regex {
    match level {
        HeadingLevel::Section => &*SECTION_RE,
        HeadingLevel::Subsection => &*SUBSECTION_RE,
        HeadingLevel::Subsubsection => &*SUBSUBSECTION_RE,
    }
}
