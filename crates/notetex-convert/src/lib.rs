//! Notetex Convert
//!
//! Turns plain text annotated with lightweight structure and verbal math
//! into a LaTeX document.
//!
//! # Overview
//!
//! Conversion is line-local. Each trimmed input line is classified into a
//! [`SourceLine`] (first match wins) and emitted in input order:
//!
//! | Input                         | Output                                  |
//! |-------------------------------|-----------------------------------------|
//! | blank                         | blank                                   |
//! | `# t` / `## t` / `### t`      | `\section{t}` / `\subsection{t}` / ...  |
//! | `theorem: rest`               | `\begin{theorem}` + converted rest      |
//! | `proof: rest`                 | `\begin{proof}` + converted rest        |
//! | `end proof` / `qed`           | `\end{proof}`                           |
//! | `end theorem`                 | `\end{theorem}`                         |
//! | `equation: rest`              | `\begin{equation}`, rest, `\end{equation}` |
//! | anything else                 | [`convert_math`] of the line            |
//!
//! No open/close state is kept: a theorem without `end theorem` stays open
//! in the output.
//!
//! # Example
//!
//! ```
//! use notetex_convert::convert;
//!
//! let latex = convert("# Notes\nx squared");
//! assert!(latex.contains("\\section{Notes}"));
//! assert!(latex.contains("$$x^2$$"));
//! assert_eq!(convert("   "), "");
//! ```

pub mod document;
pub mod math;
pub mod rules;

pub use document::{build_document, DOCUMENT_CLASS, PACKAGES};
pub use math::{convert_math, math_rules};
pub use rules::{Category, Rule};

use notetex_core::{BlockKind, HeadingLevel};

/// Structural classification of one trimmed source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLine<'a> {
    /// Empty after trimming
    Blank,
    /// Heading marker; the text is inserted literally
    Heading { level: HeadingLevel, text: &'a str },
    /// `theorem:` or `proof:` opener with the trimmed remainder
    Begin { block: BlockKind, rest: &'a str },
    /// `end proof`, `qed` or `end theorem`
    End(BlockKind),
    /// `equation:` with the trimmed remainder
    Equation(&'a str),
    /// Free text for the math converter
    Text(&'a str),
}

/// Classify a line. The line is trimmed first.
pub fn classify(line: &str) -> SourceLine<'_> {
    let line = line.trim();

    if line.is_empty() {
        return SourceLine::Blank;
    }

    for level in HeadingLevel::ALL {
        if let Some(text) = line.strip_prefix(level.marker()) {
            return SourceLine::Heading { level, text };
        }
    }

    if let Some(rest) = strip_prefix_ignore_case(line, "theorem:") {
        return SourceLine::Begin {
            block: BlockKind::Theorem,
            rest: rest.trim(),
        };
    }
    if let Some(rest) = strip_prefix_ignore_case(line, "proof:") {
        return SourceLine::Begin {
            block: BlockKind::Proof,
            rest: rest.trim(),
        };
    }
    if line.eq_ignore_ascii_case("end proof") || line.eq_ignore_ascii_case("qed") {
        return SourceLine::End(BlockKind::Proof);
    }
    if line.eq_ignore_ascii_case("end theorem") {
        return SourceLine::End(BlockKind::Theorem);
    }
    if let Some(rest) = strip_prefix_ignore_case(line, "equation:") {
        return SourceLine::Equation(rest.trim());
    }

    SourceLine::Text(line)
}

/// ASCII case-insensitive `strip_prefix`.
fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}

/// Text to LaTeX converter.
///
/// Stateless; one value can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter;

impl Converter {
    /// Create a new converter.
    pub fn new() -> Self {
        Self
    }

    /// Convert a whole text into a LaTeX document.
    ///
    /// Blank input (empty or whitespace only) yields an empty string rather
    /// than an empty document.
    pub fn convert(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        build_document(&self.convert_body(text))
    }

    /// Convert a text into the document body only (no preamble).
    pub fn convert_body(&self, text: &str) -> String {
        let mut body: Vec<String> = Vec::new();
        for line in text.split('\n') {
            self.emit_line(classify(line), &mut body);
        }
        body.join("\n")
    }

    /// Convert the verbal math in one line of free text.
    pub fn convert_math(&self, line: &str) -> String {
        convert_math(line)
    }

    fn emit_line(&self, line: SourceLine<'_>, body: &mut Vec<String>) {
        match line {
            SourceLine::Blank => body.push(String::new()),
            SourceLine::Heading { level, text } => {
                body.push(format!("\\{}{{{}}}", level.command(), text));
            }
            SourceLine::Begin { block, rest } => {
                body.push(block.begin_marker());
                body.push(convert_math(rest));
            }
            SourceLine::End(block) => body.push(block.end_marker()),
            SourceLine::Equation(rest) => {
                body.push(BlockKind::Equation.begin_marker());
                body.push(convert_math(rest));
                body.push(BlockKind::Equation.end_marker());
            }
            SourceLine::Text(text) => body.push(convert_math(text)),
        }
    }
}

/// Convert a whole text into a LaTeX document with a default [`Converter`].
pub fn convert(text: &str) -> String {
    Converter::new().convert(text)
}
