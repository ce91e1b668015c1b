//! Notetex Preview
//!
//! Renders a LaTeX document produced by `notetex-convert` into a simplified
//! HTML fragment. Math delimiters (`$..$`, `$$..$$`) are left in place for a
//! downstream math-typesetting pass.
//!
//! # Mapping
//!
//! Only lines between `\begin{document}` and the first `\end{document}` are
//! read. Scanning stops at the first `\end{document}`, even before the
//! document has started.
//!
//! - blank → `<br>`
//! - `\section{X}` / `\subsection{X}` / `\subsubsection{X}` → `<h1>X</h1>` / `<h2>` / `<h3>`
//! - `\begin{theorem}` → `<div class="theorem">`, `\end{theorem}` → `</div>`
//!   (likewise `proof` and `equation`)
//! - anything else → `<p>X</p>`
//!
//! Content is not HTML-escaped; the input is trusted converter output.
//!
//! # Example
//!
//! ```
//! use notetex_preview::render;
//!
//! let html = render("\\begin{document}\n\\section{Title}\n\nHello\n\\end{document}");
//! assert_eq!(html, "<h1>Title</h1><br><p>Hello</p>");
//! ```

pub mod line;

pub use line::{classify, LatexLine};

use log::debug;
use notetex_core::BlockKind;

/// Whether scanning should go on after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Feed the next line
    Continue,
    /// `\end{document}` was reached; later lines are ignored
    Stop,
}

/// Which preview blocks are currently open.
///
/// Only consulted for diagnostics; output never depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenBlocks {
    pub theorem: bool,
    pub proof: bool,
    pub equation: bool,
}

impl OpenBlocks {
    fn flag(&mut self, block: BlockKind) -> Option<&mut bool> {
        match block {
            BlockKind::Theorem => Some(&mut self.theorem),
            BlockKind::Proof => Some(&mut self.proof),
            BlockKind::Equation => Some(&mut self.equation),
            BlockKind::Document => None,
        }
    }

    fn open(&mut self, block: BlockKind) {
        if let Some(flag) = self.flag(block) {
            *flag = true;
        }
    }

    fn close(&mut self, block: BlockKind) {
        if let Some(flag) = self.flag(block) {
            if !*flag {
                debug!("closing {} block that was never opened", block);
            }
            *flag = false;
        }
    }

    /// True when no block is open.
    pub fn is_empty(&self) -> bool {
        !(self.theorem || self.proof || self.equation)
    }
}

/// Streaming LaTeX → HTML previewer.
///
/// Feed lines one at a time with [`Previewer::feed_line`] until it returns
/// [`Flow::Stop`] or the input runs out, then take the HTML with
/// [`Previewer::finish`].
#[derive(Debug, Default)]
pub struct Previewer {
    html: String,
    in_document: bool,
    stopped: bool,
    blocks: OpenBlocks,
}

impl Previewer {
    /// Create a new previewer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one line of LaTeX.
    pub fn feed_line(&mut self, line: &str) -> Flow {
        if self.stopped {
            return Flow::Stop;
        }

        match classify(line) {
            LatexLine::DocumentStart => self.in_document = true,
            LatexLine::DocumentEnd => {
                self.stopped = true;
                return Flow::Stop;
            }
            _ if !self.in_document => {}
            LatexLine::Blank => self.html.push_str("<br>"),
            LatexLine::Heading { level, text } => {
                let tag = level.html_tag();
                self.html.push_str(&format!("<{tag}>{text}</{tag}>"));
            }
            LatexLine::Begin(block) => {
                self.blocks.open(block);
                if let Some(class) = block.css_class() {
                    self.html.push_str(&format!("<div class=\"{class}\">"));
                }
            }
            LatexLine::End(block) => {
                self.blocks.close(block);
                self.html.push_str("</div>");
            }
            LatexLine::Content(text) => {
                self.html.push_str("<p>");
                self.html.push_str(text);
                self.html.push_str("</p>");
            }
        }

        Flow::Continue
    }

    /// Blocks still open at this point.
    pub fn open_blocks(&self) -> OpenBlocks {
        self.blocks
    }

    /// The HTML produced so far.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Consume the previewer and return the fragment.
    pub fn finish(self) -> String {
        if !self.blocks.is_empty() {
            debug!("preview finished with open blocks: {:?}", self.blocks);
        }
        self.html
    }
}

/// Render a whole LaTeX document into an HTML fragment.
pub fn render(latex: &str) -> String {
    let mut previewer = Previewer::new();
    for line in latex.split('\n') {
        if previewer.feed_line(line) == Flow::Stop {
            break;
        }
    }
    previewer.finish()
}
