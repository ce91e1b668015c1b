//! Snapshot tests for notetex output.
//!
//! These tests capture full documents and previews as inline snapshots.
//! Run with `cargo insta review` to update snapshots.

use notetex_convert::convert;
use notetex_preview::render;

const NOTES: &str = "# Limits
## Definition
Theorem: limit as x approaches 0 of x squared equals 0
end theorem
Equation: a over b
Proof: for all epsilon there exists delta
QED";

// =============================================================================
// Document Snapshots
// =============================================================================

#[test]
fn test_snapshot_minimal_document() {
    insta::assert_snapshot!(convert("# Title\n\nHello"), @r"
\documentclass[12pt]{article}
\usepackage{amsmath}
\usepackage{amssymb}
\usepackage{amsthm}
\usepackage{geometry}
\geometry{margin=1in}

\begin{document}

\section{Title}

Hello

\end{document}
");
}

#[test]
fn test_snapshot_structured_notes() {
    insta::assert_snapshot!(convert(NOTES), @r"
\documentclass[12pt]{article}
\usepackage{amsmath}
\usepackage{amssymb}
\usepackage{amsthm}
\usepackage{geometry}
\geometry{margin=1in}

\begin{document}

\section{Limits}
\subsection{Definition}
\begin{theorem}
$\lim_{x \to 0}$ of $$x^2$$ = 0
\end{theorem}
\begin{equation}
$\frac{a}{b}$
\end{equation}
\begin{proof}
$\forall \epsilon \exists \delta$
\end{proof}

\end{document}
");
}

// =============================================================================
// Preview Snapshots
// =============================================================================

#[test]
fn test_snapshot_structured_preview() {
    insta::assert_snapshot!(render(&convert(NOTES)), @r#"<br><h1>Limits</h1><h2>Definition</h2><div class="theorem"><p>$\lim_{x \to 0}$ of $$x^2$$ = 0</p></div><div class="equation"><p>$\frac{a}{b}$</p></div><div class="proof"><p>$\forall \epsilon \exists \delta$</p></div><br>"#);
}
