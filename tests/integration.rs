//! Integration tests for notetex.
//!
//! These tests run notes through the converter and the previewer together and
//! check the observable properties of both outputs.

use notetex_convert::{build_document, classify, convert, convert_math, SourceLine};
use notetex_core::{BlockKind, HeadingLevel};
use notetex_preview::{render, Flow, Previewer};
use notetex_store::{save_latex, DocumentStore, FsStore, OpenOutcome, OpenRequest, SaveOutcome, SaveRequest};

/// The body between the `\begin{document}` and `\end{document}` lines.
fn body_of(latex: &str) -> &str {
    let start = latex.find("\\begin{document}").expect("document start") + "\\begin{document}".len();
    let end = latex.find("\\end{document}").expect("document end");
    latex[start..end].trim_matches('\n')
}

// =============================================================================
// Converter
// =============================================================================

#[test]
fn test_blank_input_yields_empty_string() {
    assert_eq!(convert(""), "");
    assert_eq!(convert("   "), "");
    assert_eq!(convert("\n\t\n"), "");
}

#[test]
fn test_document_markers_once_and_ordered() {
    for input in ["x", "# Title", "Theorem: a\nProof: b", "alpha\n\n\nbeta"] {
        let latex = convert(input);
        assert_eq!(latex.matches("\\begin{document}").count(), 1, "{input:?}");
        assert_eq!(latex.matches("\\end{document}").count(), 1, "{input:?}");
        assert!(latex.find("\\begin{document}") < latex.find("\\end{document}"));
    }
}

#[test]
fn test_literal_document_marker_passes_through() {
    // Input that already contains a document marker is not escaped, so the
    // marker appears twice and the preview stops early.
    let latex = convert("before\n\\end{document}\nafter");
    assert_eq!(latex.matches("\\end{document}").count(), 2);
    assert_eq!(render(&latex), "<br><p>before</p>");
}

#[test]
fn test_heading_is_literal() {
    let latex = convert("# Title");
    assert_eq!(body_of(&latex), "\\section{Title}");

    let latex = convert("## alpha over beta");
    assert_eq!(body_of(&latex), "\\subsection{alpha over beta}");
}

#[test]
fn test_math_substitutions() {
    assert!(convert("x squared").contains("$$x^2$$"));

    let latex = convert("alpha plus beta");
    assert!(latex.contains("$\\alpha$"));
    assert!(latex.contains("$\\beta$"));

    assert!(convert("a over b").contains("$\\frac{a}{b}$"));
}

#[test]
fn test_theorem_left_open_by_qed() {
    let latex = convert("Theorem: x > 0\nProof: trivial\nQED");
    let body = body_of(&latex);
    assert_eq!(
        body,
        "\\begin{theorem}\nx > 0\n\\begin{proof}\ntrivial\n\\end{proof}"
    );
    assert!(!latex.contains("\\end{theorem}"));
}

#[test]
fn test_equation_is_self_closing() {
    let latex = convert("equation: a over b");
    assert_eq!(
        body_of(&latex),
        "\\begin{equation}\n$\\frac{a}{b}$\n\\end{equation}"
    );
}

#[test]
fn test_no_triple_dollars() {
    for input in [
        "x squared squared",
        "alpha squared",
        "x sub i squared",
        "$$$ x $$$$",
        "x squared y cubed",
    ] {
        assert!(!convert_math(input).contains("$$$"), "{input:?}");
    }
}

#[test]
fn test_bounded_forms_take_precedence() {
    assert_eq!(
        convert_math("integral from 0 to 5 of x."),
        "$\\int_{0}^{5} x \\, dx$."
    );
    assert_eq!(convert_math("sum from i=1 to n"), "$\\sum_{i=1}^{n}$");
    assert_eq!(convert_math("p if and only if q"), "p $\\iff$ q");
}

#[test]
fn test_classify_exposes_structure() {
    assert_eq!(
        classify("### Notes"),
        SourceLine::Heading {
            level: HeadingLevel::Subsubsection,
            text: "Notes"
        }
    );
    assert_eq!(classify("End Theorem"), SourceLine::End(BlockKind::Theorem));
    assert_eq!(classify("#no space"), SourceLine::Text("#no space"));
}

// =============================================================================
// Previewer
// =============================================================================

#[test]
fn test_render_round_trip() {
    let html = render(&convert("# Title\n\nHello"));
    assert_eq!(html, "<br><h1>Title</h1><br><p>Hello</p><br>");
}

#[test]
fn test_render_blocks() {
    let html = render(&convert("Theorem: x squared\nend theorem"));
    assert_eq!(
        html,
        "<br><div class=\"theorem\"><p>$$x^2$$</p></div><br>"
    );
}

#[test]
fn test_render_stops_at_first_document_end() {
    let latex = format!("{}\n\\section{{Later}}\n\\end{{document}}", convert("Hello"));
    let html = render(&latex);
    assert!(!html.contains("Later"));
    assert!(html.contains("<p>Hello</p>"));
}

#[test]
fn test_render_ignores_preamble() {
    let html = render(&build_document("x"));
    assert!(!html.contains("usepackage"));
    assert_eq!(html, "<br><p>x</p><br>");
}

#[test]
fn test_streaming_matches_render() {
    let latex = convert("# A\nProof: b\nQED\nc");
    let mut previewer = Previewer::new();
    for line in latex.lines() {
        if previewer.feed_line(line) == Flow::Stop {
            break;
        }
    }
    assert_eq!(previewer.finish(), render(&latex));
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_open_convert_save() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, "# Limits\nx to the n").unwrap();

    let mut store = FsStore::new()
        .with_open_path(&input)
        .with_save_path(dir.path().join("out"));

    let OpenOutcome::Opened(opened) = store.open(&OpenRequest::default()).unwrap() else {
        panic!("expected the input to open");
    };
    assert_eq!(opened.path, input);

    let latex = convert(&opened.content);
    let outcome = save_latex(&mut store, &latex, &SaveRequest::default()).unwrap();
    let saved = dir.path().join("out.tex");
    assert_eq!(outcome, SaveOutcome::Saved(saved.clone()));
    assert!(std::fs::read_to_string(saved)
        .unwrap()
        .contains("$$x^{n}$$"));
}

#[test]
fn test_save_without_latex_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FsStore::new().with_save_path(dir.path());
    let err = save_latex(&mut store, &convert("  "), &SaveRequest::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No LaTeX to save. Please convert some text first."
    );
}
