//! Property-based tests for notetex.
//!
//! These tests use proptest to generate random inputs and verify
//! that the converter and previewer handle them gracefully.

use proptest::prelude::*;

use notetex_convert::{convert, convert_math};
use notetex_preview::render;

/// Generate a random notes-like string.
fn notes_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n\t]*").unwrap()
}

/// Generate notes with no backslashes and at least one visible character.
///
/// Backslashes are excluded because a line holding a literal
/// `\end{document}` passes through verbatim and adds a second marker.
fn plain_notes() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x5B\x5D-\x7E\n]{0,200}[a-z][\x20-\x5B\x5D-\x7E\n]{0,200}")
        .unwrap()
}

/// Generate a line mixing words that trigger math rules.
fn math_line() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "x", "y", "n", "0", "1", "alpha", "Delta", "squared", "cubed", "over", "sub", "to",
        "the", "power", "of", "integral", "from", "sum", "=", "and", "or", "not", "in", "set",
        "$", "$$", "(a+b)", "sqrt(x)", "abs(y)", "choose", ".",
    ]);
    prop::collection::vec(word, 0..24).prop_map(|words| words.join(" "))
}

/// Generate whitespace-only input.
fn blank_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[ \t\r\n]{0,40}").unwrap()
}

// =============================================================================
// Converter Property Tests
// =============================================================================

proptest! {
    /// The converter and previewer should never panic on any input.
    #[test]
    fn convert_never_panics(input in notes_string()) {
        let latex = convert(&input);
        let _ = render(&latex);
    }

    /// No run of three or more dollars survives the math pipeline.
    #[test]
    fn convert_math_has_no_triple_dollars(line in math_line()) {
        let out = convert_math(&line);
        prop_assert!(!out.contains("$$$"), "{:?} -> {:?}", line, out);
    }

    /// Same for arbitrary text.
    #[test]
    fn convert_math_arbitrary_has_no_triple_dollars(line in notes_string()) {
        prop_assert!(!convert_math(&line).contains("$$$"));
    }

    /// Non-blank notes produce exactly one document environment.
    #[test]
    fn document_markers_exactly_once(input in plain_notes()) {
        let latex = convert(&input);
        prop_assert_eq!(latex.matches("\\begin{document}").count(), 1);
        prop_assert_eq!(latex.matches("\\end{document}").count(), 1);
        let begin_pos = latex.find("\\begin{document}");
        let end_pos = latex.find("\\end{document}");
        prop_assert!(begin_pos < end_pos);
    }

    /// Blank input converts to nothing.
    #[test]
    fn blank_input_is_empty(input in blank_string()) {
        prop_assert_eq!(convert(&input), "");
    }
}

// =============================================================================
// Previewer Property Tests
// =============================================================================

proptest! {
    /// Anything after the first `\end{document}` is ignored.
    #[test]
    fn render_ignores_trailing_content(input in plain_notes(), tail in notes_string()) {
        let latex = convert(&input);
        let extended = format!("{}\n{}", latex, tail);
        prop_assert_eq!(render(&extended), render(&latex));
    }

    /// Without a `\begin{document}` line nothing is rendered.
    #[test]
    fn render_needs_document_start(input in plain_notes()) {
        prop_assert_eq!(render(&input), "");
    }
}
