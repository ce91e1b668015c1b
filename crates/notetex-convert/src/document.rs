//! Document assembly: the fixed preamble around a converted body.

use notetex_core::BlockKind;

/// Document class line.
pub const DOCUMENT_CLASS: &str = "\\documentclass[12pt]{article}";

/// Package imports, in emission order.
pub const PACKAGES: [&str; 5] = [
    "\\usepackage{amsmath}",
    "\\usepackage{amssymb}",
    "\\usepackage{amsthm}",
    "\\usepackage{geometry}",
    "\\geometry{margin=1in}",
];

/// Wrap `body` in the preamble and the `document` environment.
///
/// Sections are separated by blank lines:
///
/// ```text
/// \documentclass[12pt]{article}
/// \usepackage{...}
///
/// \begin{document}
///
/// <body>
///
/// \end{document}
/// ```
pub fn build_document(body: &str) -> String {
    let begin = BlockKind::Document.begin_marker();
    let end = BlockKind::Document.end_marker();

    let mut parts: Vec<&str> = Vec::with_capacity(PACKAGES.len() + 7);
    parts.push(DOCUMENT_CLASS);
    parts.extend(PACKAGES);
    parts.extend(["", begin.as_str(), "", body, "", end.as_str()]);
    parts.join("\n")
}
