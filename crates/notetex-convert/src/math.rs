//! Verbal math phrases to LaTeX.
//!
//! [`convert_math`] runs a fixed, ordered list of [`Rule`]s over one line of
//! free text. Each rule rewrites every non-overlapping match in the output of
//! the previous one, so the order below is part of the behaviour: a phrase
//! that contains a shorter phrase is handled first (or guarded), and later
//! word-boundary rules never bite into LaTeX inserted earlier.
//!
//! # Quirks kept on purpose
//!
//! - Powers and subscripts are wrapped in `$$..$$`, everything else in `$..$`.
//! - `equals` becomes a bare `=` with no math delimiters.
//! - Absolute values come out as `$|x|$`.

use crate::rules::{apply_all, Category, Rule};
use std::sync::LazyLock;

/// Lowercase Greek letters (matched case-insensitively).
static GREEK_LOWER: [&str; 12] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "theta", "lambda", "mu", "pi", "sigma", "phi",
    "omega",
];

/// Uppercase Greek letters (matched exactly).
static GREEK_UPPER: [&str; 7] = ["Delta", "Gamma", "Theta", "Lambda", "Sigma", "Phi", "Omega"];

/// The whole math pipeline, in application order.
static MATH_RULES: LazyLock<Vec<Rule>> = LazyLock::new(build_rules);

/// The math pipeline rules, in application order.
pub fn math_rules() -> &'static [Rule] {
    &MATH_RULES
}

/// Convert the verbal math phrases in `text` to LaTeX.
///
/// # Example
///
/// ```
/// use notetex_convert::convert_math;
///
/// assert_eq!(convert_math("a over b"), r"$\frac{a}{b}$");
/// assert_eq!(convert_math("x squared"), "$$x^2$$");
/// ```
pub fn convert_math(text: &str) -> String {
    apply_all(math_rules(), text)
}

fn build_rules() -> Vec<Rule> {
    let mut rules = Vec::with_capacity(96);
    greek(&mut rules);
    symbols(&mut rules);
    relations(&mut rules);
    structures(&mut rules);
    calculus(&mut rules);
    number_sets(&mut rules);
    logic(&mut rules);
    set_operations(&mut rules);
    arrows(&mut rules);
    functions(&mut rules);
    tail(&mut rules);
    cleanup(&mut rules);
    rules
}

fn greek(rules: &mut Vec<Rule>) {
    use Category::Greek;

    for (name, latex) in GREEK_LOWER.into_iter().zip([
        r"$\alpha$",
        r"$\beta$",
        r"$\gamma$",
        r"$\delta$",
        r"$\epsilon$",
        r"$\theta$",
        r"$\lambda$",
        r"$\mu$",
        r"$\pi$",
        r"$\sigma$",
        r"$\phi$",
        r"$\omega$",
    ]) {
        let mut rule = Rule::literal(name, Greek, &format!(r"(?i)\b{}\b", name), latex);
        // "Delta" belongs to the uppercase rule below.
        if let Some(upper) = GREEK_UPPER.iter().find(|u| u.eq_ignore_ascii_case(name)) {
            rule = rule.except(std::slice::from_ref(upper));
        }
        rules.push(rule);
    }

    for (name, latex) in GREEK_UPPER.into_iter().zip([
        r"$\Delta$",
        r"$\Gamma$",
        r"$\Theta$",
        r"$\Lambda$",
        r"$\Sigma$",
        r"$\Phi$",
        r"$\Omega$",
    ]) {
        rules.push(Rule::literal(name, Greek, &format!(r"\b{}\b", name), latex));
    }
}

fn symbols(rules: &mut Vec<Rule>) {
    use Category::Symbol;

    rules.extend([
        Rule::literal("infinity", Symbol, r"(?i)infinity", r"$\infty$"),
        Rule::literal("product", Symbol, r"(?i)\bproduct\b", r"$\prod$"),
        Rule::literal("partial", Symbol, r"(?i)partial derivative", r"$\partial$"),
        Rule::literal("times", Symbol, r"(?i)\btimes\b", r"$\times$"),
        Rule::literal("dot", Symbol, r"(?i)\bdot\b", r"$\cdot$").followed_by(r"^\s"),
        Rule::literal("pm", Symbol, r"(?i)plus or minus|plus-minus", r"$\pm$"),
        Rule::literal("mp", Symbol, r"(?i)minus or plus|minus-plus", r"$\mp$"),
        Rule::literal("dots", Symbol, r"(?i)\bdots\b", r"$\ldots$"),
        Rule::literal("ellipsis", Symbol, r"(?i)ellipsis", r"$\ldots$"),
    ]);
}

fn relations(rules: &mut Vec<Rule>) {
    use Category::Relation;

    rules.extend([
        Rule::literal("neq", Relation, r"(?i)not equal to|not equals", r"$\neq$"),
        Rule::literal(
            "leq",
            Relation,
            r"(?i)less than or equal to|less or equal",
            r"$\leq$",
        ),
        Rule::literal(
            "geq",
            Relation,
            r"(?i)greater than or equal to|greater or equal",
            r"$\geq$",
        ),
        Rule::literal(
            "approx",
            Relation,
            r"(?i)approximately equal to|approximately",
            r"$\approx$",
        ),
        Rule::literal("equals", Relation, r"(?i)\bequals\b", "="),
    ]);
}

/// Fractions, powers, subscripts and roots.
fn structures(rules: &mut Vec<Rule>) {
    rules.extend([
        Rule::with(
            "fraction",
            Category::Fraction,
            r"(?i)(\w+|\([^)]+\))\s+over\s+(\w+|\([^)]+\))",
            |c| format!(r"$\frac{{{}}}{{{}}}$", &c[1], &c[2]),
        ),
        Rule::with("squared", Category::Power, r"(?i)(\w+)\s+squared", |c| {
            format!("$${}^2$$", &c[1])
        }),
        Rule::with("cubed", Category::Power, r"(?i)(\w+)\s+cubed", |c| {
            format!("$${}^3$$", &c[1])
        }),
        // "to the power of" and "to the" share one pattern; the optional
        // "power of" is tried first so the longer phrasing is never truncated.
        Rule::with(
            "power",
            Category::Power,
            r"(?i)(\w+)\s+to the\s+(?:power of\s+)?(\w+)",
            |c| format!("$${}^{{{}}}$$", &c[1], &c[2]),
        ),
        Rule::with("sub", Category::Subscript, r"(?i)(\w+)\s+sub\s+(\w+)", |c| {
            format!("$${}_{{{}}}$$", &c[1], &c[2])
        }),
        Rule::with(
            "square-root",
            Category::Root,
            r"(?i)square root of\s+(\w+|\([^)]+\))",
            |c| format!(r"$\sqrt{{{}}}$", &c[1]),
        ),
        Rule::with("sqrt", Category::Root, r"(?i)sqrt\(([^)]+)\)", |c| {
            format!(r"$\sqrt{{{}}}$", &c[1])
        }),
    ]);
}

/// Bounded integrals, derivatives, limits and summation headers.
///
/// Bare "integral" and "sum" follow their bounded forms, whose output
/// (`\int_`, `\sum_`) they cannot match.
fn calculus(rules: &mut Vec<Rule>) {
    rules.extend([
        Rule::with(
            "integral-bounds",
            Category::Integral,
            r"(?i)integral from\s+(\w+)\s+to\s+(\w+)\s+of\s+([^.]+)",
            |c| format!(r"$\int_{{{}}}^{{{}}} {} \, dx$", &c[1], &c[2], &c[3]),
        ),
        Rule::literal("integral", Category::Integral, r"(?i)\bintegral\b", r"$\int$"),
        Rule::with(
            "derivative",
            Category::Derivative,
            r"(?i)derivative of\s+(\w+)\s+with respect to\s+(\w+)",
            |c| format!(r"$\frac{{d{}}}{{d{}}}$", &c[1], &c[2]),
        ),
        Rule::with(
            "limit",
            Category::Limit,
            r"(?i)limit as\s+(\w+)\s+approaches\s+(\w+)",
            |c| format!(r"$\lim_{{{} \to {}}}$", &c[1], &c[2]),
        ),
        Rule::with(
            "sum-bounds",
            Category::Summation,
            r"(?i)sum from\s+(\w+)\s*=\s*(\w+)\s+to\s+(\w+)",
            |c| format!(r"$\sum_{{{}={}}}^{{{}}}$", &c[1], &c[2], &c[3]),
        ),
        Rule::literal("sum", Category::Summation, r"(?i)\bsum\b", r"$\sum$"),
    ]);
}

fn number_sets(rules: &mut Vec<Rule>) {
    use Category::NumberSet;

    rules.extend([
        Rule::literal("reals", NumberSet, r"(?i)\b(?:real numbers|reals)\b", r"$\mathbb{R}$"),
        Rule::literal("integers", NumberSet, r"(?i)\bintegers\b", r"$\mathbb{Z}$"),
        Rule::literal("rationals", NumberSet, r"(?i)\brationals\b", r"$\mathbb{Q}$"),
        Rule::literal("naturals", NumberSet, r"(?i)\bnaturals\b", r"$\mathbb{N}$"),
    ]);
}

fn logic(rules: &mut Vec<Rule>) {
    use Category::Logic;

    rules.extend([
        Rule::literal("forall", Logic, r"(?i)\bfor all\b", r"$\forall$"),
        Rule::literal("exists", Logic, r"(?i)\bthere exists\b", r"$\exists$"),
        // Ahead of "and" so the phrase survives intact.
        Rule::literal("iff", Logic, r"(?i)\bif and only if\b|iff\b", r"$\iff$"),
        Rule::literal("and", Logic, r"(?i)\band\b", r"$\land$"),
        Rule::literal("or", Logic, r"(?i)\bor\b", r"$\lor$"),
        Rule::literal("not", Logic, r"(?i)\bnot\b", r"$\neg$")
            .followed_by(r"^\s")
            .not_followed_by(r"(?i)^\s+in\b"),
        Rule::literal("implies", Logic, r"(?i)\bimplies\b", r"$\implies$"),
    ]);
}

fn set_operations(rules: &mut Vec<Rule>) {
    use Category::SetOperation;

    rules.extend([
        Rule::literal("in", SetOperation, r"(?i)\belement of\b|in set", r"$\in$"),
        Rule::literal("notin", SetOperation, r"(?i)\bnot in\b", r"$\notin$"),
        Rule::literal("subset", SetOperation, r"(?i)\bsubset of\b", r"$\subset$"),
        Rule::literal("supset", SetOperation, r"(?i)\bsuperset of\b", r"$\supset$"),
        Rule::literal("union", SetOperation, r"(?i)\bunion\b", r"$\cup$"),
        Rule::literal("intersection", SetOperation, r"(?i)\bintersection\b", r"$\cap$"),
        Rule::literal("emptyset", SetOperation, r"(?i)\bempty set\b", r"$\emptyset$"),
    ]);
}

fn arrows(rules: &mut Vec<Rule>) {
    use Category::Arrow;

    rules.extend([
        Rule::literal(
            "rightarrow",
            Arrow,
            r"(?i)\brightarrow\b|right arrow",
            r"$\rightarrow$",
        ),
        Rule::literal("leftarrow", Arrow, r"(?i)\bleftarrow\b|left arrow", r"$\leftarrow$"),
        Rule::literal("mapsto", Arrow, r"(?i)\bmaps to\b", r"$\mapsto$"),
    ]);
}

/// Named functions: whole word, lowercase only.
fn functions(rules: &mut Vec<Rule>) {
    for (name, latex) in [
        ("sin", r"$\sin$"),
        ("cos", r"$\cos$"),
        ("tan", r"$\tan$"),
        ("csc", r"$\csc$"),
        ("sec", r"$\sec$"),
        ("cot", r"$\cot$"),
        ("arcsin", r"$\arcsin$"),
        ("arccos", r"$\arccos$"),
        ("arctan", r"$\arctan$"),
        ("ln", r"$\ln$"),
        ("log", r"$\log$"),
        ("exp", r"$\exp$"),
    ] {
        rules.push(Rule::literal(
            name,
            Category::Function,
            &format!(r"\b{}\b", name),
            latex,
        ));
    }
}

/// Absolute values and binomials.
fn tail(rules: &mut Vec<Rule>) {
    rules.extend([
        Rule::with(
            "absolute-value",
            Category::AbsoluteValue,
            r"(?i)absolute value of\s+(\w+)",
            |c| format!("$|{}|$", &c[1]),
        ),
        Rule::with("abs", Category::AbsoluteValue, r"(?i)\babs\(([^)]+)\)", |c| {
            format!("$|{}|$", &c[1])
        }),
        Rule::with(
            "binomial",
            Category::Binomial,
            r"(?i)(\w+)\s+choose\s+(\w+)",
            |c| format!(r"$\binom{{{}}}{{{}}}$", &c[1], &c[2]),
        ),
    ]);
}

/// Delimiter cleanup: no run longer than `$$` survives, and math regions
/// separated only by whitespace merge when their delimiters match.
fn cleanup(rules: &mut Vec<Rule>) {
    rules.extend([
        Rule::literal("collapse-dollars", Category::Cleanup, r"\${3,}", "$$"),
        Rule::with("merge-regions", Category::Cleanup, r"(\$+)\s+(\$+)", |c| {
            if c[1].len() == c[2].len() {
                " ".to_string()
            } else {
                c[0].to_string()
            }
        }),
    ]);
}
