//! Ordered substitution rules.
//!
//! A [`Rule`] pairs a compiled pattern with a replacement and optional
//! context guards. The `regex` crate has no lookaround, so guards inspect the
//! text around each match instead and leave vetoed matches untouched.

use regex::{Captures, Match, NoExpand, Regex};
use std::borrow::Cow;

/// Rule families, in the order the math pipeline applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Greek,
    Symbol,
    Relation,
    Fraction,
    Power,
    Subscript,
    Root,
    Integral,
    Derivative,
    Limit,
    Summation,
    NumberSet,
    Logic,
    SetOperation,
    Arrow,
    Function,
    AbsoluteValue,
    Binomial,
    Cleanup,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Greek => "greek",
            Category::Symbol => "symbol",
            Category::Relation => "relation",
            Category::Fraction => "fraction",
            Category::Power => "power",
            Category::Subscript => "subscript",
            Category::Root => "root",
            Category::Integral => "integral",
            Category::Derivative => "derivative",
            Category::Limit => "limit",
            Category::Summation => "summation",
            Category::NumberSet => "number-set",
            Category::Logic => "logic",
            Category::SetOperation => "set-operation",
            Category::Arrow => "arrow",
            Category::Function => "function",
            Category::AbsoluteValue => "absolute-value",
            Category::Binomial => "binomial",
            Category::Cleanup => "cleanup",
        };
        write!(f, "{}", name)
    }
}

/// What a match is rewritten to.
pub enum Replacement {
    /// Inserted verbatim (no `$1` expansion, dollars are literal).
    Literal(&'static str),
    /// Built from the match's capture groups.
    With(fn(&Captures<'_>) -> String),
}

/// Context condition checked around a match.
pub enum Guard {
    /// The text after the match must match (pattern anchored with `^`).
    FollowedBy(Regex),
    /// The text after the match must not match (pattern anchored with `^`).
    NotFollowedBy(Regex),
    /// The matched text must not be one of these exact strings.
    Except(&'static [&'static str]),
}

impl Guard {
    fn allows(&self, haystack: &str, m: &Match<'_>) -> bool {
        match self {
            Guard::FollowedBy(re) => re.is_match(&haystack[m.end()..]),
            Guard::NotFollowedBy(re) => !re.is_match(&haystack[m.end()..]),
            Guard::Except(words) => !words.contains(&m.as_str()),
        }
    }
}

/// One step of a substitution pipeline.
pub struct Rule {
    name: &'static str,
    category: Category,
    pattern: Regex,
    replacement: Replacement,
    guards: Vec<Guard>,
}

impl Rule {
    /// A rule whose replacement is fixed text.
    pub fn literal(
        name: &'static str,
        category: Category,
        pattern: &str,
        replacement: &'static str,
    ) -> Self {
        Self::new(name, category, pattern, Replacement::Literal(replacement))
    }

    /// A rule whose replacement is computed from the captures.
    pub fn with(
        name: &'static str,
        category: Category,
        pattern: &str,
        replacement: fn(&Captures<'_>) -> String,
    ) -> Self {
        Self::new(name, category, pattern, Replacement::With(replacement))
    }

    fn new(name: &'static str, category: Category, pattern: &str, replacement: Replacement) -> Self {
        Self {
            name,
            category,
            pattern: compile(pattern),
            replacement,
            guards: Vec::new(),
        }
    }

    /// Only rewrite matches whose following text matches `pattern`.
    pub fn followed_by(mut self, pattern: &str) -> Self {
        self.guards.push(Guard::FollowedBy(compile(pattern)));
        self
    }

    /// Skip matches whose following text matches `pattern`.
    pub fn not_followed_by(mut self, pattern: &str) -> Self {
        self.guards.push(Guard::NotFollowedBy(compile(pattern)));
        self
    }

    /// Skip matches that are exactly one of `words`.
    pub fn except(mut self, words: &'static [&'static str]) -> Self {
        self.guards.push(Guard::Except(words));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Replace every non-overlapping match in `text`.
    ///
    /// Returns `Cow::Borrowed` when the pattern does not occur at all.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match (&self.replacement, self.guards.is_empty()) {
            (Replacement::Literal(s), true) => self.pattern.replace_all(text, NoExpand(*s)),
            _ => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| self.rewrite(text, caps)),
        }
    }

    fn rewrite(&self, haystack: &str, caps: &Captures<'_>) -> String {
        let m = caps.get_match();
        if !self.guards.iter().all(|g| g.allows(haystack, &m)) {
            return m.as_str().to_string();
        }
        match &self.replacement {
            Replacement::Literal(s) => (*s).to_string(),
            Replacement::With(f) => f(caps),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("pattern", &self.pattern.as_str())
            .field("guards", &self.guards.len())
            .finish()
    }
}

/// Compile a built-in pattern. The patterns are constants, so failure is a bug.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// Run `rules` in order over `text`, each seeing the previous rule's output.
pub fn apply_all(rules: &[Rule], text: &str) -> String {
    let mut current = text.to_string();
    for rule in rules {
        if let Cow::Owned(next) = rule.apply(&current) {
            current = next;
        }
    }
    current
}
