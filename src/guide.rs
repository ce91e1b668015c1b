//! Input syntax guide printed by `--guide`.

/// Quick reference for the annotated input format.
pub const SYNTAX_GUIDE: &str = "\
Notetex input syntax

STRUCTURE
  # Heading                      \\section{Heading}
  ## Subheading                  \\subsection{Subheading}
  ### Sub-subheading             \\subsubsection{Sub-subheading}

ENVIRONMENTS
  Theorem: ...                   opens a theorem (close with: end theorem)
  Proof: ...                     opens a proof (close with: end proof / QED)
  Equation: ...                  a numbered equation on one line

MATH
  x squared, x cubed             x^2, x^3
  x to the power of n            x^{n}
  x sub i                        x_{i}
  a over b                       \\frac{a}{b}
  square root of x, sqrt(x)      \\sqrt{x}
  integral from 0 to 5 of x.     \\int_{0}^{5} x \\, dx
  sum from i=1 to n              \\sum_{i=1}^{n}
  derivative of f with respect to x
                                 \\frac{df}{dx}
  limit as x approaches 0        \\lim_{x \\to 0}
  n choose k                     \\binom{n}{k}
  absolute value of x, abs(x)    |x|

SYMBOLS
  alpha, beta, gamma, delta, pi, Delta, Omega, ...
  infinity, times, dot, plus or minus, dots
  not equal to, less than or equal to, approximately, equals
  for all, there exists, and, or, not, implies, iff
  element of, not in, subset of, union, intersection, empty set
  real numbers, integers, rationals, naturals
  sin, cos, tan, ln, log, exp, right arrow, maps to
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_lists_every_family() {
        for heading in ["STRUCTURE", "ENVIRONMENTS", "MATH", "SYMBOLS"] {
            assert!(SYNTAX_GUIDE.contains(heading));
        }
    }

    #[test]
    fn test_guide_examples_convert() {
        let latex = notetex_convert::convert("integral from 0 to 5 of x.");
        assert!(latex.contains(r"\int_{0}^{5} x \, dx"));
        assert!(SYNTAX_GUIDE.contains(r"\int_{0}^{5} x \, dx"));
    }
}
