use crate::formatter::change::ChangeSink;
use crate::formatter::pipeline::Pass;

use super::{Placeholders, SubstitutionRule, apply_substitutions};

const PLACEHOLDERS: Placeholders = Placeholders {
    before: "Inconsistent spacing",
    after: "Consistent spacing",
};

/// Normalizes whitespace around punctuation and operators.
///
/// `,` `:` `;` get a single space after; `=` `+` `-` `*` `/` get a single
/// space on each side. Whitespace matched here includes line breaks.
pub struct TokenSpacing {
    rules: Vec<SubstitutionRule>,
}

impl Default for TokenSpacing {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSpacing {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: vec![
                SubstitutionRule::new(r"\s*,\s*", ", ", "Fixed comma spacing"),
                SubstitutionRule::new(r"\s*:\s*", ": ", "Fixed colon spacing"),
                SubstitutionRule::new(r"\s*;\s*", "; ", "Fixed semicolon spacing"),
                SubstitutionRule::new(r"\s*=\s*", " = ", "Fixed assignment spacing"),
                SubstitutionRule::new(r"\s*\+\s*", " + ", "Fixed operator spacing"),
                SubstitutionRule::new(r"\s*-\s*", " - ", "Fixed operator spacing"),
                SubstitutionRule::new(r"\s*\*\s*", " * ", "Fixed operator spacing"),
                SubstitutionRule::new(r"\s*/\s*", " / ", "Fixed operator spacing"),
            ],
        }
    }
}

impl Pass for TokenSpacing {
    fn name(&self) -> &'static str {
        "token-spacing"
    }

    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String {
        apply_substitutions(text, &self.rules, &PLACEHOLDERS, sink)
    }
}
