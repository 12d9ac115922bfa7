use crate::formatter::change::ChangeSink;
use crate::formatter::pipeline::Pass;

use super::{Placeholders, SubstitutionRule, apply_substitutions};

const PLACEHOLDERS: Placeholders = Placeholders {
    before: "Inconsistent brace spacing",
    after: "Consistent brace spacing",
};

/// Normalizes whitespace around `{ } [ ]`.
///
/// Opening braces get one space before and a line break after; closing braces
/// are forced onto their own line; brackets lose surrounding whitespace.
pub struct BraceSpacing {
    rules: Vec<SubstitutionRule>,
}

impl Default for BraceSpacing {
    fn default() -> Self {
        Self::new()
    }
}

impl BraceSpacing {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: vec![
                SubstitutionRule::new(
                    r"(\w)\s*\{\s*",
                    "${1} {\n",
                    "Fixed opening brace spacing",
                ),
                SubstitutionRule::new(r"\s*\}\s*", "\n}", "Fixed closing brace spacing"),
                SubstitutionRule::new(r"(\w)\s*\[\s*", "${1}[", "Fixed opening bracket spacing"),
                SubstitutionRule::new(r"\s*\]\s*", "]", "Fixed closing bracket spacing"),
            ],
        }
    }
}

impl Pass for BraceSpacing {
    fn name(&self) -> &'static str {
        "brace-spacing"
    }

    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String {
        apply_substitutions(text, &self.rules, &PLACEHOLDERS, sink)
    }
}
