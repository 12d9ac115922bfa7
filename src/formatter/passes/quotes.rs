use regex::Regex;

use crate::formatter::change::{ChangeKind, ChangeSink};
use crate::formatter::pipeline::Pass;

use super::map_lines;

/// Rewrites double-quoted literals as single-quoted, line by line.
///
/// Interior text, escapes included, is copied verbatim.
pub struct QuoteStyle {
    double_quoted: Regex,
}

impl Default for QuoteStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteStyle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            double_quoted: Regex::new(r#""([^"\\]*(\\.[^"\\]*)*)""#).expect("Invalid regex"),
        }
    }
}

impl Pass for QuoteStyle {
    fn name(&self) -> &'static str {
        "quotes"
    }

    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String {
        map_lines(
            text,
            sink,
            ChangeKind::Improvement,
            "Normalized quotes to single quotes",
            |line| self.double_quoted.replace_all(line, "'${1}'").into_owned(),
        )
    }
}
