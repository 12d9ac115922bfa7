use crate::formatter::change::{ChangeKind, ChangeSink};
use crate::formatter::pipeline::Pass;

use super::map_lines;

/// Strips trailing whitespace from every line.
pub struct TrailingWhitespace;

impl Pass for TrailingWhitespace {
    fn name(&self) -> &'static str {
        "trailing-whitespace"
    }

    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String {
        map_lines(
            text,
            sink,
            ChangeKind::Improvement,
            "Removed trailing whitespace",
            |line| line.trim_end().to_string(),
        )
    }
}
