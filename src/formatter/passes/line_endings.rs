use crate::formatter::change::{Change, ChangeKind, ChangeSink};
use crate::formatter::pipeline::Pass;

/// Collapses CRLF and lone CR into LF.
pub struct LineEndings;

impl Pass for LineEndings {
    fn name(&self) -> &'static str {
        "line-endings"
    }

    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String {
        if !text.contains('\r') {
            return text.to_string();
        }

        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        sink.push(Change::new(
            ChangeKind::Fix,
            1,
            "Normalized line endings to LF",
            "Mixed line endings",
            "LF line endings",
        ));
        normalized
    }
}

#[cfg(test)]
#[path = "line_endings_tests.rs"]
mod tests;
