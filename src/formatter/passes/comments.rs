use crate::formatter::change::{ChangeKind, ChangeSink};
use crate::formatter::pipeline::Pass;

use super::map_lines;

/// Normalizes `//` comments to exactly `// <body>`, keeping indentation.
pub struct CommentSpacing;

fn normalize_comment(line: &str) -> String {
    let trimmed = line.trim();
    let Some(body) = trimmed.strip_prefix("//") else {
        return line.to_string();
    };
    line.replacen(trimmed, &format!("// {}", body.trim()), 1)
}

impl Pass for CommentSpacing {
    fn name(&self) -> &'static str {
        "comment-spacing"
    }

    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String {
        map_lines(
            text,
            sink,
            ChangeKind::Improvement,
            "Fixed comment spacing",
            normalize_comment,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_space_is_added() {
        assert_eq!(normalize_comment("//note"), "// note");
    }

    #[test]
    fn extra_spaces_collapse_and_indent_is_kept() {
        assert_eq!(normalize_comment("    //    note"), "    // note");
    }

    #[test]
    fn well_formed_comment_is_untouched() {
        assert_eq!(normalize_comment("  // fine"), "  // fine");
    }

    #[test]
    fn non_comment_lines_are_untouched() {
        assert_eq!(normalize_comment("url: 'http://x'"), "url: 'http://x'");
    }

    #[test]
    fn one_change_per_modified_line() {
        let mut sink = ChangeSink::new();
        let out = CommentSpacing.apply("//a\n// b\n  //c", &mut sink);
        assert_eq!(out, "// a\n// b\n  // c");
        let lines: Vec<usize> = sink.into_changes().iter().map(|c| c.line).collect();
        assert_eq!(lines, vec![1, 3]);
    }
}
