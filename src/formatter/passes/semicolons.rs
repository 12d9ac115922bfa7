use crate::formatter::change::{ChangeKind, ChangeSink};
use crate::formatter::pipeline::Pass;

use super::map_lines;

const TERMINATORS: [char; 6] = [';', '{', '}', '[', ']', ','];
const DECLARATION_PREFIXES: [&str; 3] = ["let ", "const ", "var "];

/// Appends `;` to statement-like lines that lack one.
pub struct SemicolonInsertion;

fn needs_semicolon(line: &str) -> bool {
    let trimmed = line.trim();

    if trimmed.is_empty()
        || trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || trimmed.ends_with(TERMINATORS)
    {
        return false;
    }

    trimmed.contains('=')
        || DECLARATION_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
        || trimmed.contains("return ")
        || trimmed.contains("import ")
}

impl Pass for SemicolonInsertion {
    fn name(&self) -> &'static str {
        "semicolons"
    }

    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String {
        map_lines(
            text,
            sink,
            ChangeKind::Fix,
            "Added missing semicolon",
            |line| {
                if needs_semicolon(line) {
                    format!("{line};")
                } else {
                    line.to_string()
                }
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> (String, usize) {
        let mut sink = ChangeSink::new();
        let out = SemicolonInsertion.apply(text, &mut sink);
        (out, sink.len())
    }

    #[test]
    fn declarations_and_assignments_get_semicolons() {
        let (out, changes) = run("let x = 1\nconst y\ntotal = a + b");
        assert_eq!(out, "let x = 1;\nconst y;\ntotal = a + b;");
        assert_eq!(changes, 3);
    }

    #[test]
    fn return_and_import_statements_get_semicolons() {
        let (out, changes) = run("  return value\nimport './a'");
        assert_eq!(out, "  return value;\nimport './a';");
        assert_eq!(changes, 2);
    }

    #[test]
    fn terminated_lines_and_comments_are_skipped() {
        let text = "let a = 1;\npage: Home {\n}\nitems = [\n// x = 1\n/* y = 2\nlet b = 2,";
        let (out, changes) = run(text);
        assert_eq!(out, text);
        assert_eq!(changes, 0);
    }

    #[test]
    fn plain_declarations_are_not_touched() {
        let (out, changes) = run("component: Button\n");
        assert_eq!(out, "component: Button\n");
        assert_eq!(changes, 0);
    }

    #[test]
    fn recorded_change_carries_kind_fix() {
        let mut sink = ChangeSink::new();
        SemicolonInsertion.apply("var z", &mut sink);
        let changes = sink.into_changes();
        assert_eq!(changes[0].kind, ChangeKind::Fix);
        assert_eq!(changes[0].before, "var z");
        assert_eq!(changes[0].after, "var z;");
    }
}
