use std::cmp::Ordering;

use regex::Regex;

use crate::formatter::change::{Change, ChangeKind, ChangeSink};
use crate::formatter::pipeline::Pass;

/// Sorts the leading block of `import ` lines by their `from '<path>'` target.
///
/// The leading block runs from the top of the text through `import ` lines
/// and blank lines, up to the first other line. Only that block is touched;
/// when its imports get reordered, the block is replaced by the sorted
/// imports followed by a single blank line.
pub struct ImportSorting {
    from_clause: Regex,
}

impl Default for ImportSorting {
    fn default() -> Self {
        Self::new()
    }
}

fn is_import(line: &str) -> bool {
    line.trim().starts_with("import ")
}

impl ImportSorting {
    #[must_use]
    pub fn new() -> Self {
        Self {
            from_clause: Regex::new(r#"from ['"]([^'"]+)['"]"#).expect("Invalid regex"),
        }
    }

    /// Import target of a line, or `""` when it has no `from` clause.
    fn import_path<'a>(&self, line: &'a str) -> &'a str {
        self.from_clause
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map_or("", |m| m.as_str())
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.import_path(a)
            .cmp(self.import_path(b))
            .then_with(|| a.trim().cmp(b.trim()))
    }
}

impl Pass for ImportSorting {
    fn name(&self) -> &'static str {
        "import-sorting"
    }

    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let section_end = lines
            .iter()
            .position(|line| !line.trim().is_empty() && !is_import(line))
            .unwrap_or(lines.len());

        let imports: Vec<&str> = lines[..section_end]
            .iter()
            .copied()
            .filter(|line| is_import(line))
            .collect();
        if imports.len() < 2 {
            return text.to_string();
        }

        let mut sorted = imports.clone();
        sorted.sort_by(|a, b| self.compare(a, b));
        if sorted == imports {
            return text.to_string();
        }

        sink.push(Change::new(
            ChangeKind::Improvement,
            1,
            "Sorted import statements",
            "Unsorted imports",
            "Alphabetically sorted imports",
        ));

        let mut output = sorted;
        output.push("");
        output.extend_from_slice(&lines[section_end..]);
        output.join("\n")
    }
}

#[cfg(test)]
#[path = "imports_tests.rs"]
mod tests;
