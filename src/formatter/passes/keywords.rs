use crate::formatter::change::ChangeSink;
use crate::formatter::pipeline::Pass;

use super::{Placeholders, SubstitutionRule, apply_substitutions};

/// Notation keywords rewritten to their canonical lowercase form.
pub const KEYWORDS: [&str; 7] = [
    "component", "page", "layout", "style", "script", "import", "export",
];

const PLACEHOLDERS: Placeholders = Placeholders {
    before: "Inconsistent keyword casing",
    after: "Consistent keyword casing",
};

/// Lowercases notation keywords wherever they appear as whole words.
pub struct KeywordCase {
    rules: Vec<SubstitutionRule>,
}

impl Default for KeywordCase {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordCase {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: KEYWORDS
                .into_iter()
                .map(|keyword| {
                    SubstitutionRule::new(
                        &format!(r"(?i)\b{keyword}\b"),
                        keyword,
                        format!("Normalized {keyword} keyword"),
                    )
                })
                .collect(),
        }
    }
}

impl Pass for KeywordCase {
    fn name(&self) -> &'static str {
        "keyword-case"
    }

    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String {
        apply_substitutions(text, &self.rules, &PLACEHOLDERS, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> (String, Vec<String>) {
        let mut sink = ChangeSink::new();
        let out = KeywordCase::new().apply(text, &mut sink);
        let descriptions = sink
            .into_changes()
            .into_iter()
            .map(|c| c.description)
            .collect();
        (out, descriptions)
    }

    #[test]
    fn mixed_case_keywords_are_lowercased() {
        let (out, changes) = run("Component: Nav\nPAGE: Home\nLayout: Main");
        assert_eq!(out, "component: Nav\npage: Home\nlayout: Main");
        assert_eq!(
            changes,
            vec![
                "Normalized component keyword",
                "Normalized page keyword",
                "Normalized layout keyword"
            ]
        );
    }

    #[test]
    fn one_change_per_keyword_category() {
        let (_, changes) = run("Page: A\nPAGE: B\nPaGe: C");
        assert_eq!(changes, vec!["Normalized page keyword"]);
    }

    #[test]
    fn partial_words_are_not_touched() {
        let (out, changes) = run("Pages: x\nStylesheet: y\nreimport: z");
        assert_eq!(out, "Pages: x\nStylesheet: y\nreimport: z");
        assert!(changes.is_empty());
    }

    #[test]
    fn lowercase_keywords_record_nothing() {
        let (_, changes) = run("component: A\nexport x");
        assert!(changes.is_empty());
    }

    #[test]
    fn keyword_list_is_fixed() {
        assert_eq!(KEYWORDS.len(), 7);
        assert_eq!(KeywordCase::new().rules.len(), KEYWORDS.len());
    }
}
