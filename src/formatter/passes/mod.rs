//! The ten rewrite passes of the formatter, in pipeline order.
//!
//! Line-local passes split on `\n` and rejoin with `\n`, so a trailing newline
//! survives as a final empty line. Substitution passes apply a fixed list of
//! regex rules to the whole text and record one line-1 change per rule that
//! altered anything.

mod braces;
mod comments;
mod imports;
mod indentation;
mod keywords;
mod line_endings;
mod quotes;
mod semicolons;
mod spacing;
mod trailing_whitespace;

pub use braces::BraceSpacing;
pub use comments::CommentSpacing;
pub use imports::ImportSorting;
pub use indentation::{IndentState, Indentation, INDENT_WIDTH};
pub use keywords::{KeywordCase, KEYWORDS};
pub use line_endings::LineEndings;
pub use quotes::QuoteStyle;
pub use semicolons::SemicolonInsertion;
pub use spacing::TokenSpacing;
pub use trailing_whitespace::TrailingWhitespace;

use regex::Regex;

use super::change::{Change, ChangeKind, ChangeSink};

/// Rewrite each line with `rewrite`, recording a change for every line it
/// altered.
fn map_lines<F>(
    text: &str,
    sink: &mut ChangeSink,
    kind: ChangeKind,
    description: &str,
    mut rewrite: F,
) -> String
where
    F: FnMut(&str) -> String,
{
    text.split('\n')
        .enumerate()
        .map(|(index, line)| {
            let fixed = rewrite(line);
            if fixed != line {
                sink.line_change(kind, index, description, line, &fixed);
            }
            fixed
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A whole-text regex substitution with the change it reports.
struct SubstitutionRule {
    pattern: Regex,
    replacement: &'static str,
    description: String,
}

impl SubstitutionRule {
    fn new(pattern: &str, replacement: &'static str, description: impl Into<String>) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid regex"),
            replacement,
            description: description.into(),
        }
    }
}

/// Placeholder texts reported by substitution passes.
struct Placeholders {
    before: &'static str,
    after: &'static str,
}

fn apply_substitutions(
    text: &str,
    rules: &[SubstitutionRule],
    placeholders: &Placeholders,
    sink: &mut ChangeSink,
) -> String {
    let mut formatted = text.to_string();

    for rule in rules {
        let replaced = rule
            .pattern
            .replace_all(&formatted, rule.replacement)
            .into_owned();
        if replaced != formatted {
            sink.push(Change::new(
                ChangeKind::Improvement,
                1,
                rule.description.as_str(),
                placeholders.before,
                placeholders.after,
            ));
            formatted = replaced;
        }
    }

    formatted
}
