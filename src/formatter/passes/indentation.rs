use crate::formatter::change::{ChangeKind, ChangeSink};
use crate::formatter::pipeline::Pass;

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

const OPENERS: [char; 3] = ['{', '[', '('];
const CLOSERS: [char; 3] = ['}', ']', ')'];
const QUOTES: [char; 3] = ['"', '\'', '`'];

/// State threaded from one line to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndentState {
    pub depth: usize,
    /// Quote character of the string literal still open at end of line.
    pub open_quote: Option<char>,
}

impl IndentState {
    /// Re-indent one line. Returns the next state and the emitted line.
    ///
    /// Blank lines pass through untouched. A line that leaves a string literal
    /// open is emitted as-is and does not move the depth.
    #[must_use]
    pub fn advance(self, line: &str) -> (Self, String) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (self, line.to_string());
        }

        let open_quote = scan_quotes(self.open_quote, trimmed);
        if open_quote.is_some() {
            return (
                Self {
                    open_quote,
                    ..self
                },
                line.to_string(),
            );
        }

        let starts_with_closer = trimmed.starts_with(CLOSERS);
        let level = if starts_with_closer {
            self.depth.saturating_sub(1)
        } else {
            self.depth
        };
        let formatted = format!("{}{trimmed}", " ".repeat(level * INDENT_WIDTH));

        let depth = if trimmed.ends_with(OPENERS) {
            self.depth + 1
        } else if starts_with_closer {
            self.depth.saturating_sub(1)
        } else {
            self.depth
        };

        (
            Self {
                depth,
                open_quote: None,
            },
            formatted,
        )
    }
}

/// Track string-literal state across `text`. A quote preceded by a backslash
/// on the same line does not toggle.
fn scan_quotes(mut open_quote: Option<char>, text: &str) -> Option<char> {
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if QUOTES.contains(&c) && prev != Some('\\') {
            match open_quote {
                Some(q) if q == c => open_quote = None,
                None => open_quote = Some(c),
                Some(_) => {}
            }
        }
        prev = Some(c);
    }
    open_quote
}

/// Re-derives leading indentation from bracket nesting.
pub struct Indentation;

impl Pass for Indentation {
    fn name(&self) -> &'static str {
        "indentation"
    }

    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String {
        let mut state = IndentState::default();

        text.split('\n')
            .enumerate()
            .map(|(index, line)| {
                let (next, formatted) = state.advance(line);
                state = next;
                if formatted != line {
                    sink.line_change(
                        ChangeKind::Improvement,
                        index,
                        "Fixed indentation",
                        line,
                        &formatted,
                    );
                }
                formatted
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[path = "indentation_tests.rs"]
mod tests;
