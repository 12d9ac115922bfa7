use std::fmt;

/// First bracket imbalance found in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imbalance {
    /// A closer with nothing open.
    UnexpectedCloser { found: char, line: usize },
    /// A closer that does not match the innermost opener.
    MismatchedCloser {
        expected: char,
        found: char,
        line: usize,
    },
    /// An opener still open at end of input; `line` is where it was opened.
    Unclosed { opener: char, line: usize },
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCloser { found, line } => {
                write!(f, "Unexpected closing '{found}' at line {line}")
            }
            Self::MismatchedCloser {
                expected,
                found,
                line,
            } => write!(f, "Expected '{expected}' but found '{found}' at line {line}"),
            Self::Unclosed { opener, line } => write!(f, "Unclosed '{opener}' from line {line}"),
        }
    }
}

/// Outcome of a bracket balance scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceCheckResult {
    Balanced,
    Unbalanced(Imbalance),
}

impl BraceCheckResult {
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }

    /// Description of the imbalance, empty when balanced.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Balanced => String::new(),
            Self::Unbalanced(imbalance) => imbalance.to_string(),
        }
    }
}

const fn closer_for(opener: char) -> char {
    match opener {
        '{' => '}',
        '[' => ']',
        _ => ')',
    }
}

/// Check that `{}`, `[]` and `()` nest correctly.
///
/// Scanning stops at the first problem. Brackets inside string literals are
/// counted like any other.
#[must_use]
pub fn check_balance(content: &str) -> BraceCheckResult {
    let mut stack: Vec<(char, usize)> = Vec::new();

    for (index, line) in content.split('\n').enumerate() {
        let line_no = index + 1;
        for c in line.chars() {
            match c {
                '{' | '[' | '(' => stack.push((c, line_no)),
                '}' | ']' | ')' => {
                    let Some((opener, _)) = stack.pop() else {
                        return BraceCheckResult::Unbalanced(Imbalance::UnexpectedCloser {
                            found: c,
                            line: line_no,
                        });
                    };
                    let expected = closer_for(opener);
                    if c != expected {
                        return BraceCheckResult::Unbalanced(Imbalance::MismatchedCloser {
                            expected,
                            found: c,
                            line: line_no,
                        });
                    }
                }
                _ => {}
            }
        }
    }

    match stack.last() {
        Some(&(opener, line)) => BraceCheckResult::Unbalanced(Imbalance::Unclosed { opener, line }),
        None => BraceCheckResult::Balanced,
    }
}

#[cfg(test)]
#[path = "balance_tests.rs"]
mod tests;
