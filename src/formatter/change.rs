use std::fmt;

use serde::Serialize;

/// Category of a recorded formatter edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Fix,
    Improvement,
    Warning,
}

impl ChangeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fix => "fix",
            Self::Improvement => "improvement",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One edit made by a formatting pass.
///
/// `before`/`after` hold the literal line text for line-local edits, or a
/// short placeholder (e.g. "Mixed line endings") for whole-file rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    /// 1-based line number. Whole-file rewrites report line 1.
    pub line: usize,
    pub description: String,
    pub before: String,
    pub after: String,
}

impl Change {
    #[must_use]
    pub fn new(
        kind: ChangeKind,
        line: usize,
        description: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            line,
            description: description.into(),
            before: before.into(),
            after: after.into(),
        }
    }
}

/// Append-only collector shared by every pass of one formatting run.
#[derive(Debug, Default)]
pub struct ChangeSink {
    changes: Vec<Change>,
}

impl ChangeSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// Record an edit confined to a single line.
    pub fn line_change(
        &mut self,
        kind: ChangeKind,
        index: usize,
        description: &str,
        before: &str,
        after: &str,
    ) {
        self.push(Change::new(kind, index + 1, description, before, after));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    #[must_use]
    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }
}

/// Output of one formatting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatResult {
    pub formatted: String,
    pub changes: Vec<Change>,
}

impl FormatResult {
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Whether the formatted text differs from `original`.
    #[must_use]
    pub fn differs_from(&self, original: &str) -> bool {
        self.formatted != original
    }
}
