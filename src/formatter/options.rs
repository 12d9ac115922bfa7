use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// Per-pass switches for the formatter. Every pass is enabled by default.
///
/// The order in which enabled passes run is fixed by the pipeline and cannot
/// be changed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct FormatOptions {
    #[serde(default = "default_true")]
    pub fix_indentation: bool,

    #[serde(default = "default_true")]
    pub fix_braces: bool,

    #[serde(default = "default_true")]
    pub fix_quotes: bool,

    #[serde(default = "default_true")]
    pub fix_spacing: bool,

    #[serde(default = "default_true")]
    pub fix_line_endings: bool,

    #[serde(default = "default_true")]
    pub add_missing_semicolons: bool,

    #[serde(default = "default_true")]
    pub remove_trailing_spaces: bool,

    #[serde(default = "default_true")]
    pub normalize_keywords: bool,

    #[serde(default = "default_true")]
    pub sort_imports: bool,

    #[serde(default = "default_true")]
    pub format_comments: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            fix_indentation: true,
            fix_braces: true,
            fix_quotes: true,
            fix_spacing: true,
            fix_line_endings: true,
            add_missing_semicolons: true,
            remove_trailing_spaces: true,
            normalize_keywords: true,
            sort_imports: true,
            format_comments: true,
        }
    }
}

impl FormatOptions {
    /// All passes disabled. Useful as a base when enabling a single pass.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            fix_indentation: false,
            fix_braces: false,
            fix_quotes: false,
            fix_spacing: false,
            fix_line_endings: false,
            add_missing_semicolons: false,
            remove_trailing_spaces: false,
            normalize_keywords: false,
            sort_imports: false,
            format_comments: false,
        }
    }

    #[must_use]
    pub const fn enabled_count(&self) -> usize {
        self.fix_indentation as usize
            + self.fix_braces as usize
            + self.fix_quotes as usize
            + self.fix_spacing as usize
            + self.fix_line_endings as usize
            + self.add_missing_semicolons as usize
            + self.remove_trailing_spaces as usize
            + self.normalize_keywords as usize
            + self.sort_imports as usize
            + self.format_comments as usize
    }
}
