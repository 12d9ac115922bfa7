use serde::{Deserialize, Serialize};

use crate::formatter::FormatOptions;
use crate::validator::{FileRules, VALID_EXTENSIONS};

/// Top-level configuration read from `.forsure-lint.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Which formatter passes run.
    #[serde(default)]
    pub format: FormatOptions,

    /// File-level validation policy.
    #[serde(default)]
    pub validate: FileRules,

    /// File discovery settings.
    #[serde(default)]
    pub scanner: ScannerConfig,
}

/// Scanner configuration for file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Extensions picked up when walking directories, leading dot included.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files and directories to skip. Setting this key
    /// replaces the defaults rather than extending them.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
            gitignore: true,
        }
    }
}

fn default_extensions() -> Vec<String> {
    VALID_EXTENSIONS.iter().map(ToString::to_string).collect()
}

/// Dependency and build trees of the web projects ForSure documents describe.
pub const DEFAULT_EXCLUDES: [&str; 4] = [
    "**/node_modules/**",
    "**/.git/**",
    "**/.next/**",
    "**/dist/**",
];

fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(ToString::to_string).collect()
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
