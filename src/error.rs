use std::path::PathBuf;

use thiserror::Error;

/// Failures outside the formatter and validator cores.
///
/// The cores report problems as data; these errors come from the command
/// line surface: configuration, discovery and reading or writing documents.
#[derive(Error, Debug)]
pub enum ForsureError {
    /// A `.forsure-lint.toml` that parsed but makes no sense.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a formatted document or a report back to disk failed.
    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A path given on the command line is neither a file nor a directory.
    #[error("Path does not exist: {}", .0.display())]
    MissingPath(PathBuf),

    /// An entry of `scanner.exclude` is not a glob.
    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForsureError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
