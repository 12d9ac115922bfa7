use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::result::ValidationResult;

/// Maximum accepted file size (5 MiB).
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Accepted file extensions, dot included.
pub const VALID_EXTENSIONS: [&str; 3] = [".fs", ".forsure", ".txt"];

/// Name and size of a candidate file; its content is not needed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
}

impl FileMeta {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

fn default_extensions() -> Vec<String> {
    VALID_EXTENSIONS.iter().map(ToString::to_string).collect()
}

const fn default_max_file_size() -> u64 {
    MAX_FILE_SIZE
}

/// File-level acceptance policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRules {
    /// Allowed extensions including the leading dot, compared lowercased.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Largest accepted size in bytes (inclusive).
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl FileRules {
    /// Run every file-level check. Checks do not short-circuit, so several
    /// errors can be reported at once. Never produces warnings.
    #[must_use]
    pub fn validate(&self, file: &FileMeta, existing_names: &HashSet<String>) -> ValidationResult {
        let mut result = ValidationResult::valid();

        let extension = file_extension(&file.name).to_lowercase();
        if !self
            .extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&extension))
        {
            result.add_error(format!(
                "Invalid file extension: {extension}. Allowed extensions: {}",
                self.extensions.join(", ")
            ));
        }

        if file.size > self.max_file_size {
            result.add_error(format!(
                "File size exceeds the maximum allowed size of {}",
                format_file_size(self.max_file_size)
            ));
        }

        if existing_names.contains(&file.name) {
            result.add_error(format!(
                "A file with the name \"{}\" already exists",
                file.name
            ));
        }

        result
    }
}

/// Validate name and size against the default policy.
#[must_use]
pub fn validate_file(file: &FileMeta, existing_names: &HashSet<String>) -> ValidationResult {
    FileRules::default().validate(file, existing_names)
}

/// Extension from the last `.` on, or `""` when the name has none.
#[must_use]
pub fn file_extension(name: &str) -> &str {
    name.rfind('.').map_or("", |index| &name[index..])
}

/// Human-readable size with up to two decimals, e.g. `5 MB`, `1.5 KB`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
