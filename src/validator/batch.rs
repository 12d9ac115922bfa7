use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::content::ContentValidator;
use super::file::{FileMeta, FileRules};
use super::result::{BatchValidationResult, ValidationResult};

/// A file offered for validation: name, size and on-demand text.
pub trait FileHandle {
    fn name(&self) -> &str;
    fn size(&self) -> u64;
    /// Read the full text.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the content cannot be read.
    fn read_text(&self) -> io::Result<String>;
}

/// A file on disk. Size comes from metadata taken at open time.
#[derive(Debug, Clone)]
pub struct DiskFile {
    path: PathBuf,
    name: String,
    size: u64,
}

impl DiskFile {
    /// # Errors
    /// Returns an error if the file metadata cannot be read.
    pub fn open(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileHandle for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn read_text(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// An in-memory file, sized by its UTF-8 byte length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
    pub name: String,
    pub content: String,
}

impl MemoryFile {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl FileHandle for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.content.len() as u64
    }

    fn read_text(&self) -> io::Result<String> {
        Ok(self.content.clone())
    }
}

/// Snapshot handed to the progress callback.
#[derive(Debug, Clone, Copy)]
pub struct ValidationProgress<'a> {
    pub total: usize,
    /// Files finished so far; equals `total` on the final event.
    pub completed: usize,
    /// File about to be validated, empty on the final event.
    pub current: &'a str,
    pub results: &'a [BatchValidationResult],
}

/// Runs file and content checks over a batch of files.
#[derive(Debug, Clone, Default)]
pub struct BatchValidator {
    rules: FileRules,
    content: ContentValidator,
}

impl BatchValidator {
    #[must_use]
    pub fn new(rules: FileRules) -> Self {
        Self {
            rules,
            content: ContentValidator::new(),
        }
    }

    #[must_use]
    pub const fn rules(&self) -> &FileRules {
        &self.rules
    }

    /// Validate one file. Content is only read when the file checks pass.
    pub fn validate_one<H: FileHandle>(
        &self,
        file: &H,
        existing_names: &HashSet<String>,
    ) -> BatchValidationResult {
        let meta = FileMeta::new(file.name(), file.size());
        let file_validation = self.rules.validate(&meta, existing_names);

        let content_validation = if file_validation.is_valid {
            match file.read_text() {
                Ok(text) => self.content.validate(&text),
                Err(e) => ValidationResult::failure(format!("Failed to read file: {e}")),
            }
        } else {
            ValidationResult::valid()
        };

        BatchValidationResult::new(file.name(), file_validation, content_validation)
    }

    /// Validate `files` strictly in order, reporting progress before each
    /// file and once more after the last.
    pub fn validate_many<H, F>(
        &self,
        files: &[H],
        existing_names: &HashSet<String>,
        mut on_progress: F,
    ) -> Vec<BatchValidationResult>
    where
        H: FileHandle,
        F: FnMut(ValidationProgress<'_>),
    {
        let total = files.len();
        let mut results = Vec::with_capacity(total);

        for (index, file) in files.iter().enumerate() {
            on_progress(ValidationProgress {
                total,
                completed: index,
                current: file.name(),
                results: &results,
            });

            let result = self.validate_one(file, existing_names);
            log::debug!(
                "validated {}: {} error(s), {} warning(s)",
                result.file_name,
                result.file_validation.errors.len() + result.content_validation.errors.len(),
                result.file_validation.warnings.len() + result.content_validation.warnings.len()
            );
            results.push(result);

            std::thread::yield_now();
        }

        on_progress(ValidationProgress {
            total,
            completed: total,
            current: "",
            results: &results,
        });

        results
    }
}

/// Validate `files` against the default rules without progress reporting.
pub fn validate_many<H: FileHandle>(
    files: &[H],
    existing_names: &HashSet<String>,
) -> Vec<BatchValidationResult> {
    validate_many_with_progress(files, existing_names, |_| {})
}

/// Validate `files` against the default rules.
pub fn validate_many_with_progress<H, F>(
    files: &[H],
    existing_names: &HashSet<String>,
    on_progress: F,
) -> Vec<BatchValidationResult>
where
    H: FileHandle,
    F: FnMut(ValidationProgress<'_>),
{
    BatchValidator::default().validate_many(files, existing_names, on_progress)
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
