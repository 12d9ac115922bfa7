mod directory;
mod filter;

pub use directory::{DirectoryScanner, WalkMode};
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::config::ScannerConfig;
use crate::error::{ForsureError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Build the scanner described by `config`.
///
/// # Errors
/// Returns an error if an exclude pattern is invalid.
pub fn scanner_from_config(
    config: &ScannerConfig,
    use_gitignore: bool,
) -> Result<DirectoryScanner<GlobFilter>> {
    let filter = GlobFilter::new(config.extensions.clone(), &config.exclude)?;
    Ok(DirectoryScanner::with_mode(
        filter,
        WalkMode::from_gitignore(use_gitignore),
    ))
}

/// Expand `paths` into a de-duplicated, ordered list of files.
///
/// Directories are walked with `scanner`. Files named explicitly are kept
/// even when the scanner's filter would skip them.
///
/// # Errors
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn collect_files<S: FileScanner>(paths: &[PathBuf], scanner: &S) -> Result<Vec<PathBuf>> {
    let mut files = IndexSet::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scanner.scan(path)?);
        } else if path.is_file() {
            files.insert(path.clone());
        } else {
            return Err(ForsureError::MissingPath(path.clone()));
        }
    }

    log::debug!("discovered {} file(s)", files.len());
    Ok(files.into_iter().collect())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
