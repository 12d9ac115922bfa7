use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use walkdir::WalkDir;

use super::{FileFilter, FileScanner};
use crate::error::Result;

/// How far a [`DirectoryScanner`] trusts version control when walking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalkMode {
    /// Visit every file below the root.
    #[default]
    Everything,
    /// Skip what `.gitignore`, `.git/info/exclude` and the global git
    /// excludes ignore. Works outside a git checkout too.
    GitAware,
}

impl WalkMode {
    #[must_use]
    pub const fn from_gitignore(use_gitignore: bool) -> Self {
        if use_gitignore {
            Self::GitAware
        } else {
            Self::Everything
        }
    }
}

/// Finds ForSure documents below a directory.
///
/// Files come back in file-name order at every level, so batch output and
/// progress are the same from run to run.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    mode: WalkMode,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self::with_mode(filter, WalkMode::Everything)
    }

    #[must_use]
    pub const fn with_mode(filter: F, mode: WalkMode) -> Self {
        Self { filter, mode }
    }

    fn walk(&self, root: &Path) -> Vec<PathBuf> {
        match self.mode {
            WalkMode::Everything => WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_map(std::result::Result::ok)
                .filter(|entry| entry.file_type().is_file())
                .map(walkdir::DirEntry::into_path)
                .collect(),
            WalkMode::GitAware => WalkBuilder::new(root)
                .require_git(false)
                .hidden(false)
                .parents(false)
                .sort_by_file_name(|a, b| a.cmp(b))
                .build()
                .filter_map(std::result::Result::ok)
                .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
                .map(ignore::DirEntry::into_path)
                .collect(),
        }
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let documents: Vec<PathBuf> = self
            .walk(root)
            .into_iter()
            .filter(|path| self.filter.should_include(path))
            .collect();
        log::trace!("{} document(s) under {}", documents.len(), root.display());
        Ok(documents)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
