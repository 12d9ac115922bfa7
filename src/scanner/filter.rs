use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{ForsureError, Result};

/// Decides whether a walked path is a document to process.
pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts ForSure documents by extension, minus anything under an
/// excluded glob.
///
/// Extensions are configured with their leading dot (`.fs`) and matched
/// without regard to case, so `HOME.FORSURE` is picked up too.
pub struct GlobFilter {
    /// Lowercased, dot-less. Empty means every extension.
    extensions: Vec<String>,
    excluded: GlobSet,
}

impl GlobFilter {
    /// # Errors
    /// Returns [`ForsureError::InvalidPattern`] naming the first exclude
    /// entry that is not a glob.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let extensions = extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .collect();

        Ok(Self {
            extensions,
            excluded: build_exclude_set(exclude_patterns)?,
        })
    }

    fn is_document(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.extensions.contains(&ext)
    }

    /// True when `path` falls under a `scanner.exclude` glob.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.excluded.is_match(path)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.is_document(path) && !self.is_excluded(path)
    }
}

fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| ForsureError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ForsureError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
