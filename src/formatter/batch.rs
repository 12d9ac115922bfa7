use serde::{Deserialize, Serialize};

use super::change::FormatResult;
use super::options::FormatOptions;
use super::pipeline::Pipeline;

/// A named source text handed to the batch formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

impl SourceFile {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Formatting outcome for one file of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedFile {
    pub name: String,
    pub result: FormatResult,
}

/// Format `files` in order without progress reporting.
#[must_use]
pub fn format_many(files: &[SourceFile], options: &FormatOptions) -> Vec<FormattedFile> {
    format_many_with_progress(files, options, |_, _, _| {})
}

/// Format `files` strictly in order.
///
/// `on_progress(current, total, name)` is called before each file with a
/// 1-based `current`. The thread yields between files so a host event loop
/// can repaint.
pub fn format_many_with_progress<F>(
    files: &[SourceFile],
    options: &FormatOptions,
    mut on_progress: F,
) -> Vec<FormattedFile>
where
    F: FnMut(usize, usize, &str),
{
    let pipeline = Pipeline::from_options(options);
    let total = files.len();
    let mut results = Vec::with_capacity(total);

    for (index, file) in files.iter().enumerate() {
        if index > 0 {
            std::thread::yield_now();
        }
        on_progress(index + 1, total, &file.name);

        let result = pipeline.run(&file.content);
        log::debug!("formatted {}: {} change(s)", file.name, result.changes.len());
        results.push(FormattedFile {
            name: file.name.clone(),
            result,
        });
    }

    results
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
