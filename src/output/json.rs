use serde::Serialize;

use crate::error::Result;
use crate::formatter::{Change, FormattedFile};
use crate::validator::{BatchSummary, BatchValidationResult, summarize_batch};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct FormatOutput<'a> {
    summary: FormatSummary,
    files: Vec<FormatFileEntry<'a>>,
}

#[derive(Serialize)]
struct FormatSummary {
    total_files: usize,
    files_with_changes: usize,
    total_changes: usize,
}

#[derive(Serialize)]
struct FormatFileEntry<'a> {
    name: &'a str,
    changed: bool,
    changes: &'a [Change],
}

#[derive(Serialize)]
struct ValidationOutput<'a> {
    summary: BatchSummary,
    results: &'a [BatchValidationResult],
}

impl OutputFormatter for JsonFormatter {
    fn format_changes(&self, files: &[FormattedFile]) -> Result<String> {
        let output = FormatOutput {
            summary: FormatSummary {
                total_files: files.len(),
                files_with_changes: files.iter().filter(|f| f.result.has_changes()).count(),
                total_changes: files.iter().map(|f| f.result.changes.len()).sum(),
            },
            files: files
                .iter()
                .map(|f| FormatFileEntry {
                    name: &f.name,
                    changed: f.result.has_changes(),
                    changes: &f.result.changes,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_validation(&self, results: &[BatchValidationResult]) -> Result<String> {
        let output = ValidationOutput {
            summary: summarize_batch(results),
            results,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
