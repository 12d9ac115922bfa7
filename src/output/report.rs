//! Plain-text downloadable reports.

use std::fmt::Write;

use crate::formatter::FormattedFile;
use crate::validator::{BatchValidationResult, summarize_batch};

use super::clock::Clock;

/// Before/after text is only shown for changes shorter than this.
const MAX_INLINE_BEFORE: usize = 100;

/// Render the auto-format report for a completed batch.
#[must_use]
pub fn render_format_report(results: &[FormattedFile], clock: &dyn Clock) -> String {
    let mut report = String::new();

    let files_with_changes = results.iter().filter(|f| f.result.has_changes()).count();
    let total_changes: usize = results.iter().map(|f| f.result.changes.len()).sum();

    writeln!(report, "ForSure Auto-Format Report").ok();
    writeln!(report, "Generated: {}", clock.now_iso8601()).ok();
    writeln!(report, "{}\n", "=".repeat(50)).ok();

    writeln!(report, "Summary:").ok();
    writeln!(report, "- Total files processed: {}", results.len()).ok();
    writeln!(report, "- Files with changes: {files_with_changes}").ok();
    writeln!(report, "- Total changes made: {total_changes}\n").ok();

    for file in results {
        writeln!(report, "File: {}", file.name).ok();
        writeln!(report, "{}", "─".repeat(30)).ok();

        if !file.result.has_changes() {
            writeln!(report, "No changes needed - file is already well-formatted\n").ok();
            continue;
        }

        writeln!(report, "Changes made: {}\n", file.result.changes.len()).ok();
        for (index, change) in file.result.changes.iter().enumerate() {
            writeln!(report, "{}. {}", index + 1, change.description).ok();
            writeln!(report, "   Line: {}", change.line).ok();
            writeln!(report, "   Type: {}", change.kind).ok();
            if change.before.chars().count() < MAX_INLINE_BEFORE {
                writeln!(report, "   Before: {}", change.before).ok();
                writeln!(report, "   After: {}", change.after).ok();
            }
            report.push('\n');
        }
    }

    report
}

/// Render the batch validation report.
#[must_use]
pub fn render_validation_report(results: &[BatchValidationResult], clock: &dyn Clock) -> String {
    let mut report = String::new();
    let summary = summarize_batch(results);

    writeln!(report, "ForSure Files Validation Report").ok();
    writeln!(report, "{}\n", "=".repeat(40)).ok();
    writeln!(report, "Generated: {}\n", clock.now_iso8601()).ok();

    writeln!(report, "Summary:").ok();
    writeln!(report, "---------").ok();
    writeln!(report, "Total Files: {}", summary.total).ok();
    writeln!(report, "Valid Files: {}", summary.valid).ok();
    writeln!(report, "Invalid Files: {}", summary.invalid).ok();
    writeln!(report, "Files with Warnings: {}\n", summary.warnings).ok();

    writeln!(report, "Detailed Results:").ok();
    writeln!(report, "{}\n", "-".repeat(20)).ok();

    for (index, result) in results.iter().enumerate() {
        let status = if result.overall_valid {
            "✓ Valid"
        } else {
            "✗ Invalid"
        };
        writeln!(report, "{}. {}", index + 1, result.file_name).ok();
        writeln!(report, "   Status: {status}").ok();

        write_section(
            &mut report,
            "File Errors",
            result.file_validation.errors.iter().map(String::as_str),
        );
        write_section(
            &mut report,
            "Content Errors",
            result.content_validation.errors.iter().map(String::as_str),
        );
        write_section(&mut report, "Warnings", result.all_warnings());

        report.push('\n');
    }

    report
}

fn write_section<'a>(report: &mut String, title: &str, items: impl Iterator<Item = &'a str>) {
    let mut items = items.peekable();
    if items.peek().is_none() {
        return;
    }
    writeln!(report, "   {title}:").ok();
    for item in items {
        writeln!(report, "     - {item}").ok();
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
