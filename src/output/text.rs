use std::fmt::Write;

use crate::error::Result;
use crate::formatter::FormattedFile;
use crate::validator::{BatchValidationResult, summarize_batch};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn write_formatted_file(&self, file: &FormattedFile, output: &mut String) {
        let changes = &file.result.changes;
        if changes.is_empty() {
            let status = self.colorize("CLEAN", ansi::GREEN);
            writeln!(output, "✓ {status}: {}", file.name).ok();
            return;
        }

        let status = self.colorize("CHANGED", ansi::YELLOW);
        writeln!(output, "✎ {status}: {}", file.name).ok();
        writeln!(output, "   Changes: {}", changes.len()).ok();

        if self.verbose >= 1 {
            for change in changes {
                writeln!(
                    output,
                    "   line {}: {} ({})",
                    change.line, change.description, change.kind
                )
                .ok();
            }
        }
    }

    fn write_validation_result(&self, result: &BatchValidationResult, output: &mut String) {
        let (icon, status) = if !result.overall_valid {
            ("✗", self.colorize("INVALID", ansi::RED))
        } else if result.has_warnings() {
            ("⚠", self.colorize("WARNING", ansi::YELLOW))
        } else {
            ("✓", self.colorize("VALID", ansi::GREEN))
        };
        writeln!(output, "{icon} {status}: {}", result.file_name).ok();

        let errors = result
            .file_validation
            .errors
            .iter()
            .chain(&result.content_validation.errors);
        for error in errors {
            writeln!(output, "   error: {error}").ok();
        }
        for warning in result.all_warnings() {
            writeln!(output, "   warning: {warning}").ok();
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format_changes(&self, files: &[FormattedFile]) -> Result<String> {
        let mut output = String::new();

        for file in files {
            // Clean files only in verbose mode
            if file.result.has_changes() || self.verbose >= 1 {
                self.write_formatted_file(file, &mut output);
                output.push('\n');
            }
        }

        let changed = files.iter().filter(|f| f.result.has_changes()).count();
        let total_changes: usize = files.iter().map(|f| f.result.changes.len()).sum();
        let changed_str = self.colorize(&changed.to_string(), ansi::YELLOW);
        writeln!(
            output,
            "Summary: {} files processed, {changed_str} changed, {total_changes} changes",
            files.len()
        )
        .ok();

        Ok(output)
    }

    fn format_validation(&self, results: &[BatchValidationResult]) -> Result<String> {
        let mut output = String::new();

        for result in results {
            // Clean valid files only in verbose mode
            if !result.overall_valid || result.has_warnings() || self.verbose >= 1 {
                self.write_validation_result(result, &mut output);
                output.push('\n');
            }
        }

        let summary = summarize_batch(results);
        let valid_str = self.colorize(&summary.valid.to_string(), ansi::GREEN);
        let invalid_str = self.colorize(&summary.invalid.to_string(), ansi::RED);
        let warnings_str = self.colorize(&summary.warnings.to_string(), ansi::YELLOW);
        writeln!(
            output,
            "Summary: {} files validated, {valid_str} valid, {invalid_str} invalid, {warnings_str} with warnings",
            summary.total
        )
        .ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
