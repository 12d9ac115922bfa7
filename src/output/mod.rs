mod clock;
mod json;
mod progress;
mod report;
mod text;

pub use clock::{Clock, FixedClock, SystemClock};
pub use json::JsonFormatter;
pub use progress::BatchProgress;
pub use report::{render_format_report, render_validation_report};
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::formatter::FormattedFile;
use crate::validator::BatchValidationResult;

/// Trait for rendering batch outcomes to stdout in various formats.
pub trait OutputFormatter {
    /// Render the outcome of a formatting batch.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_changes(&self, files: &[FormattedFile]) -> Result<String>;

    /// Render the outcome of a validation batch.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_validation(&self, results: &[BatchValidationResult]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl OutputFormat {
    /// Formatter for this format.
    #[must_use]
    pub fn formatter(self, color: ColorMode, verbose: u8) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::with_verbose(color, verbose)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
