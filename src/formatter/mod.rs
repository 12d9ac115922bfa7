//! Rule-based auto-formatter for ForSure notation.
//!
//! The formatter is a fixed chain of regex and line based passes, not a
//! parser. Each enabled pass rewrites the output of the previous one and
//! records what it changed.

mod batch;
mod change;
mod options;
mod passes;
mod pipeline;

pub use batch::{FormattedFile, SourceFile, format_many, format_many_with_progress};
pub use change::{Change, ChangeKind, ChangeSink, FormatResult};
pub use options::FormatOptions;
pub use passes::{INDENT_WIDTH, IndentState, KEYWORDS};
pub use pipeline::{Pass, Pipeline, PipelineBuilder};

/// Format `source` with the passes enabled in `options`.
#[must_use]
pub fn format(source: &str, options: &FormatOptions) -> FormatResult {
    Pipeline::from_options(options).run(source)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
