//! Auto-formatter and validator for the ForSure project-structure notation.
//!
//! The [`formatter`] and [`validator`] modules are the library core. The
//! remaining modules back the `forsure-lint` command line tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatter;
pub mod output;
pub mod scanner;
pub mod validator;

pub use error::{ForsureError, Result};
pub use formatter::{FormatOptions, FormatResult, format, format_many, format_many_with_progress};
pub use output::{render_format_report, render_validation_report};
pub use validator::{
    check_balance, summarize_batch, validate_content, validate_file, validate_many,
    validate_many_with_progress,
};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
