use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::formatter::FormatOptions;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "forsure-lint")]
#[command(author, version, about = "Format and validate ForSure project-structure files")]
#[command(long_about = "Auto-formats and validates files written in the ForSure notation.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Files would change (format --check) or failed validation\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Auto-format ForSure files in place
    Format(FormatArgs),

    /// Validate ForSure files
    Validate(ValidateArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct FormatArgs {
    /// Paths to format (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report what would change without writing files (exit 1 if anything would)
    #[arg(long)]
    pub check: bool,

    /// Write the plain-text format report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Do not honor .gitignore when walking directories
    #[arg(long)]
    pub no_gitignore: bool,

    /// Skip indentation fixes
    #[arg(long)]
    pub no_indentation: bool,

    /// Skip brace and bracket spacing fixes
    #[arg(long)]
    pub no_braces: bool,

    /// Keep double quotes
    #[arg(long)]
    pub no_quotes: bool,

    /// Skip operator and punctuation spacing fixes
    #[arg(long)]
    pub no_spacing: bool,

    /// Keep original line endings
    #[arg(long)]
    pub no_line_endings: bool,

    /// Do not add missing semicolons
    #[arg(long)]
    pub no_semicolons: bool,

    /// Keep trailing whitespace
    #[arg(long)]
    pub no_trailing_spaces: bool,

    /// Keep keyword casing
    #[arg(long)]
    pub no_keywords: bool,

    /// Keep import order
    #[arg(long)]
    pub no_sort_imports: bool,

    /// Skip comment spacing fixes
    #[arg(long)]
    pub no_comments: bool,
}

impl FormatArgs {
    /// Turn off every pass disabled on the command line.
    pub fn apply_overrides(&self, options: &mut FormatOptions) {
        if self.no_indentation {
            options.fix_indentation = false;
        }
        if self.no_braces {
            options.fix_braces = false;
        }
        if self.no_quotes {
            options.fix_quotes = false;
        }
        if self.no_spacing {
            options.fix_spacing = false;
        }
        if self.no_line_endings {
            options.fix_line_endings = false;
        }
        if self.no_semicolons {
            options.add_missing_semicolons = false;
        }
        if self.no_trailing_spaces {
            options.remove_trailing_spaces = false;
        }
        if self.no_keywords {
            options.normalize_keywords = false;
        }
        if self.no_sort_imports {
            options.sort_imports = false;
        }
        if self.no_comments {
            options.format_comments = false;
        }
    }
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Paths to validate (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory whose file names count as already taken
    #[arg(long)]
    pub existing: Option<PathBuf>,

    /// Write the plain-text validation report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Do not honor .gitignore when walking directories
    #[arg(long)]
    pub no_gitignore: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".forsure-lint.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
