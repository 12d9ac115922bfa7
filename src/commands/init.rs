use std::fs;

use crate::cli::InitArgs;
use crate::error::{ForsureError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ForsureError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# forsure-lint configuration file

[format]
# Formatter passes, applied in this order. All default to true.
fix_line_endings = true
remove_trailing_spaces = true
fix_indentation = true
fix_braces = true
fix_quotes = true
fix_spacing = true
add_missing_semicolons = true
normalize_keywords = true
sort_imports = true
format_comments = true

[validate]
# Accepted file extensions, leading dot included
extensions = [".fs", ".forsure", ".txt"]

# Largest accepted file size in bytes (default: 5 MiB)
max_file_size = 5242880

[scanner]
# Extensions picked up when walking directories
extensions = [".fs", ".forsure", ".txt"]

# Respect .gitignore rules (default: true)
gitignore = true

# Glob patterns to skip; setting this replaces the defaults below
exclude = ["**/node_modules/**", "**/.git/**", "**/.next/**", "**/dist/**"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
