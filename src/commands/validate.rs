use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, ValidateArgs};
use crate::error::{ForsureError, Result};
use crate::output::{BatchProgress, SystemClock, render_validation_report};
use crate::scanner::{collect_files, scanner_from_config};
use crate::validator::{BatchValidator, DiskFile};
use crate::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_config, write_report};

#[must_use]
pub fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    match run_validate_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validate every discovered file; exit 1 if any is invalid.
///
/// # Errors
/// Returns an error if configuration, discovery or report writing fails.
pub fn run_validate_impl(args: &ValidateArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    let use_gitignore = config.scanner.gitignore && !args.no_gitignore;
    let scanner = scanner_from_config(&config.scanner, use_gitignore)?;
    let paths = collect_files(&args.paths, &scanner)?;
    let files = open_files(&paths)?;

    let existing = match &args.existing {
        Some(dir) => existing_names(dir)?,
        None => HashSet::new(),
    };

    let validator = BatchValidator::new(config.validate);
    let progress = BatchProgress::new("Validating", files.len() as u64, cli.quiet);
    let results = validator.validate_many(&files, &existing, |event| {
        progress.update(event.completed as u64, event.current);
    });
    progress.finish();

    let formatter = args
        .format
        .formatter(color_choice_to_mode(cli.color), cli.verbose);
    print!("{}", formatter.format_validation(&results)?);

    if let Some(report_path) = &args.report {
        write_report(
            report_path,
            &render_validation_report(&results, &SystemClock),
        )?;
    }

    if results.iter().any(|r| !r.overall_valid) {
        return Ok(EXIT_ISSUES_FOUND);
    }
    Ok(EXIT_SUCCESS)
}

fn open_files(paths: &[PathBuf]) -> Result<Vec<DiskFile>> {
    paths
        .iter()
        .map(|path| {
            DiskFile::open(path).map_err(|source| ForsureError::FileRead {
                path: path.clone(),
                source,
            })
        })
        .collect()
}

/// File names directly inside `dir`.
fn existing_names(dir: &Path) -> Result<HashSet<String>> {
    let entries = fs::read_dir(dir).map_err(|source| ForsureError::FileRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = HashSet::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
