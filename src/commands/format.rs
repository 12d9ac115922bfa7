use std::fs;
use std::path::PathBuf;

use crate::cli::{Cli, FormatArgs};
use crate::error::{ForsureError, Result};
use crate::formatter::{SourceFile, format_many_with_progress};
use crate::output::{BatchProgress, SystemClock, render_format_report};
use crate::scanner::{collect_files, scanner_from_config};
use crate::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_config, write_report};

#[must_use]
pub fn run_format(args: &FormatArgs, cli: &Cli) -> i32 {
    match run_format_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Format every discovered file, writing results back unless `--check`.
///
/// Files that cannot be read are reported on stderr and skipped; the rest of
/// the batch still runs and the exit code becomes 1.
///
/// # Errors
/// Returns an error if configuration, discovery or writing fails.
pub fn run_format_impl(args: &FormatArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    let mut options = config.format;
    args.apply_overrides(&mut options);

    let use_gitignore = config.scanner.gitignore && !args.no_gitignore;
    let scanner = scanner_from_config(&config.scanner, use_gitignore)?;
    let paths = collect_files(&args.paths, &scanner)?;

    let (readable, unreadable) = read_sources(paths);
    for err in &unreadable {
        eprintln!("Error: {err}");
    }
    let (paths, sources): (Vec<PathBuf>, Vec<SourceFile>) = readable.into_iter().unzip();

    let progress = BatchProgress::new("Formatting", sources.len() as u64, cli.quiet);
    let results = format_many_with_progress(&sources, &options, |current, _total, name| {
        progress.update(current as u64 - 1, name);
    });
    progress.finish();

    let mut changed = 0;
    for ((path, source), file) in paths.iter().zip(&sources).zip(&results) {
        if !file.result.differs_from(&source.content) {
            continue;
        }
        changed += 1;
        if !args.check {
            fs::write(path, &file.result.formatted).map_err(|err| ForsureError::FileWrite {
                path: path.clone(),
                source: err,
            })?;
            log::info!("formatted {}", path.display());
        }
    }

    let formatter = args
        .format
        .formatter(color_choice_to_mode(cli.color), cli.verbose);
    print!("{}", formatter.format_changes(&results)?);

    if let Some(report_path) = &args.report {
        write_report(report_path, &render_format_report(&results, &SystemClock))?;
    }

    if !unreadable.is_empty() || (args.check && changed > 0) {
        return Ok(EXIT_ISSUES_FOUND);
    }
    Ok(EXIT_SUCCESS)
}

/// Split `paths` into loaded documents and the files that could not be read.
fn read_sources(paths: Vec<PathBuf>) -> (Vec<(PathBuf, SourceFile)>, Vec<ForsureError>) {
    let mut readable = Vec::with_capacity(paths.len());
    let mut unreadable = Vec::new();

    for path in paths {
        match fs::read_to_string(&path) {
            Ok(content) => {
                let source = SourceFile::new(path.display().to_string(), content);
                readable.push((path, source));
            }
            Err(source) => {
                log::warn!("skipping {}: {source}", path.display());
                unreadable.push(ForsureError::FileRead { path, source });
            }
        }
    }

    (readable, unreadable)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
