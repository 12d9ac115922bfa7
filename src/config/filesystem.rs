//! The slice of the filesystem the config loader touches.
//!
//! Config discovery only needs to ask whether a `.forsure-lint.toml` is
//! present, read it, and know where the working and per-user settings
//! directories are. Loader tests swap in an in-memory implementation.

use std::io;
use std::path::{Path, PathBuf};

/// Directory name under the platform config root holding user-wide settings.
pub const APP_DIR_NAME: &str = "forsure-lint";

pub trait FileSystem {
    /// # Errors
    /// Returns an error if the config file cannot be read as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Directory searched for a project-local `.forsure-lint.toml`.
    ///
    /// # Errors
    /// Returns an error if the working directory is gone or inaccessible.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Per-user settings directory, e.g. `~/.config/forsure-lint` on Linux,
    /// `~/Library/Application Support/forsure-lint` on macOS and
    /// `%APPDATA%\forsure-lint` on Windows. `None` when no home is known.
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Backed by `std::fs` and the `directories` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_DIR_NAME).map(|dirs| dirs.config_dir().into())
    }
}
