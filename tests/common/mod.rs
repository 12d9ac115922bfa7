#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the forsure-lint binary.
#[macro_export]
macro_rules! forsure_lint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("forsure-lint"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Reads a file from the temp directory.
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a forsure-lint config file in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".forsure-lint.toml", content);
    }

    /// A component with a description block.
    pub fn create_valid_component(&self, relative_path: &str, name: &str) -> PathBuf {
        self.create_file(
            relative_path,
            &format!("component: {name} {{\n  description: 'The {name} component'\n}}\n"),
        )
    }
}
