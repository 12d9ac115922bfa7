use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/forsure-lint")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    assert_eq!(loader.load().unwrap(), Config::default());
}

#[test]
fn returns_default_without_user_config_dir() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let loader = FileConfigLoader::with_fs(fs);
    assert_eq!(loader.load().unwrap(), Config::default());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new().with_file(
        "/project/.forsure-lint.toml",
        "[format]\nfix_quotes = false\n",
    );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert!(!config.format.fix_quotes);
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/forsure-lint/config.toml",
        "[validate]\nmax_file_size = 2048\n",
    );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.validate.max_file_size, 2048);
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.forsure-lint.toml", "[validate]\nmax_file_size = 1\n")
        .with_file(
            "/home/user/.config/forsure-lint/config.toml",
            "[validate]\nmax_file_size = 2\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.validate.max_file_size, 1);
}

#[test]
fn load_from_missing_path_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nowhere.toml")).unwrap_err();
    assert!(matches!(err, ForsureError::FileRead { .. }));
}

#[test]
fn syntax_error_is_toml_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.forsure-lint.toml", "[format\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, ForsureError::TomlParse(_)));
}

#[test]
fn semantic_error_is_reported() {
    let fs = MockFileSystem::new().with_file(
        "/project/.forsure-lint.toml",
        "[scanner]\nextensions = [\"fs\"]\n",
    );
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, ForsureError::Config(_)));
}
