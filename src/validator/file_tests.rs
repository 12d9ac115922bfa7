use super::*;

fn none() -> HashSet<String> {
    HashSet::new()
}

#[test]
fn accepts_allowed_extensions() {
    for name in ["app.fs", "app.forsure", "notes.txt"] {
        let result = validate_file(&FileMeta::new(name, 10), &none());
        assert!(result.is_valid, "{name} should be accepted");
        assert!(result.warnings.is_empty());
    }
}

#[test]
fn rejects_unknown_extension_only() {
    let result = validate_file(&FileMeta::new("a.exe", 10), &none());

    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec!["Invalid file extension: .exe. Allowed extensions: .fs, .forsure, .txt"]
    );
}

#[test]
fn extension_match_ignores_case() {
    let result = validate_file(&FileMeta::new("APP.FS", 10), &none());
    assert!(result.is_valid);
}

#[test]
fn name_without_dot_has_empty_extension() {
    let result = validate_file(&FileMeta::new("Makefile", 10), &none());
    assert_eq!(
        result.errors,
        vec!["Invalid file extension: . Allowed extensions: .fs, .forsure, .txt"]
    );
}

#[test]
fn size_at_limit_is_valid() {
    let result = validate_file(&FileMeta::new("big.fs", MAX_FILE_SIZE), &none());
    assert!(result.is_valid);
}

#[test]
fn size_one_byte_over_limit_is_invalid() {
    let result = validate_file(&FileMeta::new("big.fs", MAX_FILE_SIZE + 1), &none());
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec!["File size exceeds the maximum allowed size of 5 MB"]
    );
}

#[test]
fn duplicate_name_is_reported() {
    let existing: HashSet<String> = ["app.fs".to_string()].into_iter().collect();
    let result = validate_file(&FileMeta::new("app.fs", 10), &existing);

    assert_eq!(result.errors, vec!["A file with the name \"app.fs\" already exists"]);
}

#[test]
fn all_checks_accumulate() {
    let existing: HashSet<String> = ["huge.exe".to_string()].into_iter().collect();
    let result = validate_file(&FileMeta::new("huge.exe", MAX_FILE_SIZE * 2), &existing);

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 3);
    assert!(result.errors[0].starts_with("Invalid file extension"));
    assert!(result.errors[1].starts_with("File size exceeds"));
    assert!(result.errors[2].contains("already exists"));
}

#[test]
fn custom_rules_override_policy() {
    let rules = FileRules {
        extensions: vec![".md".to_string()],
        max_file_size: 100,
    };
    let result = rules.validate(&FileMeta::new("a.fs", 101), &none());
    assert_eq!(result.errors.len(), 2);
    assert!(result.errors[0].ends_with("Allowed extensions: .md"));
    assert!(result.errors[1].ends_with("100 Bytes"));
}

#[test]
fn file_extension_takes_last_dot() {
    assert_eq!(file_extension("a.b.forsure"), ".forsure");
    assert_eq!(file_extension("plain"), "");
    assert_eq!(file_extension(".fs"), ".fs");
}

#[test]
fn format_file_size_trims_trailing_zeros() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(MAX_FILE_SIZE), "5 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
}
