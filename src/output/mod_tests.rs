use super::*;
use crate::validator::ValidationResult;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("sarif".parse::<OutputFormat>().is_err());
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn formatter_dispatches_on_format() {
    let results = vec![BatchValidationResult::new(
        "a.fs",
        ValidationResult::valid(),
        ValidationResult::valid(),
    )];

    let text = OutputFormat::Text
        .formatter(ColorMode::Never, 0)
        .format_validation(&results)
        .unwrap();
    assert!(text.starts_with("Summary:"));

    let json = OutputFormat::Json
        .formatter(ColorMode::Never, 0)
        .format_validation(&results)
        .unwrap();
    assert!(json.trim_start().starts_with('{'));
}
