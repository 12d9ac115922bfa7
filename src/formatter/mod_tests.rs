use super::*;

fn descriptions(result: &FormatResult) -> Vec<&str> {
    result
        .changes
        .iter()
        .map(|c| c.description.as_str())
        .collect()
}

#[test]
fn semicolon_only_run_fixes_declaration() {
    let options = FormatOptions {
        add_missing_semicolons: true,
        ..FormatOptions::none()
    };

    let result = format("let x=1\n", &options);

    assert_eq!(result.formatted, "let x=1;\n");
    assert_eq!(result.changes.len(), 1);
    assert_eq!(result.changes[0].kind, ChangeKind::Fix);
    assert!(result.changes[0].description.contains("semicolon"));
    assert!(result.has_changes());
}

#[test]
fn changes_follow_pass_order() {
    let result = format("Component: Nav\r\n", &FormatOptions::default());

    assert_eq!(result.formatted, "component: Nav\n");
    assert_eq!(
        descriptions(&result),
        vec!["Normalized line endings to LF", "Normalized component keyword"]
    );
}

#[test]
fn later_passes_see_earlier_output() {
    let result = format("let x=1\n", &FormatOptions::default());

    assert_eq!(result.formatted, "let x = 1;\n");
    assert_eq!(
        descriptions(&result),
        vec!["Fixed assignment spacing", "Added missing semicolon"]
    );
    assert_eq!(result.changes[1].before, "let x = 1");
}

#[test]
fn no_enabled_passes_leaves_text_untouched() {
    let source = "  Page:Home{  \r\n";
    let result = format(source, &FormatOptions::none());

    assert_eq!(result.formatted, source);
    assert!(!result.has_changes());
}

#[test]
fn has_changes_agrees_with_text_difference() {
    let sources = [
        "component: Button\n",
        "page: Home {\n  layout: Main\n}\n",
        "//note\n",
        "import b from './b'\nimport a from './a'\n\npage: x\n",
        "\tlet   y=2   \n",
    ];

    for source in sources {
        let result = format(source, &FormatOptions::default());
        assert_eq!(
            result.has_changes(),
            result.differs_from(source),
            "mismatch for {source:?}"
        );
    }
}

#[test]
fn pipeline_keeps_fixed_pass_order() {
    let names = Pipeline::default().pass_names();
    assert_eq!(
        names,
        vec![
            "line-endings",
            "trailing-whitespace",
            "indentation",
            "brace-spacing",
            "quotes",
            "token-spacing",
            "semicolons",
            "keyword-case",
            "import-sorting",
            "comment-spacing",
        ]
    );
}

#[test]
fn disabled_passes_are_left_out() {
    let options = FormatOptions {
        fix_quotes: false,
        sort_imports: false,
        ..FormatOptions::default()
    };
    let names = Pipeline::from_options(&options).pass_names();
    assert_eq!(names.len(), 8);
    assert!(!names.contains(&"quotes"));
    assert!(!names.contains(&"import-sorting"));
}

#[test]
fn options_default_enables_everything() {
    assert_eq!(FormatOptions::default().enabled_count(), 10);
    assert_eq!(FormatOptions::none().enabled_count(), 0);
}

#[test]
fn options_deserialize_with_missing_keys_as_true() {
    let options: FormatOptions = toml::from_str("fix_quotes = false\n").unwrap();
    assert!(!options.fix_quotes);
    assert!(options.fix_indentation);
    assert_eq!(options.enabled_count(), 9);
}
