use super::*;

fn run(text: &str) -> (String, Vec<Change>) {
    let mut sink = ChangeSink::new();
    let out = LineEndings.apply(text, &mut sink);
    (out, sink.into_changes())
}

#[test]
fn crlf_and_lone_cr_become_lf() {
    let (out, changes) = run("a\r\nb\rc\n");
    assert_eq!(out, "a\nb\nc\n");
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Fix);
    assert_eq!(changes[0].line, 1);
    assert_eq!(changes[0].before, "Mixed line endings");
}

#[test]
fn lf_only_text_is_untouched() {
    let (out, changes) = run("a\nb\n");
    assert_eq!(out, "a\nb\n");
    assert!(changes.is_empty());
}

#[test]
fn normalization_is_idempotent() {
    let (once, _) = run("x\r\n\r\ny\r");
    let (twice, changes) = run(&once);
    assert_eq!(once, twice);
    assert!(changes.is_empty());
}
