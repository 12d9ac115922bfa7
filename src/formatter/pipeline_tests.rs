use super::*;
use crate::formatter::change::{Change, ChangeKind};

struct Shout;

impl Pass for Shout {
    fn name(&self) -> &'static str {
        "shout"
    }

    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String {
        let upper = text.to_uppercase();
        if upper != text {
            sink.push(Change::new(ChangeKind::Warning, 1, "Shouted", text, &upper));
        }
        upper
    }
}

struct Exclaim;

impl Pass for Exclaim {
    fn name(&self) -> &'static str {
        "exclaim"
    }

    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String {
        sink.push(Change::new(ChangeKind::Fix, 1, "Exclaimed", text, "!"));
        format!("{text}!")
    }
}

#[test]
fn builder_chains_passes_in_insertion_order() {
    let pipeline = Pipeline::builder().pass(Shout).pass(Exclaim).build();

    let result = pipeline.run("hi");

    assert_eq!(result.formatted, "HI!");
    assert_eq!(pipeline.pass_names(), vec!["shout", "exclaim"]);
    assert_eq!(result.changes[0].description, "Shouted");
    assert_eq!(result.changes[1].description, "Exclaimed");
}

#[test]
fn pass_if_skips_disabled_passes() {
    let pipeline = Pipeline::builder()
        .pass_if(false, Shout)
        .pass_if(true, Exclaim)
        .build();

    assert_eq!(pipeline.run("hi").formatted, "hi!");
}

#[test]
fn pass_if_with_does_not_construct_disabled_pass() {
    let mut constructed = false;
    let _pipeline = Pipeline::builder()
        .pass_if_with(false, || {
            constructed = true;
            Shout
        })
        .build();
    assert!(!constructed);
}

#[test]
fn empty_pipeline_is_identity() {
    let result = Pipeline::builder().build().run("anything\r\n");
    assert_eq!(result.formatted, "anything\r\n");
    assert!(result.changes.is_empty());
}
