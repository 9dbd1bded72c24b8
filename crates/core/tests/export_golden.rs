use insta::assert_snapshot;
use mdbundle_core::export::{fix_newlines, transform_note};

#[test]
fn golden_transform_note_with_fenced_code() {
    let input = include_str!("fixtures/export_note.md");

    let result = transform_note("export_note", input);

    assert_snapshot!(result);
}

#[test]
fn fenced_block_is_byte_identical_after_transform() {
    let input = include_str!("fixtures/export_note.md");
    let fenced = "```python\nprint(\"[[pic.png]]\")\n\n```";

    assert!(input.contains(fenced));
    assert!(transform_note("export_note", input).contains(fenced));
    assert!(fix_newlines(input).contains(fenced));
}
