use crate::content::CardContent;
use crate::error::ContentError;

#[test]
fn default_content_is_valid() {
    CardContent::default().validate().expect("default content");
}

#[test]
fn parses_a_personalized_document() {
    let raw = r#"
recipient = "Alex"
sender = "Sam"
accept_label = "Absolutely!"
evasion_bound = 64.0

[[timeline]]
photo = "first.jpeg"
date = "1 Jan, 2026"
caption = "Where it started"

[[timeline]]
photo = "second.jpeg"
date = "14 Feb, 2026"
caption = "Where we are"

[surprise]
label = "One more thing…"
caught_label = "Caught! Open it"
max_evasions = 3
"#;

    let content = CardContent::from_toml(raw).expect("valid document");
    assert_eq!(content.recipient, "Alex");
    assert_eq!(content.sender, "Sam");
    assert_eq!(content.timeline.len(), 2);
    assert_eq!(content.evasion_bound, 64.0);
    let surprise = content.surprise.expect("surprise section");
    assert_eq!(surprise.max_evasions, 3);
    // Unset fields keep their built-in values.
    assert_eq!(content.decline_label, "No, maybe later");
}

#[test]
fn document_without_surprise_section_has_no_gate() {
    let raw = r#"
[[timeline]]
photo = "only.jpeg"
date = "14 Feb, 2026"
caption = "Just us"
"#;

    let content = CardContent::from_toml(raw).expect("valid document");
    assert!(content.surprise.is_none());
}

#[test]
fn rejects_an_empty_timeline() {
    let err = CardContent::from_toml("timeline = []").unwrap_err();
    assert!(matches!(err, ContentError::EmptyTimeline));
}

#[test]
fn rejects_blank_entry_fields() {
    let raw = r#"
[[timeline]]
photo = "pic.jpeg"
date = "  "
caption = "A day"
"#;

    let err = CardContent::from_toml(raw).unwrap_err();
    match err {
        ContentError::EmptyField { index, field } => {
            assert_eq!(index, 0);
            assert_eq!(field, "date");
        }
        other => panic!("expected EmptyField, got {other}"),
    }
}

#[test]
fn rejects_entries_missing_required_fields() {
    let raw = r#"
[[timeline]]
photo = "pic.jpeg"
date = "1 Jan"
"#;

    assert!(matches!(
        CardContent::from_toml(raw),
        Err(ContentError::Parse(_))
    ));
}

#[test]
fn rejects_a_nonpositive_evasion_bound() {
    let mut content = CardContent::default();
    content.evasion_bound = 0.0;
    assert!(matches!(
        content.validate(),
        Err(ContentError::InvalidEvasionBound(_))
    ));
}

#[test]
fn teaser_shows_at_most_three_photos() {
    let content = CardContent::default();
    assert_eq!(content.teaser_photos().count(), 3);
}
