use pretty_assertions::assert_eq;
use pure_compose::chai::{cup, cups};
use pure_compose::html::to_html;
use pure_compose::{Key, RenderError};

#[test]
fn three_cups() {
    let list = cups(3).unwrap();
    let entries: Vec<(u64, String)> = list
        .iter()
        .map(|entry| (entry.key.get(), entry.node.text_content()))
        .collect();
    assert_eq!(
        entries,
        vec![
            (1, "Tea cup for guest #1".to_string()),
            (2, "Tea cup for guest #2".to_string()),
            (3, "Tea cup for guest #3".to_string()),
        ]
    );
}

#[test]
fn keys_run_from_one_to_count() {
    for count in [0i64, 1, 3, 12, 100] {
        let keys: Vec<Key> = cups(count).unwrap().iter().map(|e| e.key).collect();
        let expected: Vec<Key> = (1..=count as u64).map(Key::new).collect();
        assert_eq!(keys, expected);
    }
}

#[test]
fn no_cups_for_zero() {
    assert!(cups(0).unwrap().is_empty());
}

#[test]
fn repeated_calls_are_equal() {
    assert_eq!(cups(12).unwrap(), cups(12).unwrap());
}

#[test]
fn each_cup_depends_only_on_its_guest() {
    let list = cups(5).unwrap();
    for entry in list {
        let alone = cup(entry.key.get() as i64).unwrap();
        assert_eq!(entry.node.text_content(), alone.text_content());
        assert_eq!(alone.key(), None);
    }
}

#[test]
fn cup_renders_as_heading() {
    assert_eq!(to_html(&cup(7).unwrap()), "<h2>Tea cup for guest #7</h2>");
}

#[test]
fn negative_count_is_rejected() {
    match cups(-1) {
        Err(RenderError::InvalidArgument { name, .. }) => assert_eq!(name, "count"),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
    assert!(cup(-1).unwrap_err().is_invalid_argument());
}
