use blogwriter_core::{RecordId, RecordStore, ValidationError};
use std::collections::HashSet;

#[test]
fn add_prepends_collapsed_trimmed_records() {
    let mut store = RecordStore::new();
    store.add("Hello", "World").unwrap();
    store.add("  Second ", "\nPost\t").unwrap();

    let shape: Vec<(&str, &str, bool)> = store
        .records()
        .iter()
        .map(|r| (r.title.as_str(), r.content.as_str(), r.expanded))
        .collect();
    assert_eq!(
        shape,
        vec![("Second", "Post", false), ("Hello", "World", false)]
    );
}

#[test]
fn blank_title_or_content_is_rejected_without_change() {
    let mut store = RecordStore::new();
    assert_eq!(store.add("", "x").unwrap_err(), ValidationError::EmptyTitle);
    assert_eq!(
        store.add("x", "   ").unwrap_err(),
        ValidationError::EmptyContent
    );
    assert!(store.is_empty());

    store.add("keep", "me").unwrap();
    let before = store.records().to_vec();
    assert!(store.add("\t", "\n").is_err());
    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn delete_removes_only_matching_record() {
    let mut store = RecordStore::new();
    store.set_all(vec![
        blogwriter_core::Record::with_id("1", "A", "a"),
        blogwriter_core::Record::with_id("2", "B", "b"),
    ]);

    store.delete(&RecordId::from("1"));

    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].id.as_str(), "2");
}

#[test]
fn toggle_flips_one_record_and_keeps_order() {
    let mut store = RecordStore::new();
    let first = store.add("one", "1").unwrap();
    let second = store.add("two", "2").unwrap();
    let third = store.add("three", "3").unwrap();

    store.toggle_expand(&second.id);

    let ids: Vec<&RecordId> = store.records().iter().map(|r| &r.id).collect();
    assert_eq!(ids, vec![&third.id, &second.id, &first.id]);
    assert!(store.get(&second.id).unwrap().expanded);
    assert!(!store.get(&first.id).unwrap().expanded);
    assert!(!store.get(&third.id).unwrap().expanded);
}

#[test]
fn unknown_ids_are_noops() {
    let mut store = RecordStore::new();
    store.add("one", "1").unwrap();
    let before = store.records().to_vec();

    store.delete(&RecordId::from("missing"));
    store.toggle_expand(&RecordId::from("missing"));

    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn generated_ids_are_unique_across_many_adds() {
    let mut store = RecordStore::new();
    for idx in 0..500 {
        store.add(&format!("title {idx}"), "body").unwrap();
    }
    let ids: HashSet<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), 500);
}
