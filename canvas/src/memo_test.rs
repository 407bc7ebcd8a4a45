#![allow(clippy::float_cmp)]

use serde_json::json;
use uuid::Uuid;

use super::*;

fn make_memo(created_at: &str) -> Memo {
    Memo {
        id: Uuid::new_v4(),
        position_x: 0.0,
        position_y: 0.0,
        kind: MemoKind::LongForm,
        title: None,
        content: "body".into(),
        author: "Tester".into(),
        created_at: created_at.into(),
        votes: Vec::new(),
        referenced_memos: Vec::new(),
    }
}

// =============================================================
// MemoKind
// =============================================================

#[test]
fn kind_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&MemoKind::LongForm).unwrap(), "\"long_form\"");
    assert_eq!(serde_json::to_string(&MemoKind::ShortForm).unwrap(), "\"short_form\"");
}

#[test]
fn kind_labels() {
    assert_eq!(MemoKind::LongForm.label(), "Text memo");
    assert_eq!(MemoKind::ShortForm.label(), "Short text memo");
}

// =============================================================
// Memo serde
// =============================================================

#[test]
fn memo_deserializes_with_optional_fields_missing() {
    let id = Uuid::new_v4();
    let memo: Memo = serde_json::from_value(json!({
        "id": id,
        "position_x": 256.0,
        "position_y": 0.0,
        "kind": "short_form",
        "content": "hello",
        "author": "Tester",
        "created_at": "2024-01-01T00:00:00Z",
    }))
    .unwrap();
    assert_eq!(memo.id, id);
    assert_eq!(memo.position_x, 256.0);
    assert_eq!(memo.kind, MemoKind::ShortForm);
    assert!(memo.title.is_none());
    assert!(memo.votes.is_empty());
    assert!(memo.referenced_memos.is_empty());
}

#[test]
fn memo_without_title_omits_key() {
    let memo = make_memo("2024-01-01T00:00:00Z");
    let value = serde_json::to_value(&memo).unwrap();
    assert!(value.get("title").is_none());
}

// =============================================================
// MemoStore
// =============================================================

#[test]
fn store_starts_empty() {
    let store = MemoStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn store_load_snapshot_counts_memos() {
    let mut store = MemoStore::new();
    assert!(store.is_empty());
    store.load_snapshot(vec![make_memo("2024-01-01T00:00:00Z"), make_memo("2024-01-02T00:00:00Z")]);
    assert_eq!(store.len(), 2);
    assert!(!store.is_empty());
}

#[test]
fn store_snapshot_with_repeated_id_keeps_last() {
    let mut store = MemoStore::new();
    let first = make_memo("2024-01-01T00:00:00Z");
    let mut second = first.clone();
    second.content = "edited".into();
    store.load_snapshot(vec![first, second]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.sorted_memos()[0].content, "edited");
}

#[test]
fn store_load_snapshot_replaces_everything() {
    let mut store = MemoStore::new();
    store.load_snapshot(vec![make_memo("2024-01-01T00:00:00Z")]);
    store.load_snapshot(vec![make_memo("2024-02-01T00:00:00Z"), make_memo("2024-03-01T00:00:00Z")]);
    assert_eq!(store.len(), 2);
    assert!(store.sorted_memos().iter().all(|m| m.created_at.as_str() != "2024-01-01T00:00:00Z"));
}

#[test]
fn store_sorted_by_created_at() {
    let mut store = MemoStore::new();
    store.load_snapshot(vec![
        make_memo("2024-03-01T00:00:00Z"),
        make_memo("2024-01-01T00:00:00Z"),
        make_memo("2024-02-01T00:00:00Z"),
    ]);
    let order: Vec<&str> = store.sorted_memos().iter().map(|m| m.created_at.as_str()).collect();
    assert_eq!(order, vec!["2024-01-01T00:00:00Z", "2024-02-01T00:00:00Z", "2024-03-01T00:00:00Z"]);
}
