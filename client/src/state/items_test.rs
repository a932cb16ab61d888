use super::*;
use chrono::TimeZone;
use chrono::Utc;
use uuid::Uuid;

fn item_at(id: u128, name: &str, ts: i64) -> Item {
    Item {
        id: Uuid::from_u128(id),
        name: name.to_owned(),
        description: format!("{name} description"),
        created_at: Utc.timestamp_opt(ts, 0).unwrap(),
        updated_at: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn items_state_default_is_empty() {
    let state = ItemsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// begin_load / apply_list / fail
// =============================================================

#[test]
fn begin_load_sets_loading() {
    let mut state = ItemsState::default();
    state.begin_load();
    assert!(state.loading);
}

#[test]
fn apply_list_replaces_items_oldest_first() {
    let mut state = ItemsState::default();
    state.begin_load();
    state.apply_list(vec![item_at(2, "newer", 200), item_at(1, "older", 100)]);

    assert!(!state.loading);
    let names: Vec<&str> = state.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["older", "newer"]);
}

#[test]
fn apply_list_clears_previous_error() {
    let mut state = ItemsState::default();
    state.fail("list items failed: 500".to_owned());
    state.apply_list(vec![item_at(1, "ok", 100)]);
    assert!(state.error.is_none());
}

#[test]
fn fail_records_error_and_keeps_items() {
    let mut state = ItemsState::default();
    state.apply_list(vec![item_at(1, "kept", 100)]);
    state.begin_load();
    state.fail("delete item failed: 404".to_owned());

    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("delete item failed: 404"));
    assert_eq!(state.items.len(), 1);
}
