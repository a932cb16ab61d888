use super::*;
use crate::services::item;
use crate::state::{AppState, test_helpers};
use items::ItemInput;

fn input(name: &str) -> ItemInput {
    ItemInput { name: name.to_owned(), description: format!("{name} description") }
}

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: u64 = env_parse("__TEST_NONEXISTENT_KEY_12345__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__TEST_SP_VALID__", "99") };
    let val: u64 = env_parse("__TEST_SP_VALID__", 0);
    assert_eq!(val, 99);
    unsafe { std::env::remove_var("__TEST_SP_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__TEST_SP_INVALID__", "notanumber") };
    let val: u64 = env_parse("__TEST_SP_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__TEST_SP_INVALID__") };
}

// =============================================================================
// flush_if_dirty
// =============================================================================

#[tokio::test]
async fn flush_writes_snapshot_and_clears_dirty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    let state = AppState::new(Vec::new(), path.clone());

    let created = {
        let mut store = state.store.write().await;
        item::create_item(&mut store, &input("flushed")).unwrap()
    };

    flush_if_dirty_for_tests(&state).await;

    let loaded = crate::store::load(&path).unwrap();
    assert_eq!(loaded, vec![created]);
    assert!(!state.store.read().await.is_dirty());
}

#[tokio::test]
async fn flush_clean_store_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    let state = AppState::new(Vec::new(), path.clone());

    flush_if_dirty_for_tests(&state).await;
    assert!(!path.exists());
}

#[tokio::test]
async fn flush_failure_keeps_store_dirty() {
    let dir = tempfile::tempdir().unwrap();
    // The snapshot path is an existing directory, so the rename must fail.
    let state = AppState::new(Vec::new(), dir.path().to_path_buf());

    {
        let mut store = state.store.write().await;
        item::create_item(&mut store, &input("stuck")).unwrap();
    }

    flush_if_dirty_for_tests(&state).await;
    assert!(state.store.read().await.is_dirty());
}

#[tokio::test]
async fn flush_snapshot_is_chronological() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    let state = AppState::new(Vec::new(), path.clone());

    {
        let mut store = state.store.write().await;
        let mut first = test_helpers::dummy_item("first");
        first.created_at = first.created_at - chrono::Duration::seconds(60);
        store.items.insert(first.id, first);
        let second = test_helpers::dummy_item("second");
        store.items.insert(second.id, second);
        store.mark_dirty();
    }

    flush_if_dirty_for_tests(&state).await;

    let loaded = crate::store::load(&path).unwrap();
    let names: Vec<&str> = loaded.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["first", "second"]);
}
