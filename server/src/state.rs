//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the in-memory item store and the snapshot path. The store tracks a
//! mutation sequence so the persistence task can tell whether a write raced
//! its last flush.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use items::Item;
use tokio::sync::RwLock;
use uuid::Uuid;

// =============================================================================
// ITEM STORE
// =============================================================================

/// In-memory item store. Kept in memory for request handling and flushed to
/// the JSON snapshot by the persistence task.
pub struct ItemStore {
    /// Current items keyed by item ID.
    pub items: HashMap<Uuid, Item>,
    /// Mutation counter, bumped on every create/update/delete.
    pub seq: u64,
    /// The mutation counter value covered by the last successful flush.
    pub flushed_seq: u64,
}

impl ItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self { items: HashMap::new(), seq: 0, flushed_seq: 0 }
    }

    /// Build a store from a loaded snapshot. The snapshot is by definition
    /// already persisted, so the store starts clean.
    #[must_use]
    pub fn from_items(items: Vec<Item>) -> Self {
        let items = items.into_iter().map(|item| (item.id, item)).collect();
        Self { items, seq: 0, flushed_seq: 0 }
    }

    /// Record a mutation since the last flush.
    pub fn mark_dirty(&mut self) {
        self.seq = self.seq.wrapping_add(1);
    }

    /// Whether any mutation is not yet covered by a successful flush.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.seq != self.flushed_seq
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ItemStore>>,
    /// Where the persistence task writes the JSON snapshot.
    pub store_path: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(items: Vec<Item>, store_path: PathBuf) -> Self {
        Self { store: Arc::new(RwLock::new(ItemStore::from_items(items))), store_path }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use chrono::Utc;

    /// Create a test `AppState` with an empty store and a throwaway snapshot
    /// path under the system temp directory.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let path = std::env::temp_dir().join(format!("itemboard-test-{}.json", Uuid::new_v4()));
        AppState::new(Vec::new(), path)
    }

    /// Create a dummy `Item` for testing.
    #[must_use]
    pub fn dummy_item(name: &str) -> Item {
        Item {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            description: format!("{name} description"),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_store_new_is_empty_and_clean() {
        let store = ItemStore::new();
        assert!(store.items.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn item_store_default_equals_new() {
        let a = ItemStore::new();
        let b = ItemStore::default();
        assert_eq!(a.items.len(), b.items.len());
        assert_eq!(a.seq, b.seq);
    }

    #[test]
    fn from_items_starts_clean() {
        let item = test_helpers::dummy_item("loaded");
        let store = ItemStore::from_items(vec![item.clone()]);
        assert_eq!(store.items.len(), 1);
        assert_eq!(store.items.get(&item.id), Some(&item));
        assert!(!store.is_dirty());
    }

    #[test]
    fn mark_dirty_until_flushed_seq_catches_up() {
        let mut store = ItemStore::new();
        store.mark_dirty();
        assert!(store.is_dirty());
        store.flushed_seq = store.seq;
        assert!(!store.is_dirty());
    }
}
