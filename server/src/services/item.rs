//! Item service — CRUD against the in-memory store.
//!
//! DESIGN
//! ======
//! Operations are synchronous functions over `ItemStore`; handlers call them
//! while holding the store lock, so each operation observes and produces a
//! consistent snapshot. Every mutation bumps the store's sequence counter so
//! the persistence task knows there is work to flush.

#[cfg(test)]
#[path = "item_test.rs"]
mod tests;

use chrono::Utc;
use items::{Item, ItemInput, sort_chronological};
use uuid::Uuid;

use crate::state::ItemStore;

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item not found: {0}")]
    NotFound(Uuid),
    #[error("name and description are required")]
    MissingField,
}

/// List all items, oldest first.
#[must_use]
pub fn list_items(store: &ItemStore) -> Vec<Item> {
    let mut list: Vec<Item> = store.items.values().cloned().collect();
    sort_chronological(&mut list);
    list
}

/// Create a new item from the given fields.
///
/// The server assigns `id` and `created_at`; with chronological list order
/// that means a fresh item always appends at the end of the list.
///
/// # Errors
///
/// Returns [`ItemError::MissingField`] if either field is blank.
pub fn create_item(store: &mut ItemStore, input: &ItemInput) -> Result<Item, ItemError> {
    if !input.is_valid() {
        return Err(ItemError::MissingField);
    }
    let fields = input.trimmed();
    let item = Item {
        id: Uuid::new_v4(),
        name: fields.name,
        description: fields.description,
        created_at: Utc::now(),
        updated_at: None,
    };
    store.items.insert(item.id, item.clone());
    store.mark_dirty();
    Ok(item)
}

/// Replace the editable fields of an existing item in place.
///
/// `id` and `created_at` are preserved; `updated_at` is set to now.
///
/// # Errors
///
/// Returns [`ItemError::NotFound`] for an unknown id and
/// [`ItemError::MissingField`] if either field is blank.
pub fn update_item(store: &mut ItemStore, id: Uuid, input: &ItemInput) -> Result<Item, ItemError> {
    if !input.is_valid() {
        return Err(ItemError::MissingField);
    }
    let fields = input.trimmed();
    let Some(item) = store.items.get_mut(&id) else {
        return Err(ItemError::NotFound(id));
    };
    item.name = fields.name;
    item.description = fields.description;
    item.updated_at = Some(Utc::now());
    let updated = item.clone();
    store.mark_dirty();
    Ok(updated)
}

/// Delete an item.
///
/// # Errors
///
/// Returns [`ItemError::NotFound`] for an unknown id.
pub fn delete_item(store: &mut ItemStore, id: Uuid) -> Result<(), ItemError> {
    if store.items.remove(&id).is_none() {
        return Err(ItemError::NotFound(id));
    }
    store.mark_dirty();
    Ok(())
}
