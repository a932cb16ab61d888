//! Item-list state for the items screen.
//!
//! DESIGN
//! ======
//! The list is the server's truth: every mutation is followed by a full
//! re-fetch and `apply_list` replaces the local list wholesale. No optimistic
//! patching, so there is nothing to reconcile.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use items::Item;

/// Shared item-list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct ItemsState {
    pub items: Vec<Item>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ItemsState {
    /// Mark a fetch or mutation in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the list with a fresh server response, oldest first.
    pub fn apply_list(&mut self, mut list: Vec<Item>) {
        items::sort_chronological(&mut list);
        self.items = list;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed request. The previous list stays on screen.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}
