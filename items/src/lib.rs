//! Shared item model for the client/server boundary.
//!
//! This crate owns the JSON wire representation used by both `server` and
//! `client`: the persisted [`Item`] record and the [`ItemInput`] payload
//! accepted by create and update. Keeping the schema in one place means a
//! field change cannot drift between the two sides.


use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single item as stored by the server and listed by the client.
///
/// Field names serialize in camelCase (`createdAt`, `updatedAt`) to match
/// the REST wire format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique item identifier, assigned by the server at creation.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Creation timestamp, assigned by the server and never changed.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update, if the item was ever edited.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The editable fields accepted by the create and update endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub description: String,
}

impl ItemInput {
    /// Whether both required fields are non-blank after trimming.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// A copy with surrounding whitespace stripped from both fields.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
        }
    }
}

/// Sort items oldest-first by `(created_at, id)`.
///
/// Creation appends: a newly created item always lands at the end of the
/// sorted list, and equal timestamps break ties deterministically by id.
pub fn sort_chronological(items: &mut [Item]) {
    items.sort_by_key(|item| (item.created_at, item.id));
}
