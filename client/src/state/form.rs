//! Modal form state for creating and editing items.
//!
//! DESIGN
//! ======
//! One form struct serves both dialog modes. `FormMode` carries the id of the
//! record being edited, so submit code never has to re-derive which mutation
//! to issue from UI flags.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use items::{Item, ItemInput};
use uuid::Uuid;

/// Which mutation the form will submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    /// A new item; fields start blank.
    #[default]
    Create,
    /// An existing item; fields start pre-filled from the record.
    Edit { id: Uuid },
}

/// The modal form backing both create and edit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemForm {
    pub mode: FormMode,
    pub name: String,
    pub description: String,
}

impl ItemForm {
    /// A blank form in create mode.
    #[must_use]
    pub fn for_create() -> Self {
        Self::default()
    }

    /// A form pre-filled from the selected record, in edit mode.
    #[must_use]
    pub fn for_edit(item: &Item) -> Self {
        Self {
            mode: FormMode::Edit { id: item.id },
            name: item.name.clone(),
            description: item.description.clone(),
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Required-field check: both fields non-blank after trimming.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.input().is_valid()
    }

    /// The trimmed payload to send to the API.
    #[must_use]
    pub fn input(&self) -> ItemInput {
        ItemInput { name: self.name.clone(), description: self.description.clone() }.trimmed()
    }
}
