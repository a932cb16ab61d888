//! Service layer: item CRUD and background persistence.

pub mod item;
pub mod persistence;
