//! Networking: REST helpers for the `/api/items` endpoints.

pub mod api;
