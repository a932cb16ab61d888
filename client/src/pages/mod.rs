//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns route-scoped orchestration — fetching, mutations, dialog
//! lifecycle — and delegates rendering details to `components`.

pub mod items;
