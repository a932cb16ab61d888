//! Timestamp formatting for the items table.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, Utc};

/// Format a creation timestamp for table display, e.g. `"Mar 7, 2026 14:02"`.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M").to_string()
}
