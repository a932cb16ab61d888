//! JSON snapshot store for items.
//!
//! DESIGN
//! ======
//! The snapshot is a single pretty-printed JSON array of items. Writes go to
//! a sibling temp file first and are renamed into place, so a crash mid-write
//! leaves the previous snapshot intact.
//!
//! ERROR HANDLING
//! ==============
//! A missing snapshot means a fresh install and loads as empty. A snapshot
//! that exists but fails to parse is surfaced as an error at startup rather
//! than silently discarded.

use std::fs;
use std::path::Path;

use items::Item;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the item snapshot from `path`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load(path: &Path) -> Result<Vec<Item>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write the item snapshot to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem step fails.
pub fn save(path: &Path, items: &[Item]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(items)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
