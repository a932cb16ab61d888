//! Persistence service — background flush for the item store.
//!
//! DESIGN
//! ======
//! A background task snapshots the store when its mutation sequence has moved
//! past the last flushed sequence, writes the JSON snapshot, then sleeps
//! before the next cycle.
//!
//! ERROR HANDLING
//! ==============
//! The flushed sequence advances only after a successful write, so a failed
//! write is retried on the next cycle rather than dropped. A mutation that
//! races an in-flight write keeps the store dirty as well.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::state::AppState;
use crate::store;

const DEFAULT_STORE_FLUSH_INTERVAL_MS: u64 = 1000;

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Spawn the background persistence task. Returns a handle for shutdown.
pub fn spawn_persistence_task(state: AppState) -> JoinHandle<()> {
    let flush_interval_ms = env_parse("STORE_FLUSH_INTERVAL_MS", DEFAULT_STORE_FLUSH_INTERVAL_MS);
    info!(flush_interval_ms, "item store flush configured");
    tokio::spawn(async move {
        loop {
            flush_if_dirty(&state).await;
            tokio::time::sleep(Duration::from_millis(flush_interval_ms)).await;
        }
    })
}

async fn flush_if_dirty(state: &AppState) {
    // PHASE: SNAPSHOT UNDER LOCK
    // WHY: clone the item list while holding the lock, then write lock-free.
    let (seq, mut snapshot) = {
        let guard = state.store.read().await;
        if !guard.is_dirty() {
            return;
        }
        (guard.seq, guard.items.values().cloned().collect::<Vec<_>>())
    };
    items::sort_chronological(&mut snapshot);

    // PHASE: WRITE + ACK SEQUENCE
    // WHY: if the write fails the sequence stays behind, so the next cycle retries.
    match store::save(&state.store_path, &snapshot) {
        Ok(()) => {
            let mut guard = state.store.write().await;
            // EDGE: only acknowledge up to the snapshotted sequence; a
            // mutation during the write leaves the store dirty.
            if guard.flushed_seq < seq {
                guard.flushed_seq = seq;
            }
        }
        Err(e) => {
            error!(error = %e, count = snapshot.len(), path = %state.store_path.display(), "item store flush failed");
        }
    }
}

#[cfg(test)]
pub(crate) async fn flush_if_dirty_for_tests(state: &AppState) {
    flush_if_dirty(state).await;
}
