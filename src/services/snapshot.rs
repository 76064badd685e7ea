//! Snapshot observer: logs every snapshot the user store publishes.
//!
//! DESIGN
//! ======
//! A background task holds a `watch` receiver on the store and wakes on
//! each publication. The snapshot is cloned out of the channel before
//! logging so the channel's read lock is released immediately. The task
//! ends once every store handle has been dropped.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::services::stats;
use crate::store::{Snapshot, UserStore};

/// Spawn the snapshot observer task. Returns a handle for shutdown.
pub fn spawn_snapshot_observer(store: &UserStore) -> JoinHandle<usize> {
    let rx = store.subscribe();
    tokio::spawn(observe_snapshots(rx))
}

/// Log publications until the sender closes. Returns how many were seen.
async fn observe_snapshots(mut rx: watch::Receiver<Snapshot>) -> usize {
    let mut seen = 0;
    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        seen += 1;
        info!(
            total = snapshot.len(),
            active = stats::active_count(&snapshot),
            "user snapshot published"
        );
    }
    seen
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
