//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries, so dead
//! entries stop occupying slots between lookups.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryStore;

/// Spawns a background task that periodically sweeps expired entries.
///
/// Each run takes the store's write lock once for the whole sweep.
///
/// # Arguments
/// * `store` - Shared store to sweep
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let store = Arc::new(MemoryStore::new(1000, EvictionPolicy::Lru)?);
/// let cleanup_handle = spawn_cleanup_task(store.clone(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(store: Arc<MemoryStore>, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.cleanup_expired();

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{EvictionPolicy, Store};
    use chrono::Utc;

    fn shared_store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new(100, EvictionPolicy::Lru).unwrap())
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let store = shared_store();
        store.set(1, b"value".to_vec(), Utc::now() + chrono::Duration::milliseconds(200));

        let handle = spawn_cleanup_task(store.clone(), 1);

        // Wait for the entry to expire and one sweep to run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        // Checked without a lookup so only the sweep can have removed it
        assert_eq!(store.len(), 0, "Expired entry should have been swept");
        assert_eq!(store.stats().expirations, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let store = shared_store();
        store.set(1, b"value".to_vec(), Utc::now() + chrono::Duration::hours(1));

        let handle = spawn_cleanup_task(store.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(store.get(1), Some(b"value".to_vec()));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(shared_store(), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
