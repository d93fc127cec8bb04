//! Ephemeral preview store.
//!
//! Freshly generated images are exposed for a limited time through an
//! opaque identifier. The backing map is the only cross-task shared mutable
//! state in the process; every insert, read, and sweep-delete goes through
//! the lock. A background sweeper evicts entries older than the TTL, so an
//! entry's age never exceeds the TTL by more than one sweep interval. No
//! durability across restarts, by design.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};
use tokio::time::Instant;
use uuid::Uuid;

/// A stored preview payload and its creation timestamps. The monotonic
/// instant drives expiry; the wall-clock time is shown on the preview page.
#[derive(Debug, Clone)]
pub struct StoredPreview {
    pub payload: Bytes,
    pub created_at: Instant,
    pub created_at_utc: DateTime<Utc>,
}

/// Process-wide keyed cache of generated images with time-based expiry.
#[derive(Clone)]
pub struct PreviewStore {
    entries: Arc<RwLock<HashMap<Uuid, StoredPreview>>>,
    ttl: Duration,
}

impl PreviewStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Store a payload under a fresh random identifier and return it.
    pub async fn put(&self, payload: Bytes) -> Uuid {
        let id = Uuid::new_v4();
        let preview = StoredPreview {
            payload,
            created_at: Instant::now(),
            created_at_utc: Utc::now(),
        };
        self.entries.write().await.insert(id, preview);
        tracing::debug!(%id, "Stored preview");
        id
    }

    /// Look up a stored preview. Expiry is enforced by the sweeper; a miss
    /// means the id was never issued or has already been swept.
    pub async fn get(&self, id: &Uuid) -> Option<StoredPreview> {
        self.entries.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Remove every entry whose age exceeds the TTL. Returns how many were
    /// removed.
    pub async fn sweep_once(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.created_at.elapsed() <= ttl);
        before - entries.len()
    }

    /// Start the long-lived sweeper task, woken on a fixed interval. The
    /// returned handle stops it during graceful shutdown.
    pub fn spawn_sweeper(&self, interval: Duration) -> SweeperHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let store = self.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let removed = store.sweep_once().await;
                        if removed > 0 {
                            tracing::info!(removed, "Swept expired previews");
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        tracing::debug!("Preview sweeper stopping");
                        break;
                    }
                }
            }
        });

        SweeperHandle { shutdown_tx }
    }
}

/// Shutdown signal for the sweeper task.
#[derive(Clone)]
pub struct SweeperHandle {
    shutdown_tx: mpsc::Sender<()>,
}

impl SweeperHandle {
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}
