//! Deferred message deletion

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::AbortHandle;

use crate::domain::traits::Platform;

/// Pause between reacting to a message and deleting it
pub const DEFAULT_DELETE_DELAY: Duration = Duration::from_secs(2);

/// Deletes messages after a fixed delay, cancellable by message id
pub struct DeletionScheduler {
    delay: Duration,
    pending: Arc<Mutex<HashMap<String, AbortHandle>>>,
}

impl DeletionScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Spawn the deferred delete; returns immediately
    pub fn schedule(&self, platform: Arc<dyn Platform>, channel_id: String, message_id: String) {
        let Ok(mut pending) = self.pending.lock() else {
            tracing::error!("Deletion table lock poisoned");
            return;
        };

        let delay = self.delay;
        let table = Arc::clone(&self.pending);
        let key = message_id.clone();

        // The table lock is held until the handle is inserted, so the task's
        // own removal below can never run first.
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let still_pending = table
                .lock()
                .map(|mut t| t.remove(&message_id).is_some())
                .unwrap_or(false);
            if !still_pending {
                return;
            }

            if let Err(e) = platform.delete_message(&channel_id, &message_id).await {
                tracing::warn!(%channel_id, %message_id, "Failed to delete message: {}", e);
            }
        });

        if let Some(previous) = pending.insert(key, task.abort_handle()) {
            previous.abort();
        }
    }

    /// Cancel a pending delete, e.g. because someone else removed the message first
    pub fn cancel(&self, message_id: &str) -> bool {
        let handle = self.pending.lock().ok().and_then(|mut p| p.remove(message_id));
        match handle {
            Some(handle) => {
                handle.abort();
                tracing::debug!(%message_id, "Cancelled pending deletion");
                true
            }
            None => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or(0)
    }
}

impl Default for DeletionScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DELETE_DELAY)
    }
}
