// In-memory QueueStore Implementation

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::trace;
use waitline_core::domain::{Queue, QueueId};
use waitline_core::error::Result;
use waitline_core::port::QueueStore;

/// Process-wide in-memory queue storage
///
/// Holds the whole registry behind a single `RwLock`; contention is low
/// (one map lookup or insert per operation). State is lost when the
/// process exits, by design of the service.
#[derive(Default)]
pub struct MemoryQueueStore {
    queues: RwLock<HashMap<QueueId, Queue>>,
}

impl MemoryQueueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored queues
    pub async fn len(&self) -> usize {
        self.queues.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.queues.read().await.is_empty()
    }
}

#[async_trait]
impl QueueStore for MemoryQueueStore {
    async fn get(&self, id: &str) -> Result<Option<Queue>> {
        Ok(self.queues.read().await.get(id).cloned())
    }

    async fn put(&self, queue: Queue) -> Result<()> {
        trace!(queue_id = %queue.id, "storing queue");
        self.queues.write().await.insert(queue.id.clone(), queue);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        trace!(queue_id = %id, "deleting queue");
        self.queues.write().await.remove(id);
        Ok(())
    }
}
