// Queue Store Port (Interface)

use crate::domain::Queue;
use crate::error::Result;
use async_trait::async_trait;

/// Storage interface for Queue records, keyed by queue id
///
/// The registry performs read-modify-write cycles through this interface,
/// so a durable backing store can be substituted without touching the
/// registry operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueStore: Send + Sync {
    /// Fetch a queue by id
    async fn get(&self, id: &str) -> Result<Option<Queue>>;

    /// Insert or replace a queue
    async fn put(&self, queue: Queue) -> Result<()>;

    /// Delete a queue by id (no-op if absent)
    async fn delete(&self, id: &str) -> Result<()>;
}
