// Queue Registry - CRUD use cases over queues and their customers

use crate::domain::{Customer, DomainError, Queue};
use crate::error::Result;
use crate::port::{IdProvider, QueueStore, TimeProvider};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

#[cfg(test)]
mod registry_test;

/// Queue Registry service
///
/// An explicit registry object passed by reference to handlers; no hidden
/// globals. All dependencies are injected so tests run against fresh
/// stores and deterministic clocks/ids.
pub struct QueueRegistry {
    store: Arc<dyn QueueStore>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
    // Serializes read-modify-write cycles: add/remove/serve on the same
    // queue must not interleave.
    write_lock: Mutex<()>,
}

impl QueueRegistry {
    pub fn new(
        store: Arc<dyn QueueStore>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            store,
            id_provider,
            time_provider,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a queue with a fresh unique id and an empty customer list
    pub async fn create_queue(&self, name: impl Into<String>) -> Result<Queue> {
        let queue = Queue::new(
            self.id_provider.generate_id(),
            name,
            self.time_provider.now(),
        );
        debug!(queue_id = %queue.id, name = %queue.name, "creating queue");
        self.store.put(queue.clone()).await?;
        Ok(queue)
    }

    /// Fetch a queue with all its customers. Never mutates.
    pub async fn get_queue(&self, id: &str) -> Result<Queue> {
        match self.store.get(id).await? {
            Some(queue) => Ok(queue),
            None => Err(DomainError::QueueNotFound(id.to_string()).into()),
        }
    }

    /// Append a new waiting customer to a queue
    pub async fn add_customer(&self, queue_id: &str, name: impl Into<String>) -> Result<Customer> {
        let _guard = self.write_lock.lock().await;

        let mut queue = self.get_queue(queue_id).await?;
        let customer = Customer::new(
            self.id_provider.generate_id(),
            name,
            self.time_provider.now(),
        );
        debug!(queue_id = %queue.id, customer_id = %customer.id, "customer joining");

        queue.push_customer(customer.clone());
        self.store.put(queue).await?;
        Ok(customer)
    }

    /// Remove a customer from a queue
    ///
    /// An unknown customer id is a no-op, not an error; the queue itself
    /// must exist.
    pub async fn remove_customer(&self, queue_id: &str, customer_id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut queue = self.get_queue(queue_id).await?;
        queue.remove_customer(customer_id);
        debug!(queue_id = %queue.id, customer_id = %customer_id, "customer removed");
        self.store.put(queue).await
    }

    /// Flip a customer's status to served, idempotently
    pub async fn mark_customer_as_served(&self, queue_id: &str, customer_id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut queue = self.get_queue(queue_id).await?;
        let customer = queue
            .customer_mut(customer_id)
            .ok_or_else(|| DomainError::CustomerNotFound(customer_id.to_string()))?;
        customer.serve();
        debug!(queue_id = %queue_id, customer_id = %customer_id, "customer served");
        self.store.put(queue).await
    }

    /// Delete a queue and all its customers. No-op if absent.
    pub async fn delete_queue(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        debug!(queue_id = %id, "deleting queue");
        self.store.delete(id).await
    }
}
