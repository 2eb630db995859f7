//! Unit tests for registry operations
//!
//! Runs against an in-process test store with deterministic ids and a
//! fixed clock.

use super::*;
use crate::domain::{CustomerStatus, Queue};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex as StdMutex;

/// HashMap-backed store for isolated tests
#[derive(Default)]
struct TestStore {
    queues: StdMutex<HashMap<String, Queue>>,
}

#[async_trait]
impl QueueStore for TestStore {
    async fn get(&self, id: &str) -> Result<Option<Queue>> {
        Ok(self.queues.lock().unwrap().get(id).cloned())
    }

    async fn put(&self, queue: Queue) -> Result<()> {
        self.queues.lock().unwrap().insert(queue.id.clone(), queue);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.queues.lock().unwrap().remove(id);
        Ok(())
    }
}

/// Sequential id provider (id-1, id-2, ...)
#[derive(Default)]
struct SeqIdProvider(AtomicU64);

impl IdProvider for SeqIdProvider {
    fn generate_id(&self) -> String {
        format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Fixed clock
struct FixedClock(DateTime<Utc>);

impl TimeProvider for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn registry() -> QueueRegistry {
    QueueRegistry::new(
        Arc::new(TestStore::default()),
        Arc::new(SeqIdProvider::default()),
        Arc::new(FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap())),
    )
}

#[tokio::test]
async fn test_create_queue_returns_empty_record() {
    let registry = registry();

    let queue = registry.create_queue("Lunch").await.unwrap();
    assert_eq!(queue.name, "Lunch");
    assert!(queue.customers.is_empty());

    // Stored and readable under the returned id
    let fetched = registry.get_queue(&queue.id).await.unwrap();
    assert_eq!(fetched.id, queue.id);
    assert_eq!(fetched.name, "Lunch");
}

#[tokio::test]
async fn test_create_queue_ids_are_unique() {
    let registry = registry();

    let a = registry.create_queue("A").await.unwrap();
    let b = registry.create_queue("B").await.unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_get_unknown_queue_is_not_found() {
    let registry = registry();

    let err = registry.get_queue("no-such-queue").await.unwrap_err();
    assert!(err.is_not_found(), "expected not-found, got: {err}");
}

#[tokio::test]
async fn test_add_customer_to_unknown_queue_fails() {
    let registry = registry();

    let err = registry
        .add_customer("no-such-queue", "Alice")
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    // Nothing was partially created
    assert!(registry.get_queue("no-such-queue").await.is_err());
}

#[tokio::test]
async fn test_add_customers_preserves_call_order() {
    let registry = registry();
    let queue = registry.create_queue("Lunch").await.unwrap();

    for name in ["Alice", "Bob", "Carol"] {
        registry.add_customer(&queue.id, name).await.unwrap();
    }

    let fetched = registry.get_queue(&queue.id).await.unwrap();
    let names: Vec<&str> = fetched.customers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

    // All ids distinct
    let mut ids: Vec<&str> = fetched.customers.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn test_remove_unknown_customer_is_noop() {
    let registry = registry();
    let queue = registry.create_queue("Lunch").await.unwrap();
    registry.add_customer(&queue.id, "Alice").await.unwrap();
    registry.add_customer(&queue.id, "Bob").await.unwrap();

    registry
        .remove_customer(&queue.id, "no-such-customer")
        .await
        .unwrap();

    let fetched = registry.get_queue(&queue.id).await.unwrap();
    let names: Vec<&str> = fetched.customers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[tokio::test]
async fn test_remove_customer_from_unknown_queue_fails() {
    let registry = registry();

    let err = registry
        .remove_customer("no-such-queue", "whoever")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_mark_served_is_idempotent() {
    let registry = registry();
    let queue = registry.create_queue("Lunch").await.unwrap();
    let customer = registry.add_customer(&queue.id, "Alice").await.unwrap();

    registry
        .mark_customer_as_served(&queue.id, &customer.id)
        .await
        .unwrap();
    // Second call: still served, no error
    registry
        .mark_customer_as_served(&queue.id, &customer.id)
        .await
        .unwrap();

    let fetched = registry.get_queue(&queue.id).await.unwrap();
    assert_eq!(fetched.customers[0].status, CustomerStatus::Served);
}

#[tokio::test]
async fn test_mark_served_unknown_customer_fails() {
    let registry = registry();
    let queue = registry.create_queue("Lunch").await.unwrap();

    let err = registry
        .mark_customer_as_served(&queue.id, "no-such-customer")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_queue_forgets_customers() {
    let registry = registry();
    let queue = registry.create_queue("Lunch").await.unwrap();
    registry.add_customer(&queue.id, "Alice").await.unwrap();

    registry.delete_queue(&queue.id).await.unwrap();
    assert!(registry.get_queue(&queue.id).await.is_err());

    // Deleting again is a no-op
    registry.delete_queue(&queue.id).await.unwrap();
}

#[tokio::test]
async fn test_full_lifecycle_scenario() {
    let registry = registry();

    let queue = registry.create_queue("Lunch").await.unwrap();
    assert!(queue.customers.is_empty());

    let alice = registry.add_customer(&queue.id, "Alice").await.unwrap();
    let fetched = registry.get_queue(&queue.id).await.unwrap();
    assert_eq!(fetched.customers.len(), 1);
    assert_eq!(fetched.customers[0].name, "Alice");
    assert_eq!(fetched.customers[0].status, CustomerStatus::Waiting);

    registry
        .mark_customer_as_served(&queue.id, &alice.id)
        .await
        .unwrap();
    let fetched = registry.get_queue(&queue.id).await.unwrap();
    assert_eq!(fetched.customers[0].status, CustomerStatus::Served);

    registry.remove_customer(&queue.id, &alice.id).await.unwrap();
    let fetched = registry.get_queue(&queue.id).await.unwrap();
    assert!(fetched.customers.is_empty());
}

#[tokio::test]
async fn test_storage_errors_propagate() {
    use crate::port::queue_store::MockQueueStore;

    let mut store = MockQueueStore::new();
    store
        .expect_put()
        .returning(|_| Err(AppError::Storage("disk on fire".into())));

    let registry = QueueRegistry::new(
        Arc::new(store),
        Arc::new(SeqIdProvider::default()),
        Arc::new(FixedClock(Utc.timestamp_opt(0, 0).unwrap())),
    );

    let err = registry.create_queue("Lunch").await.unwrap_err();
    assert!(matches!(err, AppError::Storage(_)));
}
