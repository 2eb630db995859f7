// Queue Domain Model

use crate::domain::customer::Customer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Queue identifier (UUID v4)
pub type QueueId = String;

/// Queue Entity: a named, ordered waiting list
///
/// `customers` preserves insertion order; arrival order determines a
/// waiting customer's position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Queue {
    pub id: QueueId,
    pub name: String,
    pub customers: Vec<Customer>,
    pub created_at: DateTime<Utc>,
}

impl Queue {
    /// Create an empty queue
    ///
    /// # Arguments
    ///
    /// * `id` - Unique queue ID (injected, not generated)
    /// * `name` - Display name
    /// * `created_at` - Creation timestamp (injected, not system time)
    pub fn new(id: impl Into<String>, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            customers: Vec::new(),
            created_at,
        }
    }

    /// Append a customer at the back (arrival order)
    pub fn push_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn customer_mut(&mut self, id: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.id == id)
    }

    /// Remove a customer by id. Unknown ids are a no-op; remaining
    /// customers keep their ids and relative order.
    pub fn remove_customer(&mut self, id: &str) {
        self.customers.retain(|c| c.id != id);
    }

    /// 1-based rank among waiting customers, in arrival order.
    ///
    /// Served or unknown customers have no position.
    pub fn waiting_position(&self, id: &str) -> Option<usize> {
        self.customers
            .iter()
            .filter(|c| c.is_waiting())
            .position(|c| c.id == id)
            .map(|idx| idx + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn queue_with(names: &[&str]) -> Queue {
        let mut queue = Queue::new("q-1", "Lunch", at(0));
        for (i, name) in names.iter().enumerate() {
            queue.push_customer(Customer::new(
                format!("c-{}", i + 1),
                *name,
                at((i as i64 + 1) * 1_000),
            ));
        }
        queue
    }

    #[test]
    fn test_new_queue_is_empty() {
        let queue = Queue::new("q-1", "Lunch", at(0));
        assert_eq!(queue.name, "Lunch");
        assert!(queue.customers.is_empty());
    }

    #[test]
    fn test_push_preserves_arrival_order() {
        let queue = queue_with(&["Alice", "Bob", "Carol"]);
        let names: Vec<&str> = queue.customers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_remove_unknown_customer_is_noop() {
        let mut queue = queue_with(&["Alice", "Bob"]);
        queue.remove_customer("no-such-id");
        assert_eq!(queue.customers.len(), 2);
        assert_eq!(queue.customers[0].id, "c-1");
        assert_eq!(queue.customers[1].id, "c-2");
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut queue = queue_with(&["Alice", "Bob", "Carol"]);
        queue.remove_customer("c-2");
        let ids: Vec<&str> = queue.customers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c-1", "c-3"]);
    }

    #[test]
    fn test_waiting_position_skips_served() {
        // [A(waiting), B(waiting), C(served)] joined in that order
        let mut queue = queue_with(&["A", "B", "C"]);
        queue.customer_mut("c-3").unwrap().serve();

        assert_eq!(queue.waiting_position("c-1"), Some(1));
        assert_eq!(queue.waiting_position("c-2"), Some(2));
        assert_eq!(queue.waiting_position("c-3"), None);
        assert_eq!(queue.waiting_position("no-such-id"), None);
    }

    #[test]
    fn test_position_advances_when_head_is_served() {
        let mut queue = queue_with(&["A", "B"]);
        queue.customer_mut("c-1").unwrap().serve();
        assert_eq!(queue.waiting_position("c-2"), Some(1));
    }

    #[test]
    fn test_wire_shape_uses_camel_case() {
        let queue = queue_with(&["Alice"]);
        let json = serde_json::to_value(&queue).unwrap();
        assert!(json["createdAt"].is_string());
        assert_eq!(json["customers"][0]["name"], "Alice");
    }
}
