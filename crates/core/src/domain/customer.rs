// Customer Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer ID (UUID v4, unique within its queue)
pub type CustomerId = String;

/// Customer status (waiting -> served, one-way)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Waiting,
    Served,
}

impl std::fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerStatus::Waiting => write!(f, "waiting"),
            CustomerStatus::Served => write!(f, "served"),
        }
    }
}

/// Customer Entity
///
/// Belongs to exactly one queue for its lifetime. Position is derived from
/// arrival order, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub status: CustomerStatus,
    pub joined_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new waiting customer
    ///
    /// # Arguments
    ///
    /// * `id` - Unique customer ID (injected, not generated)
    /// * `name` - Display name
    /// * `joined_at` - Join timestamp (injected, not system time)
    pub fn new(id: impl Into<String>, name: impl Into<String>, joined_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: CustomerStatus::Waiting,
            joined_at,
        }
    }

    /// Mark as served. Idempotent: serving an already-served customer is a
    /// no-op, not an error.
    pub fn serve(&mut self) {
        self.status = CustomerStatus::Served;
    }

    pub fn is_waiting(&self) -> bool {
        self.status == CustomerStatus::Waiting
    }
}
