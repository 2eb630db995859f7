//! SDK Wire Types
//!
//! Mirrors the server's JSON shapes (camelCase keys, RFC 3339
//! timestamps, lowercase status strings).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Waiting,
    Served,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub status: CustomerStatus,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Queue {
    pub id: String,
    pub name: String,
    pub customers: Vec<Customer>,
    pub created_at: DateTime<Utc>,
}

impl Queue {
    /// 1-based rank of a waiting customer among waiting customers, in
    /// arrival order. Served or unknown customers have no position.
    pub fn waiting_position(&self, customer_id: &str) -> Option<usize> {
        self.customers
            .iter()
            .filter(|c| c.status == CustomerStatus::Waiting)
            .position(|c| c.id == customer_id)
            .map(|idx| idx + 1)
    }
}

/// `{"success": true}` bodies from mutation endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct SuccessBody {
    #[allow(dead_code)]
    pub success: bool,
}

/// `{"error": "..."}` bodies from failed requests
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
