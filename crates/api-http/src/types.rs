//! HTTP Request/Response Types
//!
//! Wire shapes for the queue API. Required fields are modeled as
//! `Option` so a missing field maps to a 400 with the contract's message
//! rather than a generic deserialization error.

use serde::{Deserialize, Serialize};

/// POST /queue
#[derive(Debug, Default, Deserialize)]
pub struct CreateQueueRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// POST /queue/{id}/join
#[derive(Debug, Default, Deserialize)]
pub struct JoinQueueRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// POST /queue/{id}/serve and DELETE /queue/{id}/remove (body forms)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerIdRequest {
    #[serde(default)]
    pub customer_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
