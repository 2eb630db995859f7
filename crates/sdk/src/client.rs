//! Waitline Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{Customer, ErrorBody, Queue, SuccessBody};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Waitline HTTP API
///
/// One method per API operation; 4xx/5xx answers surface as
/// [`SdkError::Api`] carrying the status code and the server's `error`
/// message.
pub struct WaitlineClient {
    http: reqwest::Client,
    base_url: String,
}

impl WaitlineClient {
    /// Create a client against a base URL (e.g. `http://127.0.0.1:8080`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SdkError::Connection(format!("Failed to build client: {e}")))?;

        Ok(Self { http, base_url })
    }

    /// Create a new queue
    pub async fn create_queue(&self, name: &str) -> Result<Queue> {
        self.execute(
            self.http
                .post(self.url("/queue"))
                .json(&json!({ "name": name })),
        )
        .await
    }

    /// Fetch a queue with all its customers
    pub async fn queue(&self, queue_id: &str) -> Result<Queue> {
        self.execute(self.http.get(self.url(&format!("/queue/{queue_id}"))))
            .await
    }

    /// Join a queue as a new customer
    pub async fn join(&self, queue_id: &str, name: &str) -> Result<Customer> {
        self.execute(
            self.http
                .post(self.url(&format!("/queue/{queue_id}/join")))
                .json(&json!({ "name": name })),
        )
        .await
    }

    /// Mark a customer as served
    pub async fn serve(&self, queue_id: &str, customer_id: &str) -> Result<()> {
        let _: SuccessBody = self
            .execute(
                self.http
                    .put(self.url(&format!("/queue/{queue_id}/customer/{customer_id}/serve"))),
            )
            .await?;
        Ok(())
    }

    /// Remove a customer from a queue
    pub async fn remove(&self, queue_id: &str, customer_id: &str) -> Result<()> {
        let _: SuccessBody = self
            .execute(
                self.http
                    .delete(self.url(&format!("/queue/{queue_id}/customer/{customer_id}"))),
            )
            .await?;
        Ok(())
    }

    /// Delete a queue and all its customers
    pub async fn delete_queue(&self, queue_id: &str) -> Result<()> {
        let _: SuccessBody = self
            .execute(self.http.delete(self.url(&format!("/queue/{queue_id}"))))
            .await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T> {
        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json::<T>().await?)
        } else {
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            Err(SdkError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
