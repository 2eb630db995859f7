//! HTTP Request Handlers
//!
//! Thin adapters: validate input shape, call the registry, translate
//! results and errors to transport responses.

use crate::error::{error_response, json_response, to_response};
use crate::types::{CreateQueueRequest, CustomerIdRequest, JoinQueueRequest, SuccessResponse};
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use waitline_core::application::QueueRegistry;
use waitline_core::error::{AppError, Result};

/// Matched route for a (method, path) pair
#[derive(Debug, PartialEq, Eq)]
enum Route {
    CreateQueue,
    GetQueue(String),
    DeleteQueue(String),
    JoinQueue(String),
    ServeByBody(String),
    RemoveByBody(String),
    RemoveCustomer {
        queue_id: String,
        customer_id: String,
    },
    ServeCustomer {
        queue_id: String,
        customer_id: String,
    },
    NotFound,
}

fn route(method: &Method, path: &str) -> Route {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    // Method is an opaque struct, so match on its string form
    match (method.as_str(), segments.as_slice()) {
        ("POST", ["queue"]) => Route::CreateQueue,
        ("GET", ["queue", id]) => Route::GetQueue(id.to_string()),
        ("DELETE", ["queue", id]) => Route::DeleteQueue(id.to_string()),
        ("POST", ["queue", id, "join"]) => Route::JoinQueue(id.to_string()),
        ("POST", ["queue", id, "serve"]) => Route::ServeByBody(id.to_string()),
        ("DELETE", ["queue", id, "remove"]) => Route::RemoveByBody(id.to_string()),
        ("DELETE", ["queue", id, "customer", customer_id]) => Route::RemoveCustomer {
            queue_id: id.to_string(),
            customer_id: customer_id.to_string(),
        },
        ("PUT", ["queue", id, "customer", customer_id, "serve"]) => Route::ServeCustomer {
            queue_id: id.to_string(),
            customer_id: customer_id.to_string(),
        },
        _ => Route::NotFound,
    }
}

/// HTTP handler with the injected registry
pub struct HttpHandler {
    registry: Arc<QueueRegistry>,
}

impl HttpHandler {
    pub fn new(registry: Arc<QueueRegistry>) -> Self {
        Self { registry }
    }

    /// Route a request and render the response. Never fails; errors become
    /// JSON error bodies with the mapped status code.
    pub async fn dispatch(&self, req: Request<Incoming>) -> Response<Full<Bytes>> {
        let (parts, body) = req.into_parts();
        let bytes = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(err) => {
                debug!(error = %err, "failed to read request body");
                return error_response(StatusCode::BAD_REQUEST, "Failed to read request body");
            }
        };

        debug!(method = %parts.method, path = %parts.uri.path(), "request");

        let result = match route(&parts.method, parts.uri.path()) {
            Route::CreateQueue => self.create_queue(&bytes).await,
            Route::GetQueue(id) => self.get_queue(&id).await,
            Route::DeleteQueue(id) => self.delete_queue(&id).await,
            Route::JoinQueue(id) => self.join_queue(&id, &bytes).await,
            Route::ServeByBody(id) => self.serve_by_body(&id, &bytes).await,
            Route::RemoveByBody(id) => self.remove_by_body(&id, &bytes).await,
            Route::RemoveCustomer {
                queue_id,
                customer_id,
            } => self.remove_customer(&queue_id, &customer_id).await,
            Route::ServeCustomer {
                queue_id,
                customer_id,
            } => self.serve_customer(&queue_id, &customer_id).await,
            Route::NotFound => return error_response(StatusCode::NOT_FOUND, "Not found"),
        };

        result.unwrap_or_else(to_response)
    }

    async fn create_queue(&self, body: &Bytes) -> Result<Response<Full<Bytes>>> {
        let req: CreateQueueRequest = parse_body(body)?;
        let name = required_field(req.name, "Queue name is required")?;
        let queue = self.registry.create_queue(name).await?;
        Ok(json_response(StatusCode::OK, &queue))
    }

    async fn get_queue(&self, id: &str) -> Result<Response<Full<Bytes>>> {
        let queue = self.registry.get_queue(id).await?;
        Ok(json_response(StatusCode::OK, &queue))
    }

    async fn delete_queue(&self, id: &str) -> Result<Response<Full<Bytes>>> {
        self.registry.delete_queue(id).await?;
        Ok(json_response(StatusCode::OK, &SuccessResponse::ok()))
    }

    async fn join_queue(&self, id: &str, body: &Bytes) -> Result<Response<Full<Bytes>>> {
        let req: JoinQueueRequest = parse_body(body)?;
        let name = required_field(req.name, "Name is required")?;
        let customer = self.registry.add_customer(id, name).await?;
        Ok(json_response(StatusCode::OK, &customer))
    }

    async fn serve_by_body(&self, id: &str, body: &Bytes) -> Result<Response<Full<Bytes>>> {
        let req: CustomerIdRequest = parse_body(body)?;
        let customer_id = required_field(req.customer_id, "Customer ID is required")?;
        self.registry
            .mark_customer_as_served(id, &customer_id)
            .await?;
        Ok(json_response(StatusCode::OK, &SuccessResponse::ok()))
    }

    async fn remove_by_body(&self, id: &str, body: &Bytes) -> Result<Response<Full<Bytes>>> {
        let req: CustomerIdRequest = parse_body(body)?;
        let customer_id = required_field(req.customer_id, "Customer ID is required")?;
        self.registry.remove_customer(id, &customer_id).await?;
        Ok(json_response(StatusCode::OK, &SuccessResponse::ok()))
    }

    async fn remove_customer(
        &self,
        queue_id: &str,
        customer_id: &str,
    ) -> Result<Response<Full<Bytes>>> {
        self.registry.remove_customer(queue_id, customer_id).await?;
        Ok(json_response(StatusCode::OK, &SuccessResponse::ok()))
    }

    async fn serve_customer(
        &self,
        queue_id: &str,
        customer_id: &str,
    ) -> Result<Response<Full<Bytes>>> {
        self.registry
            .mark_customer_as_served(queue_id, customer_id)
            .await?;
        Ok(json_response(StatusCode::OK, &SuccessResponse::ok()))
    }
}

/// Parse a JSON request body, mapping failures to a 400
fn parse_body<T: DeserializeOwned>(bytes: &Bytes) -> Result<T> {
    serde_json::from_slice(bytes)
        .map_err(|err| AppError::Validation(format!("Invalid JSON body: {err}")))
}

/// Reject missing or blank required string fields
fn required_field(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(message.to_string())),
    }
}
