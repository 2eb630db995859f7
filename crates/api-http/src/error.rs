//! HTTP Error Mapping
//!
//! Maps application errors to status codes: ValidationError -> 400,
//! queue/customer not found -> 404, anything else -> 500 (logged).

use crate::types::ErrorResponse;
use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;
use tracing::error;
use waitline_core::error::AppError;

/// Render a JSON body with the given status
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let payload = serde_json::to_vec(body).unwrap_or_else(|_| b"{}".to_vec());
    Response::builder()
        .status(status)
        .header(hyper::header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(payload)))
        .expect("static response parts are valid")
}

/// Render an `{"error": ...}` body with the given status
pub(crate) fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> Response<Full<Bytes>> {
    json_response(
        status,
        &ErrorResponse {
            error: message.into(),
        },
    )
}

/// Convert an AppError into its transport response
pub(crate) fn to_response(err: AppError) -> Response<Full<Bytes>> {
    match &err {
        AppError::Validation(msg) => error_response(StatusCode::BAD_REQUEST, msg.clone()),
        AppError::Domain(domain) if err.is_not_found() => {
            error_response(StatusCode::NOT_FOUND, domain.to_string())
        }
        _ => {
            error!(error = %err, "request failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waitline_core::domain::DomainError;

    #[test]
    fn test_validation_maps_to_400() {
        let resp = to_response(AppError::Validation("Queue name is required".into()));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let resp = to_response(DomainError::QueueNotFound("q-1".into()).into());
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = to_response(DomainError::CustomerNotFound("c-1".into()).into());
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_everything_else_maps_to_500() {
        let resp = to_response(AppError::Storage("backend gone".into()));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
