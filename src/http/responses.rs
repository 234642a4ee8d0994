use crate::domain::payment::{ErrorEnvelope, ErrorPayload};
use crate::error::OrchestratorError;
use axum::http::StatusCode;
use axum::Json;

pub fn error_body(code: &str, message: &str) -> Json<ErrorEnvelope> {
    Json(ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    })
}

/// Maps the core taxonomy onto HTTP statuses. Client mistakes and
/// configuration mismatches are 4xx; cache and serialization failures are
/// the caller-opaque 500 family.
pub fn map_error(err: &OrchestratorError) -> (StatusCode, Json<ErrorEnvelope>) {
    let (status, code) = match err {
        OrchestratorError::Validation(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
        OrchestratorError::UnsupportedProvider(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED_GATEWAY"),
        OrchestratorError::UnsupportedEvent(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED_EVENT"),
        OrchestratorError::MalformedEvent(_) => (StatusCode::BAD_REQUEST, "MALFORMED_EVENT"),
        OrchestratorError::Provider(_) => (StatusCode::BAD_REQUEST, "PAYMENT_FAILED"),
        OrchestratorError::Cache(_) | OrchestratorError::Serialization(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL")
        }
    };
    (status, error_body(code, &err.to_string()))
}
