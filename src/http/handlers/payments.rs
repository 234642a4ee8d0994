use crate::domain::payment::{PaymentRequest, SubmitPaymentResponse};
use crate::http::responses::{error_body, map_error};
use crate::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

pub async fn submit_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<PaymentRequest>,
) -> impl IntoResponse {
    let correlation_id = headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string);
    let Some(correlation_id) = correlation_id else {
        return (
            axum::http::StatusCode::BAD_REQUEST,
            error_body(
                "MISSING_CORRELATION_ID",
                "missing required header: x-correlation-id",
            ),
        )
            .into_response();
    };

    tracing::info!(%correlation_id, gateway = %req.gateway, "payment request received");

    match state.orchestrator.submit_payment(req, &correlation_id).await {
        Ok(transaction_id) => {
            tracing::info!(%correlation_id, %transaction_id, "payment request completed");
            (
                axum::http::StatusCode::CREATED,
                Json(SubmitPaymentResponse { transaction_id }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(%correlation_id, error = %e, "payment request failed");
            map_error(&e).into_response()
        }
    }
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    if state.cache.ping().await {
        (axum::http::StatusCode::OK, "ok")
    } else {
        (axum::http::StatusCode::SERVICE_UNAVAILABLE, "cache unreachable")
    }
}
