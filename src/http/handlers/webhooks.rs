use crate::error::OrchestratorError;
use crate::http::responses::map_error;
use crate::webhook::WebhookEvent;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

/// Stripe webhook intake. A 4xx tells the provider the event is
/// unprocessable; a 5xx makes it redeliver per its own retry policy.
pub async fn stripe_webhook(
    State(state): State<AppState>,
    Json(raw): Json<serde_json::Value>,
) -> impl IntoResponse {
    let event: WebhookEvent = match serde_json::from_value(raw) {
        Ok(event) => event,
        Err(e) => {
            tracing::error!(error = %e, "undecodable webhook payload");
            return map_error(&OrchestratorError::MalformedEvent(e.to_string())).into_response();
        }
    };

    tracing::info!(event_id = %event.id, event_type = %event.event_type, "webhook event received");

    match state.reconciler.reconcile(&event).await {
        Ok(()) => {
            tracing::info!(event_id = %event.id, "webhook event processed");
            (
                axum::http::StatusCode::OK,
                Json(serde_json::json!({"received": true})),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(event_id = %event.id, event_type = %event.event_type, error = %e, "webhook event failed");
            map_error(&e).into_response()
        }
    }
}
