use crate::http::responses::map_error;
use crate::ledger::TransactionLedger;
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    /// `DD_MM_YYYY`; defaults to today.
    pub date: Option<String>,
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListTransactionsQuery>,
) -> impl IntoResponse {
    let date = query.date.unwrap_or_else(TransactionLedger::today_stamp);

    match state.orchestrator.list_transactions(&date).await {
        Ok(records) => (axum::http::StatusCode::OK, Json(records)).into_response(),
        Err(e) => {
            tracing::error!(%date, error = %e, "listing transactions failed");
            map_error(&e).into_response()
        }
    }
}
