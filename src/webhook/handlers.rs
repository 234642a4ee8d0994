use crate::error::OrchestratorError;
use crate::ledger::TransactionLedger;
use crate::webhook::{EventHandler, WebhookEvent};
use serde::Deserialize;

pub const STATUS_CREATED: &str = "created";
pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Deserialize)]
struct PaymentIntentObject {
    id: String,
}

fn intent_id(event: &WebhookEvent) -> Result<String, OrchestratorError> {
    serde_json::from_value::<PaymentIntentObject>(event.data.object.clone())
        .map(|object| object.id)
        .map_err(|e| OrchestratorError::MalformedEvent(e.to_string()))
}

pub struct PaymentCreatedHandler;

#[async_trait::async_trait]
impl EventHandler for PaymentCreatedHandler {
    async fn process(
        &self,
        ledger: &TransactionLedger,
        event: &WebhookEvent,
    ) -> Result<(), OrchestratorError> {
        let id = intent_id(event)?;
        ledger.append_status(&id, STATUS_CREATED).await
    }
}

pub struct PaymentSucceededHandler;

#[async_trait::async_trait]
impl EventHandler for PaymentSucceededHandler {
    async fn process(
        &self,
        ledger: &TransactionLedger,
        event: &WebhookEvent,
    ) -> Result<(), OrchestratorError> {
        let id = intent_id(event)?;
        ledger.append_status(&id, STATUS_SUCCESS).await
    }
}
