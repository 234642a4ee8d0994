use crate::error::OrchestratorError;
use crate::ledger::TransactionLedger;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

pub mod handlers;

/// Inbound provider notification, decoded just far enough to route it.
/// The `object` payload stays opaque until a handler claims the event.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: EventData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventData {
    pub object: serde_json::Value,
}

/// Closed set of event types the reconciler acts on. Providers send more
/// types than these; unknown ones are rejected but that is not an
/// operator error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PaymentIntentCreated,
    PaymentIntentSucceeded,
}

impl EventKind {
    pub fn parse(event_type: &str) -> Result<Self, OrchestratorError> {
        match event_type {
            "payment_intent.created" => Ok(Self::PaymentIntentCreated),
            "payment_intent.succeeded" => Ok(Self::PaymentIntentSucceeded),
            other => Err(OrchestratorError::UnsupportedEvent(other.to_string())),
        }
    }
}

#[async_trait::async_trait]
pub trait EventHandler: Send + Sync {
    async fn process(
        &self,
        ledger: &TransactionLedger,
        event: &WebhookEvent,
    ) -> Result<(), OrchestratorError>;
}

/// Maps webhook events to idempotent status appends against the ledger.
/// Reprocessing a delivery can duplicate a status entry but never
/// corrupts a bucket; there is no event-id dedup set.
#[derive(Clone)]
pub struct Reconciler {
    ledger: TransactionLedger,
    handlers: HashMap<EventKind, Arc<dyn EventHandler>>,
}

impl Reconciler {
    /// Builds the reconciler with the full handler table registered.
    pub fn new(ledger: TransactionLedger) -> Self {
        let mut handlers: HashMap<EventKind, Arc<dyn EventHandler>> = HashMap::new();
        handlers.insert(
            EventKind::PaymentIntentCreated,
            Arc::new(handlers::PaymentCreatedHandler),
        );
        handlers.insert(
            EventKind::PaymentIntentSucceeded,
            Arc::new(handlers::PaymentSucceededHandler),
        );
        Self { ledger, handlers }
    }

    pub async fn reconcile(&self, event: &WebhookEvent) -> Result<(), OrchestratorError> {
        let kind = EventKind::parse(&event.event_type)?;
        let handler = self
            .handlers
            .get(&kind)
            .ok_or_else(|| OrchestratorError::UnsupportedEvent(event.event_type.clone()))?;
        handler.process(&self.ledger, event).await
    }
}
