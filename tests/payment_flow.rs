//! End-to-end flow over the in-memory store: submit a payment, then
//! reconcile the webhook deliveries that follow it.

use payment_orchestrator::cache::memory::InMemoryCacheStore;
use payment_orchestrator::domain::payment::{CardDetails, PaymentRequest};
use payment_orchestrator::error::OrchestratorError;
use payment_orchestrator::gateways::{PaymentProvider, ProviderKind, ProviderRegistry};
use payment_orchestrator::ledger::{RetryPolicy, TransactionLedger};
use payment_orchestrator::service::orchestrator::PaymentOrchestrator;
use payment_orchestrator::webhook::{Reconciler, WebhookEvent};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

struct StubStripe;

#[async_trait::async_trait]
impl PaymentProvider for StubStripe {
    fn name(&self) -> &'static str {
        "Stripe"
    }

    async fn charge(
        &self,
        _request: &PaymentRequest,
        _correlation_id: &str,
    ) -> Result<String, OrchestratorError> {
        Ok("pi_stub".to_string())
    }
}

struct DownProvider;

#[async_trait::async_trait]
impl PaymentProvider for DownProvider {
    fn name(&self) -> &'static str {
        "Stripe"
    }

    async fn charge(
        &self,
        _request: &PaymentRequest,
        _correlation_id: &str,
    ) -> Result<String, OrchestratorError> {
        Err(OrchestratorError::Provider("gateway timeout".to_string()))
    }
}

fn setup(provider: Arc<dyn PaymentProvider>) -> (PaymentOrchestrator, Reconciler) {
    let store = Arc::new(InMemoryCacheStore::new());
    let ledger = TransactionLedger::new(store, "transactions").with_retry_policy(RetryPolicy {
        max_attempts: 3,
        delay: Duration::from_millis(5),
    });
    let mut registry = ProviderRegistry::new();
    registry.register(ProviderKind::Stripe, provider);

    let reconciler = Reconciler::new(ledger.clone());
    (PaymentOrchestrator { registry, ledger }, reconciler)
}

fn stripe_request() -> PaymentRequest {
    PaymentRequest {
        gateway: "Stripe".to_string(),
        amount: 100.0,
        currency: "USD".to_string(),
        payment_method: "card".to_string(),
        card_details: CardDetails {
            number: "4242424242424242".to_string(),
            expiry: "12/30".to_string(),
            cvv: "123".to_string(),
        },
    }
}

fn succeeded_event(intent_id: &str) -> WebhookEvent {
    serde_json::from_value(json!({
        "id": "evt_ok",
        "type": "payment_intent.succeeded",
        "data": { "object": { "id": intent_id } }
    }))
    .unwrap()
}

#[tokio::test]
async fn submitted_payment_is_recorded_then_reconciled() {
    let (orchestrator, reconciler) = setup(Arc::new(StubStripe));

    let id = orchestrator
        .submit_payment(stripe_request(), "corr-1")
        .await
        .unwrap();
    assert_eq!(id, "pi_stub");

    let today = TransactionLedger::today_stamp();
    let records = orchestrator.list_transactions(&today).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status_history[0].status, "pending");

    reconciler.reconcile(&succeeded_event("pi_stub")).await.unwrap();

    let records = orchestrator.list_transactions(&today).await.unwrap();
    let statuses: Vec<&str> = records[0]
        .status_history
        .iter()
        .map(|entry| entry.status.as_str())
        .collect();
    assert_eq!(statuses, vec!["pending", "success"]);
}

#[tokio::test]
async fn failed_charge_leaves_no_ledger_record() {
    let (orchestrator, _) = setup(Arc::new(DownProvider));

    let err = orchestrator
        .submit_payment(stripe_request(), "corr-2")
        .await
        .unwrap_err();
    assert!(matches!(err, OrchestratorError::Provider(_)));

    let records = orchestrator
        .list_transactions(&TransactionLedger::today_stamp())
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn unknown_gateway_is_rejected_before_any_charge() {
    let (orchestrator, _) = setup(Arc::new(StubStripe));

    let mut req = stripe_request();
    req.gateway = "Square".to_string();
    let err = orchestrator.submit_payment(req, "corr-3").await.unwrap_err();
    assert!(matches!(err, OrchestratorError::UnsupportedProvider(_)));
}

#[tokio::test]
async fn invalid_amount_is_rejected_before_dispatch() {
    let (orchestrator, _) = setup(Arc::new(StubStripe));

    let mut req = stripe_request();
    req.amount = -1.0;
    let err = orchestrator.submit_payment(req, "corr-4").await.unwrap_err();
    assert!(matches!(err, OrchestratorError::Validation(_)));
}

#[tokio::test]
async fn list_rejects_dates_that_are_not_day_month_year() {
    let (orchestrator, _) = setup(Arc::new(StubStripe));

    let err = orchestrator.list_transactions("2026-08-28").await.unwrap_err();
    assert!(matches!(err, OrchestratorError::Validation(_)));
}
