use crate::domain::payment::PaymentRequest;
use crate::error::OrchestratorError;
use crate::gateways::PaymentProvider;

/// PayPal integration is not wired up yet; every charge is declined.
pub struct PayPalProvider;

#[async_trait::async_trait]
impl PaymentProvider for PayPalProvider {
    fn name(&self) -> &'static str {
        "PayPal"
    }

    async fn charge(
        &self,
        request: &PaymentRequest,
        correlation_id: &str,
    ) -> Result<String, OrchestratorError> {
        tracing::info!(
            correlation_id,
            amount = request.amount,
            currency = %request.currency,
            "processing PayPal payment"
        );

        Err(OrchestratorError::Provider(format!(
            "unable to process payment using gateway: {}",
            request.gateway
        )))
    }
}
