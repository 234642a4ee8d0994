use crate::domain::payment::PaymentRequest;
use crate::domain::transaction::TransactionRecord;
use crate::error::OrchestratorError;
use crate::gateways::ProviderRegistry;
use crate::ledger::TransactionLedger;

/// Composes gateway dispatch with the ledger: a successful charge is
/// immediately recorded as a pending transaction, later reconciled by
/// webhook deliveries.
#[derive(Clone)]
pub struct PaymentOrchestrator {
    pub registry: ProviderRegistry,
    pub ledger: TransactionLedger,
}

impl PaymentOrchestrator {
    pub async fn submit_payment(
        &self,
        req: PaymentRequest,
        correlation_id: &str,
    ) -> Result<String, OrchestratorError> {
        validate_request(&req)?;

        let provider = self.registry.resolve(&req.gateway)?;
        let transaction_id = provider.charge(&req, correlation_id).await?;

        self.ledger
            .create_transaction(&transaction_id, req.amount, &req.currency)
            .await?;
        Ok(transaction_id)
    }

    pub async fn list_transactions(
        &self,
        date: &str,
    ) -> Result<Vec<TransactionRecord>, OrchestratorError> {
        if chrono::NaiveDate::parse_from_str(date, "%d_%m_%Y").is_err() {
            return Err(OrchestratorError::Validation(format!(
                "invalid date: {date}, expected DD_MM_YYYY"
            )));
        }
        self.ledger.list_by_date(date).await
    }

    pub fn available_gateways(&self) -> Vec<String> {
        self.registry.available()
    }
}

fn validate_request(req: &PaymentRequest) -> Result<(), OrchestratorError> {
    if req.gateway.trim().is_empty() {
        return Err(OrchestratorError::Validation("gateway is required".to_string()));
    }
    if !(req.amount > 0.0) {
        return Err(OrchestratorError::Validation("amount must be positive".to_string()));
    }
    if req.currency.len() != 3 || !req.currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(OrchestratorError::Validation(format!(
            "invalid currency: {}",
            req.currency
        )));
    }
    if req.payment_method.trim().is_empty() {
        return Err(OrchestratorError::Validation(
            "payment_method is required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::CardDetails;

    fn request() -> PaymentRequest {
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

    #[test]
    fn accepts_well_formed_request() {
        assert!(validate_request(&request()).is_ok());
    }

    #[test]
    fn rejects_non_positive_amount() {
        let mut req = request();
        req.amount = 0.0;
        assert!(matches!(
            validate_request(&req),
            Err(OrchestratorError::Validation(_))
        ));
    }

    #[test]
    fn rejects_bad_currency_code() {
        let mut req = request();
        req.currency = "US".to_string();
        assert!(validate_request(&req).is_err());
        req.currency = "U5D".to_string();
        assert!(validate_request(&req).is_err());
    }
}
