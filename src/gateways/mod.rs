use crate::domain::payment::PaymentRequest;
use crate::error::OrchestratorError;
use std::collections::HashMap;
use std::sync::Arc;

pub mod paypal;
pub mod stripe;

/// Closed set of payment providers the orchestrator can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Stripe,
    PayPal,
}

impl ProviderKind {
    pub fn parse(name: &str) -> Result<Self, OrchestratorError> {
        match name {
            "Stripe" => Ok(Self::Stripe),
            "PayPal" => Ok(Self::PayPal),
            other => Err(OrchestratorError::UnsupportedProvider(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stripe => "Stripe",
            Self::PayPal => "PayPal",
        }
    }
}

#[async_trait::async_trait]
pub trait PaymentProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Executes the charge and returns the provider-assigned transaction
    /// id. Any downstream failure surfaces as `Provider`; callers must not
    /// retry a submitted charge.
    async fn charge(
        &self,
        request: &PaymentRequest,
        correlation_id: &str,
    ) -> Result<String, OrchestratorError>;
}

/// Provider lookup table, built once at startup and injected where needed.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn PaymentProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: ProviderKind, provider: Arc<dyn PaymentProvider>) {
        self.providers.insert(kind, provider);
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn PaymentProvider>, OrchestratorError> {
        let kind = ProviderKind::parse(name)?;
        self.providers
            .get(&kind)
            .cloned()
            .ok_or_else(|| OrchestratorError::UnsupportedProvider(name.to_string()))
    }

    /// Names of every registered provider, order unspecified.
    pub fn available(&self) -> Vec<String> {
        self.providers.keys().map(|k| k.as_str().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_provider_names() {
        assert_eq!(ProviderKind::parse("Stripe").unwrap(), ProviderKind::Stripe);
        assert_eq!(ProviderKind::parse("PayPal").unwrap(), ProviderKind::PayPal);
    }

    #[test]
    fn rejects_unknown_provider_name() {
        let err = ProviderKind::parse("Adyen").unwrap_err();
        assert!(matches!(err, OrchestratorError::UnsupportedProvider(name) if name == "Adyen"));
    }
}
