use crate::cache::CacheError;

/// Failure taxonomy for the orchestration core. Every variant surfaces to
/// the HTTP layer as a response; none of them is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("unsupported payment gateway: {0}")]
    UnsupportedProvider(String),

    #[error("unsupported webhook event: {0}")]
    UnsupportedEvent(String),

    #[error("malformed webhook payload: {0}")]
    MalformedEvent(String),

    /// The provider rejected or failed the charge. Never retried by the
    /// caller: a submitted charge is not idempotent.
    #[error("gateway error: {0}")]
    Provider(String),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("bucket serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
