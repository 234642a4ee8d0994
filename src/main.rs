use axum::routing::{get, post};
use axum::Router;
use payment_orchestrator::cache::store_redis::RedisCacheStore;
use payment_orchestrator::cache::CacheStore;
use payment_orchestrator::config::AppConfig;
use payment_orchestrator::gateways::paypal::PayPalProvider;
use payment_orchestrator::gateways::stripe::StripeProvider;
use payment_orchestrator::gateways::{ProviderKind, ProviderRegistry};
use payment_orchestrator::ledger::TransactionLedger;
use payment_orchestrator::service::orchestrator::PaymentOrchestrator;
use payment_orchestrator::webhook::Reconciler;
use payment_orchestrator::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let cache: Arc<dyn CacheStore> = Arc::new(RedisCacheStore::new(&cfg.redis_url)?);
    let ledger = TransactionLedger::new(cache.clone(), cfg.cache_namespace.clone());

    let mut registry = ProviderRegistry::new();
    registry.register(
        ProviderKind::Stripe,
        Arc::new(StripeProvider {
            base_url: cfg.stripe_base_url.clone(),
            secret_key: cfg.stripe_secret_key.clone(),
            timeout_ms: cfg.provider_timeout_ms,
            client: reqwest::Client::new(),
        }),
    );
    registry.register(ProviderKind::PayPal, Arc::new(PayPalProvider));

    let state = AppState {
        orchestrator: PaymentOrchestrator {
            registry,
            ledger: ledger.clone(),
        },
        reconciler: Reconciler::new(ledger),
        cache,
    };

    let app = Router::new()
        .route("/health", get(payment_orchestrator::http::handlers::payments::health))
        .route(
            "/api/v1/payments",
            post(payment_orchestrator::http::handlers::payments::submit_payment),
        )
        .route(
            "/api/v1/transactions",
            get(payment_orchestrator::http::handlers::transactions::list_transactions),
        )
        .route(
            "/api/v1/gateways",
            get(payment_orchestrator::http::handlers::gateways::list_gateways),
        )
        .route(
            "/api/v1/webhooks/stripe",
            post(payment_orchestrator::http::handlers::webhooks::stripe_webhook),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
