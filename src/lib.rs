use std::sync::Arc;

pub mod cache;
pub mod config;
pub mod domain {
    pub mod payment;
    pub mod transaction;
}
pub mod error;
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod gateways;
        pub mod payments;
        pub mod transactions;
        pub mod webhooks;
    }
    pub mod responses;
}
pub mod ledger;
pub mod service {
    pub mod orchestrator;
}
pub mod webhook;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: service::orchestrator::PaymentOrchestrator,
    pub reconciler: webhook::Reconciler,
    pub cache: Arc<dyn cache::CacheStore>,
}
