use serde::{Deserialize, Serialize};

pub const STATUS_PENDING: &str = "pending";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub status: String,
    /// RFC3339 stamp taken when the entry was appended.
    pub timestamp: String,
}

/// One ledger entry. `id` is the provider-assigned transaction id; `amount`
/// and `currency` never change after creation, and `status_history` is
/// append-only with entries in arrival order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub amount: f64,
    pub currency: String,
    pub status_history: Vec<StatusEntry>,
}

impl TransactionRecord {
    pub fn pending(id: &str, amount: f64, currency: &str, now: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            id: id.to_string(),
            amount,
            currency: currency.to_string(),
            status_history: vec![StatusEntry {
                status: STATUS_PENDING.to_string(),
                timestamp: now.to_rfc3339(),
            }],
        }
    }
}
