use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment confirmation pushed by the gateway webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentNotification {
    /// Gateway's unique reference for this payment (idempotency key)
    pub reference: String,

    /// Order the payment settles
    pub order_id: String,

    /// Settled amount (decimal string, as the gateway sends it)
    pub amount: String,

    /// Currency the gateway settled in
    pub currency: String,

    /// Payment method the buyer used
    pub payment_method: String,

    /// Gateway-reported status ("paid", "failed", ...)
    pub status: String,
}

impl PaymentNotification {
    /// True when the gateway reports a successful payment
    pub fn is_paid(&self) -> bool {
        matches!(self.status.trim().to_lowercase().as_str(), "paid" | "completed")
    }
}

/// Buyer access to a product, created when its order settles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessGrant {
    /// Unique grant ID (UUID)
    pub id: String,

    /// Order that paid for the access
    pub order_id: String,

    /// Product being unlocked
    pub product_id: String,

    /// When access was granted
    pub granted_at: DateTime<Utc>,
}

impl AccessGrant {
    pub fn new(order_id: String, product_id: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            order_id,
            product_id,
            granted_at: Utc::now(),
        }
    }
}
