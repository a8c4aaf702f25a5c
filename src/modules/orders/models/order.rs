use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Checkout created, payment not confirmed
    Pending,

    /// Payment confirmed and seller credited
    Completed,

    /// Payment failed or was cancelled
    Failed,

    /// Payment refunded after completion
    Refunded,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Failed => write!(f, "failed"),
            OrderStatus::Refunded => write!(f, "refunded"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "failed" => Ok(OrderStatus::Failed),
            "refunded" => Ok(OrderStatus::Refunded),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

/// A digital-product order as the data layer stores it.
///
/// Amounts are kept as the decimal strings the checkout recorded. Some
/// providers settle in a different currency than the one displayed at
/// checkout; when that happens `original_amount`/`original_currency` hold
/// the settlement values and take precedence over `amount`/`currency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID (UUID)
    #[serde(skip_deserializing)]
    pub id: Option<String>,

    /// Product the buyer purchased
    pub product_id: String,

    /// Seller who owns the product
    pub seller_id: String,

    /// Gross amount as recorded at checkout (decimal string)
    pub amount: String,

    /// Currency tag recorded at checkout
    pub currency: String,

    /// Settlement amount when the provider settled in another currency
    pub original_amount: Option<String>,

    /// Settlement currency when the provider settled in another currency
    pub original_currency: Option<String>,

    /// Payment method identifier (drives the commission tier)
    pub payment_method: String,

    /// Current status
    #[serde(default)]
    pub status: OrderStatus,

    /// Gateway reference recorded at settlement (idempotency key)
    #[serde(skip_deserializing)]
    pub gateway_reference: Option<String>,

    /// When the order was created
    #[serde(skip_deserializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the order was last updated
    #[serde(skip_deserializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Create a new pending order
    pub fn new(
        product_id: String,
        seller_id: String,
        amount: String,
        currency: String,
        payment_method: String,
    ) -> Result<Self> {
        if product_id.trim().is_empty() {
            return Err(AppError::validation("Product ID cannot be empty"));
        }

        if seller_id.trim().is_empty() {
            return Err(AppError::validation("Seller ID cannot be empty"));
        }

        if amount.trim().is_empty() {
            return Err(AppError::validation("Order amount cannot be empty"));
        }

        Ok(Self {
            id: Some(uuid::Uuid::new_v4().to_string()),
            product_id,
            seller_id,
            amount,
            currency,
            original_amount: None,
            original_currency: None,
            payment_method,
            status: OrderStatus::Pending,
            gateway_reference: None,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        })
    }

    /// Get order ID
    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Currency the order actually settled in.
    ///
    /// `original_currency` wins when present and non-empty; otherwise the
    /// checkout currency stands.
    pub fn actual_currency(&self) -> &str {
        match &self.original_currency {
            Some(original) if !original.trim().is_empty() => original,
            _ => &self.currency,
        }
    }

    /// Raw settled amount string, preferring `original_amount`
    pub fn actual_amount_raw(&self) -> &str {
        match &self.original_amount {
            Some(original) if !original.trim().is_empty() => original,
            _ => &self.amount,
        }
    }

    /// Settled amount as a decimal.
    ///
    /// Malformed strings are rejected here rather than propagated as NaN
    /// into the aggregation; callers decide whether to skip or fail.
    pub fn actual_amount(&self) -> Result<Decimal> {
        let raw = self.actual_amount_raw();
        raw.trim()
            .parse::<Decimal>()
            .map_err(|_| AppError::validation(format!("Malformed order amount: {:?}", raw)))
    }

    /// Record provider settlement values that override the checkout ones
    pub fn set_settlement_values(&mut self, original_amount: String, original_currency: String) {
        self.original_amount = Some(original_amount);
        self.original_currency = Some(original_currency);
        self.updated_at = Some(Utc::now());
    }

    /// Mark the order completed, recording the gateway reference
    pub fn mark_completed(&mut self, gateway_reference: String) {
        self.status = OrderStatus::Completed;
        self.gateway_reference = Some(gateway_reference);
        self.updated_at = Some(Utc::now());
    }

    /// Check if the order has settled
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}
