use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;

/// A seller's balance in one currency.
///
/// Derived from the order history on demand; never persisted on its own.
/// `retained_balance` holds earnings under the payout retention window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyBalance {
    /// Stored currency tag (e.g. "KZ", "EUR")
    pub currency: String,
    /// Earnings available to the seller
    pub balance: Decimal,
    /// Earnings still retained before payout
    pub retained_balance: Decimal,
}

impl CurrencyBalance {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            balance: Decimal::ZERO,
            retained_balance: Decimal::ZERO,
        }
    }

    /// Credit an earning to the available balance
    pub fn credit(&mut self, earning: Decimal) {
        self.balance += earning;
    }

    /// Move part of the available balance into retention
    pub fn retain(&mut self, amount: Decimal) {
        let moved = amount.min(self.balance);
        self.balance -= moved;
        self.retained_balance += moved;
    }

    /// Total across available and retained funds
    pub fn total(&self) -> Decimal {
        self.balance + self.retained_balance
    }
}

/// Per-currency revenue totals for one seller.
///
/// Keyed by the normalized stored tag; iteration order is the tag order,
/// which keeps API responses stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevenueSummary {
    totals: BTreeMap<String, Decimal>,
}

impl RevenueSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized bucket key for a stored currency tag
    fn bucket_key(currency: &str) -> String {
        currency.trim().to_uppercase()
    }

    /// Add an earning to the bucket for its currency
    pub fn add(&mut self, currency: &str, earning: Decimal) {
        let key = Self::bucket_key(currency);
        *self.totals.entry(key).or_insert(Decimal::ZERO) += earning;
    }

    /// Total for one currency tag (zero when the bucket is absent)
    pub fn total_for(&self, currency: &str) -> Decimal {
        self.totals
            .get(&Self::bucket_key(currency))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Decimal)> {
        self.totals.iter()
    }

    /// Everything converted into Kwanza at the fixed reference rates.
    /// Unknown tags convert at identity, so no bucket is ever dropped.
    pub fn total_in_kwanza(&self) -> Decimal {
        self.totals
            .iter()
            .map(|(currency, total)| *total * Currency::kz_rate_for(currency))
            .sum()
    }
}
