use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::core::Result;
use crate::modules::revenue::models::CurrencyBalance;

/// Persistence seam for seller balances, mutated only by settlements
#[async_trait]
pub trait BalanceRepository: Send + Sync {
    /// Credit an earning to the seller's balance in one currency
    async fn credit(&self, seller_id: &str, currency: &str, earning: Decimal) -> Result<CurrencyBalance>;

    /// All per-currency balances for a seller
    async fn balances_for_seller(&self, seller_id: &str) -> Result<Vec<CurrencyBalance>>;
}

/// In-memory balance store keyed by (seller, currency)
#[derive(Default)]
pub struct InMemoryBalanceRepository {
    balances: RwLock<HashMap<(String, String), CurrencyBalance>>,
}

impl InMemoryBalanceRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn key(seller_id: &str, currency: &str) -> (String, String) {
        (seller_id.to_string(), currency.trim().to_uppercase())
    }
}

#[async_trait]
impl BalanceRepository for InMemoryBalanceRepository {
    async fn credit(&self, seller_id: &str, currency: &str, earning: Decimal) -> Result<CurrencyBalance> {
        let key = Self::key(seller_id, currency);

        let mut balances = self.balances.write().await;
        let balance = balances
            .entry(key)
            .or_insert_with(|| CurrencyBalance::new(currency.trim().to_uppercase()));
        balance.credit(earning);

        Ok(balance.clone())
    }

    async fn balances_for_seller(&self, seller_id: &str) -> Result<Vec<CurrencyBalance>> {
        let balances = self.balances.read().await;
        let mut result: Vec<CurrencyBalance> = balances
            .iter()
            .filter(|((seller, _), _)| seller == seller_id)
            .map(|(_, balance)| balance.clone())
            .collect();
        result.sort_by(|a, b| a.currency.cmp(&b.currency));

        Ok(result)
    }
}
