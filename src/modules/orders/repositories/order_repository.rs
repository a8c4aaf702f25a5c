use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::super::models::Order;
use crate::core::{AppError, Result};

/// Persistence seam for orders.
///
/// The managed data platform owns the actual storage; this trait is the
/// boundary the services talk to. The in-memory implementation backs the
/// binary and the test suites.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Store a new order
    async fn insert(&self, order: Order) -> Result<Order>;

    /// Find an order by its ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>>;

    /// Find an order by the gateway reference recorded at settlement
    async fn find_by_reference(&self, reference: &str) -> Result<Option<Order>>;

    /// All orders belonging to a seller's products
    async fn orders_for_seller(&self, seller_id: &str) -> Result<Vec<Order>>;

    /// Replace a stored order with an updated copy
    async fn update(&self, order: Order) -> Result<Order>;
}

/// In-memory order store
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(&self, order: Order) -> Result<Order> {
        let id = order
            .get_id()
            .ok_or_else(|| AppError::internal("Order ID is required for insertion"))?
            .to_string();

        let mut orders = self.orders.write().await;
        if orders.contains_key(&id) {
            return Err(AppError::validation(format!("Order {} already exists", id)));
        }

        orders.insert(id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(id).cloned())
    }

    async fn find_by_reference(&self, reference: &str) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .values()
            .find(|o| o.gateway_reference.as_deref() == Some(reference))
            .cloned())
    }

    async fn orders_for_seller(&self, seller_id: &str) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .values()
            .filter(|o| o.seller_id == seller_id)
            .cloned()
            .collect())
    }

    async fn update(&self, order: Order) -> Result<Order> {
        let id = order
            .get_id()
            .ok_or_else(|| AppError::internal("Order ID is required for update"))?
            .to_string();

        let mut orders = self.orders.write().await;
        if !orders.contains_key(&id) {
            return Err(AppError::not_found(format!("Order {}", id)));
        }

        orders.insert(id, order.clone());
        Ok(order)
    }
}
