use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::super::models::AccessGrant;
use crate::core::Result;

/// Persistence seam for product access grants
#[async_trait]
pub trait AccessGrantRepository: Send + Sync {
    /// Record access for a settled order; granting twice for the same
    /// order returns the existing grant.
    async fn grant(&self, grant: AccessGrant) -> Result<AccessGrant>;

    /// Find the grant created for an order, if any
    async fn find_by_order(&self, order_id: &str) -> Result<Option<AccessGrant>>;
}

/// In-memory access-grant store keyed by order
#[derive(Default)]
pub struct InMemoryAccessGrantRepository {
    grants: RwLock<HashMap<String, AccessGrant>>,
}

impl InMemoryAccessGrantRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl AccessGrantRepository for InMemoryAccessGrantRepository {
    async fn grant(&self, grant: AccessGrant) -> Result<AccessGrant> {
        let mut grants = self.grants.write().await;

        if let Some(existing) = grants.get(&grant.order_id) {
            return Ok(existing.clone());
        }

        grants.insert(grant.order_id.clone(), grant.clone());
        Ok(grant)
    }

    async fn find_by_order(&self, order_id: &str) -> Result<Option<AccessGrant>> {
        let grants = self.grants.read().await;
        Ok(grants.get(order_id).cloned())
    }
}
