use chrono::{DateTime, Duration, Utc};
use std::future::Future;
use tokio::sync::Mutex;

use crate::core::Result;

/// A bearer token together with the moment it stops being usable
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    pub fn new(value: String, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    fn is_valid_at(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        self.expires_at - margin > now
    }
}

/// Gateway auth-token cache.
///
/// Holds the token in an explicit slot behind a mutex instead of a
/// module-level mutable, so concurrent callers in one process share a
/// single refresh. The expiry check is repeated under the lock: whichever
/// caller wins the lock refreshes, the rest reuse the stored token.
pub struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
    safety_margin: Duration,
}

impl TokenCache {
    pub fn new() -> Self {
        // refuse tokens within 30s of expiry; in-flight requests must not
        // outlive the credential they carry
        Self::with_safety_margin(Duration::seconds(30))
    }

    pub fn with_safety_margin(safety_margin: Duration) -> Self {
        Self {
            slot: Mutex::new(None),
            safety_margin,
        }
    }

    /// Return the cached token, refreshing through `fetch` when the slot
    /// is empty or inside the safety margin.
    pub async fn get_or_refresh<F, Fut>(&self, fetch: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<CachedToken>>,
    {
        let mut slot = self.slot.lock().await;

        let now = Utc::now();
        if let Some(token) = slot.as_ref() {
            if token.is_valid_at(now, self.safety_margin) {
                return Ok(token.value.clone());
            }
        }

        let token = fetch().await?;
        let value = token.value.clone();
        *slot = Some(token);

        Ok(value)
    }

    /// Drop the cached token (e.g. after the gateway rejected it)
    pub async fn invalidate(&self) {
        let mut slot = self.slot.lock().await;
        *slot = None;
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}
