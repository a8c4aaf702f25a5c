use chrono::{Duration, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GatewayConfig;
use crate::core::{AppError, Result};

use super::token_cache::{CachedToken, TokenCache};

/// Client-credentials auth against the payment gateway.
///
/// The gateway invalidates tokens after a validity window; the cache keeps
/// one live token per process so acknowledgement calls don't re-authenticate
/// on every invocation.
pub struct GatewayAuthClient {
    client: Client,
    client_id: String,
    client_secret: String,
    base_url: String,
    token_ttl: Duration,
    cache: TokenCache,
}

impl GatewayAuthClient {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            base_url: config.base_url.clone(),
            token_ttl: Duration::seconds(config.token_ttl_seconds),
            cache: TokenCache::new(),
        }
    }

    /// Bearer token for gateway calls, reusing the cached one while valid
    pub async fn bearer_token(&self) -> Result<String> {
        self.cache.get_or_refresh(|| self.fetch_token()).await
    }

    /// Drop the cached token after the gateway rejected it
    pub async fn invalidate_token(&self) {
        self.cache.invalidate().await;
    }

    /// Confirm receipt of a payment notification with the gateway.
    ///
    /// A 401 means the cached token died early; it is dropped and the
    /// call retried once with a fresh one.
    pub async fn acknowledge_payment(&self, reference: &str) -> Result<()> {
        match self.send_acknowledgement(reference).await {
            Err(AppError::Unauthorized(_)) => {
                self.invalidate_token().await;
                self.send_acknowledgement(reference).await
            }
            result => result,
        }
    }

    async fn send_acknowledgement(&self, reference: &str) -> Result<()> {
        let token = self.bearer_token().await?;
        let url = format!("{}/v1/payments/{}/acknowledge", self.base_url, reference);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Acknowledgement error: {}", e)))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AppError::unauthorized("Gateway rejected the access token"));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::Gateway(format!(
                "Acknowledgement error {}: {}",
                status, error_body
            )));
        }

        Ok(())
    }

    async fn fetch_token(&self) -> Result<CachedToken> {
        #[derive(Serialize)]
        struct TokenRequest<'a> {
            client_id: &'a str,
            client_secret: &'a str,
            grant_type: &'static str,
        }

        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
            #[serde(default)]
            expires_in: Option<i64>,
        }

        let url = format!("{}/oauth/token", self.base_url);

        debug!(url = url.as_str(), "Requesting gateway access token");

        let response = self
            .client
            .post(&url)
            .json(&TokenRequest {
                client_id: &self.client_id,
                client_secret: &self.client_secret,
                grant_type: "client_credentials",
            })
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Token endpoint error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::Gateway(format!(
                "Token endpoint error {}: {}",
                status, error_body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::Gateway(format!("Failed to parse token response: {}", e)))?;

        let ttl = token
            .expires_in
            .map(Duration::seconds)
            .unwrap_or(self.token_ttl);

        Ok(CachedToken::new(token.access_token, Utc::now() + ttl))
    }
}
