use crate::core::{AppError, Result};
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Credentials for the payment gateway the settlement webhook originates
/// from. The token endpoint is the client-credentials exchange used by
/// outbound acknowledgement calls.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
    pub webhook_secret: String,
    pub token_ttl_seconds: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            gateway: GatewayConfig {
                client_id: env::var("GATEWAY_CLIENT_ID")
                    .map_err(|_| AppError::Configuration("GATEWAY_CLIENT_ID not set".to_string()))?,
                client_secret: env::var("GATEWAY_CLIENT_SECRET").map_err(|_| {
                    AppError::Configuration("GATEWAY_CLIENT_SECRET not set".to_string())
                })?,
                base_url: env::var("GATEWAY_BASE_URL")
                    .unwrap_or_else(|_| "https://api.pagamentos.example".to_string()),
                webhook_secret: env::var("GATEWAY_WEBHOOK_SECRET").map_err(|_| {
                    AppError::Configuration("GATEWAY_WEBHOOK_SECRET not set".to_string())
                })?,
                token_ttl_seconds: env::var("GATEWAY_TOKEN_TTL_SECONDS")
                    .unwrap_or_else(|_| "1800".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid GATEWAY_TOKEN_TTL_SECONDS".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.gateway.webhook_secret.trim().is_empty() {
            return Err(AppError::Configuration(
                "Gateway webhook secret cannot be empty".to_string(),
            ));
        }

        if self.gateway.token_ttl_seconds <= 0 {
            return Err(AppError::Configuration(
                "Gateway token TTL must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
