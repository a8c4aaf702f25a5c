pub mod auth_client;
pub mod signature;
pub mod token_cache;

pub use auth_client::GatewayAuthClient;
pub use signature::{sign_payload, verify_signature};
pub use token_cache::{CachedToken, TokenCache};
