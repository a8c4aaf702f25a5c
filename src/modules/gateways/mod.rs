pub mod services;

pub use services::{sign_payload, verify_signature, CachedToken, GatewayAuthClient, TokenCache};
