use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::core::{AppError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Hex-encoded HMAC-SHA256 of a webhook payload
pub fn sign_payload(secret: &str, payload: &[u8]) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| AppError::internal("Invalid webhook secret"))?;
    mac.update(payload);

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Verify a gateway webhook signature.
///
/// Comparison happens inside the MAC verification, which is
/// constant-time; a malformed hex signature simply fails.
pub fn verify_signature(secret: &str, payload: &[u8], signature: &str) -> Result<bool> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| AppError::internal("Invalid webhook secret"))?;
    mac.update(payload);

    let expected = match hex::decode(signature.trim()) {
        Ok(bytes) => bytes,
        Err(_) => return Ok(false),
    };

    Ok(mac.verify_slice(&expected).is_ok())
}
