//! Payload authentication
//!
//! HMAC-SHA256 over the serialized payload. The MAC is deterministic only
//! as far as the serialization is: callers comparing MACs across
//! implementations must use canonical (stably ordered) serialization.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::error::CryptoError;

type HmacSha256 = Hmac<Sha256>;

/// Compute a 32-byte MAC over the serialized form of `body`.
pub fn compute<T: Serialize>(body: &T, key: &[u8]) -> Result<[u8; 32], CryptoError> {
    let serialized = serde_json::to_vec(body)?;
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    mac.update(&serialized);
    Ok(mac.finalize().into_bytes().into())
}

/// Verify a MAC over `body` in constant time.
///
/// Unlike `bytes::bytes_equal`, this does not leak where the tags diverge.
pub fn verify<T: Serialize>(body: &T, key: &[u8], tag: &[u8]) -> Result<bool, CryptoError> {
    let serialized = serde_json::to_vec(body)?;
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    mac.update(&serialized);
    Ok(mac.verify_slice(tag).is_ok())
}
