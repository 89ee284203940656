//! Session key derivation
//!
//! HKDF-SHA512 over the raw DH output, with the protocol's fixed salt and
//! info string. Deterministic: identical key material and parameters always
//! yield the identical session key, which is what lets both peers arrive at
//! the same key independently.

use hkdf::Hkdf;
use sha2::Sha512;

use crate::error::CryptoError;
use crate::params::{ProtocolParams, KEY_LENGTH};

/// Derive a 32-byte session key from initial key material.
///
/// The salt layout is governed by `params.salt_fill`; see
/// [`crate::params::SaltFill`] for the compatibility implications.
pub fn derive_key(
    ikm: &[u8],
    params: &ProtocolParams,
) -> Result<[u8; KEY_LENGTH], CryptoError> {
    let salt = params.salt();
    let hk = Hkdf::<Sha512>::new(Some(&salt), ikm);
    let mut key = [0u8; KEY_LENGTH];
    hk.expand(params.info, &mut key)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;
    Ok(key)
}
