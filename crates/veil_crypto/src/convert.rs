//! Ed25519 → X25519 key conversion
//!
//! The identity key signs; its birational X25519 counterpart exchanges.
//! Secret side: clamped SHA-512 expansion of the Ed25519 seed, mirroring
//! what ed25519-dalek does internally (and libsignal's IK conversion).
//! Public side: Edwards decompression followed by the map to Montgomery u.

use curve25519_dalek::edwards::CompressedEdwardsY;
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::identity::IdentityKeyPair;

/// X25519 keypair derived from a signing identity. Never mutated; the
/// secret half is zeroized on drop by x25519-dalek.
pub struct ExchangeKeypair {
    pub secret: StaticSecret,
    pub public: PublicKey,
}

/// Convert an Ed25519 signing key (32-byte seed) to an X25519 static secret.
pub fn ed25519_secret_to_x25519(ed_secret: &[u8; 32]) -> StaticSecret {
    use sha2::{Digest, Sha512};
    let mut h = Sha512::digest(ed_secret);
    // Clamp as per RFC 7748 §5
    h[0] &= 248;
    h[31] &= 127;
    h[31] |= 64;
    let mut key = [0u8; 32];
    key.copy_from_slice(&h[..32]);
    h.as_mut_slice().zeroize();
    StaticSecret::from(key)
}

/// Convert an Ed25519 verifying key (public, 32 bytes) to an X25519 public
/// key via the birational Edwards → Montgomery map.
pub fn ed25519_public_to_x25519(ed_public: &[u8; 32]) -> Result<PublicKey, CryptoError> {
    let compressed = CompressedEdwardsY::from_slice(ed_public)
        .map_err(|_| CryptoError::InvalidKey("invalid Ed25519 public key".into()))?;
    let point = compressed.decompress().ok_or_else(|| {
        CryptoError::InvalidKey("Ed25519 public key decompression failed".into())
    })?;
    Ok(PublicKey::from(point.to_montgomery().to_bytes()))
}

/// Map a signing keypair to its key-exchange counterpart.
pub fn signing_to_exchange(identity: &IdentityKeyPair) -> Result<ExchangeKeypair, CryptoError> {
    let secret = ed25519_secret_to_x25519(identity.secret_bytes());
    let ed_public: [u8; 32] = identity
        .public
        .0
        .as_slice()
        .try_into()
        .map_err(|_| CryptoError::InvalidKey("public key not 32 bytes".into()))?;
    let public = ed25519_public_to_x25519(&ed_public)?;
    Ok(ExchangeKeypair { secret, public })
}
