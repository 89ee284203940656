//! Prekey generation
//!
//! Signed prekeys are X25519 keypairs whose public half is signed by the
//! identity key so peers can authenticate them. One-time prekeys are
//! batch-generated and consumed once each; callers should replenish their
//! published supply when it drops below `params::MIN_OTK_SUPPLY`.

use rand::rngs::OsRng;
use x25519_dalek::{PublicKey, StaticSecret};

use crate::error::CryptoError;
use crate::identity::IdentityKeyPair;

/// Generate a signed prekey: an X25519 keypair plus an Ed25519 signature by
/// the identity key over the raw public bytes.
pub fn generate_signed_prekey(
    identity: &IdentityKeyPair,
) -> (StaticSecret, PublicKey, Vec<u8>) {
    let secret = StaticSecret::random_from_rng(OsRng);
    let public = PublicKey::from(&secret);
    let sig = identity.sign(public.as_bytes());
    (secret, public, sig)
}

/// Verify a peer's signed prekey before using it for key agreement.
pub fn verify_signed_prekey(
    identity_public: &[u8],
    prekey_public: &[u8],
    signature: &[u8],
) -> Result<(), CryptoError> {
    IdentityKeyPair::verify(identity_public, prekey_public, signature)
}

/// Generate a batch of one-time prekeys.
pub fn generate_one_time_prekeys(count: usize) -> Vec<(StaticSecret, PublicKey)> {
    (0..count)
        .map(|_| {
            let s = StaticSecret::random_from_rng(OsRng);
            let p = PublicKey::from(&s);
            (s, p)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_prekey_verifies_against_issuer() {
        let identity = IdentityKeyPair::generate();
        let (_secret, public, sig) = generate_signed_prekey(&identity);
        assert!(verify_signed_prekey(&identity.public.0, public.as_bytes(), &sig).is_ok());
    }

    #[test]
    fn rejects_prekey_signed_by_wrong_identity() {
        let identity = IdentityKeyPair::generate();
        let evil = IdentityKeyPair::generate();
        let (_secret, public, _sig) = generate_signed_prekey(&identity);
        let evil_sig = evil.sign(public.as_bytes());
        assert!(verify_signed_prekey(&identity.public.0, public.as_bytes(), &evil_sig).is_err());
    }

    #[test]
    fn one_time_prekeys_are_distinct() {
        let batch = generate_one_time_prekeys(4);
        assert_eq!(batch.len(), 4);
        assert_ne!(batch[0].1.as_bytes(), batch[1].1.as_bytes());
    }
}
