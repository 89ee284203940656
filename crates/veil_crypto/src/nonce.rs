//! Nonce generation
//!
//! 24-byte random nonces from the OS CSPRNG. `OsRng` panics rather than
//! degrade if the entropy source is unavailable, so there is no error path.

use rand::RngCore;

use crate::params::NONCE_LENGTH;

/// Generate a fresh 24-byte nonce. Never reuse one under the same key.
pub fn make_nonce() -> [u8; NONCE_LENGTH] {
    let mut nonce = [0u8; NONCE_LENGTH];
    rand::rngs::OsRng.fill_bytes(&mut nonce);
    nonce
}
