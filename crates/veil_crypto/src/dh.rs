//! Shared-secret computation
//!
//! NaCl `box.before` semantics: X25519 scalar multiplication (with the
//! standard RFC 7748 clamping) followed by HSalsa20 over the raw curve
//! output with a zero block. Peers on the deployed protocol expect the
//! mixed output, not raw X25519, so the HSalsa20 step is load-bearing for
//! interoperability.

use salsa20::cipher::consts::{U10, U16};
use salsa20::cipher::generic_array::GenericArray;
use salsa20::hsalsa;
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::params::KEY_LENGTH;

fn to_32(bytes: &[u8]) -> Result<[u8; 32], CryptoError> {
    bytes.try_into().map_err(|_| CryptoError::InvalidKeyLength {
        expected: KEY_LENGTH,
        got: bytes.len(),
    })
}

/// Compute the 32-byte shared secret between a local private key and a peer
/// public key. Symmetric: `shared_secret(a_priv, b_pub)` equals
/// `shared_secret(b_priv, a_pub)`.
pub fn shared_secret(
    my_private: &[u8],
    their_public: &[u8],
) -> Result<[u8; KEY_LENGTH], CryptoError> {
    let private = to_32(my_private)?;
    let public = to_32(their_public)?;

    let mut raw = x25519_dalek::x25519(private, public);
    let mixed = hsalsa::<U10>(
        GenericArray::from_slice(&raw),
        &GenericArray::<u8, U16>::default(),
    );
    raw.zeroize();

    Ok(mixed.into())
}
