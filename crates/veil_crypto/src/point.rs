//! Public-key wire encoding
//!
//! An exchange public key crosses the wire as
//!
//!   [ curve tag (1 byte) | parity bit (1 byte) | raw key bytes ]
//!
//! The parity byte is the least-significant bit of the key interpreted as a
//! big-endian unsigned integer. The raw bytes are appended unmodified —
//! this is NOT little-endian RFC 7748 output; the parity flag is layered on
//! top of the raw bytes as-is.

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;
use crate::params::KEY_LENGTH;

/// Curve identifier carried in the encoding's tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    X25519,
    X448,
}

impl Curve {
    pub fn tag(self) -> u8 {
        match self {
            Curve::X25519 => 0,
            Curve::X448 => 1,
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self, CryptoError> {
        match tag {
            0 => Ok(Curve::X25519),
            1 => Ok(Curve::X448),
            other => Err(CryptoError::InvalidKey(format!(
                "unknown curve tag {other}"
            ))),
        }
    }

    /// Raw key length in bytes for this curve.
    pub fn key_length(self) -> usize {
        match self {
            Curve::X25519 => 32,
            Curve::X448 => 57,
        }
    }
}

/// Parity of a byte sequence read as a big-endian unsigned integer:
/// the least-significant bit of the final byte.
fn parity(bytes: &[u8]) -> u8 {
    bytes.last().map_or(0, |b| b & 1)
}

/// Encode a public key for the wire.
///
/// Validation is fixed at 32 bytes regardless of the tag, so an X448-tagged
/// key still encodes to 34 bytes. Deployed peers expect exactly this; treat
/// the X448 tag as advisory metadata until a real variable-length path
/// ships.
pub fn encode(curve: Curve, public_key: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if public_key.len() != KEY_LENGTH {
        return Err(CryptoError::InvalidKeyLength {
            expected: KEY_LENGTH,
            got: public_key.len(),
        });
    }
    let mut out = Vec::with_capacity(2 + public_key.len());
    out.push(curve.tag());
    out.push(parity(public_key));
    out.extend_from_slice(public_key);
    Ok(out)
}

/// Decode an encoded public key: strip the two header bytes and return the
/// raw key. The parity byte is informational and not re-validated.
pub fn decode(encoded: &[u8]) -> Result<(Curve, Vec<u8>), CryptoError> {
    if encoded.len() < 2 {
        return Err(CryptoError::InvalidKeyLength {
            expected: 2,
            got: encoded.len(),
        });
    }
    let curve = Curve::from_tag(encoded[0])?;
    Ok((curve, encoded[2..].to_vec()))
}
