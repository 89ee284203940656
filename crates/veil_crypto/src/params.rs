//! Protocol parameters
//!
//! One immutable [`ProtocolParams`] value is constructed at startup
//! (normally via [`ProtocolParams::v1`]) and passed explicitly to the
//! components that need it. Byte lengths that size arrays stay as consts.

use serde::{Deserialize, Serialize};

use crate::point::Curve;

/// Raw key length in bytes for the X25519 path.
pub const KEY_LENGTH: usize = 32;

/// Fixed message-frame header size in bytes.
pub const HEADER_SIZE: usize = 32;

/// Nonce length in bytes.
pub const NONCE_LENGTH: usize = 24;

/// Threshold below which callers should replenish their one-time prekey
/// supply. Consumed by session logic above this crate, not enforced here.
pub const MIN_OTK_SUPPLY: usize = 100;

/// Hash algorithm identifier exposed to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlg {
    Sha512,
}

/// How the HKDF salt buffer is filled.
///
/// The deployed v1 peers fill only the first byte of the salt with `0xFF`
/// and leave the rest zeroed. `Uniform` fills every byte. Changing a peer's
/// convention changes every derived session key, so both sides must agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaltFill {
    /// First salt byte `0xFF`, remainder zero. Wire-compatible with
    /// existing deployments.
    Legacy,
    /// Every salt byte `0xFF`.
    Uniform,
}

/// Immutable protocol configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolParams {
    pub curve: Curve,
    pub hash: HashAlg,
    /// HKDF info string binding derived keys to this protocol.
    pub info: &'static [u8],
    pub salt_fill: SaltFill,
    pub min_otk_supply: usize,
}

impl ProtocolParams {
    /// The canonical v1 parameter set.
    pub fn v1() -> Self {
        Self {
            curve: Curve::X25519,
            hash: HashAlg::Sha512,
            info: b"veil-session-v1",
            salt_fill: SaltFill::Legacy,
            min_otk_supply: MIN_OTK_SUPPLY,
        }
    }

    /// HKDF salt: one curve-length buffer, filled per [`SaltFill`].
    pub fn salt(&self) -> Vec<u8> {
        let mut salt = vec![0u8; self.curve.key_length()];
        match self.salt_fill {
            SaltFill::Legacy => salt[0] = 0xFF,
            SaltFill::Uniform => salt.fill(0xFF),
        }
        salt
    }
}
