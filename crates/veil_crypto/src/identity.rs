//! Identity key management
//!
//! Each user holds one long-term Ed25519 signing keypair. The signing key
//! never performs key exchange directly; `convert` maps it to its X25519
//! counterpart when it participates in DH (see the data flow in lib.rs).

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier as _, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use zeroize::ZeroizeOnDrop;

use crate::bytes;
use crate::error::CryptoError;
use crate::params::KEY_LENGTH;

/// 32-byte public key, hex-encoded for display and transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKeyBytes(pub Vec<u8>);

impl PublicKeyBytes {
    pub fn to_hex(&self) -> String {
        bytes::encode_hex(&self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let decoded = bytes::decode_hex(s)?;
        if decoded.len() != KEY_LENGTH {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_LENGTH,
                got: decoded.len(),
            });
        }
        Ok(Self(decoded))
    }
}

/// Long-term identity signing key. Drop clears memory via ZeroizeOnDrop.
#[derive(ZeroizeOnDrop)]
pub struct IdentityKeyPair {
    #[zeroize(skip)]
    pub public: PublicKeyBytes,
    secret_bytes: [u8; 32],
}

impl IdentityKeyPair {
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        let public = PublicKeyBytes(signing_key.verifying_key().to_bytes().to_vec());
        Self {
            public,
            secret_bytes: signing_key.to_bytes(),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; 32] = bytes.try_into().map_err(|_| CryptoError::InvalidKeyLength {
            expected: KEY_LENGTH,
            got: bytes.len(),
        })?;
        let signing_key = SigningKey::from_bytes(&arr);
        let public = PublicKeyBytes(signing_key.verifying_key().to_bytes().to_vec());
        Ok(Self {
            public,
            secret_bytes: arr,
        })
    }

    pub fn secret_bytes(&self) -> &[u8; 32] {
        &self.secret_bytes
    }

    /// Sign arbitrary bytes; returns the 64-byte raw Ed25519 signature.
    pub fn sign(&self, msg: &[u8]) -> Vec<u8> {
        SigningKey::from_bytes(&self.secret_bytes)
            .sign(msg)
            .to_bytes()
            .to_vec()
    }

    /// Verify a signature made by any Ed25519 public key.
    pub fn verify(public_bytes: &[u8], msg: &[u8], sig_bytes: &[u8]) -> Result<(), CryptoError> {
        let vk = VerifyingKey::from_bytes(
            public_bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidKey("bad public key length".into()))?,
        )
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        let sig = Signature::from_bytes(
            sig_bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidKey("bad signature length".into()))?,
        );
        vk.verify(msg, &sig)
            .map_err(|_| CryptoError::SignatureVerification)
    }
}
