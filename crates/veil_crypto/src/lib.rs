//! veil_crypto — cryptographic primitives for the Veil secure channel
//!
//! # Design principles
//! - NO custom crypto; all primitives come from audited Rust crates.
//! - Every operation is a pure synchronous function over immutable inputs;
//!   concurrent callers need no synchronization.
//! - Secret material is zeroized on drop.
//!
//! # Data flow
//! identity keypair → `convert` → exchange keypair → `dh` (with the peer's
//! exchange public key) → raw shared secret → `kdf` → session key. The
//! session key feeds `mac` for payload authentication; `point` encodes
//! exchange public keys whenever they cross the wire.
//!
//! # Module layout
//! - `identity` — long-term Ed25519 identity keys
//! - `prekey`   — signed and one-time X25519 prekeys
//! - `convert`  — Ed25519 → X25519 birational conversion
//! - `point`    — public-key wire encoding (curve tag + parity + raw bytes)
//! - `dh`       — shared-secret computation (X25519 + HSalsa20 mixing)
//! - `kdf`      — HKDF-SHA512 session key derivation
//! - `mac`      — HMAC-SHA256 payload authentication
//! - `nonce`    — 24-byte CSPRNG nonces
//! - `bytes`    — hex, equality, 6-byte big-endian integers
//! - `params`   — protocol parameters and length constants
//! - `error`    — unified error type

pub mod bytes;
pub mod convert;
pub mod dh;
pub mod error;
pub mod identity;
pub mod kdf;
pub mod mac;
pub mod nonce;
pub mod params;
pub mod point;
pub mod prekey;

pub use error::CryptoError;
pub use params::{ProtocolParams, HEADER_SIZE, KEY_LENGTH, MIN_OTK_SUPPLY, NONCE_LENGTH};
pub use point::Curve;
