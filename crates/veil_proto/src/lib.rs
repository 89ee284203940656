//! veil_proto — wire framing for the Veil secure channel
//!
//! Sits directly above `veil_crypto`: frames carry a fixed 32-byte header
//! followed by a JSON-serialized body. Payload authentication of the body
//! bytes lives in `veil_crypto::mac`.

pub mod error;
pub mod frame;

pub use error::ProtoError;
pub use frame::{pack, unpack, Header};
