//! Message framing
//!
//! Wire format: [ header (32 bytes) | serialized body (variable) ].
//!
//! The header is opaque routing/metadata space owned by the caller; an
//! all-zero header is used when none is supplied. The body is JSON — the
//! one serialization both ends of the deployed protocol speak.

use serde::de::DeserializeOwned;
use serde::Serialize;

use veil_crypto::HEADER_SIZE;

use crate::error::ProtoError;

/// Fixed-size frame header.
pub type Header = [u8; HEADER_SIZE];

/// Serialize `body` and prepend `header` (all zeros when `None`).
pub fn pack<T: Serialize>(body: &T, header: Option<&Header>) -> Result<Vec<u8>, ProtoError> {
    let serialized = serde_json::to_vec(body)?;
    let mut out = Vec::with_capacity(HEADER_SIZE + serialized.len());
    match header {
        Some(h) => out.extend_from_slice(h),
        None => out.extend_from_slice(&[0u8; HEADER_SIZE]),
    }
    out.extend_from_slice(&serialized);
    Ok(out)
}

/// Split a framed message back into its header and decoded body.
pub fn unpack<T: DeserializeOwned>(bytes: &[u8]) -> Result<(Header, T), ProtoError> {
    if bytes.len() < HEADER_SIZE {
        return Err(ProtoError::Truncated {
            len: bytes.len(),
            header: HEADER_SIZE,
        });
    }
    let (head, body) = bytes.split_at(HEADER_SIZE);
    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(head);
    let decoded = serde_json::from_slice(body)?;
    Ok((header, decoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u64,
        text: String,
    }

    fn sample() -> Note {
        Note {
            id: 42,
            text: "framed".into(),
        }
    }

    #[test]
    fn pack_unpack_roundtrip_with_header() {
        let mut header = [0u8; 32];
        header[0] = 0xAB;
        header[31] = 0xCD;

        let framed = pack(&sample(), Some(&header)).unwrap();
        let (got_header, got_body): (Header, Note) = unpack(&framed).unwrap();
        assert_eq!(got_header, header);
        assert_eq!(got_body, sample());
    }

    #[test]
    fn default_header_is_all_zero() {
        let framed = pack(&sample(), None).unwrap();
        let (header, body): (Header, Note) = unpack(&framed).unwrap();
        assert_eq!(header, [0u8; 32]);
        assert_eq!(body, sample());
    }

    #[test]
    fn frame_is_header_plus_json() {
        let framed = pack(&sample(), None).unwrap();
        let json = serde_json::to_vec(&sample()).unwrap();
        assert_eq!(framed.len(), 32 + json.len());
        assert_eq!(&framed[32..], &json[..]);
    }

    #[test]
    fn rejects_truncated_input() {
        let err = unpack::<Note>(&[0u8; 31]).unwrap_err();
        assert!(matches!(err, ProtoError::Truncated { len: 31, .. }));
        assert!(unpack::<Note>(&[]).is_err());
    }

    #[test]
    fn exactly_header_sized_input_fails_as_codec_error() {
        // 32 bytes of header and an empty body is not valid JSON.
        let err = unpack::<Note>(&[0u8; 32]).unwrap_err();
        assert!(matches!(err, ProtoError::Codec(_)));
    }

    #[test]
    fn garbage_body_is_a_codec_error() {
        let mut framed = vec![0u8; 32];
        framed.extend_from_slice(b"not json");
        assert!(matches!(
            unpack::<Note>(&framed).unwrap_err(),
            ProtoError::Codec(_)
        ));
    }
}
