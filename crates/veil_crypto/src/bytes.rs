//! Byte-level utilities
//!
//! - Hex encode/decode (lowercase, two chars per byte)
//! - Plain byte-sequence equality
//! - 6-byte big-endian integer conversion (wire timestamps/counters)

use crate::error::CryptoError;

/// Lowercase hex, two characters per byte. Total; never fails.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string. Empty input yields an empty vec; odd length or
/// non-hex characters are rejected rather than silently mangled.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, CryptoError> {
    Ok(hex::decode(s)?)
}

/// Byte-by-byte equality; length mismatch returns false immediately.
///
/// NOT constant-time. Fine for structural checks; MAC verification must go
/// through `mac::verify`, which compares tags in constant time.
pub fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Encode an integer as 6 big-endian bytes. Values needing more than 48
/// bits are rejected.
pub fn u48_to_bytes(n: u64) -> Result<[u8; 6], CryptoError> {
    if n > 0xFFFF_FFFF_FFFF {
        return Err(CryptoError::IntegerRange(format!(
            "{n} does not fit in 6 bytes"
        )));
    }
    let be = n.to_be_bytes();
    let mut out = [0u8; 6];
    out.copy_from_slice(&be[2..]);
    Ok(out)
}

/// Decode exactly 6 big-endian bytes into an integer.
pub fn bytes_to_u48(bytes: &[u8]) -> Result<u64, CryptoError> {
    if bytes.len() != 6 {
        return Err(CryptoError::IntegerRange(format!(
            "expected 6 bytes, got {}",
            bytes.len()
        )));
    }
    let mut be = [0u8; 8];
    be[2..].copy_from_slice(bytes);
    Ok(u64::from_be_bytes(be))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let data = [0x00u8, 0xFF, 0x7A, 0x01];
        let encoded = encode_hex(&data);
        assert_eq!(encoded, "00ff7a01");
        assert_eq!(decode_hex(&encoded).unwrap(), data);
    }

    #[test]
    fn hex_known_vector() {
        assert_eq!(encode_hex(&[0x00, 0xFF]), "00ff");
        assert_eq!(decode_hex("00ff").unwrap(), vec![0x00, 0xFF]);
    }

    #[test]
    fn hex_empty() {
        assert_eq!(encode_hex(&[]), "");
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn hex_rejects_odd_length() {
        assert!(decode_hex("abc").is_err());
    }

    #[test]
    fn hex_rejects_non_hex_chars() {
        assert!(decode_hex("zz").is_err());
    }

    #[test]
    fn equality_truth_table() {
        assert!(bytes_equal(&[1, 2, 3], &[1, 2, 3]));
        assert!(bytes_equal(&[], &[]));
        assert!(!bytes_equal(&[1, 2], &[1, 2, 3]));
        assert!(!bytes_equal(&[1, 2, 3], &[1, 2, 4]));
    }

    #[test]
    fn u48_roundtrip() {
        for n in [0u64, 1, 0xFFFF, 0xFFFF_FFFF_FFFF] {
            let bytes = u48_to_bytes(n).unwrap();
            assert_eq!(bytes_to_u48(&bytes).unwrap(), n);
        }
    }

    #[test]
    fn u48_big_endian_layout() {
        assert_eq!(u48_to_bytes(0x0102_0304_0506).unwrap(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn u48_rejects_overflow() {
        assert!(u48_to_bytes(0x1_0000_0000_0000).is_err());
        assert!(u48_to_bytes(u64::MAX).is_err());
    }

    #[test]
    fn u48_rejects_wrong_length() {
        assert!(bytes_to_u48(&[1, 2, 3]).is_err());
        assert!(bytes_to_u48(&[0; 8]).is_err());
    }
}
