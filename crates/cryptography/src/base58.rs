// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! Base58Check encoding as used by Neo addresses, WIF and NEP-2 keys.
//!
//! The checksum is the first four bytes of the double SHA-256 of the payload.

use thiserror::Error;

/// Length of the trailing Base58Check checksum.
pub const CHECKSUM_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    #[error("base58: invalid character at index {0}")]
    InvalidCharacter(usize),

    #[error("base58: decoded data is shorter than the checksum")]
    TooShort,

    #[error("base58: checksum mismatch")]
    InvalidChecksum,
}

impl From<bs58::decode::Error> for Base58Error {
    fn from(err: bs58::decode::Error) -> Self {
        match err {
            bs58::decode::Error::InvalidCharacter { index, .. } => Self::InvalidCharacter(index),
            bs58::decode::Error::NonAsciiCharacter { index } => Self::InvalidCharacter(index),
            bs58::decode::Error::NoChecksum => Self::TooShort,
            _ => Self::InvalidChecksum,
        }
    }
}

/// Encodes `payload` followed by its checksum.
pub fn encode_check(payload: &[u8]) -> String {
    bs58::encode(payload).with_check().into_string()
}

/// Decodes a Base58Check string and strips the verified checksum.
pub fn decode_check(text: &str) -> Result<Vec<u8>, Base58Error> {
    Ok(bs58::decode(text).with_check(None).into_vec()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash256;

    #[test]
    fn test_round_trip() {
        let payload = [0x17u8, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let text = encode_check(&payload);
        assert_eq!(decode_check(&text).expect("decode should be ok"), payload);
    }

    #[test]
    fn test_checksum_is_double_sha256_prefix() {
        let payload = b"neo";
        let raw = bs58::decode(encode_check(payload))
            .into_vec()
            .expect("plain decode should be ok");

        assert_eq!(&raw[..payload.len()], payload);
        assert_eq!(&raw[payload.len()..], &hash256(payload)[..CHECKSUM_SIZE]);
    }

    #[test]
    fn test_invalid_character() {
        assert!(matches!(decode_check("0OIl"), Err(Base58Error::InvalidCharacter(_))));
    }

    #[test]
    fn test_checksum_mismatch() {
        let mut raw = b"neo".to_vec();
        raw.extend_from_slice(&[0, 0, 0, 0]);
        let text = bs58::encode(raw).into_string();
        assert_eq!(decode_check(&text), Err(Base58Error::InvalidChecksum));
    }

    #[test]
    fn test_too_short() {
        let text = bs58::encode([1u8, 2]).into_string();
        assert!(decode_check(&text).is_err());
    }
}
