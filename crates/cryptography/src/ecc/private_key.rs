// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use core::fmt::{self, Debug, Formatter};

use p256::{FieldBytes, SecretKey as P256SecretKey};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use super::{KeyError, PublicKey, KEY_SIZE};

/// A secp256r1 private key.
///
/// Construction only succeeds for scalars in `[1, n)`, so every `PrivateKey`
/// has a public key. The scalar is wiped when the value is dropped.
#[derive(Clone)]
pub struct PrivateKey {
    secret: P256SecretKey,
}

impl PrivateKey {
    /// Parses a big-endian scalar.
    pub fn from_be_bytes(bytes: &[u8; KEY_SIZE]) -> Result<Self, KeyError> {
        let mut field = FieldBytes::clone_from_slice(bytes);
        let secret = P256SecretKey::from_bytes(&field);
        field.as_mut_slice().zeroize();

        let secret = secret.map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Self { secret })
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: &[u8; KEY_SIZE] =
            slice.try_into().map_err(|_| KeyError::InvalidPrivateKeyLength)?;
        Self::from_be_bytes(bytes)
    }

    /// Parses a 64-character hex string, with or without a `0x` prefix.
    pub fn from_hex(text: &str) -> Result<Self, KeyError> {
        let text = text.strip_prefix("0x").unwrap_or(text);
        let mut bytes = Zeroizing::new([0u8; KEY_SIZE]);
        hex::decode_to_slice(text, bytes.as_mut_slice())
            .map_err(|_| KeyError::InvalidEncoding)?;
        Self::from_be_bytes(&bytes)
    }

    #[inline]
    pub fn to_be_bytes(&self) -> Zeroizing<[u8; KEY_SIZE]> {
        let mut field = self.secret.to_bytes();
        let mut bytes = Zeroizing::new([0u8; KEY_SIZE]);
        bytes.copy_from_slice(&field);
        field.as_mut_slice().zeroize();
        bytes
    }

    /// Lowercase hex without prefix.
    #[inline]
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.to_be_bytes().as_slice()))
    }

    #[inline]
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_p256(self.secret.public_key())
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"***").finish()
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_be_bytes()
            .as_slice()
            .ct_eq(other.to_be_bytes().as_slice())
            .into()
    }
}

impl PartialEq<[u8]> for PrivateKey {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.to_be_bytes().as_slice().ct_eq(other).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // secp256r1 group order
    const ORDER: [u8; 32] = hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

    #[test]
    fn test_rejects_zero_scalar() {
        assert_eq!(
            PrivateKey::from_be_bytes(&[0u8; 32]).err(),
            Some(KeyError::InvalidPrivateKey)
        );
    }

    #[test]
    fn test_rejects_scalar_not_below_order() {
        assert_eq!(
            PrivateKey::from_be_bytes(&ORDER).err(),
            Some(KeyError::InvalidPrivateKey)
        );
        assert_eq!(
            PrivateKey::from_be_bytes(&[0xff; 32]).err(),
            Some(KeyError::InvalidPrivateKey)
        );

        let mut below = ORDER;
        below[31] -= 1;
        assert!(PrivateKey::from_be_bytes(&below).is_ok());
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            PrivateKey::from_slice(&[1u8; 31]).err(),
            Some(KeyError::InvalidPrivateKeyLength)
        );
        assert_eq!(PrivateKey::from_hex("0102").err(), Some(KeyError::InvalidEncoding));
        assert_eq!(
            PrivateKey::from_hex(&"zz".repeat(32)).err(),
            Some(KeyError::InvalidEncoding)
        );
    }

    #[test]
    fn test_hex_round_trip() {
        let text = "7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344";
        let key = PrivateKey::from_hex(text).expect("from hex should be ok");
        assert_eq!(key.to_hex().as_str(), text);

        let prefixed = PrivateKey::from_hex(&format!("0x{text}")).expect("from hex should be ok");
        assert_eq!(key, prefixed);
    }

    #[test]
    fn test_debug_hides_scalar() {
        let key = PrivateKey::from_be_bytes(&[0x01; 32]).expect("valid scalar");
        assert_eq!(format!("{key:?}"), "PrivateKey(\"***\")");
    }
}
