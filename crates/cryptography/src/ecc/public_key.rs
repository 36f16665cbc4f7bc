// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use core::fmt::{self, Debug, Formatter};

use p256::{elliptic_curve::sec1::ToEncodedPoint, PublicKey as P256PublicKey};

use super::COMPRESSED_KEY_SIZE;

/// A secp256r1 public key.
#[derive(Clone, Eq, PartialEq)]
pub struct PublicKey {
    compressed: [u8; COMPRESSED_KEY_SIZE],
}

impl PublicKey {
    pub(crate) fn from_p256(key: P256PublicKey) -> Self {
        let encoded = key.to_encoded_point(true);
        let mut compressed = [0u8; COMPRESSED_KEY_SIZE];
        compressed.copy_from_slice(encoded.as_bytes());
        Self { compressed }
    }

    #[inline]
    pub fn to_compressed(&self) -> [u8; COMPRESSED_KEY_SIZE] {
        self.compressed
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("compressed", &hex::encode(self.compressed))
            .finish()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.compressed))
    }
}
