// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! NEP-2 passphrase-protected private keys.
//!
//! Decoded layout (39 bytes, Base58Check encoded, text starts with `6PY`):
//!
//! | offset | size | field                          |
//! |--------|------|--------------------------------|
//! | 0      | 2    | prefix `0x01 0x42`             |
//! | 2      | 1    | flag `0xe0`                    |
//! | 3      | 4    | address hash                   |
//! | 7      | 32   | two AES-256-ECB encrypted halves |

mod decrypt;
mod encrypt;
mod error;

use neo_cryptography::base58;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

pub use decrypt::decrypt_nep2;
pub use encrypt::encrypt_nep2;
pub use error::Nep2Error;

pub const NEP2_PREFIX: [u8; 2] = [0x01, 0x42];
pub const NEP2_FLAG: u8 = 0xe0;
pub const NEP2_KEY_SIZE: usize = 39;
pub const ADDRESS_HASH_SIZE: usize = 4;
pub const ENCRYPTED_KEY_SIZE: usize = 32;

const ADDRESS_HASH_OFFSET: usize = 3;
const ENCRYPTED_KEY_OFFSET: usize = ADDRESS_HASH_OFFSET + ADDRESS_HASH_SIZE;

/// The fields of a structurally valid NEP-2 key.
pub(crate) struct Nep2Payload {
    pub address_hash: [u8; ADDRESS_HASH_SIZE],
    pub encrypted: Zeroizing<[u8; ENCRYPTED_KEY_SIZE]>,
}

impl Nep2Payload {
    /// Decodes the Base58Check text and checks length, prefix and flag.
    pub fn decode(nep2: &str) -> Result<Self, Nep2Error> {
        let data =
            Zeroizing::new(base58::decode_check(nep2).map_err(|_| Nep2Error::MalformedInput)?);

        if data.len() != NEP2_KEY_SIZE || data[..2] != NEP2_PREFIX || data[2] != NEP2_FLAG {
            return Err(Nep2Error::MalformedInput);
        }

        let mut address_hash = [0u8; ADDRESS_HASH_SIZE];
        address_hash.copy_from_slice(&data[ADDRESS_HASH_OFFSET..ENCRYPTED_KEY_OFFSET]);

        let mut encrypted = Zeroizing::new([0u8; ENCRYPTED_KEY_SIZE]);
        encrypted.copy_from_slice(&data[ENCRYPTED_KEY_OFFSET..]);

        Ok(Self {
            address_hash,
            encrypted,
        })
    }

    pub fn encode(&self) -> String {
        let mut buf = Zeroizing::new([0u8; NEP2_KEY_SIZE]);
        buf[..2].copy_from_slice(&NEP2_PREFIX);
        buf[2] = NEP2_FLAG;
        buf[ADDRESS_HASH_OFFSET..ENCRYPTED_KEY_OFFSET].copy_from_slice(&self.address_hash);
        buf[ENCRYPTED_KEY_OFFSET..].copy_from_slice(self.encrypted.as_slice());
        base58::encode_check(buf.as_slice())
    }
}

/// Structural check only: Base58Check, length, prefix and flag. No key derivation.
pub fn is_valid_nep2(nep2: &str) -> bool {
    Nep2Payload::decode(nep2).is_ok()
}

/// NFC-normalizes the passphrase before it is fed to scrypt as UTF-8.
pub(crate) fn normalize_passphrase(passphrase: &str) -> Zeroizing<String> {
    Zeroizing::new(passphrase.nfc().collect())
}
