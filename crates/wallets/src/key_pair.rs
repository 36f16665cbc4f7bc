// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! Key pairs and their plain-text import/export formats (hex, WIF, NEP-2).

use std::fmt;

use neo_cryptography::{base58, PrivateKey, PublicKey, KEY_SIZE};
use zeroize::Zeroizing;

use crate::nep2::{decrypt_nep2, encrypt_nep2, Nep2Error};
use crate::{Error, Nep2Variant, Result, ScryptParameters};

const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED_FLAG: u8 = 0x01;
const WIF_SIZE: usize = 1 + KEY_SIZE + 1;

/// A secp256r1 key pair.
#[derive(Clone)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();
        Self {
            private_key,
            public_key,
        }
    }

    /// Imports a 64-character hex private key.
    pub fn from_hex(text: &str) -> Result<Self> {
        Ok(Self::from_private_key(PrivateKey::from_hex(text)?))
    }

    /// Imports a WIF private key (`0x80 || key || 0x01`, Base58Check).
    pub fn from_wif(wif: &str) -> Result<Self> {
        let data = Zeroizing::new(base58::decode_check(wif).map_err(|_| Error::InvalidWif)?);
        if data.len() != WIF_SIZE || data[0] != WIF_VERSION || data[WIF_SIZE - 1] != WIF_COMPRESSED_FLAG
        {
            return Err(Error::InvalidWif);
        }

        Ok(Self::from_private_key(PrivateKey::from_slice(&data[1..=KEY_SIZE])?))
    }

    /// Accepts either a hex private key or a WIF.
    pub fn from_key_str(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.len() == 2 * KEY_SIZE || text.starts_with("0x") {
            Self::from_hex(text)
        } else {
            Self::from_wif(text)
        }
    }

    /// Decrypts a NEP-2 key.
    pub fn from_nep2(
        nep2: &str,
        passphrase: &str,
        variant: Nep2Variant,
        params: &ScryptParameters,
    ) -> std::result::Result<Self, Nep2Error> {
        decrypt_nep2(nep2, passphrase, variant, params).map(Self::from_private_key)
    }

    pub fn to_wif(&self) -> Zeroizing<String> {
        let mut data = Zeroizing::new([0u8; WIF_SIZE]);
        data[0] = WIF_VERSION;
        data[1..=KEY_SIZE].copy_from_slice(self.private_key.to_be_bytes().as_slice());
        data[WIF_SIZE - 1] = WIF_COMPRESSED_FLAG;
        Zeroizing::new(base58::encode_check(data.as_slice()))
    }

    pub fn to_nep2(
        &self,
        passphrase: &str,
        variant: Nep2Variant,
        params: &ScryptParameters,
    ) -> std::result::Result<String, Nep2Error> {
        encrypt_nep2(&self.private_key, passphrase, variant, params)
    }

    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    #[inline]
    pub fn address(&self, variant: Nep2Variant) -> String {
        variant.address(&self.public_key)
    }

    #[inline]
    pub fn script_hash(&self, variant: Nep2Variant) -> [u8; 20] {
        variant.script_hash(&self.public_key)
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key
    }
}

impl Eq for KeyPair {}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.public_key)
    }
}
