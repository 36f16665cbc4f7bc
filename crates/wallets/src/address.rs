// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! Neo account addresses for the two NEP-2 variants.
//!
//! Both variants hash a single-signature verification script and encode
//! `version || script_hash` with Base58Check; they differ in the script
//! layout and in the version byte.

use std::fmt;
use std::str::FromStr;

use neo_cryptography::{base58, hash, PublicKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Neo N3 address version (addresses start with `N`).
pub const N3_ADDRESS_VERSION: u8 = 0x35;

/// Neo Legacy address version (addresses start with `A`).
pub const LEGACY_ADDRESS_VERSION: u8 = 0x17;

/// Interop service invoked by Neo N3 signature contracts.
pub const CHECK_SIG_SYSCALL: &str = "System.Crypto.CheckSig";

const PUSHDATA1: u8 = 0x0c;
const PUSH_33_BYTES: u8 = 0x21;
const SYSCALL: u8 = 0x41;
const CHECKSIG: u8 = 0xac;

/// Which Neo generation a NEP-2 key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nep2Variant {
    /// Neo N3.
    #[default]
    Standard,
    /// Neo 2.x.
    Legacy,
}

impl Nep2Variant {
    #[inline]
    pub const fn address_version(self) -> u8 {
        match self {
            Self::Standard => N3_ADDRESS_VERSION,
            Self::Legacy => LEGACY_ADDRESS_VERSION,
        }
    }

    /// Builds the single-signature verification script for `key`.
    pub fn verification_script(self, key: &PublicKey) -> Vec<u8> {
        let compressed = key.to_compressed();
        match self {
            Self::Standard => {
                let syscall = hash::sha256(CHECK_SIG_SYSCALL.as_bytes());
                let mut script = Vec::with_capacity(2 + compressed.len() + 5);
                script.push(PUSHDATA1);
                script.push(PUSH_33_BYTES);
                script.extend_from_slice(&compressed);
                script.push(SYSCALL);
                script.extend_from_slice(&syscall[..4]);
                script
            }
            Self::Legacy => {
                let mut script = Vec::with_capacity(1 + compressed.len() + 1);
                script.push(PUSH_33_BYTES);
                script.extend_from_slice(&compressed);
                script.push(CHECKSIG);
                script
            }
        }
    }

    #[inline]
    pub fn script_hash(self, key: &PublicKey) -> [u8; 20] {
        hash::hash160(&self.verification_script(key))
    }

    /// Encodes the address of the signature contract for `key`.
    pub fn address(self, key: &PublicKey) -> String {
        let mut payload = [0u8; 21];
        payload[0] = self.address_version();
        payload[1..].copy_from_slice(&self.script_hash(key));
        base58::encode_check(&payload)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Nep2Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown NEP-2 variant `{0}`, expected `standard` or `legacy`")]
pub struct ParseVariantError(String);

impl FromStr for Nep2Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "n3" | "neo3" => Ok(Self::Standard),
            "legacy" | "neo2" => Ok(Self::Legacy),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

/// Checks that `address` is Base58Check encoded with the version byte of `variant`.
pub fn is_valid_address(address: &str, variant: Nep2Variant) -> bool {
    match base58::decode_check(address) {
        Ok(data) => data.len() == 21 && data[0] == variant.address_version(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_cryptography::PrivateKey;

    fn test_key() -> PublicKey {
        PrivateKey::from_hex("7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344")
            .expect("from hex should be ok")
            .public_key()
    }

    #[test]
    fn test_n3_address() {
        let address = Nep2Variant::Standard.address(&test_key());
        assert_eq!(address, "NPTmAHDxo6Pkyic8Nvu3kwyXoYJCvcCB6i");
        assert!(is_valid_address(&address, Nep2Variant::Standard));
        assert!(!is_valid_address(&address, Nep2Variant::Legacy));
    }

    #[test]
    fn test_legacy_address() {
        let address = Nep2Variant::Legacy.address(&test_key());
        assert_eq!(address, "ALq7AWrhAueN6mJNqk6FHJjnsEoPRytLdW");
        assert!(is_valid_address(&address, Nep2Variant::Legacy));
    }

    #[test]
    fn test_verification_scripts() {
        let key = test_key();

        let n3 = Nep2Variant::Standard.verification_script(&key);
        assert_eq!(n3.len(), 40);
        assert_eq!(&n3[..2], &[0x0c, 0x21]);
        assert_eq!(&n3[35..], &[0x41, 0x56, 0xe7, 0xb3, 0x27]);

        let legacy = Nep2Variant::Legacy.verification_script(&key);
        assert_eq!(legacy.len(), 35);
        assert_eq!(legacy[0], 0x21);
        assert_eq!(legacy[34], 0xac);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("standard".parse(), Ok(Nep2Variant::Standard));
        assert_eq!("N3".parse(), Ok(Nep2Variant::Standard));
        assert_eq!("legacy".parse(), Ok(Nep2Variant::Legacy));
        assert!("neo4".parse::<Nep2Variant>().is_err());
        assert_eq!(Nep2Variant::Legacy.to_string(), "legacy");
    }
}
