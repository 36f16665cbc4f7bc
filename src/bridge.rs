// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! The two-method decryption surface plus its encrypt and validate companions.

use std::fmt;

use neo_wallets::{decrypt_nep2, is_valid_nep2, KeyPair, Nep2Variant, ScryptParameters};
use tracing::{debug, instrument};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::DecryptError;

pub type Result<T> = std::result::Result<T, DecryptError>;

/// A decrypted account: the address of the key and the key as lowercase hex.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Account {
    pub address: String,
    pub key: String,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Decrypts a Neo N3 NEP-2 key; returns the private key as 64 lowercase hex characters.
pub fn decrypt_standard(encoded: &str, passphrase: &str) -> Result<Zeroizing<String>> {
    decrypt(Nep2Variant::Standard, encoded, passphrase)
}

/// Decrypts a Neo Legacy NEP-2 key; returns the private key as 64 lowercase hex characters.
pub fn decrypt_legacy(encoded: &str, passphrase: &str) -> Result<Zeroizing<String>> {
    decrypt(Nep2Variant::Legacy, encoded, passphrase)
}

pub fn decrypt(variant: Nep2Variant, encoded: &str, passphrase: &str) -> Result<Zeroizing<String>> {
    decrypt_with_params(variant, encoded, passphrase, &ScryptParameters::default_nep2())
}

#[instrument(level = "debug", skip(encoded, passphrase))]
pub fn decrypt_with_params(
    variant: Nep2Variant,
    encoded: &str,
    passphrase: &str,
    params: &ScryptParameters,
) -> Result<Zeroizing<String>> {
    let key = decrypt_nep2(encoded, passphrase, variant, params)?;
    debug!("nep2 key decrypted");
    Ok(key.to_hex())
}

/// Decrypts and also reports the address the key controls.
pub fn decrypt_account(variant: Nep2Variant, encoded: &str, passphrase: &str) -> Result<Account> {
    let key_pair =
        KeyPair::from_nep2(encoded, passphrase, variant, &ScryptParameters::default_nep2())?;

    Ok(Account {
        address: key_pair.address(variant),
        key: key_pair.private_key().to_hex().to_string(),
    })
}

/// Runs [`decrypt`] on the blocking thread pool so async callers are not stalled by scrypt.
///
/// Dropping the returned future does not stop a derivation already in progress.
pub async fn decrypt_async(
    variant: Nep2Variant,
    encoded: String,
    passphrase: Zeroizing<String>,
) -> Result<Zeroizing<String>> {
    tokio::task::spawn_blocking(move || decrypt(variant, &encoded, &passphrase)).await?
}

/// Encrypts a hex or WIF private key into a NEP-2 key.
pub fn encrypt(variant: Nep2Variant, private_key: &str, passphrase: &str) -> Result<String> {
    let key_pair = KeyPair::from_key_str(private_key)?;
    Ok(key_pair.to_nep2(passphrase, variant, &ScryptParameters::default_nep2())?)
}

/// Structural NEP-2 check; does not derive keys and so cannot check the passphrase.
#[inline]
pub fn validate_encrypted(encoded: &str) -> bool {
    is_valid_nep2(encoded)
}
