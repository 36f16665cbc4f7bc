// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use neo_cryptography::aes::{Aes256EcbCipher, AES256_KEY_SIZE};
use neo_cryptography::hash::Sha256Twice;
use neo_cryptography::PrivateKey;
use tracing::debug;
use zeroize::Zeroizing;

use super::{normalize_passphrase, Nep2Error, Nep2Payload, ADDRESS_HASH_SIZE};
use crate::{Nep2Variant, ScryptParameters};

/// Encrypt `private` into a NEP-2 string bound to its `variant` address.
pub fn encrypt_nep2(
    private: &PrivateKey,
    passphrase: &str,
    variant: Nep2Variant,
    params: &ScryptParameters,
) -> Result<String, Nep2Error> {
    debug!(%variant, %params, "encrypting nep2 key");

    let address = variant.address(&private.public_key());
    let mut address_hash = [0u8; ADDRESS_HASH_SIZE];
    address_hash.copy_from_slice(&address.sha256_twice()[..ADDRESS_HASH_SIZE]);

    let passphrase = normalize_passphrase(passphrase);
    let derived = params.derive_key(passphrase.as_bytes(), &address_hash)?;
    let (derived_half1, derived_half2) = derived.split_at(AES256_KEY_SIZE);

    let mut aes_key = Zeroizing::new([0u8; AES256_KEY_SIZE]);
    aes_key.copy_from_slice(derived_half2);

    let mut encrypted = private.to_be_bytes();
    for (byte, mask) in encrypted.iter_mut().zip(derived_half1.iter()) {
        *byte ^= *mask;
    }
    aes_key
        .aes256_ecb_encrypt_aligned(encrypted.as_mut_slice())
        .map_err(|_| Nep2Error::InvalidPrivateKey)?;

    Ok(Nep2Payload {
        address_hash,
        encrypted,
    }
    .encode())
}
