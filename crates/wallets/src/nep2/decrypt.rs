// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use neo_cryptography::aes::{Aes256EcbCipher, AES256_KEY_SIZE};
use neo_cryptography::hash::Sha256Twice;
use neo_cryptography::PrivateKey;
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroizing;

use super::{normalize_passphrase, Nep2Error, Nep2Payload, ADDRESS_HASH_SIZE};
use crate::{Nep2Variant, ScryptParameters};

/// Decrypt a NEP-2 string back into the private key.
///
/// `params` must be the parameters the key was encrypted with;
/// [`ScryptParameters::default_nep2`] for keys produced by Neo wallets.
pub fn decrypt_nep2(
    nep2: &str,
    passphrase: &str,
    variant: Nep2Variant,
    params: &ScryptParameters,
) -> Result<PrivateKey, Nep2Error> {
    debug!(%variant, %params, "decrypting nep2 key");

    let result = decrypt_payload(Nep2Payload::decode(nep2)?, passphrase, variant, params);
    if let Err(err) = &result {
        debug!(%variant, %err, "nep2 decryption failed");
    }
    result
}

fn decrypt_payload(
    payload: Nep2Payload,
    passphrase: &str,
    variant: Nep2Variant,
    params: &ScryptParameters,
) -> Result<PrivateKey, Nep2Error> {
    let passphrase = normalize_passphrase(passphrase);
    let derived = params.derive_key(passphrase.as_bytes(), &payload.address_hash)?;
    let (derived_half1, derived_half2) = derived.split_at(AES256_KEY_SIZE);

    let mut aes_key = Zeroizing::new([0u8; AES256_KEY_SIZE]);
    aes_key.copy_from_slice(derived_half2);

    let mut decrypted = payload.encrypted;
    aes_key
        .aes256_ecb_decrypt_aligned(decrypted.as_mut_slice())
        .map_err(|_| Nep2Error::MalformedInput)?;
    for (byte, mask) in decrypted.iter_mut().zip(derived_half1.iter()) {
        *byte ^= *mask;
    }

    let private = PrivateKey::from_be_bytes(&decrypted).map_err(|_| Nep2Error::InvalidPrivateKey)?;

    let address = variant.address(&private.public_key());
    let checksum = address.sha256_twice();
    if bool::from(checksum[..ADDRESS_HASH_SIZE].ct_eq(&payload.address_hash)) {
        Ok(private)
    } else {
        Err(Nep2Error::WrongPassphraseOrCorruptInput)
    }
}
