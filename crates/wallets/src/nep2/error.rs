// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use thiserror::Error;

/// NEP-2 failures.
///
/// A wrong passphrase and a corrupted ciphertext are reported as the same
/// variant. Messages never carry key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Nep2Error {
    #[error("nep2: malformed encrypted key")]
    MalformedInput,

    #[error("nep2: decrypted key is not a valid secp256r1 scalar")]
    InvalidPrivateKey,

    #[error("nep2: wrong passphrase or corrupted key")]
    WrongPassphraseOrCorruptInput,

    #[error("nep2: invalid scrypt parameters")]
    InvalidScryptParameters,
}

impl From<crate::ScryptError> for Nep2Error {
    #[inline]
    fn from(_: crate::ScryptError) -> Self {
        Self::InvalidScryptParameters
    }
}
