// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use neo_wallets::{Error as WalletError, Nep2Error};
use thiserror::Error;

/// Errors reported across the call surface.
///
/// The first three variants are the decryption outcomes. A wrong passphrase
/// and a corrupted key are deliberately indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecryptError {
    #[error("malformed NEP-2 key")]
    MalformedInput,

    #[error("decrypted key is not a valid private key")]
    InvalidPrivateKey,

    #[error("wrong passphrase or corrupted NEP-2 key")]
    WrongPassphraseOrCorruptInput,

    #[error("invalid scrypt parameters")]
    InvalidScryptParameters,

    #[error("invalid private key input")]
    InvalidKeyInput,

    #[error("decryption worker failed: {0}")]
    Worker(String),
}

impl DecryptError {
    /// Stable machine-readable code for bridge layers.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput => "MALFORMED_INPUT",
            Self::InvalidPrivateKey => "INVALID_PRIVATE_KEY",
            Self::WrongPassphraseOrCorruptInput => "WRONG_PASSPHRASE_OR_CORRUPT_INPUT",
            Self::InvalidScryptParameters => "INVALID_SCRYPT_PARAMETERS",
            Self::InvalidKeyInput => "INVALID_KEY_INPUT",
            Self::Worker(_) => "WORKER_FAILED",
        }
    }
}

impl From<Nep2Error> for DecryptError {
    fn from(err: Nep2Error) -> Self {
        match err {
            Nep2Error::MalformedInput => Self::MalformedInput,
            Nep2Error::InvalidPrivateKey => Self::InvalidPrivateKey,
            Nep2Error::WrongPassphraseOrCorruptInput => Self::WrongPassphraseOrCorruptInput,
            Nep2Error::InvalidScryptParameters => Self::InvalidScryptParameters,
        }
    }
}

impl From<WalletError> for DecryptError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::Nep2(err) => err.into(),
            WalletError::Scrypt(_) => Self::InvalidScryptParameters,
            WalletError::InvalidPrivateKey(_) | WalletError::InvalidWif => Self::InvalidKeyInput,
        }
    }
}

impl From<tokio::task::JoinError> for DecryptError {
    fn from(err: tokio::task::JoinError) -> Self {
        let reason = if err.is_cancelled() { "cancelled" } else { "panicked" };
        Self::Worker(reason.to_string())
    }
}
