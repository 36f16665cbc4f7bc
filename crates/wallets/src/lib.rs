// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! Neo Wallets Library
//!
//! This crate provides NEP-2 passphrase-protected key handling for Neo N3
//! and Neo Legacy accounts:
//! - NEP-2 decryption and encryption
//! - Address derivation for both address formats
//! - Key import and export (hex, WIF)
//! - Scrypt parameter management

pub mod address;
pub mod key_pair;
pub mod nep2;
pub mod scrypt_parameters;

// Re-export main types
pub use address::{is_valid_address, Nep2Variant, ParseVariantError};
pub use key_pair::KeyPair;
pub use nep2::{decrypt_nep2, encrypt_nep2, is_valid_nep2, Nep2Error};
pub use scrypt_parameters::{ScryptError, ScryptParameters};

use neo_cryptography::KeyError;
use thiserror::Error;

/// Result type for wallet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wallet-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(#[from] KeyError),

    #[error("Invalid WIF format")]
    InvalidWif,

    #[error(transparent)]
    Nep2(#[from] Nep2Error),

    #[error(transparent)]
    Scrypt(#[from] ScryptError),
}
