// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! # neo-nep2: NEP-2 key decryption for Neo N3 and Neo Legacy
//!
//! Decrypts passphrase-protected NEP-2 private keys and returns the raw key
//! as lowercase hex:
//!
//! ```rust,no_run
//! let key = neo_nep2::decrypt_standard(
//!     "6PYUUUFei9PBBfVkSn8q7hFCnewWFRBKPxcn6Kz6Bmk3FqWyLyuTQE2XFH",
//!     "city of zion",
//! )?;
//! assert_eq!(key.len(), 64);
//! # Ok::<(), neo_nep2::DecryptError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`neo_cryptography`] - hashing, Base58Check, AES-256-ECB, secp256r1 keys
//! - [`neo_wallets`] - NEP-2 decryption and encryption, addresses, WIF
//!
//! Decryption is CPU-bound (scrypt with N = 16384, r = 8, p = 8). Async
//! callers should use [`decrypt_async`].

#![warn(rustdoc::missing_crate_level_docs)]

mod bridge;
mod error;

pub use bridge::{
    decrypt, decrypt_account, decrypt_async, decrypt_legacy, decrypt_standard,
    decrypt_with_params, encrypt, validate_encrypted, Account, Result,
};
pub use error::DecryptError;

// Re-export the building blocks
pub use neo_cryptography as crypto;
pub use neo_wallets as wallets;
pub use neo_wallets::{Nep2Variant, ScryptParameters};
