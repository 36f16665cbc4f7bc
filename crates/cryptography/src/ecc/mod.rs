// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! secp256r1 (NIST P-256) keys as used by Neo accounts.

mod private_key;
mod public_key;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;

/// Size in bytes of a private key scalar and of a public key coordinate.
pub const KEY_SIZE: usize = 32;

/// Size in bytes of a SEC1 compressed public key.
pub const COMPRESSED_KEY_SIZE: usize = 33;

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("ecc: private key must be 32 bytes")]
    InvalidPrivateKeyLength,

    #[error("ecc: private key is not a valid secp256r1 scalar")]
    InvalidPrivateKey,

    #[error("ecc: private key is not valid hex")]
    InvalidEncoding,
}
