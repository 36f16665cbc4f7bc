// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! Cryptographic primitives for Neo key handling.
//!
//! This crate provides the building blocks NEP-2 is composed from:
//! - SHA-256 / RIPEMD-160 hashing and the Neo combinations of both
//! - Base58Check encoding
//! - AES-256-ECB without padding
//! - secp256r1 private and public keys

pub mod aes;
pub mod base58;
pub mod ecc;
pub mod hash;

pub use ecc::{KeyError, PrivateKey, PublicKey, COMPRESSED_KEY_SIZE, KEY_SIZE};
