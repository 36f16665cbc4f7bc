// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! Hash functions for Neo cryptography.
//!
//! This module provides the hash functions used by Neo addresses and NEP-2
//! keys: SHA-256, RIPEMD-160 and the Neo-specific combinations of the two.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Computes SHA-256 hash of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes RIPEMD-160 hash of the input data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes Hash160 (RIPEMD-160 of SHA-256) of the input data.
/// This is the script hash behind every Neo address.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha256_hash = sha256(data);
    ripemd160(&sha256_hash)
}

/// Computes Hash256 (double SHA-256) of the input data.
/// Base58Check checksums and NEP-2 address hashes are prefixes of this digest.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let first_hash = sha256(data);
    sha256(&first_hash)
}

/// Extension trait for hashing anything byte-like in place.
pub trait Sha256Twice {
    fn sha256_twice(&self) -> [u8; 32];
}

impl<T: AsRef<[u8]> + ?Sized> Sha256Twice for T {
    #[inline]
    fn sha256_twice(&self) -> [u8; 32] {
        hash256(self.as_ref())
    }
}
