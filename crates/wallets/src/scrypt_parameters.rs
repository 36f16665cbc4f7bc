// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! Scrypt parameters for NEP-2 key derivation.
//!
//! Field names follow the NEP-6 `scrypt` object (`n`, `r`, `p`) so the type
//! can be read straight from wallet or configuration files.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

/// Length of the NEP-2 derived key: two 32-byte halves.
pub const DERIVED_KEY_SIZE: usize = 64;

/// Upper bound on the memory a single derivation may use (1 GiB).
pub const MAX_MEMORY_USAGE: u64 = 1 << 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScryptError {
    #[error("scrypt: {0}")]
    InvalidParameters(&'static str),

    #[error("scrypt: invalid derived key length")]
    InvalidOutputLength,
}

/// Scrypt parameters for key derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScryptParameters {
    /// CPU/memory cost parameter (N).
    pub n: u32,

    /// Block size parameter (r).
    pub r: u32,

    /// Parallelization parameter (p).
    pub p: u32,
}

impl ScryptParameters {
    /// Creates new scrypt parameters.
    pub fn new(n: u32, r: u32, p: u32) -> Result<Self, ScryptError> {
        let params = Self { n, r, p };
        params.validate()?;
        Ok(params)
    }

    /// The parameters fixed by NEP-2 for both Neo N3 and Neo Legacy keys.
    pub const fn default_nep2() -> Self {
        Self {
            n: 16384, // 2^14
            r: 8,
            p: 8,
        }
    }

    /// Cheap parameters for tests. Keys produced with them are not NEP-2 compatible.
    pub const fn fast() -> Self {
        Self { n: 256, r: 1, p: 1 }
    }

    pub fn validate(&self) -> Result<(), ScryptError> {
        if self.n <= 1 || !self.n.is_power_of_two() {
            return Err(ScryptError::InvalidParameters("N must be a power of 2 greater than 1"));
        }

        if self.r == 0 {
            return Err(ScryptError::InvalidParameters("R must be greater than 0"));
        }

        if self.p == 0 {
            return Err(ScryptError::InvalidParameters("P must be greater than 0"));
        }

        // N < 2^(128 * r / 8)
        if u64::from(self.log_n()) >= u64::from(self.r) * 16 {
            return Err(ScryptError::InvalidParameters("N is too large for R"));
        }

        // p <= ((2^32 - 1) * 32) / (128 * r)
        if u64::from(self.r) * u64::from(self.p) >= 0x4000_0000 {
            return Err(ScryptError::InvalidParameters("P parameter is too large"));
        }

        if self.memory_usage() > MAX_MEMORY_USAGE {
            return Err(ScryptError::InvalidParameters("memory usage exceeds 1 GiB"));
        }

        Ok(())
    }

    /// Gets the memory usage of one derivation in bytes.
    pub fn memory_usage(&self) -> u64 {
        128 * u64::from(self.r) * u64::from(self.n)
    }

    /// Gets the log2 of N parameter.
    #[inline]
    pub fn log_n(&self) -> u8 {
        self.n.trailing_zeros() as u8
    }

    /// Converts to scrypt crate parameters.
    pub fn to_scrypt_params(&self) -> Result<scrypt::Params, ScryptError> {
        self.validate()?;
        scrypt::Params::new(self.log_n(), self.r, self.p, DERIVED_KEY_SIZE)
            .map_err(|_| ScryptError::InvalidParameters("rejected by scrypt"))
    }

    /// Derives the 64-byte NEP-2 key from `passphrase` and `salt`.
    pub fn derive_key(
        &self,
        passphrase: &[u8],
        salt: &[u8],
    ) -> Result<Zeroizing<[u8; DERIVED_KEY_SIZE]>, ScryptError> {
        let params = self.to_scrypt_params()?;

        let mut derived = Zeroizing::new([0u8; DERIVED_KEY_SIZE]);
        scrypt::scrypt(passphrase, salt, &params, derived.as_mut_slice())
            .map_err(|_| ScryptError::InvalidOutputLength)?;

        Ok(derived)
    }
}

impl Default for ScryptParameters {
    fn default() -> Self {
        Self::default_nep2()
    }
}

impl std::fmt::Display for ScryptParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScryptParameters(N={}, r={}, p={})", self.n, self.r, self.p)
    }
}
