// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Validated derivation configuration

use alloc::vec;
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::algorithm::Algorithm;
use crate::error::Pbkdf2Error;

/// PBKDF2 configuration: algorithm, iteration count and iteration ceiling.
///
/// Invariant: `1 <= iterations <= max_iterations`. The ceiling bounds the
/// latency of a single derivation, which has no internal cancellation.
///
/// ```rust
/// use redoubt_pbkdf2::{Algorithm, Params};
///
/// let params = Params::new(Algorithm::Sha512)
///     .with_max_iterations(500_000)
///     .and_then(|p| p.with_iterations(4096))
///     .expect("Failed to build params");
///
/// let key = params.derive_vec(b"password", b"salt", 32).expect("Failed to derive key");
/// assert_eq!(key[..2], [0xd1, 0x97]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    algorithm: Algorithm,
    iterations: u32,
    max_iterations: u32,
}

impl Params {
    /// `algorithm` with its recommended iteration count and no ceiling
    #[must_use]
    pub const fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            iterations: algorithm.recommended_iterations(),
            max_iterations: u32::MAX,
        }
    }

    /// Set the iteration count
    ///
    /// # Errors
    ///
    /// - [`Pbkdf2Error::InvalidIterationCount`] if `iterations == 0`
    /// - [`Pbkdf2Error::IterationCeilingExceeded`] if above the ceiling
    pub const fn with_iterations(mut self, iterations: u32) -> Result<Self, Pbkdf2Error> {
        if iterations == 0 {
            return Err(Pbkdf2Error::InvalidIterationCount);
        }

        if iterations > self.max_iterations {
            return Err(Pbkdf2Error::IterationCeilingExceeded {
                iterations,
                ceiling: self.max_iterations,
            });
        }

        self.iterations = iterations;
        Ok(self)
    }

    /// Set the iteration ceiling
    ///
    /// # Errors
    ///
    /// - [`Pbkdf2Error::InvalidIterationCount`] if `ceiling == 0`
    /// - [`Pbkdf2Error::IterationCeilingExceeded`] if the current count is above it
    pub const fn with_max_iterations(mut self, ceiling: u32) -> Result<Self, Pbkdf2Error> {
        if ceiling == 0 {
            return Err(Pbkdf2Error::InvalidIterationCount);
        }

        if self.iterations > ceiling {
            return Err(Pbkdf2Error::IterationCeilingExceeded {
                iterations: self.iterations,
                ceiling,
            });
        }

        self.max_iterations = ceiling;
        Ok(self)
    }

    /// Configured algorithm
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Configured iteration count
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Configured iteration ceiling
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Derive into a caller-provided buffer
    ///
    /// # Errors
    ///
    /// See [`pbkdf2`](crate::pbkdf2()).
    pub fn derive(&self, password: &[u8], salt: &[u8], out: &mut [u8]) -> Result<(), Pbkdf2Error> {
        self.algorithm.derive(password, salt, self.iterations, out)
    }

    /// Derive `len` bytes into a buffer that is zeroized on drop
    ///
    /// # Errors
    ///
    /// See [`pbkdf2`](crate::pbkdf2()).
    pub fn derive_vec(
        &self,
        password: &[u8],
        salt: &[u8],
        len: usize,
    ) -> Result<Zeroizing<Vec<u8>>, Pbkdf2Error> {
        let mut out = Zeroizing::new(vec![0u8; len]);
        self.derive(password, salt, &mut out)?;
        Ok(out)
    }

    /// Derive `expected.len()` bytes and compare in constant time
    ///
    /// # Errors
    ///
    /// - [`Pbkdf2Error::VerificationFailed`] on mismatch or empty `expected`
    /// - any error of [`Params::derive`]
    pub fn verify(&self, password: &[u8], salt: &[u8], expected: &[u8]) -> Result<(), Pbkdf2Error> {
        if expected.is_empty() {
            return Err(Pbkdf2Error::VerificationFailed);
        }

        let derived = self.derive_vec(password, salt, expected.len())?;

        if bool::from(derived.as_slice().ct_eq(expected)) {
            Ok(())
        } else {
            tracing::debug!(algorithm = self.algorithm.name(), "derived key mismatch");
            Err(Pbkdf2Error::VerificationFailed)
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}
