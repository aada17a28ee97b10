// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// PBKDF2 error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pbkdf2Error {
    /// Iteration count is zero
    #[error("iteration count must be at least 1")]
    InvalidIterationCount,

    /// Requested output needs more than 2^32 - 1 blocks
    #[error("requested output length exceeds (2^32 - 1) * HashLen")]
    OutputTooLong,

    /// Iteration count is above the configured ceiling
    #[error("iteration count {iterations} exceeds ceiling {ceiling}")]
    IterationCeilingExceeded {
        /// Requested iteration count
        iterations: u32,
        /// Configured maximum
        ceiling: u32,
    },

    /// Algorithm name not recognized
    #[error("unsupported hash algorithm")]
    UnsupportedAlgorithm,

    /// Derived key does not match the expected key
    #[error("derived key does not match")]
    VerificationFailed,

    /// Hash primitive failure. Reserved: the SHA-1/SHA-2 bindings are total.
    #[error("hash primitive failed")]
    DerivationFailed,
}
