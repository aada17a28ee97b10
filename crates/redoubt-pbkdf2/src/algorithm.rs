// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Variant sizes and runtime algorithm selection

use core::fmt;
use core::str::FromStr;

use crate::error::Pbkdf2Error;
use crate::variants::{pbkdf2_hmac_sha1, pbkdf2_hmac_sha256, pbkdf2_hmac_sha512};

/// Per-variant constants.
///
/// Every supported variant satisfies
/// `digest_len + 1 + length_field_len <= block_len`: a one-digest HMAC
/// message always fits in a single final block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashAlgorithmParams {
    /// Compression block size in bytes
    pub block_len: usize,
    /// Digest size in bytes
    pub digest_len: usize,
    /// Width in bytes of the Merkle-Damgard bit-length field
    pub length_field_len: usize,
}

impl HashAlgorithmParams {
    /// SHA-1 (RFC 3174)
    pub const SHA1: Self = Self {
        block_len: 64,
        digest_len: 20,
        length_field_len: 8,
    };

    /// SHA-256 (RFC 6234)
    pub const SHA256: Self = Self {
        block_len: 64,
        digest_len: 32,
        length_field_len: 8,
    };

    /// SHA-512 (RFC 6234)
    pub const SHA512: Self = Self {
        block_len: 128,
        digest_len: 64,
        length_field_len: 16,
    };

    /// Largest derivable output: (2^32 - 1) * digest_len bytes
    pub const fn max_output_len(&self) -> u64 {
        u32::MAX as u64 * self.digest_len as u64
    }
}

/// PBKDF2 pseudorandom function selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// PBKDF2-HMAC-SHA1
    Sha1,
    /// PBKDF2-HMAC-SHA256
    #[default]
    Sha256,
    /// PBKDF2-HMAC-SHA512
    Sha512,
}

impl Algorithm {
    /// All supported variants
    pub const ALL: [Algorithm; 3] = [Algorithm::Sha1, Algorithm::Sha256, Algorithm::Sha512];

    /// Block, digest and length-field sizes
    pub const fn params(self) -> HashAlgorithmParams {
        match self {
            Algorithm::Sha1 => HashAlgorithmParams::SHA1,
            Algorithm::Sha256 => HashAlgorithmParams::SHA256,
            Algorithm::Sha512 => HashAlgorithmParams::SHA512,
        }
    }

    /// Hash name, e.g. "SHA-256"
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest size in bytes
    pub const fn digest_len(self) -> usize {
        self.params().digest_len
    }

    /// OWASP Password Storage Cheat Sheet (2023) iteration counts
    pub const fn recommended_iterations(self) -> u32 {
        match self {
            Algorithm::Sha1 => 1_300_000,
            Algorithm::Sha256 => 600_000,
            Algorithm::Sha512 => 210_000,
        }
    }

    /// PBKDF2 with this variant's HMAC
    pub fn derive(
        self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out: &mut [u8],
    ) -> Result<(), Pbkdf2Error> {
        match self {
            Algorithm::Sha1 => pbkdf2_hmac_sha1(password, salt, iterations, out),
            Algorithm::Sha256 => pbkdf2_hmac_sha256(password, salt, iterations, out),
            Algorithm::Sha512 => pbkdf2_hmac_sha512(password, salt, iterations, out),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Pbkdf2Error;

    /// Accepts `sha1`, `sha-1`, `sha256`, `sha-256`, `sha512`, `sha-512` in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, Algorithm); 6] = [
            ("sha1", Algorithm::Sha1),
            ("sha-1", Algorithm::Sha1),
            ("sha256", Algorithm::Sha256),
            ("sha-256", Algorithm::Sha256),
            ("sha512", Algorithm::Sha512),
            ("sha-512", Algorithm::Sha512),
        ];

        let s = s.trim();

        NAMES
            .iter()
            .find(|(name, _)| s.eq_ignore_ascii_case(name))
            .map(|&(_, algorithm)| algorithm)
            .ok_or(Pbkdf2Error::UnsupportedAlgorithm)
    }
}
