// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::Pbkdf2Error;
use crate::pbkdf2::pbkdf2;
use crate::primitive::{Sha1, Sha256, Sha512};

/// PBKDF2-HMAC-SHA1 (20-byte blocks)
///
/// # Errors
///
/// See [`pbkdf2`](crate::pbkdf2()).
#[inline]
pub fn pbkdf2_hmac_sha1(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    pbkdf2::<Sha1>(password, salt, iterations, out)
}

/// PBKDF2-HMAC-SHA256 (32-byte blocks)
///
/// # Errors
///
/// See [`pbkdf2`](crate::pbkdf2()).
#[inline]
pub fn pbkdf2_hmac_sha256(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    pbkdf2::<Sha256>(password, salt, iterations, out)
}

/// PBKDF2-HMAC-SHA512 (64-byte blocks)
///
/// # Errors
///
/// See [`pbkdf2`](crate::pbkdf2()).
#[inline]
pub fn pbkdf2_hmac_sha512(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    pbkdf2::<Sha512>(password, salt, iterations, out)
}
