// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # redoubt_pbkdf2
//!
//! PBKDF2 per RFC 8018 Section 5.2 (formerly RFC 2898), driven by HMAC per
//! RFC 2104, over SHA-1, SHA-256 and SHA-512.
//!
//! The HMAC inner and outer states are computed once per derivation. Every
//! iteration after the first costs exactly two compression calls on
//! prepared, already-padded blocks: no allocation, no padding work, no
//! re-absorption of the key.
//!
//! ## Entry points
//!
//! - [`pbkdf2_hmac_sha1`], [`pbkdf2_hmac_sha256`], [`pbkdf2_hmac_sha512`]
//! - [`pbkdf2`]: generic engine over any [`HashPrimitive`]
//! - [`Algorithm`]: runtime selection of the variant
//! - [`Params`]: validated configuration with iteration ceiling and
//!   constant-time verification
//!
//! ## Example
//!
//! ```rust
//! use redoubt_pbkdf2::pbkdf2_hmac_sha256;
//!
//! let mut key = [0u8; 32];
//! pbkdf2_hmac_sha256(b"password", b"salt", 4096, &mut key).expect("Failed to derive key");
//!
//! assert_eq!(key[..4], [0xc5, 0xe4, 0x78, 0xd5]);
//! ```
//!
//! ## Features
//!
//! - `parallel`: compute output blocks concurrently with `rayon`. Only
//!   useful when the requested output spans several digests.
//!
//! References:
//! - RFC 8018: PKCS #5 v2.1, Section 5.2 (PBKDF2)
//!   <https://datatracker.ietf.org/doc/html/rfc8018#section-5.2>
//! - RFC 2104: HMAC
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 6070: PBKDF2 HMAC-SHA1 test vectors
//!   <https://datatracker.ietf.org/doc/html/rfc6070>

#![cfg_attr(not(any(test, feature = "parallel")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod algorithm;
mod error;
mod hmac;
mod params;
mod pbkdf2;
mod primitive;
mod util;
mod variants;

pub use self::algorithm::{Algorithm, HashAlgorithmParams};
pub use self::error::Pbkdf2Error;
pub use self::hmac::HmacKeyState;
pub use self::params::Params;
pub use self::pbkdf2::pbkdf2;
pub use self::primitive::{HashPrimitive, Sha1, Sha256, Sha512};
pub use self::util::ByteArray;
pub use self::variants::{pbkdf2_hmac_sha1, pbkdf2_hmac_sha256, pbkdf2_hmac_sha512};
