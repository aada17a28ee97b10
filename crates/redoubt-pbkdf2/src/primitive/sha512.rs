// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512 binding over the RustCrypto compression function

use ::sha2::digest::consts::U128;
use ::sha2::digest::generic_array::GenericArray;

use super::HashPrimitive;
use crate::algorithm::HashAlgorithmParams;

/// Initial hash values H(0) per RFC 6234 Section 6.3
/// First 64 bits of fractional parts of square roots of first 8 primes
const H0: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// SHA-512: 128-byte blocks, 64-byte digest, 128-bit length field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha512;

impl HashPrimitive for Sha512 {
    const NAME: &'static str = "SHA-512";
    const PARAMS: HashAlgorithmParams = HashAlgorithmParams::SHA512;

    type State = [u64; 8];
    type Block = [u8; 128];
    type Digest = [u8; 64];

    #[inline(always)]
    fn init() -> Self::State {
        H0
    }

    #[inline(always)]
    fn compress(state: &mut Self::State, block: &Self::Block) {
        let block: &GenericArray<u8, U128> = GenericArray::from_slice(&block[..]);
        ::sha2::compress512(state, core::slice::from_ref(block));
    }

    #[inline(always)]
    fn write_digest(state: &Self::State, out: &mut [u8]) {
        for (chunk, word) in out.chunks_mut(8).zip(state) {
            chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
        }
    }
}
