// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 binding over the RustCrypto compression function

use ::sha2::digest::consts::U64;
use ::sha2::digest::generic_array::GenericArray;

use super::HashPrimitive;
use crate::algorithm::HashAlgorithmParams;

/// Initial hash values H(0) per RFC 6234 Section 6.1
/// First 32 bits of fractional parts of square roots of first 8 primes
const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-256: 64-byte blocks, 32-byte digest, 64-bit length field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;

impl HashPrimitive for Sha256 {
    const NAME: &'static str = "SHA-256";
    const PARAMS: HashAlgorithmParams = HashAlgorithmParams::SHA256;

    type State = [u32; 8];
    type Block = [u8; 64];
    type Digest = [u8; 32];

    #[inline(always)]
    fn init() -> Self::State {
        H0
    }

    #[inline(always)]
    fn compress(state: &mut Self::State, block: &Self::Block) {
        let block: &GenericArray<u8, U64> = GenericArray::from_slice(&block[..]);
        ::sha2::compress256(state, core::slice::from_ref(block));
    }

    #[inline(always)]
    fn write_digest(state: &Self::State, out: &mut [u8]) {
        for (chunk, word) in out.chunks_mut(4).zip(state) {
            chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
        }
    }
}
