// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 binding over the RustCrypto compression function

use ::sha1::digest::consts::U64;
use ::sha1::digest::generic_array::GenericArray;

use super::HashPrimitive;
use crate::algorithm::HashAlgorithmParams;

/// Initial hash value H(0) per RFC 3174 Section 6.1
const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// SHA-1: 64-byte blocks, 20-byte digest, 64-bit length field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha1;

impl HashPrimitive for Sha1 {
    const NAME: &'static str = "SHA-1";
    const PARAMS: HashAlgorithmParams = HashAlgorithmParams::SHA1;

    type State = [u32; 5];
    type Block = [u8; 64];
    type Digest = [u8; 20];

    #[inline(always)]
    fn init() -> Self::State {
        H0
    }

    #[inline(always)]
    fn compress(state: &mut Self::State, block: &Self::Block) {
        let block: &GenericArray<u8, U64> = GenericArray::from_slice(&block[..]);
        ::sha1::compress(state, core::slice::from_ref(block));
    }

    #[inline(always)]
    fn write_digest(state: &Self::State, out: &mut [u8]) {
        for (chunk, word) in out.chunks_mut(4).zip(state) {
            chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
        }
    }
}
