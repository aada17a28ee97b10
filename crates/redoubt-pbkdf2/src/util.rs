// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-size buffers and big-endian helpers

use zeroize::Zeroize;

/// Byte array with a compile-time length.
///
/// Implemented for every `[u8; N]`. Hash bindings name their block and
/// digest buffers through it, so the engine never touches the heap.
pub trait ByteArray: AsRef<[u8]> + AsMut<[u8]> + Copy + Send + Sync + Zeroize {
    /// Length in bytes
    const LEN: usize;

    /// All-zero value
    fn zeroed() -> Self;
}

impl<const N: usize> ByteArray for [u8; N] {
    const LEN: usize = N;

    #[inline(always)]
    fn zeroed() -> Self {
        [0u8; N]
    }
}

/// acc ^= src
#[inline(always)]
pub(crate) fn xor_in_place(acc: &mut [u8], src: &[u8]) {
    debug_assert_eq!(acc.len(), src.len());

    for (a, b) in acc.iter_mut().zip(src) {
        *a ^= *b;
    }
}

/// Merkle-Damgard length field: message length in bits, big-endian, in the
/// last `width` bytes of `block`.
#[inline(always)]
pub(crate) fn write_length_field(block: &mut [u8], total_len: u64, width: usize) {
    debug_assert!(width <= 16 && width <= block.len());

    let bits = (u128::from(total_len) << 3).to_be_bytes();
    let end = block.len();

    block[end - width..].copy_from_slice(&bits[bits.len() - width..]);
}
