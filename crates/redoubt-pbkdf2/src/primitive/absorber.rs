// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use super::HashPrimitive;
use crate::util::ByteArray;

/// Block buffering over a [`HashPrimitive`].
///
/// Only used for messages of arbitrary length: long HMAC keys and
/// `salt || INT(i)`. The PBKDF2 chain works on prepared blocks instead.
pub(crate) struct Absorber<H: HashPrimitive> {
    state: H::State,
    buffer: H::Block,
    buffer_len: usize,
    total_len: u64,
}

impl<H: HashPrimitive> Absorber<H> {
    /// Fresh absorber at H(0)
    pub fn new() -> Self {
        Self::resume(H::init(), 0)
    }

    /// Continue from `state`, which has already absorbed `absorbed` bytes
    pub fn resume(state: H::State, absorbed: u64) -> Self {
        Self {
            state,
            buffer: H::Block::zeroed(),
            buffer_len: 0,
            total_len: absorbed,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        let block_len = H::Block::LEN;
        let mut offset = 0;
        self.total_len += data.len() as u64;

        // Top up a partially filled buffer
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(block_len - self.buffer_len, data.len());

            self.buffer.as_mut()[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            offset = copy_len;

            if self.buffer_len == block_len {
                H::compress(&mut self.state, &self.buffer);
                self.buffer_len = 0;
            }
        }

        // Full blocks
        while offset + block_len <= data.len() {
            self.buffer
                .as_mut()
                .copy_from_slice(&data[offset..offset + block_len]);
            H::compress(&mut self.state, &self.buffer);
            offset += block_len;
        }

        // Keep the remainder
        if offset < data.len() {
            let remaining = data.len() - offset;
            self.buffer.as_mut()[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    pub fn finish(self, out: &mut H::Digest) {
        H::finalize(
            &self.state,
            &self.buffer.as_ref()[..self.buffer_len],
            self.total_len,
            out,
        );
    }
}

impl<H: HashPrimitive> Drop for Absorber<H> {
    fn drop(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.buffer_len = 0;
    }
}
