// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2 per RFC 8018 Section 5.2

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Pbkdf2Error;
use crate::hmac::HmacKeyState;
use crate::primitive::HashPrimitive;
use crate::util::{ByteArray, write_length_field, xor_in_place};

/// PBKDF2 with HMAC-`H` as the pseudorandom function.
///
/// Fills `out` with `DK = T_1 || T_2 || ... || T_l`, truncating the last
/// block to its leading bytes.
///
/// # Errors
///
/// - [`Pbkdf2Error::InvalidIterationCount`] if `iterations == 0`
/// - [`Pbkdf2Error::OutputTooLong`] if `out` needs more than 2^32 - 1 blocks
///
/// Both are checked before any hashing. On error `out` is left untouched.
pub fn pbkdf2<H: HashPrimitive>(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    if iterations == 0 {
        tracing::debug!(algorithm = H::NAME, "rejecting zero iteration count");
        return Err(Pbkdf2Error::InvalidIterationCount);
    }

    let blocks = block_count::<H>(out.len())?;

    tracing::debug!(
        algorithm = H::NAME,
        iterations,
        output_len = out.len(),
        blocks,
        "deriving key"
    );

    // Early return for zero-length output (valid, but no-op)
    if blocks == 0 {
        return Ok(());
    }

    let key = HmacKeyState::<H>::new(password);

    #[cfg(feature = "parallel")]
    if blocks > 1 {
        fill_blocks_parallel(&key, salt, iterations, out);
        return Ok(());
    }

    fill_blocks(&key, salt, iterations, out);

    Ok(())
}

/// l = ceil(dkLen / hLen), bounded by the 32-bit block index
pub(crate) fn block_count<H: HashPrimitive>(output_len: usize) -> Result<u32, Pbkdf2Error> {
    u32::try_from(output_len.div_ceil(H::Digest::LEN)).map_err(|_| {
        tracing::debug!(algorithm = H::NAME, output_len, "rejecting output length");
        Pbkdf2Error::OutputTooLong
    })
}

/// T_i for i = 1..=l, one after another
pub(crate) fn fill_blocks<H: HashPrimitive>(
    key: &HmacKeyState<H>,
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) {
    let mut workspace = ChainWorkspace::<H>::new();

    for (index, chunk) in (1..=u32::MAX).zip(out.chunks_mut(H::Digest::LEN)) {
        tracing::trace!(algorithm = H::NAME, block = index, "computing output block");
        workspace.fill_block(key, salt, index, iterations, chunk);
    }
}

/// T_i for i = 1..=l, one workspace per rayon worker
#[cfg(feature = "parallel")]
pub(crate) fn fill_blocks_parallel<H: HashPrimitive>(
    key: &HmacKeyState<H>,
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) {
    use rayon::prelude::*;

    out.par_chunks_mut(H::Digest::LEN).enumerate().for_each_init(
        ChainWorkspace::<H>::new,
        |workspace, (index, chunk)| {
            // block_count() bounds index + 1 to u32::MAX
            let index = index as u32 + 1;
            tracing::trace!(algorithm = H::NAME, block = index, "computing output block");
            workspace.fill_block(key, salt, index, iterations, chunk);
        },
    );
}

/// Working buffers for computing one `T_i`, zeroized on drop.
///
/// For j >= 2 the HMAC message is always one digest and the total hashed
/// length always `block_len + digest_len`, so both blocks carry their
/// padding from construction onwards. A chain step only rewrites the
/// leading `digest_len` bytes.
pub(crate) struct ChainWorkspace<H: HashPrimitive> {
    /// U_j in the leading digest bytes, padded for HMAC
    message: H::Block,
    /// Inner digest in the leading digest bytes, same padding
    scratch: H::Block,
    /// T_i = U_1 ⊕ U_2 ⊕ ... ⊕ U_c
    accumulator: H::Digest,
    /// Compression state being advanced
    state: H::State,
}

impl<H: HashPrimitive> ChainWorkspace<H> {
    pub fn new() -> Self {
        const {
            assert!(H::Block::LEN == H::PARAMS.block_len);
            assert!(H::Digest::LEN == H::PARAMS.digest_len);
            assert!(
                H::PARAMS.digest_len + 1 + H::PARAMS.length_field_len <= H::PARAMS.block_len
            );
        }

        let mut message = H::Block::zeroed();
        message.as_mut()[H::Digest::LEN] = 0x80;
        write_length_field(
            message.as_mut(),
            (H::Block::LEN + H::Digest::LEN) as u64,
            H::PARAMS.length_field_len,
        );

        Self {
            message,
            scratch: message,
            accumulator: H::Digest::zeroed(),
            state: H::init(),
        }
    }

    /// F(P, S, c, i) into `out` (at most one digest long)
    pub fn fill_block(
        &mut self,
        key: &HmacKeyState<H>,
        salt: &[u8],
        index: u32,
        iterations: u32,
        out: &mut [u8],
    ) {
        let digest_len = H::Digest::LEN;
        debug_assert!(out.len() <= digest_len);

        // U_1 = PRF(P, S || INT(i))
        let index_be = index.to_be_bytes();
        key.mac_parts(&[salt, &index_be[..]], &mut self.accumulator);
        self.message.as_mut()[..digest_len].copy_from_slice(self.accumulator.as_ref());

        // U_j = PRF(P, U_{j-1}); T ^= U_j
        for _ in 1..iterations {
            self.chain_step(key);
            xor_in_place(
                self.accumulator.as_mut(),
                &self.message.as_ref()[..digest_len],
            );
        }

        // Leading bytes of T_i
        out.copy_from_slice(&self.accumulator.as_ref()[..out.len()]);
    }

    /// message[..D] = HMAC(K, message[..D]): two compressions, no padding work
    #[inline(always)]
    fn chain_step(&mut self, key: &HmacKeyState<H>) {
        let digest_len = H::Digest::LEN;

        self.state = *key.inner_state();
        H::compress(&mut self.state, &self.message);
        H::write_digest(&self.state, &mut self.scratch.as_mut()[..digest_len]);

        self.state = *key.outer_state();
        H::compress(&mut self.state, &self.scratch);
        H::write_digest(&self.state, &mut self.message.as_mut()[..digest_len]);
    }

    #[cfg(test)]
    pub fn accumulator(&self) -> &H::Digest {
        &self.accumulator
    }

    #[cfg(test)]
    pub fn message(&self) -> &H::Block {
        &self.message
    }
}

impl<H: HashPrimitive> Zeroize for ChainWorkspace<H> {
    fn zeroize(&mut self) {
        self.message.zeroize();
        self.scratch.zeroize();
        self.accumulator.zeroize();
        self.state.zeroize();
    }
}

impl<H: HashPrimitive> Drop for ChainWorkspace<H> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<H: HashPrimitive> ZeroizeOnDrop for ChainWorkspace<H> {}
