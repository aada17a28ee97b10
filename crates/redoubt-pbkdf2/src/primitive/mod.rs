// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Merkle-Damgard hash contract and the SHA-1/SHA-2 bindings

mod absorber;
mod sha1;
mod sha256;
mod sha512;

use zeroize::Zeroize;

use crate::algorithm::HashAlgorithmParams;
use crate::util::{ByteArray, write_length_field};

pub(crate) use self::absorber::Absorber;
pub use self::sha1::Sha1;
pub use self::sha256::Sha256;
pub use self::sha512::Sha512;

/// Merkle-Damgard compression function family.
///
/// Implementors supply the initial chaining value, a single-block
/// compression function and big-endian digest serialization. Padding,
/// finalization and one-shot hashing are provided on top of those, per
/// RFC 6234 Section 4.
///
/// HMAC key precomputation snapshots the state after one absorbed block and
/// resumes from it for every evaluation. This is only sound because
/// absorbing a block from a fixed state is deterministic and independent of
/// anything absorbed afterwards. Sponge or tree constructions do not satisfy
/// this contract.
pub trait HashPrimitive: Sized + Send + Sync {
    /// Algorithm name, e.g. "SHA-256"
    const NAME: &'static str;

    /// Block, digest and length-field sizes
    const PARAMS: HashAlgorithmParams;

    /// Chaining value H(i)
    type State: Copy + Send + Sync + Zeroize;

    /// One compression block (`PARAMS.block_len` bytes)
    type Block: ByteArray;

    /// One digest (`PARAMS.digest_len` bytes)
    type Digest: ByteArray;

    /// Initial hash value H(0)
    fn init() -> Self::State;

    /// Absorbs one full block into `state`
    fn compress(state: &mut Self::State, block: &Self::Block);

    /// Writes the leading `out.len()` bytes of the big-endian digest
    fn write_digest(state: &Self::State, out: &mut [u8]);

    /// Pure block absorption: returns the successor state, leaves `state` untouched
    #[inline(always)]
    fn absorb_block(state: &Self::State, block: &Self::Block) -> Self::State {
        let mut next = *state;
        Self::compress(&mut next, block);
        next
    }

    /// Pads `tail` and produces the digest.
    ///
    /// `tail` holds the unabsorbed bytes (shorter than one block) and
    /// `total_len` the message length in bytes including everything already
    /// absorbed into `state`.
    fn finalize(state: &Self::State, tail: &[u8], total_len: u64, out: &mut Self::Digest) {
        let block_len = Self::Block::LEN;
        let width = Self::PARAMS.length_field_len;
        debug_assert!(tail.len() < block_len);

        let mut state = *state;
        let mut block = Self::Block::zeroed();

        // Append 0x80 (1 bit followed by zeros)
        block.as_mut()[..tail.len()].copy_from_slice(tail);
        block.as_mut()[tail.len()] = 0x80;

        // No room for the length field: flush and continue on a zero block
        if tail.len() + 1 + width > block_len {
            Self::compress(&mut state, &block);
            block.zeroize();
        }

        write_length_field(block.as_mut(), total_len, width);
        Self::compress(&mut state, &block);
        Self::write_digest(&state, out.as_mut());

        block.zeroize();
        state.zeroize();
    }

    /// One-shot hash of `data`
    fn digest(data: &[u8], out: &mut Self::Digest) {
        let mut absorber = Absorber::<Self>::new();
        absorber.update(data);
        absorber.finish(out);
    }
}
