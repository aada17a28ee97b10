// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104 with precomputed pad states

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::primitive::{Absorber, HashPrimitive};
use crate::util::ByteArray;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// HMAC key schedule: hash states after absorbing `K0 ⊕ ipad` and `K0 ⊕ opad`.
///
/// Built once per derivation. Every HMAC evaluation resumes from these
/// snapshots instead of re-absorbing the pad blocks, so it only pays for
/// its own message. Zeroized on drop.
pub struct HmacKeyState<H: HashPrimitive> {
    /// H state after absorbing K0 ⊕ ipad (0x36 repeated)
    ipad_state: H::State,
    /// H state after absorbing K0 ⊕ opad (0x5c repeated)
    opad_state: H::State,
}

impl<H: HashPrimitive> HmacKeyState<H> {
    /// Precompute pad states for `key` (any length)
    pub fn new(key: &[u8]) -> Self {
        // K0: key zero-padded to one block, or H(key) when longer than a block
        let mut ipad_block = H::Block::zeroed();

        if key.len() > H::Block::LEN {
            let mut hashed_key = H::Digest::zeroed();
            H::digest(key, &mut hashed_key);
            ipad_block.as_mut()[..H::Digest::LEN].copy_from_slice(hashed_key.as_ref());
            hashed_key.zeroize();
        } else {
            ipad_block.as_mut()[..key.len()].copy_from_slice(key);
        }

        let mut opad_block = ipad_block;

        for (i, o) in ipad_block.as_mut().iter_mut().zip(opad_block.as_mut()) {
            *i ^= IPAD;
            *o ^= OPAD;
        }

        let init = H::init();
        let state = Self {
            ipad_state: H::absorb_block(&init, &ipad_block),
            opad_state: H::absorb_block(&init, &opad_block),
        };

        ipad_block.zeroize();
        opad_block.zeroize();

        state
    }

    /// HMAC(K, message)
    pub fn mac(&self, message: &[u8], out: &mut H::Digest) {
        self.mac_parts(&[message], out);
    }

    /// HMAC(K, parts[0] || parts[1] || ...) without concatenating the parts
    pub(crate) fn mac_parts(&self, parts: &[&[u8]], out: &mut H::Digest) {
        // Inner hash: H(K0 ⊕ ipad || message)
        let mut inner = Absorber::<H>::resume(self.ipad_state, H::Block::LEN as u64);

        for part in parts {
            inner.update(part);
        }

        let mut inner_digest = H::Digest::zeroed();
        inner.finish(&mut inner_digest);

        // Outer hash: H(K0 ⊕ opad || inner)
        H::finalize(
            &self.opad_state,
            inner_digest.as_ref(),
            (H::Block::LEN + H::Digest::LEN) as u64,
            out,
        );

        inner_digest.zeroize();
    }

    #[inline(always)]
    pub(crate) fn inner_state(&self) -> &H::State {
        &self.ipad_state
    }

    #[inline(always)]
    pub(crate) fn outer_state(&self) -> &H::State {
        &self.opad_state
    }
}

impl<H: HashPrimitive> Zeroize for HmacKeyState<H> {
    fn zeroize(&mut self) {
        self.ipad_state.zeroize();
        self.opad_state.zeroize();
    }
}

impl<H: HashPrimitive> Drop for HmacKeyState<H> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<H: HashPrimitive> ZeroizeOnDrop for HmacKeyState<H> {}
