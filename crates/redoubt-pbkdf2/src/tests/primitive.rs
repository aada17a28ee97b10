// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Tests for the SHA-1/SHA-256/SHA-512 bindings (full hash with padding)
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS)
//     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
// [2] RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//     https://www.rfc-editor.org/rfc/rfc6234.html#section-8.5

use alloc::vec::Vec;

use crate::algorithm::HashAlgorithmParams;
use crate::primitive::{Absorber, HashPrimitive, Sha1, Sha256, Sha512};
use crate::util::{ByteArray, write_length_field, xor_in_place};

const ABC_56: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const ABC_112: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

fn hex_digest<H: HashPrimitive>(data: &[u8]) -> alloc::string::String {
    let mut out = H::Digest::zeroed();
    H::digest(data, &mut out);
    hex::encode(out.as_ref())
}

// =============================================================================
// SHA-1
// =============================================================================

#[test]
fn test_sha1_digest_vectors() {
    assert_eq!(
        hex_digest::<Sha1>(b""),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
    assert_eq!(
        hex_digest::<Sha1>(b"abc"),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
    assert_eq!(
        hex_digest::<Sha1>(ABC_56),
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
    );
}

#[test]
fn test_sha1_compress_single_padded_block() {
    // "abc" padded by hand into one block
    let mut block = [0u8; 64];
    block[..3].copy_from_slice(b"abc");
    block[3] = 0x80;
    write_length_field(&mut block, 3, 8);

    let mut state = Sha1::init();
    Sha1::compress(&mut state, &block);

    let mut digest = [0u8; 20];
    Sha1::write_digest(&state, &mut digest);

    assert_eq!(
        hex::encode(digest),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
}

#[test]
fn test_sha1_padding_boundaries() {
    // 55 bytes: 0x80 and length fit in one block
    assert_eq!(
        hex_digest::<Sha1>(&[b'a'; 55]),
        "c1c8bbdc22796e28c0e15163d20899b65621d65a"
    );
    // 56 bytes: length spills into a second block
    assert_eq!(
        hex_digest::<Sha1>(&[b'a'; 56]),
        "c2db330f6083854c99d4b5bfb6e8f29f201be699"
    );
    // 64 bytes: exactly one block, padding-only second block
    assert_eq!(
        hex_digest::<Sha1>(&[b'a'; 64]),
        "0098ba824b5c16427bd7a1122a5a442a25ec644d"
    );
}

// =============================================================================
// SHA-256
// =============================================================================

#[test]
fn test_sha256_digest_vectors() {
    assert_eq!(
        hex_digest::<Sha256>(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        hex_digest::<Sha256>(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        hex_digest::<Sha256>(ABC_56),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn test_sha256_padding_boundaries() {
    assert_eq!(
        hex_digest::<Sha256>(&[b'a'; 55]),
        "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"
    );
    assert_eq!(
        hex_digest::<Sha256>(&[b'a'; 56]),
        "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"
    );
    assert_eq!(
        hex_digest::<Sha256>(&[b'a'; 64]),
        "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"
    );
}

// =============================================================================
// SHA-512
// =============================================================================

#[test]
fn test_sha512_digest_vectors() {
    assert_eq!(
        hex_digest::<Sha512>(b""),
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    );
    assert_eq!(
        hex_digest::<Sha512>(b"abc"),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );

    assert_eq!(ABC_112.len(), 112, "Test vector should be 112 bytes");
    assert_eq!(
        hex_digest::<Sha512>(ABC_112),
        "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
         501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
    );
}

#[test]
fn test_sha512_padding_boundaries() {
    // 111 bytes: 0x80 and the 16-byte length fit in one block
    assert_eq!(
        hex_digest::<Sha512>(&[b'a'; 111]),
        "fa9121c7b32b9e01733d034cfc78cbf67f926c7ed83e82200ef8681819692176\
         0b4beff48404df811b953828274461673c68d04e297b0eb7b2b4d60fc6b566a2"
    );
    assert_eq!(
        hex_digest::<Sha512>(&[b'a'; 112]),
        "c01d080efd492776a1c43bd23dd99d0a2e626d481e16782e75d54c2503b5dc32\
         bd05f0f1ba33e568b88fd2d970929b719ecbb152f58f130a407c8830604b70ca"
    );
    assert_eq!(
        hex_digest::<Sha512>(&[b'a'; 128]),
        "b73d1929aa615934e61a871596b3f3b33359f42b8175602e89f7e06e5f658a24\
         3667807ed300314b95cacdd579f3e33abdfbe351909519a846d465c59582f321"
    );
}

// =============================================================================
// Contract
// =============================================================================

#[test]
fn test_params_match_associated_types() {
    fn check<H: HashPrimitive>(expected: HashAlgorithmParams) {
        assert_eq!(H::PARAMS, expected);
        assert_eq!(H::Block::LEN, expected.block_len);
        assert_eq!(H::Digest::LEN, expected.digest_len);
        assert!(expected.digest_len + 1 + expected.length_field_len <= expected.block_len);
    }

    check::<Sha1>(HashAlgorithmParams::SHA1);
    check::<Sha256>(HashAlgorithmParams::SHA256);
    check::<Sha512>(HashAlgorithmParams::SHA512);
}

#[test]
fn test_absorb_block_leaves_input_state_untouched() {
    fn check<H: HashPrimitive>()
    where
        H::State: PartialEq + core::fmt::Debug,
    {
        let init = H::init();
        let snapshot = init;
        let block = H::Block::zeroed();

        let first = H::absorb_block(&init, &block);
        let second = H::absorb_block(&init, &block);

        assert_eq!(init, snapshot);
        assert_eq!(first, second);
        assert_ne!(first, init);
    }

    check::<Sha1>();
    check::<Sha256>();
    check::<Sha512>();
}

#[test]
fn test_absorber_split_updates_match_one_shot() {
    fn check<H: HashPrimitive>() {
        let data: Vec<u8> = (0..=255u8).cycle().take(3 * H::Block::LEN + 7).collect();

        let mut expected = H::Digest::zeroed();
        H::digest(&data, &mut expected);

        for split in [0, 1, H::Block::LEN - 1, H::Block::LEN, H::Block::LEN + 1, data.len()] {
            let mut absorber = Absorber::<H>::new();
            absorber.update(&data[..split]);
            absorber.update(&data[split..]);

            let mut got = H::Digest::zeroed();
            absorber.finish(&mut got);

            assert_eq!(got.as_ref(), expected.as_ref(), "{} split at {}", H::NAME, split);
        }

        // Byte at a time
        let mut absorber = Absorber::<H>::new();
        for byte in &data {
            absorber.update(core::slice::from_ref(byte));
        }
        let mut got = H::Digest::zeroed();
        absorber.finish(&mut got);
        assert_eq!(got.as_ref(), expected.as_ref(), "{} byte at a time", H::NAME);
    }

    check::<Sha1>();
    check::<Sha256>();
    check::<Sha512>();
}

#[test]
fn test_absorber_resume_matches_continuous_absorption() {
    let mut prefix = [0u8; 64];
    prefix.iter_mut().enumerate().for_each(|(i, b)| *b = i as u8);

    let mut whole = prefix.to_vec();
    whole.extend_from_slice(b"tail bytes");

    let mut expected = [0u8; 32];
    Sha256::digest(&whole, &mut expected);

    let state = Sha256::absorb_block(&Sha256::init(), &prefix);
    let mut absorber = Absorber::<Sha256>::resume(state, 64);
    absorber.update(b"tail bytes");

    let mut got = [0u8; 32];
    absorber.finish(&mut got);

    assert_eq!(got, expected);
}

#[test]
fn test_write_digest_truncates_to_leading_bytes() {
    let mut full = [0u8; 64];
    Sha512::digest(b"abc", &mut full);

    let mut state = Sha512::init();
    let mut block = [0u8; 128];
    block[..3].copy_from_slice(b"abc");
    block[3] = 0x80;
    write_length_field(&mut block, 3, 16);
    Sha512::compress(&mut state, &block);

    let mut prefix = [0u8; 20];
    Sha512::write_digest(&state, &mut prefix);

    assert_eq!(prefix[..], full[..20]);
}

// =============================================================================
// Helpers
// =============================================================================

#[test]
fn test_write_length_field_widths() {
    let mut block = [0xffu8; 64];
    write_length_field(&mut block, 84, 8);
    // 84 bytes = 672 bits = 0x02a0
    assert_eq!(block[56..], [0, 0, 0, 0, 0, 0, 0x02, 0xa0]);
    assert!(block[..56].iter().all(|&b| b == 0xff));

    let mut block = [0xffu8; 128];
    write_length_field(&mut block, u64::MAX, 16);
    // u64::MAX bytes overflows 64 bits of bit length
    let mut expected = [0xffu8; 16];
    expected[..7].fill(0);
    expected[7] = 0x07;
    expected[15] = 0xf8;
    assert_eq!(block[112..], expected);
}

#[test]
fn test_xor_in_place() {
    let mut acc = [0x0fu8, 0xf0, 0xaa];
    xor_in_place(&mut acc, &[0xff, 0xff, 0xaa]);
    assert_eq!(acc, [0xf0, 0x0f, 0x00]);
}
