// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// The engine is generic over HashPrimitive: a SHA-224 binding defined
// outside the crate must agree with the RustCrypto reference.

#[cfg(test)]
mod custom_primitive_tests {
    use redoubt_pbkdf2::{HashAlgorithmParams, HashPrimitive, HmacKeyState, Pbkdf2Error, pbkdf2};
    use sha2::digest::consts::U64;
    use sha2::digest::generic_array::GenericArray;

    const H0: [u32; 8] = [
        0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7,
        0xbefa4fa4,
    ];

    struct Sha224;

    impl HashPrimitive for Sha224 {
        const NAME: &'static str = "SHA-224";
        const PARAMS: HashAlgorithmParams = HashAlgorithmParams {
            block_len: 64,
            digest_len: 28,
            length_field_len: 8,
        };

        type State = [u32; 8];
        type Block = [u8; 64];
        type Digest = [u8; 28];

        fn init() -> Self::State {
            H0
        }

        fn compress(state: &mut Self::State, block: &Self::Block) {
            let block: &GenericArray<u8, U64> = GenericArray::from_slice(&block[..]);
            sha2::compress256(state, core::slice::from_ref(block));
        }

        fn write_digest(state: &Self::State, out: &mut [u8]) {
            let mut full = [0u8; 32];
            for (chunk, word) in full.chunks_exact_mut(4).zip(state) {
                chunk.copy_from_slice(&word.to_be_bytes());
            }
            out.copy_from_slice(&full[..out.len()]);
        }
    }

    #[test]
    fn test_sha224_digest() {
        let mut out = [0u8; 28];
        Sha224::digest(b"abc", &mut out);

        assert_eq!(
            hex::encode(out),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
    }

    #[test]
    fn test_hmac_sha224_matches_reference() {
        use hmac::{Hmac, Mac};

        let mut ours = [0u8; 28];
        HmacKeyState::<Sha224>::new(b"Jefe").mac(b"what do ya want for nothing?", &mut ours);

        let mut reference =
            Hmac::<sha2::Sha224>::new_from_slice(b"Jefe").expect("Failed to new_from_slice(..)");
        reference.update(b"what do ya want for nothing?");

        assert_eq!(ours[..], reference.finalize().into_bytes()[..]);
    }

    #[test]
    fn test_pbkdf2_sha224_matches_reference() {
        for (iterations, len) in [(1u32, 28usize), (2, 29), (1000, 100)] {
            let mut ours = vec![0u8; len];
            pbkdf2::<Sha224>(b"password", b"salt", iterations, &mut ours)
                .expect("Failed to pbkdf2(..)");

            let mut reference = vec![0u8; len];
            ::pbkdf2::pbkdf2_hmac::<sha2::Sha224>(b"password", b"salt", iterations, &mut reference);

            assert_eq!(ours, reference, "c={} dkLen={}", iterations, len);
        }
    }

    #[test]
    fn test_pbkdf2_sha224_rejects_zero_iterations() {
        let mut out = [0u8; 28];
        assert_eq!(
            pbkdf2::<Sha224>(b"password", b"salt", 0, &mut out),
            Err(Pbkdf2Error::InvalidIterationCount)
        );
    }
}
