//======================================================================
// Eaglesong Crate Test Suite
//======================================================================
#![cfg(test)]

use crate::consts::{RATE_BYTES, ROUNDS, STATE_WORDS};
use crate::{eaglesong_256, permute, permute_with_observer, Eaglesong256};
use digest::Digest;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};
use std::vec;
use std::vec::Vec;

fn check(message: &[u8], expected_hex: &str) {
    let expected = hex::decode(expected_hex).unwrap();
    let digest = eaglesong_256(message);
    assert_eq!(
        digest[..],
        expected[..],
        "digest mismatch for {}-byte message",
        message.len()
    );
}

//======================================================================
// Known-Answer Tests
//======================================================================

#[test]
fn empty_message_vector() {
    check(
        b"",
        "9e4452fc7aed93d7240b7b55263792befd1be09252b456401122ba71a56f62a0",
    );
}

#[test]
fn reference_text_vector() {
    // 34 '1' characters followed by a newline.
    let mut message = vec![b'1'; 34];
    message.push(b'\n');
    check(
        &message,
        "a50a3310f78cbaeadcffe2d46262119eeeda9d6568b4df1b636399742c867aca",
    );
}

#[test]
fn short_ascii_vectors() {
    check(
        b"abc",
        "1e93baa3ff9f8afa381430b7811d428c5b4514f39f6a78d00511b20305067b68",
    );
    check(
        b"hello",
        "69359f1b162014d981028608a54f01668926d89ffcb0710cae3d087c73a02db8",
    );
}

#[test]
fn delimiter_boundary_vectors() {
    // 31 bytes: the delimiter fills the first block exactly.
    // 32 bytes: the delimiter gets a block of its own.
    // 33 bytes: the delimiter follows one byte into the second block.
    let bytes: Vec<u8> = (0u8..=32).collect();
    check(
        &bytes[..RATE_BYTES - 1],
        "73643f7184f595ccf61894e710a85aebf0d24164191d7f9151d003156a3f97e9",
    );
    check(
        &bytes[..RATE_BYTES],
        "febf04e3f66e17351e3446fa77668a7a81c6d1a65a716ffd8d34dbbaa9103494",
    );
    check(
        &bytes[..RATE_BYTES + 1],
        "104febff5a06357299c0c4c5c54b6129d9d3342c8e00a890a6263eb1e1c3cf2d",
    );
}

#[test]
fn multi_block_vectors() {
    check(
        &[0u8; 32],
        "bd358e42ace104357521cab6848fa73acc21474d3d4ef78f7eb8f375c596fc4b",
    );
    check(
        &[0u8; 64],
        "34268d6206b2dd4865928ecdddf85db8662fb5eed77db3b35e0bce503e971d9e",
    );
    let alphabet: Vec<u8> = (0u8..64).map(|i| b'a' + (i % 26)).collect();
    check(
        &alphabet,
        "1b36169a8635c82d277de452b72c07ece7ac35b0ed9017d207f7df670ac0c03a",
    );
    check(
        &[0xAB; 100],
        "32c8a8928903ae3a5b7f3f09e5d45fcc76317d5f65b89f5d93895a8116e24ed8",
    );
}

//======================================================================
// Sponge Property Tests
//======================================================================

#[test]
fn identical_messages_hash_identically() {
    let first = eaglesong_256(b"determinism");
    let second = eaglesong_256(b"determinism");
    assert_eq!(first, second, "hashing should be deterministic");
}

#[test]
fn digest_is_always_32_bytes() {
    for len in [0usize, 1, 31, 32, 33, 63, 64, 65, 255] {
        let message = vec![0x5Au8; len];
        let digest = Eaglesong256::digest(&message);
        assert_eq!(digest.len(), 32, "digest length for {len}-byte message");
    }
}

#[test]
fn block_aligned_input_still_absorbs_delimiter_block() {
    // Absorbing 32 zero bytes XORs nothing into the zero state, so an
    // implementation that skipped the delimiter-only block would emit the
    // extraction of a single permutation of the all-zero state.
    let mut state = [0u32; STATE_WORDS];
    permute(&mut state);
    let mut skipped = [0u8; 32];
    for (i, chunk) in skipped.chunks_exact_mut(4).enumerate() {
        chunk.copy_from_slice(&state[i].to_le_bytes());
    }

    let digest = eaglesong_256(&[0u8; 32]);
    assert_ne!(
        digest, skipped,
        "delimiter block should be absorbed for block-aligned input"
    );
}

#[test]
fn single_bit_flip_changes_roughly_half_the_digest() {
    let base = eaglesong_256(b"hello");
    for byte in 0..5 {
        for bit in 0..8 {
            let mut message = *b"hello";
            message[byte] ^= 1 << bit;
            let flipped = eaglesong_256(&message);
            let distance: u32 = base
                .iter()
                .zip(flipped.iter())
                .map(|(a, b)| (a ^ b).count_ones())
                .sum();
            assert!(
                distance >= 80,
                "bit {bit} of byte {byte}: Hamming distance {distance} out of 256"
            );
        }
    }
}

//======================================================================
// Permutation Tests
//======================================================================

#[test]
fn permutation_applies_exactly_43_rounds() {
    let mut rounds_seen = Vec::new();
    let mut state = [0u32; STATE_WORDS];
    permute_with_observer(&mut state, |round, _| rounds_seen.push(round));
    assert_eq!(rounds_seen.len(), ROUNDS);
    assert_eq!(rounds_seen.first(), Some(&0));
    assert_eq!(rounds_seen.last(), Some(&(ROUNDS - 1)));

    // The round count does not depend on the state contents.
    let mut count = 0usize;
    let mut state = [0xDEAD_BEEFu32; STATE_WORDS];
    permute_with_observer(&mut state, |_, _| count += 1);
    assert_eq!(count, ROUNDS);
}

#[test]
fn permutation_of_zero_state_vector() {
    let mut state = [0u32; STATE_WORDS];
    permute(&mut state);
    assert_eq!(
        state,
        [
            0x3b354001, 0x0edf5def, 0x5e89e5a0, 0x77f444ad, 0xa9a8fccc, 0x63f0d5f4, 0x1f52ea8f,
            0x8cadaa1e, 0x12854936, 0xc967c496, 0xb2b7486e, 0x18475174, 0x8c4ac406, 0xb385aee1,
            0xf72e91e0, 0xa81c9e65,
        ]
    );
}

#[test]
fn first_round_snapshot_vector() {
    let mut state = [0u32; STATE_WORDS];
    let mut first = [0u32; STATE_WORDS];
    permute_with_observer(&mut state, |round, snapshot| {
        if round == 0 {
            first = *snapshot;
        }
    });
    assert_eq!(
        first,
        [
            0x30bcb0e0, 0x332e435c, 0x00065e75, 0xade14aa7, 0x5350691f, 0xee32331d, 0xc2a96364,
            0xda561f58, 0xe4a16573, 0x0f41e7e9, 0x97cc3748, 0x0f75f222, 0xa152bb4a, 0xf11dcab8,
            0x1b7cf1de, 0xcc34afc8,
        ]
    );
}

#[test]
fn observer_variant_matches_plain_permutation() {
    let mut rng = ChaCha8Rng::from_seed([7; 32]);
    for _ in 0..16 {
        let mut state = [0u32; STATE_WORDS];
        for word in state.iter_mut() {
            *word = rng.next_u32();
        }

        let mut plain = state;
        permute(&mut plain);

        let mut observed = state;
        let mut last_snapshot = [0u32; STATE_WORDS];
        permute_with_observer(&mut observed, |_, snapshot| last_snapshot = *snapshot);

        assert_eq!(observed, plain, "observer variant should not change the result");
        assert_eq!(last_snapshot, plain, "final snapshot should equal the permuted state");
    }
}

//======================================================================
// Streaming API Tests
//======================================================================

#[test]
fn incremental_update_matches_one_shot() {
    let message: Vec<u8> = (0u8..=200).collect();
    let expected = eaglesong_256(&message);
    for split in [0usize, 1, 31, 32, 33, 64, 100, 201] {
        let mut hasher = Eaglesong256::new();
        hasher.update(&message[..split]);
        hasher.update(&message[split..]);
        let digest = hasher.finalize();
        assert_eq!(digest[..], expected[..], "split at {split}");
    }
}

#[test]
fn random_split_updates_match_one_shot() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    for _ in 0..32 {
        let len = (rng.next_u32() % 257) as usize;
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);
        let expected = eaglesong_256(&message);

        let mut hasher = Eaglesong256::new();
        let mut rest = &message[..];
        while !rest.is_empty() {
            let take = 1 + (rng.next_u32() as usize) % rest.len();
            hasher.update(&rest[..take]);
            rest = &rest[take..];
        }
        assert_eq!(hasher.finalize()[..], expected[..], "length {len}");
    }
}

#[test]
fn finalize_reset_allows_hasher_reuse() {
    let mut hasher = Eaglesong256::new();
    hasher.update(b"first message");
    let first = hasher.finalize_reset();
    assert_eq!(first[..], eaglesong_256(b"first message")[..]);

    hasher.update(b"second message");
    let second = hasher.finalize();
    assert_eq!(second[..], eaglesong_256(b"second message")[..]);
}

//======================================================================
// Backend Consistency Tests
//======================================================================

#[cfg(feature = "eaglesong_simd")]
#[test]
fn simd_backend_matches_scalar_backend() {
    let mut rng = ChaCha8Rng::from_seed([13; 32]);
    for _ in 0..64 {
        let mut state = [0u32; STATE_WORDS];
        for word in state.iter_mut() {
            *word = rng.next_u32();
        }

        let mut soft_state = state;
        crate::backends::soft::permutation(&mut soft_state);
        let mut simd_state = state;
        crate::backends::simd::permutation(&mut simd_state);

        assert_eq!(
            simd_state, soft_state,
            "SIMD and scalar backends should produce identical states"
        );
    }
}
