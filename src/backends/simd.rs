//======================================================================
// src/backends/simd.rs
// SIMD (core::simd) implementation of the Eaglesong permutation.
//======================================================================

use crate::consts::{BIT_MATRIX, COEFFICIENTS, INJECTION_CONSTANTS, ROUNDS, STATE_WORDS};
use core::simd::{simd_swizzle, u32x16, u32x8};

/// Lane masks for the diffusion layer: `DIFFUSION_MASKS[j]` is all-ones
/// in lane `i` exactly when input word `j` feeds output word `i`.
const DIFFUSION_MASKS: [[u32; 16]; 16] = diffusion_masks();

const fn diffusion_masks() -> [[u32; 16]; 16] {
    let mut masks = [[0u32; 16]; 16];
    let mut j = 0;
    while j < STATE_WORDS {
        let mut i = 0;
        while i < STATE_WORDS {
            if BIT_MATRIX[j][i] == 1 {
                masks[j][i] = u32::MAX;
            }
            i += 1;
        }
        j += 1;
    }
    masks
}

const fn rotation_lanes(k: usize) -> [u32; 16] {
    let mut amounts = [0u32; 16];
    let mut i = 0;
    while i < STATE_WORDS {
        amounts[i] = COEFFICIENTS[i][k];
        i += 1;
    }
    amounts
}

/// Per-lane rotation amounts for the circulant layer.
const ROT_1: [u32; 16] = rotation_lanes(1);
const ROT_2: [u32; 16] = rotation_lanes(2);

/// Lanewise rotate-left with per-lane amounts. All amounts are in
/// 1..=31, so both shifts stay in range.
#[inline(always)]
fn rotate_left16(x: u32x16, amounts: u32x16) -> u32x16 {
    (x << amounts) | (x >> (u32x16::splat(32) - amounts))
}

#[inline(always)]
fn rotate_left8(x: u32x8, amount: u32) -> u32x8 {
    (x << u32x8::splat(amount)) | (x >> u32x8::splat(32 - amount))
}

/// The state permutation function using portable SIMD, one lane per
/// state word.
#[inline(always)]
pub(crate) fn permutation(state: &mut [u32; STATE_WORDS]) {
    let rot_1 = u32x16::from_array(ROT_1);
    let rot_2 = u32x16::from_array(ROT_2);
    let mut s = u32x16::from_array(*state);

    for index in 0..ROUNDS {
        // 1. Linear Diffusion: XOR-accumulate masked broadcasts of each word
        let words = s.to_array();
        let mut mixed = u32x16::splat(0);
        for j in 0..STATE_WORDS {
            mixed ^= u32x16::splat(words[j]) & u32x16::from_array(DIFFUSION_MASKS[j]);
        }

        // 2. Circulant Multiplication
        let mixed = mixed ^ rotate_left16(mixed, rot_1) ^ rotate_left16(mixed, rot_2);

        // 3. Round Constant Injection
        let mixed = mixed ^ u32x16::from_array(INJECTION_CONSTANTS[index]);

        // 4. Add-Rotate-Add on (even, odd) lane pairs
        let evens: u32x8 = simd_swizzle!(mixed, [0, 2, 4, 6, 8, 10, 12, 14]);
        let odds: u32x8 = simd_swizzle!(mixed, [1, 3, 5, 7, 9, 11, 13, 15]);
        let a = rotate_left8(evens + odds, 8);
        let b = a + rotate_left8(odds, 24);
        s = simd_swizzle!(a, b, [0, 8, 1, 9, 2, 10, 3, 11, 4, 12, 5, 13, 6, 14, 7, 15]);
    }

    *state = s.to_array();
}
