//======================================================================
// src/backends/soft.rs
// Software (scalar) implementation of the Eaglesong permutation.
//======================================================================

use crate::consts::{BIT_MATRIX, COEFFICIENTS, INJECTION_CONSTANTS, ROUNDS, STATE_WORDS};

/// A single Eaglesong round.
#[inline(always)]
fn round(state: &mut [u32; STATE_WORDS], index: usize) {
    // 1. Linear Diffusion (GF(2) matrix multiplication)
    let mut mixed = [0u32; STATE_WORDS];
    for i in 0..STATE_WORDS {
        for j in 0..STATE_WORDS {
            if BIT_MATRIX[j][i] == 1 {
                mixed[i] ^= state[j];
            }
        }
    }
    *state = mixed;

    // 2. Circulant Multiplication: w ^= (w <<< r1) ^ (w <<< r2)
    for i in 0..STATE_WORDS {
        let w = state[i];
        state[i] = w ^ w.rotate_left(COEFFICIENTS[i][1]) ^ w.rotate_left(COEFFICIENTS[i][2]);
    }

    // 3. Round Constant Injection
    for i in 0..STATE_WORDS {
        state[i] ^= INJECTION_CONSTANTS[index][i];
    }

    // 4. Add-Rotate-Add on adjacent word pairs
    for i in (0..STATE_WORDS).step_by(2) {
        let a = state[i].wrapping_add(state[i + 1]).rotate_left(8);
        let b = a.wrapping_add(state[i + 1].rotate_left(24));
        state[i] = a;
        state[i + 1] = b;
    }
}

/// The core state permutation function for Eaglesong.
#[cfg_attr(feature = "eaglesong_simd", allow(dead_code))]
#[inline(always)]
pub(crate) fn permutation(state: &mut [u32; STATE_WORDS]) {
    for index in 0..ROUNDS {
        round(state, index);
    }
}

/// Permutation variant that reports the state after every round.
///
/// `observer` receives the round index and a read-only snapshot once that
/// round's four layers have been applied. Intended for differential
/// testing against other implementations.
pub(crate) fn permutation_with_observer<F>(state: &mut [u32; STATE_WORDS], mut observer: F)
where
    F: FnMut(usize, &[u32; STATE_WORDS]),
{
    for index in 0..ROUNDS {
        round(state, index);
        observer(index, state);
    }
}
