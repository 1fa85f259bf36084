#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(feature = "eaglesong_simd", feature(portable_simd))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point: public API surface and module wiring.
//======================================================================

#[cfg(test)]
extern crate std;

// --- Module declarations ---
pub mod consts;
mod backends;
pub mod sponge;

// --- Test Module ---
#[cfg(test)]
mod tests;

pub use digest;

use crate::consts::{DIGEST_BYTES, STATE_WORDS};

// --- Convenience Type Aliases for Users ---

/// Streaming Eaglesong-256 hasher implementing [`digest::Digest`].
pub type Eaglesong256 = sponge::Hasher;

/// One-shot Eaglesong-256: hash `message` into a 32-byte digest.
pub fn eaglesong_256(message: &[u8]) -> [u8; DIGEST_BYTES] {
    use digest::Digest;
    Eaglesong256::digest(message).into()
}

/// Apply the raw 43-round Eaglesong permutation in place.
pub fn permute(state: &mut [u32; STATE_WORDS]) {
    backends::permutation(state);
}

/// Apply the permutation, invoking `observer` with the round index and a
/// read-only state snapshot after each round. Always runs the portable
/// scalar code, independent of the selected backend.
pub fn permute_with_observer<F>(state: &mut [u32; STATE_WORDS], observer: F)
where
    F: FnMut(usize, &[u32; STATE_WORDS]),
{
    backends::soft::permutation_with_observer(state, observer);
}
