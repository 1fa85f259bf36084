//======================================================================
// src/sponge.rs
// The Eaglesong sponge: EaglesongCore implements the low-level logic,
// CoreWrapper turns it into the user-facing hasher type.
//======================================================================

use crate::backends;
use crate::consts::{DELIMITER, RATE_BYTES, RATE_WORDS, STATE_WORDS};
use digest::{
    block_buffer::Eager,
    core_api::{
        Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
        OutputSizeUser, UpdateCore,
    },
    HashMarker, Output, Reset,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

//======================================================================
// EaglesongCore - low-level sponge engine
//======================================================================

/// Low-level Eaglesong-256 sponge core.
/// Users interact with it through `CoreWrapper` rather than directly.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EaglesongCore {
    state: [u32; STATE_WORDS],
}

impl EaglesongCore {
    /// XOR a full rate block into the state and permute.
    fn absorb_block(&mut self, block: &Block<Self>) {
        for (i, chunk) in block.chunks_exact(4).enumerate() {
            self.state[i] ^= u32::from_be_bytes(chunk.try_into().unwrap());
        }
        backends::permutation(&mut self.state);
    }

    /// Absorb the final partial block together with the delimiter, then
    /// permute one last time.
    ///
    /// Message bytes pack big-endian, but a word is only shifted while
    /// positions up to and including the delimiter remain: the delimiter
    /// lands in the low byte of the last touched word and later words
    /// stay zero. An empty tail XORs `0x00000006` into word 0.
    fn absorb_tail(&mut self, tail: &[u8]) {
        debug_assert!(tail.len() < RATE_BYTES);
        for i in 0..RATE_WORDS {
            let mut word = 0u32;
            for k in 0..4 {
                let pos = 4 * i + k;
                if pos < tail.len() {
                    word = (word << 8) ^ u32::from(tail[pos]);
                } else if pos == tail.len() {
                    word = (word << 8) ^ u32::from(DELIMITER);
                }
            }
            self.state[i] ^= word;
        }
        backends::permutation(&mut self.state);
    }
}

impl Default for EaglesongCore {
    fn default() -> Self {
        Self {
            state: [0; STATE_WORDS],
        }
    }
}

impl HashMarker for EaglesongCore {}

impl BlockSizeUser for EaglesongCore {
    type BlockSize = digest::consts::U32;
}

impl BufferKindUser for EaglesongCore {
    type BufferKind = Eager;
}

impl OutputSizeUser for EaglesongCore {
    type OutputSize = digest::consts::U32;
}

impl UpdateCore for EaglesongCore {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.absorb_block(block);
        }
    }
}

impl FixedOutputCore for EaglesongCore {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        self.absorb_tail(buffer.get_data());

        // Squeeze: the rate words serialize little-endian.
        for (i, chunk) in out.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&self.state[i].to_le_bytes());
        }
    }
}

impl Reset for EaglesongCore {
    #[inline]
    fn reset(&mut self) {
        self.state = [0; STATE_WORDS];
    }
}

//======================================================================
// High-level type alias
//======================================================================

/// `EaglesongCore` wrapped into a buffered hasher implementing the
/// `digest::Digest` trait.
pub type Hasher = CoreWrapper<EaglesongCore>;
