//======================================================================
// src/backends/mod.rs
// Selects the appropriate permutation backend at compile time.
//======================================================================

use cfg_if::cfg_if;

// Always compiled: the observer variant and the backend differential
// test run the scalar code.
pub(crate) mod soft;

cfg_if! {
    if #[cfg(feature = "eaglesong_simd")] {
        pub(crate) mod simd;
        pub(crate) use self::simd::permutation;
    } else {
        pub(crate) use self::soft::permutation;
    }
}
