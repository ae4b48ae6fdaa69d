// letterstat-entropy/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod entropy;
pub mod redundancy;
pub mod statistics;

/// Common type definitions
pub type EntropyScore = f64;

pub use entropy::{entropy_per_symbol, shannon_entropy};
pub use redundancy::{max_entropy, redundancy, InvalidAlphabetSize};
pub use statistics::{compute_stats, EntropyStats};
