mod error;
pub mod format;
pub mod generate;
pub mod op;
pub mod sample;
pub mod vector;

pub use error::{Error, Result};
pub use generate::{run, Config, Report, NUM_TESTS};
pub use op::{Descriptor, Op, Operand, DESCRIPTORS};
pub use vector::Vector;

/// Deterministic generator for a given seed.
pub fn rng(seed: u64) -> rand_pcg::Pcg64 {
    rand_pcg::Pcg64::new(
        0xcafef00dd15ea5e5 ^ seed as u128,
        0xa02bdbf7bb3c0a7ac28fa16a64abf96,
    )
}
