//! Set-partition combinatorics.
//!
//! A log record assigns each of `n` parameters to a group index; the number of
//! distinct indices is the number of blocks in that partition. Under a uniform
//! prior over set partitions, the block count `k` occurs with probability
//! `S(n, k) / B(n)`, where `S` is the Stirling number of the second kind and
//! `B` the Bell number. This module computes both exactly and derives the
//! expected-frequency curve used to check sampler output.

mod error;
mod expected;
mod stirling;

#[cfg(test)]
mod tests;

pub use error::*;
pub use expected::*;
pub use stirling::*;
