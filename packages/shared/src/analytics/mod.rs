//! Pure derivations over already-fetched games and stats snapshots.
//!
//! Nothing in here performs I/O or holds state between calls, so every
//! function is safe to call concurrently and returns the same output for
//! the same input.

pub mod aggregation;
pub mod clock;
pub mod errors;
pub mod monthly;
pub mod normalizer;
pub mod openings;
pub mod ratings;
pub mod summary;

/// Round to two decimal places, exact halves to the even neighbour.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
