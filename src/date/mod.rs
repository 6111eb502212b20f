//! Date normalization for Valet lookups.
//!
//! Observations are keyed by `YYYY-MM-DD`, but callers hand us dates in
//! whatever convention they happen to use. This module turns those into the
//! canonical key or a classified failure.

pub mod normalize;

pub use normalize::*;
