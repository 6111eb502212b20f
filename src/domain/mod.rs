//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the decoded Valet group payload (`BondYieldsData`, `Observation`, ...)
//! - the series catalogue (`YieldSeries`)

pub mod types;

pub use types::*;
