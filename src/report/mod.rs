//! Terminal rendering of observations and the series catalogue.

pub mod format;

pub use format::*;
