//! `boc-yields` library crate.
//!
//! The binary (`boc`) is a thin wrapper around this library so that:
//!
//! - date normalization and lookup are testable without spawning processes
//! - the Valet client and the lookup table are reusable from other tools

pub mod app;
pub mod cli;
pub mod data;
pub mod date;
pub mod domain;
pub mod error;
pub mod logging;
pub mod report;
pub mod store;
