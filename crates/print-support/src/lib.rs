//! # Print Support
//!
//! Shared console helpers for the order driver and the fixture corpus.
//!
//! - [`Decimal`] renders an `f64` the way a default-configured output stream does
//!   (six significant digits, trailing zeros dropped), so `2035.0000000000002`
//!   prints as `2035`.
//! - [`setup_tracing`] installs the `tracing` subscriber used by every binary.

pub mod decimal;
pub mod tracing;

pub use decimal::Decimal;
pub use tracing::setup_tracing;
