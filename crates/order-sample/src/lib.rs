//! # Order Sample Library
//!
//! The demonstration driver for [`order_framework`], split out of `main` so the
//! transcript can be asserted in tests.

pub mod demo;
pub mod transcript;

pub use demo::{run_demo, DemoError};
pub use transcript::Transcript;
