//! # Fixture Corpus
//!
//! Stand-alone programs used as inputs to source analyzers. Each module
//! exercises one cluster of language features and exposes
//! `run(out: &mut dyn Write)`; each has a matching binary under `src/bin/`
//! that runs it against stdout.
//!
//! | Module | Binary | Features |
//! |---|---|---|
//! | [`class_hierarchy`] | `class_hierarchy` | trait hierarchies, mix-ins, trait objects |
//! | [`virtual_methods`] | `virtual_methods` | overridable hooks, fixed algorithms, multi-level chains |
//! | [`operator_overload`] | `operator_overload` | `std::ops`, conversions, index proxies |
//! | [`type_traits`] | `type_traits` | type-level predicates, GATs, detection, const recursion |
//! | [`constraints`] | `constraints` | named bounds and their combinations |
//! | [`call_graph`] | `call_graph` | plain call chains |
//!
//! Output is deterministic; logging goes to stderr.
//!
//! The unresolved-call sample lives in the separate `fixture-unresolved`
//! package, outside the workspace, because it is not meant to link.

pub mod call_graph;
pub mod class_hierarchy;
pub mod constraints;
pub mod error;
pub mod operator_overload;
pub mod type_traits;
pub mod virtual_methods;

pub use error::FixtureError;
