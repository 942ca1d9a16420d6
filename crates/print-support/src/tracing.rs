//! # Observability & Tracing
//!
//! Every binary in the workspace calls [`setup_tracing`] once at startup.
//!
//! Events go to **stderr**. Stdout carries the deterministic program output
//! (the order transcript, the fixture text) and must stay byte-stable no matter
//! what `RUST_LOG` is set to.
//!
//! ```bash
//! RUST_LOG=info cargo run -p order-sample     # mutations only
//! RUST_LOG=debug cargo run -p order-sample    # full payloads
//! RUST_LOG=order_framework=debug cargo run -p order-sample
//! ```
//!
//! With `RUST_LOG` unset the filter falls back to `error`, so a normal run prints
//! nothing extra.

/// Initializes the tracing subscriber with an environment-driven filter.
///
/// Uses the compact format without module targets. Calling it twice panics in
/// `tracing_subscriber`, so only `main` functions call it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
