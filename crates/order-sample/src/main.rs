//! # Order Sample
//!
//! Runs the demonstration sequence against a fresh
//! [`OrderSystem`](order_framework::OrderSystem) and prints the transcript.
//!
//! ```bash
//! cargo run -p order-sample
//! RUST_LOG=debug cargo run -p order-sample   # logs go to stderr
//! ```

use order_sample::{run_demo, DemoError, Transcript};
use print_support::setup_tracing;
use tracing::info;

fn main() -> Result<(), DemoError> {
    setup_tracing();
    info!("Starting order sample");

    let transcript = Transcript::new();
    run_demo(&transcript)?;

    for line in transcript.lines() {
        println!("{line}");
    }

    info!("Order sample completed");
    Ok(())
}
