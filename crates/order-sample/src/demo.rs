//! # Demonstration Run
//!
//! Creates two orders, updates one, completes the other, then prices a
//! caller-supplied pair:
//!
//! ```text
//! Order created: Order ID: 1, Amount: 500, Status: created
//! Order created: Order ID: 2, Amount: 1500, Status: created
//! Order updated: Order ID: 1, Amount: 500, Status: processing
//! Order completed: Order ID: 2, Amount: 1500, Status: completed
//! Total price: 2035
//! ```

use crate::transcript::Transcript;
use order_framework::{Order, OrderError, OrderSystem};
use print_support::Decimal;
use thiserror::Error;
use tracing::{info, info_span};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Order processing failed: {0}")]
    Order(#[from] OrderError),
}

/// Runs the driver sequence, recording every emitted line into `transcript`.
///
/// Returns the computed total.
pub fn run_demo(transcript: &Transcript) -> Result<f64, DemoError> {
    let mut system = OrderSystem::new();
    system.set_handler(transcript.handler());

    {
        let _span = info_span!("order_lifecycle").entered();
        system.create_order(1, 500.0)?;
        system.create_order(2, 1500.0)?;
        system.update_order(1, "processing");
        system.complete_order(2);
    }

    let orders = vec![
        Order::new(1, 500.0, "processing"),
        Order::new(2, 1500.0, "completed"),
    ];
    let total = system.calculate_total_price(&orders);
    info!(total, "Total computed");
    transcript.push(format!("Total price: {}", Decimal(total)));

    Ok(total)
}
