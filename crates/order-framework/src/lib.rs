//! # Order Framework
//!
//! A small order-processing component: a mutable collection of orders, a
//! handler notified on lifecycle events, and a total-price calculation with
//! discount and tax.
//!
//! ## Layers
//!
//! 1. **Model** ([`Order`], [`OrderId`], [`status`]) - plain data, serde-ready.
//! 2. **Core** ([`OrderSystem`], [`OrderHandler`], [`PricingPolicy`]) - synchronous,
//!    single-threaded. This is the contract most callers want.
//! 3. **Actor front** ([`OrderActor`], [`OrderClient`]) - the same core behind a
//!    Tokio channel for async callers. One actor, one system, requests handled in
//!    arrival order.
//!
//! ## Quick Example
//!
//! ```rust
//! use order_framework::{Order, OrderHandler, OrderSystem};
//!
//! let mut system = OrderSystem::new();
//! system.set_handler(OrderHandler::new().on_created(|o| println!("Order created: {o}")));
//!
//! system.create_order(1, 500.0).unwrap();
//! system.update_order(1, "processing");
//! system.complete_order(1);
//!
//! let total = system.calculate_total_price(&[
//!     Order::new(1, 500.0, "processing"),
//!     Order::new(2, 1500.0, "completed"),
//! ]);
//! assert!((total - 2035.0).abs() < 1e-9);
//! ```
//!
//! ## Errors
//!
//! Only creation with a non-positive amount fails ([`OrderError::InvalidAmount`]).
//! Updating or completing an unknown id is a silent no-op.

pub mod actor;
pub mod client;
pub mod error;
pub mod handler;
pub mod message;
pub mod order;
pub mod pricing;
pub mod system;

pub use actor::OrderActor;
pub use client::OrderClient;
pub use error::OrderError;
pub use handler::{OrderCallback, OrderHandler};
pub use message::{OrderRequest, Response};
pub use order::{status, Order, OrderId};
pub use pricing::PricingPolicy;
pub use system::OrderSystem;
