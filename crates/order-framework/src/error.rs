//! # Order Errors
//!
//! One error enum for the whole component. Only creation can fail on the
//! synchronous path; the actor front adds the two channel failures.

use crate::order::OrderId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// `create_order` was called with an amount that is not strictly positive.
    #[error("Order amount must be positive: order {order_id}, amount {amount}")]
    InvalidAmount { order_id: OrderId, amount: f64 },

    /// The actor's request channel is closed.
    #[error("Order actor closed")]
    ActorClosed,

    /// The actor dropped the response channel before answering.
    #[error("Order actor dropped response channel")]
    ActorDropped,
}
