//! # Order Messages
//!
//! Requests sent from an [`OrderClient`](crate::OrderClient) to an
//! [`OrderActor`](crate::OrderActor). Each variant mirrors one `OrderSystem`
//! operation and carries a one-shot channel for the reply.

use crate::error::OrderError;
use crate::handler::OrderHandler;
use crate::order::{Order, OrderId};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, OrderError>>;

#[derive(Debug)]
pub enum OrderRequest {
    SetHandler {
        handler: OrderHandler,
        respond_to: Response<()>,
    },
    Create {
        order_id: OrderId,
        amount: f64,
        respond_to: Response<()>,
    },
    Update {
        order_id: OrderId,
        status: String,
        respond_to: Response<()>,
    },
    Complete {
        order_id: OrderId,
        respond_to: Response<()>,
    },
    TotalPrice {
        orders: Vec<Order>,
        respond_to: Response<f64>,
    },
    Snapshot {
        respond_to: Response<Vec<Order>>,
    },
}
