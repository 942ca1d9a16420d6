//! # Order Actor
//!
//! Runs an [`OrderSystem`] behind a channel so several async tasks can share it.
//!
//! The actor owns the system outright and handles one request at a time, so no
//! lock guards the orders and the notification order is the order in which
//! requests arrive. Every request is executed synchronously inside the loop:
//! handlers still run inline, before the reply is sent.
//!
//! ```rust
//! use order_framework::OrderActor;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = OrderActor::new(16);
//!     let task = tokio::spawn(actor.run());
//!
//!     client.create_order(1, 500.0).await.unwrap();
//!     client.complete_order(1).await.unwrap();
//!
//!     drop(client);
//!     let system = task.await.unwrap();
//!     assert!(system.orders()[0].is_completed());
//! }
//! ```

use crate::client::OrderClient;
use crate::message::OrderRequest;
use crate::system::OrderSystem;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub struct OrderActor {
    receiver: mpsc::Receiver<OrderRequest>,
    system: OrderSystem,
}

impl OrderActor {
    /// Creates an actor around an empty `OrderSystem` and its client.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When it is full,
    ///   client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, OrderClient) {
        Self::with_system(OrderSystem::new(), buffer_size)
    }

    /// Creates an actor around an existing system, e.g. one built with a
    /// custom pricing policy.
    pub fn with_system(system: OrderSystem, buffer_size: usize) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, system };
        (actor, OrderClient::new(sender))
    }

    /// Processes requests until every client is dropped, then hands the system back.
    pub async fn run(mut self) -> OrderSystem {
        info!(size = self.system.len(), "Order actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::SetHandler {
                    handler,
                    respond_to,
                } => {
                    self.system.set_handler(handler);
                    let _ = respond_to.send(Ok(()));
                }
                OrderRequest::Create {
                    order_id,
                    amount,
                    respond_to,
                } => {
                    let result = self.system.create_order(order_id, amount);
                    let _ = respond_to.send(result);
                }
                OrderRequest::Update {
                    order_id,
                    status,
                    respond_to,
                } => {
                    self.system.update_order(order_id, status);
                    let _ = respond_to.send(Ok(()));
                }
                OrderRequest::Complete {
                    order_id,
                    respond_to,
                } => {
                    self.system.complete_order(order_id);
                    let _ = respond_to.send(Ok(()));
                }
                OrderRequest::TotalPrice { orders, respond_to } => {
                    let total = self.system.calculate_total_price(&orders);
                    let _ = respond_to.send(Ok(total));
                }
                OrderRequest::Snapshot { respond_to } => {
                    debug!(size = self.system.len(), "Snapshot");
                    let _ = respond_to.send(Ok(self.system.orders().to_vec()));
                }
            }
        }

        info!(size = self.system.len(), "Order actor shutdown");
        self.system
    }
}
