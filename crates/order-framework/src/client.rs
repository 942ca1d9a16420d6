//! # Order Client
//!
//! Cloneable async handle to an [`OrderActor`](crate::OrderActor). It holds only
//! the sender half of the request channel.

use crate::error::OrderError;
use crate::handler::OrderHandler;
use crate::message::OrderRequest;
use crate::order::{Order, OrderId};
use tokio::sync::{mpsc, oneshot};
use tracing::instrument;

#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    pub async fn set_handler(&self, handler: OrderHandler) -> Result<(), OrderError> {
        self.request(|respond_to| OrderRequest::SetHandler {
            handler,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, order_id: i32, amount: f64) -> Result<(), OrderError> {
        self.request(|respond_to| OrderRequest::Create {
            order_id: OrderId(order_id),
            amount,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self, status))]
    pub async fn update_order(
        &self,
        order_id: i32,
        status: impl Into<String>,
    ) -> Result<(), OrderError> {
        let status = status.into();
        self.request(|respond_to| OrderRequest::Update {
            order_id: OrderId(order_id),
            status,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn complete_order(&self, order_id: i32) -> Result<(), OrderError> {
        self.request(|respond_to| OrderRequest::Complete {
            order_id: OrderId(order_id),
            respond_to,
        })
        .await
    }

    pub async fn calculate_total_price(&self, orders: Vec<Order>) -> Result<f64, OrderError> {
        self.request(|respond_to| OrderRequest::TotalPrice { orders, respond_to })
            .await
    }

    /// Copy of the actor's current orders.
    pub async fn orders(&self) -> Result<Vec<Order>, OrderError> {
        self.request(|respond_to| OrderRequest::Snapshot { respond_to })
            .await
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, OrderError>>) -> OrderRequest,
    ) -> Result<T, OrderError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| OrderError::ActorClosed)?;
        response.await.map_err(|_| OrderError::ActorDropped)?
    }
}
