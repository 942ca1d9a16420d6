//! # Order Handler
//!
//! A record of three independent, optional lifecycle callbacks. Each slot
//! receives a read-only view of the order after the mutation has been applied.
//! Absent slots are skipped silently.
//!
//! Callbacks run synchronously on the caller's thread, inside the
//! `OrderSystem` operation that triggered them. They must not fail: the
//! mutation has already happened when they run.

use crate::order::Order;
use std::fmt;
use std::sync::Arc;

/// A single lifecycle callback.
///
/// `Arc` makes the handler record cheap to clone; `Send + Sync` lets an
/// [`OrderActor`](crate::OrderActor) carry it onto its task.
pub type OrderCallback = Arc<dyn Fn(&Order) + Send + Sync>;

/// Callbacks fired by [`OrderSystem`](crate::OrderSystem).
///
/// # Example
///
/// ```
/// use order_framework::{OrderHandler, OrderSystem};
///
/// let handler = OrderHandler::new()
///     .on_created(|order| println!("Order created: {order}"))
///     .on_completed(|order| println!("Order completed: {order}"));
///
/// let mut system = OrderSystem::new();
/// system.set_handler(handler);
/// system.create_order(1, 500.0).unwrap();
/// ```
#[derive(Clone, Default)]
pub struct OrderHandler {
    pub on_order_created: Option<OrderCallback>,
    pub on_order_updated: Option<OrderCallback>,
    pub on_order_completed: Option<OrderCallback>,
}

impl OrderHandler {
    /// Creates a handler with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_created(mut self, callback: impl Fn(&Order) + Send + Sync + 'static) -> Self {
        self.on_order_created = Some(Arc::new(callback));
        self
    }

    pub fn on_updated(mut self, callback: impl Fn(&Order) + Send + Sync + 'static) -> Self {
        self.on_order_updated = Some(Arc::new(callback));
        self
    }

    pub fn on_completed(mut self, callback: impl Fn(&Order) + Send + Sync + 'static) -> Self {
        self.on_order_completed = Some(Arc::new(callback));
        self
    }

    pub(crate) fn created(&self, order: &Order) {
        notify(&self.on_order_created, order);
    }

    pub(crate) fn updated(&self, order: &Order) {
        notify(&self.on_order_updated, order);
    }

    pub(crate) fn completed(&self, order: &Order) {
        notify(&self.on_order_completed, order);
    }
}

fn notify(slot: &Option<OrderCallback>, order: &Order) {
    if let Some(callback) = slot {
        callback(order);
    }
}

impl fmt::Debug for OrderHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderHandler")
            .field("on_order_created", &self.on_order_created.is_some())
            .field("on_order_updated", &self.on_order_updated.is_some())
            .field("on_order_completed", &self.on_order_completed.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_empty_slots_are_skipped() {
        let handler = OrderHandler::new();
        let order = Order::new(1, 10.0, "created");
        handler.created(&order);
        handler.updated(&order);
        handler.completed(&order);
    }

    #[test]
    fn test_clone_shares_callbacks() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let handler = OrderHandler::new().on_updated(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let copy = handler.clone();

        let order = Order::new(1, 10.0, "x");
        handler.updated(&order);
        copy.updated(&order);
        copy.created(&order);

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug_reports_present_slots() {
        let handler = OrderHandler::new().on_completed(|_| {});
        let text = format!("{handler:?}");
        assert!(text.contains("on_order_created: false"));
        assert!(text.contains("on_order_completed: true"));
    }
}
