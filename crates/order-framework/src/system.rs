//! # Order System
//!
//! The synchronous core of the component: an ordered collection of [`Order`]s,
//! one [`OrderHandler`], and the [`PricingPolicy`] used for totals.
//!
//! ## Operations
//!
//! * **Create**:
//!     1. Rejects amounts that are not strictly positive (NaN included) with
//!        [`OrderError::InvalidAmount`]. Nothing is stored, nothing fires.
//!     2. Appends `{id, amount, "created"}`.
//!     3. Fires `on_order_created` with the stored order.
//!
//! * **Update** / **Complete**:
//!     1. Linear search for the *first* order with the id.
//!     2. On a hit, sets the status (`"completed"` for complete) and fires the
//!        matching slot.
//!     3. On a miss, does nothing. A miss is not an error.
//!
//! * **Total price**: left-to-right sum of `tax(discount(amount))` over a
//!   caller-owned slice. The slice is not retained.
//!
//! Status transitions are not policed: an order may be updated after completion,
//! and completing twice fires the callback twice.

use crate::error::OrderError;
use crate::handler::OrderHandler;
use crate::order::{status, Order, OrderId};
use crate::pricing::PricingPolicy;
use tracing::{debug, info, warn};

/// Owns the orders and the handler. No state is shared between instances.
#[derive(Debug, Default)]
pub struct OrderSystem {
    handler: OrderHandler,
    orders: Vec<Order>,
    pricing: PricingPolicy,
}

impl OrderSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a system that prices with `pricing` instead of the default rules.
    pub fn with_pricing(pricing: PricingPolicy) -> Self {
        Self {
            pricing,
            ..Self::default()
        }
    }

    /// Replaces the stored handler.
    pub fn set_handler(&mut self, handler: OrderHandler) {
        debug!(?handler, "Handler installed");
        self.handler = handler;
    }

    pub fn create_order(
        &mut self,
        order_id: impl Into<OrderId>,
        amount: f64,
    ) -> Result<(), OrderError> {
        let order_id = order_id.into();
        if amount.is_nan() || amount <= 0.0 {
            warn!(%order_id, amount, "Create rejected");
            return Err(OrderError::InvalidAmount { order_id, amount });
        }

        self.orders.push(Order::new(order_id, amount, status::CREATED));
        info!(%order_id, amount, size = self.orders.len(), "Created");

        if let Some(order) = self.orders.last() {
            self.handler.created(order);
        }
        Ok(())
    }

    pub fn update_order(&mut self, order_id: impl Into<OrderId>, new_status: impl Into<String>) {
        let order_id = order_id.into();
        let Some(order) = first_match(&mut self.orders, order_id) else {
            debug!(%order_id, "Update skipped, no such order");
            return;
        };
        order.status = new_status.into();
        info!(%order_id, status = %order.status, "Updated");
        self.handler.updated(order);
    }

    pub fn complete_order(&mut self, order_id: impl Into<OrderId>) {
        let order_id = order_id.into();
        let Some(order) = first_match(&mut self.orders, order_id) else {
            debug!(%order_id, "Complete skipped, no such order");
            return;
        };
        order.status = status::COMPLETED.to_string();
        info!(%order_id, "Completed");
        self.handler.completed(order);
    }

    /// Sums the final price of every order in `orders`, in iteration order.
    pub fn calculate_total_price(&self, orders: &[Order]) -> f64 {
        let total = self.pricing.total(orders.iter().map(|order| order.amount));
        debug!(count = orders.len(), total, "Total price");
        total
    }

    /// The stored orders in creation order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// First stored order with `order_id`.
    pub fn find(&self, order_id: impl Into<OrderId>) -> Option<&Order> {
        let order_id = order_id.into();
        self.orders.iter().find(|order| order.order_id == order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }
}

// Borrows only the collection so the handler stays reachable while the
// matched order is held.
fn first_match(orders: &mut [Order], order_id: OrderId) -> Option<&mut Order> {
    orders.iter_mut().find(|order| order.order_id == order_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_appends_with_created_status() {
        let mut system = OrderSystem::new();
        system.create_order(1, 500.0).unwrap();
        system.create_order(2, 1500.0).unwrap();

        let ids: Vec<i32> = system.orders().iter().map(|o| o.order_id.0).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(system.orders().iter().all(|o| o.status == status::CREATED));
    }

    #[test]
    fn test_non_positive_and_nan_amounts_are_rejected() {
        let mut system = OrderSystem::new();
        for amount in [0.0, -0.0, -1.0, f64::NAN] {
            let err = system.create_order(99, amount).unwrap_err();
            assert!(matches!(err, OrderError::InvalidAmount { order_id: OrderId(99), .. }));
        }
        assert!(system.is_empty());
    }

    #[test]
    fn test_lookup_acts_on_first_duplicate() {
        let mut system = OrderSystem::new();
        system.create_order(5, 10.0).unwrap();
        system.create_order(5, 20.0).unwrap();

        system.update_order(5, "shipped");

        assert_eq!(system.orders()[0].status, "shipped");
        assert_eq!(system.orders()[1].status, status::CREATED);
        assert_eq!(system.find(5).map(|o| o.amount), Some(10.0));
    }

    #[test]
    fn test_update_after_completion_is_allowed() {
        let mut system = OrderSystem::new();
        system.create_order(1, 10.0).unwrap();
        system.complete_order(1);
        system.update_order(1, "reopened");
        assert_eq!(system.find(1).unwrap().status, "reopened");
    }

    #[test]
    fn test_with_pricing_is_used_for_totals() {
        let policy = PricingPolicy {
            tax_factor: 2.0,
            ..PricingPolicy::default()
        };
        let system = OrderSystem::with_pricing(policy);
        let total = system.calculate_total_price(&[Order::new(1, 10.0, "_")]);
        assert!((total - 20.0).abs() < 1e-9);
        assert_eq!(system.pricing(), &policy);
    }
}
