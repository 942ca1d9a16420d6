/// Represents a customer order.
///
/// An `Order` is created by [`OrderSystem::create_order`](crate::OrderSystem::create_order)
/// with status [`status::CREATED`] and mutated in place afterwards. The status is a free
/// text label: any string may be stored through `update_order`.
use print_support::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Well-known status labels.
pub mod status {
    /// Status assigned on creation.
    pub const CREATED: &str = "created";
    /// Status assigned by `complete_order`.
    pub const COMPLETED: &str = "completed";
}

/// Identifier for Orders.
///
/// Uniqueness is not enforced; lookups act on the first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i32);

impl From<i32> for OrderId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub amount: f64,
    pub status: String,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `order_id` - Identifier chosen by the caller
    /// * `amount` - Order amount
    /// * `status` - Initial status label
    ///
    /// # Notes
    /// No validation happens here. Orders built directly are caller-owned values,
    /// e.g. the input of `calculate_total_price`.
    pub fn new(order_id: impl Into<OrderId>, amount: f64, status: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            amount,
            status: status.into(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == status::COMPLETED
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order ID: {}, Amount: {}, Status: {}",
            self.order_id,
            Decimal(self.amount),
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_driver_format() {
        let order = Order::new(2, 1500.0, status::COMPLETED);
        assert_eq!(
            order.to_string(),
            "Order ID: 2, Amount: 1500, Status: completed"
        );
    }

    #[test]
    fn test_display_keeps_fractional_amounts() {
        let order = Order::new(-4, 12.5, "held");
        assert_eq!(order.to_string(), "Order ID: -4, Amount: 12.5, Status: held");
    }

    #[test]
    fn test_is_completed() {
        assert!(Order::new(1, 1.0, status::COMPLETED).is_completed());
        assert!(!Order::new(1, 1.0, status::CREATED).is_completed());
    }
}
