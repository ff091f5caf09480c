// models.rs - Order domain records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order lifecycle status
///
/// Every order the service accepts starts as `Placed`. Later transitions
/// (shipping, delivery, cancellation) belong to back-office flows outside
/// this gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,    // Accepted and persisted, awaiting fulfilment
    Shipped,   // Handed to the carrier
    Delivered, // Confirmed received
    Cancelled, // Cancelled by customer or back office
}

impl OrderStatus {
    /// Wire representation, e.g. "PLACED"
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Placed => "PLACED",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

// ============================================================
// ORDER (the record persisted by the store)
// ============================================================

/// One line item within an order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub qty: u32,
    /// Unit price
    pub price: Decimal,
}

/// Order - a customer purchase transaction
///
/// Immutable once stored. Identity is `order_id` alone; everything else
/// is plain value data with structural equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub customer_name: String,
    /// Display name of the order, taken from the first line item
    pub name: String,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
    /// Line items in the order the customer sent them
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Total order value across all line items
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price * Decimal::from(item.qty))
            .sum()
    }
}
