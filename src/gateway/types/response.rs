//! Response DTOs and error codes
//!
//! - `OrderResponse` / `OrderItemResponse`: success payloads, built from
//!   stored orders and never mutated afterwards
//! - `ErrorResponse`: error body with a stable machine-readable code

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Order, OrderItem, OrderStatus};

// ============================================================================
// Order Response DTOs
// ============================================================================

/// One line item of a placed order
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    /// Product name
    #[schema(example = "Widget")]
    pub name: String,
    /// Quantity ordered
    #[schema(example = 2)]
    pub qty: u32,
    /// Unit price
    pub price: Decimal,
}

/// A placed order as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Unique order identifier
    #[schema(example = "ORD-5f3a8e0c-...")]
    pub order_id: String,
    /// Customer display name
    #[schema(example = "Alice")]
    pub customer_name: String,
    /// Order display name (first line item)
    #[schema(example = "Widget")]
    pub name: String,
    /// Current lifecycle status
    pub status: OrderStatus,
    /// Calendar date the order was placed
    pub order_date: NaiveDate,
    /// Line items in request order
    pub items: Vec<OrderItemResponse>,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            name: item.name,
            qty: item.qty,
            price: item.price,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id,
            customer_name: order.customer_name,
            name: order.name,
            status: order.status,
            order_date: order.order_date,
            items: order.items.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Error Body
// ============================================================================

/// Error response body: `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, see [`error_codes`]
    #[schema(example = "INVALID_PARAMETER")]
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

/// Standard API error codes
pub mod error_codes {
    pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
    pub const ORDER_NOT_FOUND: &str = "ORDER_NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::*;

    #[test]
    fn test_order_response_wire_casing() {
        let order = Order {
            order_id: "ORD-test".to_string(),
            customer_name: "Alice".to_string(),
            name: "Widget".to_string(),
            status: OrderStatus::Placed,
            order_date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            items: vec![OrderItem {
                name: "Widget".to_string(),
                qty: 2,
                price: Decimal::from_str("9.99").unwrap(),
            }],
        };

        let value = serde_json::to_value(OrderResponse::from(order)).unwrap();
        assert_eq!(value["orderId"], "ORD-test");
        assert_eq!(value["customerName"], "Alice");
        assert_eq!(value["status"], "PLACED");
        assert_eq!(value["orderDate"], "2026-08-06");
        assert_eq!(value["items"][0]["qty"], 2);
    }

    #[test]
    fn test_error_response_shape() {
        let value =
            serde_json::to_value(ErrorResponse::new(error_codes::ORDER_NOT_FOUND, "no such order"))
                .unwrap();
        assert_eq!(value["error"]["code"], "ORDER_NOT_FOUND");
        assert_eq!(value["error"]["message"], "no such order");
    }
}
