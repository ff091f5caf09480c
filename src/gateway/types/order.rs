//! Order request DTOs and validation rules
//!
//! - `OrderRequest`: HTTP request deserialization
//! - Validation is business-level and runs inside `OrderService`, not in
//!   the gateway handlers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Order placement request (HTTP request deserialization)
///
/// The gateway deserializes this as-is and hands it to the service
/// unmodified; `OrderService::place_order` runs the `Validate` rules.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Customer display name (must not be blank)
    #[validate(length(min = 1, message = "customerName must not be empty"))]
    pub customer_name: String,
    /// Requested line items (at least one)
    #[validate(
        length(min = 1, message = "order must contain at least one item"),
        nested
    )]
    pub items: Vec<OrderItemRequest>,
}

/// One requested line item
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    /// Product name (must not be blank)
    #[validate(length(min = 1, message = "item name must not be empty"))]
    pub name: String,
    /// Quantity (at least 1)
    #[validate(range(min = 1, message = "qty must be at least 1"))]
    pub qty: u32,
    /// Unit price; zero when the client omits it
    #[serde(default)]
    pub price: Decimal,
}
