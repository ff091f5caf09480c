//! Gateway types module
//!
//! Types shaping the API boundary:
//!
//! ## Input Types
//! - [`OrderRequest`]: order deserialization from HTTP requests
//! - [`OrderItemRequest`]: one requested line item
//!
//! ## Output Types
//! - [`OrderResponse`] / [`OrderItemResponse`]: order payloads
//! - [`ErrorResponse`]: error body with a stable code
//!
//! ## Submodules
//! - [`order`]: request DTOs and validation rules
//! - [`response`]: response DTOs and error codes

pub mod order;
pub mod response;

pub use order::{OrderItemRequest, OrderRequest};
pub use response::{ErrorResponse, OrderItemResponse, OrderResponse, error_codes};
