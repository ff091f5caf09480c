//! Gateway Services Layer
//!
//! Business logic lives here; handlers are thin HTTP adapters that
//! delegate to these services.

pub mod order;

pub use order::{OrderService, OrderServiceError};
