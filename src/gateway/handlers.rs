//! Gateway HTTP handlers
//!
//! Thin axum adapters: extract the payload, delegate to `OrderService`,
//! shape the HTTP response with a fixed status code.

pub mod health;
pub mod helpers;
pub mod order;
pub mod query;

pub use health::*;
pub use order::*;
pub use query::*;
