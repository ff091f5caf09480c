//! shopfront - E-commerce order placement backend
//!
//! A thin HTTP gateway over an order service:
//!
//! ```text
//! client ──▶ gateway (axum) ──▶ OrderService ──▶ OrderStore
//! ```
//!
//! # Modules
//!
//! - [`models`] - Order domain records (Order, OrderItem, OrderStatus)
//! - [`store`] - Persistence seam (`OrderStore`) and in-memory implementation
//! - [`gateway`] - Route table, handlers, DTOs, OpenAPI docs
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing / file-appender setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod store;

// Convenient re-exports at crate root
pub use models::{Order, OrderItem, OrderStatus};
pub use store::{MemoryOrderStore, OrderStore, StoreError};
