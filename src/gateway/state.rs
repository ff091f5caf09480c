use std::sync::Arc;

use super::services::OrderService;

/// Shared gateway state
///
/// The order service is the only collaborator handlers need; it is
/// constructed once at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<OrderService>,
}

impl AppState {
    pub fn new(order_service: Arc<OrderService>) -> Self {
        Self { order_service }
    }
}
