//! Order Service - business logic for order placement and listing
//!
//! The service owns everything the HTTP layer must not: request
//! validation, order-id generation, status and date stamping. Storage is
//! delegated to the injected [`OrderStore`].

use std::sync::Arc;

use chrono::Local;
use uuid::Uuid;
use validator::Validate;

use crate::gateway::types::{OrderRequest, OrderResponse};
use crate::models::{Order, OrderItem, OrderStatus};
use crate::store::{OrderStore, StoreError};

/// Order service error
#[derive(Debug, thiserror::Error)]
pub enum OrderServiceError {
    /// Request failed business validation
    #[error("{0}")]
    InvalidRequest(String),
    /// The backing store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Order Service - handles all order business logic
///
/// Constructed once at startup with its store and shared behind an
/// `Arc` by the gateway state.
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Place a new order
    ///
    /// Validates the request, stamps id / status / date, persists the
    /// order and returns it in response shape.
    pub async fn place_order(
        &self,
        req: OrderRequest,
    ) -> Result<OrderResponse, OrderServiceError> {
        req.validate()
            .map_err(|e| OrderServiceError::InvalidRequest(e.to_string()))?;

        let first_item = req
            .items
            .first()
            .ok_or_else(|| {
                OrderServiceError::InvalidRequest("order must contain at least one item".into())
            })?;

        let order = Order {
            order_id: format!("ORD-{}", Uuid::new_v4()),
            customer_name: req.customer_name.clone(),
            name: first_item.name.clone(),
            status: OrderStatus::Placed,
            order_date: Local::now().date_naive(),
            items: req
                .items
                .iter()
                .map(|item| OrderItem {
                    name: item.name.clone(),
                    qty: item.qty,
                    price: item.price,
                })
                .collect(),
        };

        tracing::info!(
            order_id = %order.order_id,
            customer = %order.customer_name,
            items = order.items.len(),
            total = %order.total(),
            "order placed"
        );

        self.store.insert(order.clone()).await?;

        Ok(order.into())
    }

    /// All orders, in the order they were placed
    pub async fn list_orders(&self) -> Result<Vec<OrderResponse>, OrderServiceError> {
        let orders = self.store.list().await?;
        Ok(orders.into_iter().map(Into::into).collect())
    }

    /// Single order by id, `None` when unknown
    pub async fn get_order(
        &self,
        order_id: &str,
    ) -> Result<Option<OrderResponse>, OrderServiceError> {
        let order = self.store.get(order_id).await?;
        Ok(order.map(Into::into))
    }
}
