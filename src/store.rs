//! Order store - persistence seam behind the order service
//!
//! - [`OrderStore`]: repository trait the service is injected with
//! - [`MemoryOrderStore`]: in-process implementation, insertion-ordered
//!
//! A database-backed implementation only has to satisfy the same trait;
//! the service and gateway never see past it.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::models::Order;

/// Store-level failure
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An order with this id already exists
    #[error("duplicate order id: {0}")]
    DuplicateOrderId(String),
}

/// Repository interface for persisted orders
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order. Fails on a duplicate `order_id`.
    async fn insert(&self, order: Order) -> Result<(), StoreError>;

    /// All orders, in insertion order.
    async fn list(&self) -> Result<Vec<Order>, StoreError>;

    /// Single order by id.
    async fn get(&self, order_id: &str) -> Result<Option<Order>, StoreError>;
}

// ============================================================
// MEMORY STORE
// ============================================================

#[derive(Default)]
struct Inner {
    /// Orders in insertion order - the listing contract
    orders: Vec<Order>,
    /// order_id -> position in `orders`
    index: FxHashMap<String, usize>,
}

/// In-memory `OrderStore`
///
/// A `Vec` keeps insertion order for listing; the id index makes single
/// lookups O(1). Both live under one lock so they can never disagree.
#[derive(Default)]
pub struct MemoryOrderStore {
    inner: RwLock<Inner>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn insert(&self, order: Order) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if inner.index.contains_key(&order.order_id) {
            return Err(StoreError::DuplicateOrderId(order.order_id));
        }
        let pos = inner.orders.len();
        inner.index.insert(order.order_id.clone(), pos);
        inner.orders.push(order);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.orders.clone())
    }

    async fn get(&self, order_id: &str) -> Result<Option<Order>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .index
            .get(order_id)
            .map(|&pos| inner.orders[pos].clone()))
    }
}
