//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and maps framework failures onto [`OrderError`].
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// `get` and `delete` come from [`ActorClient`]; the methods below add the order-specific
/// payload handling.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Lists orders in insertion order. An empty filter is sent as no filter at all.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        filter: Option<OrderFilter>,
    ) -> Result<Vec<Order>, OrderError> {
        let filter = filter.filter(|f| !f.is_empty());
        self.list(filter).await
    }

    /// Stores a new order and returns it with its assigned ID.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_order(
        &self,
        id: OrderId,
        update: OrderUpdate,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
