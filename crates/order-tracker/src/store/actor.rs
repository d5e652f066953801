use crate::clients::OrderClient;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use crate::store::OrderStore;
use actor_framework::ActorClient;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, instrument};

/// [`OrderStore`] backed by the order actor.
#[derive(Clone)]
pub struct ActorOrderStore {
    client: OrderClient,
    latency: Duration,
}

impl ActorOrderStore {
    pub fn new(client: OrderClient, latency: Duration) -> Self {
        Self { client, latency }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl OrderStore for ActorOrderStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Order>, OrderError> {
        self.simulate_latency().await;
        self.client.list_orders(None).await
    }

    #[instrument(skip(self))]
    async fn list_filtered(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        self.simulate_latency().await;
        self.client.list_orders(Some(filter)).await
    }

    #[instrument(skip(self))]
    async fn create(&self, data: OrderCreate) -> Result<Order, OrderError> {
        self.simulate_latency().await;
        let order = self.client.create_order(data).await?;
        info!(id = %order.id, "Order stored");
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn update(&self, id: OrderId, partial: OrderUpdate) -> Result<Order, OrderError> {
        self.simulate_latency().await;
        self.client.update_order(id, partial).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: OrderId) -> Result<(), OrderError> {
        self.simulate_latency().await;
        self.client.delete(id).await
    }
}
