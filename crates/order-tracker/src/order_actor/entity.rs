//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables [`Order`] to
//! be managed by the generic [`ResourceActor`](actor_framework::ResourceActor).

use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Filter = OrderFilter;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Creates a new Order from creation parameters.
    ///
    /// Field rules (non-empty names, positive totals) are checked by the form before a
    /// request is sent; the store accepts whatever it receives.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Order::new(id, params))
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter.matches(self)
    }

    /// Merges the provided fields over the stored order.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.apply(update);
        Ok(())
    }
}
