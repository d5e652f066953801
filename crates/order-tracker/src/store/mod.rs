//! # Order Store
//!
//! [`OrderStore`] is the capability set the view layer needs from its backend. The only
//! implementation, [`ActorOrderStore`], talks to the in-memory order actor and pauses for
//! a fixed simulated latency before every call.

pub mod actor;

pub use actor::ActorOrderStore;

use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;

/// Async access to the order collection.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Snapshot of every order in insertion order.
    async fn list(&self) -> Result<Vec<Order>, OrderError>;

    /// Orders satisfying every predicate present in `filter`.
    async fn list_filtered(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError>;

    /// Stores `data` under a new ID and returns the stored record.
    async fn create(&self, data: OrderCreate) -> Result<Order, OrderError>;

    /// Merges the fields present in `partial` over the stored record.
    async fn update(&self, id: OrderId, partial: OrderUpdate) -> Result<Order, OrderError>;

    async fn delete(&self, id: OrderId) -> Result<(), OrderError>;
}
