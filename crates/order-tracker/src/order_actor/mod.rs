//! # Order Actor
//!
//! The Order resource actor owns the in-memory order collection.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] / [`seeded()`] - Factory functions that create the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_tracker::order_actor;
//! use order_tracker::clients::OrderClient;
//! use order_tracker::model::{OrderFilter, OrderStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::seeded(32);
//!     let client = OrderClient::new(generic_client);
//!
//!     // Start the actor (no dependencies, so context is ())
//!     tokio::spawn(actor.run(()));
//!
//!     let partial = client.list_orders(Some(OrderFilter::status(OrderStatus::Partial))).await?;
//!     assert_eq!(partial.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## ID Assignment
//!
//! IDs come from the actor's counter, which starts one past the highest seeded ID and
//! never goes back. Deleting `CMD-005` and then creating an order yields `CMD-006`.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{seed_orders, Order};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates an empty Order actor and its client. The first order is `CMD-001`.
pub fn new(capacity: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    with_orders(capacity, Vec::new())
}

/// Creates an Order actor holding the five demo orders.
pub fn seeded(capacity: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    with_orders(capacity, seed_orders())
}

/// Creates an Order actor holding `orders` in the given order.
pub fn with_orders(
    capacity: usize,
    orders: Vec<Order>,
) -> (ResourceActor<Order>, ResourceClient<Order>) {
    let next_id = orders.iter().map(|order| order.id.0).max().unwrap_or(0) + 1;
    ResourceActor::with_entities(capacity, orders, next_id)
}
