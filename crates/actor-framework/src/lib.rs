//! # Actor Framework
//!
//! Foundational building blocks for type-safe resource actors. Each resource collection is
//! owned by one Tokio task (the [`ResourceActor`]) and reached through a cloneable
//! [`ResourceClient`]. The uniform request set is Create, Get, List, Update and Delete.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - business rules of one resource type
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and state ownership
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! You write the business logic **once** in the entity trait; the framework handles the
//! message passing, ID generation, insertion ordering and error mapping.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Task {
//!     id: u32,
//!     title: String,
//!     done: bool,
//! }
//!
//! #[derive(Debug)] struct TaskCreate { title: String }
//! #[derive(Debug)] struct TaskUpdate { done: Option<bool> }
//! #[derive(Debug)] struct TaskFilter { done: bool }
//! #[derive(Debug, thiserror::Error)] #[error("task error")] struct TaskError;
//!
//! #[async_trait]
//! impl ActorEntity for Task {
//!     type Id = u32;
//!     type Create = TaskCreate;
//!     type Update = TaskUpdate;
//!     type Filter = TaskFilter;
//!     type Context = ();
//!     type Error = TaskError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: TaskCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, title: params.title, done: false })
//!     }
//!
//!     fn matches(&self, filter: &TaskFilter) -> bool { self.done == filter.done }
//!
//!     async fn on_update(&mut self, update: TaskUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(done) = update.done { self.done = done; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Task>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let task = client.create(TaskCreate { title: "Write docs".into() }).await.unwrap();
//!     client.update(task.id, TaskUpdate { done: Some(true) }).await.unwrap();
//!
//!     let open = client.list(Some(TaskFilter { done: false })).await.unwrap();
//!     assert!(open.is_empty());
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed)
//! - Shutdown happens when every client clone is dropped
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from scripted expectations, so
//! code built on top of a client can be tested without spawning the actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
