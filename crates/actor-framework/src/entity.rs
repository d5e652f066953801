//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (e.g. an `Order`) must
//! implement to be managed by the generic `ResourceActor`. It specifies associated types for
//! IDs, DTOs, list filters, context and errors, and provides lifecycle hooks (`on_create`,
//! `on_update`, `on_delete`). Implementing this trait gives the resource a uniform
//! CRUD + List API.
//!
//! # Provided Methods (Hooks)
//! This trait includes **Provided Methods** (methods with default implementations):
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::matches`]
//!
//! You do **not** need to implement these unless you want to customize behavior.
//! The hooks default to `Ok(())` and `matches` accepts every entity.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Predicate bundle accepted by `List` requests.
    /// Use `()` if the resource is never filtered.
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// The framework enforces a **Per-Actor Error Type** (one enum for the whole actor) rather than
    /// **Per-Message Error Types**. Clients deal with a single error type, which keeps pattern
    /// matching simple at the cost of some precision.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier stored inside the entity.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity satisfies `filter`.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    /// Use this hook to perform validation or side effects.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
