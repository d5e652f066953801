//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to **CRUD** operations plus a collection read:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource and answers
///   with the stored entity.
/// - **Get**: Fetches the current state of one resource by ID.
/// - **List**: Snapshot of every resource in insertion order, optionally narrowed by
///   an [`ActorEntity::Filter`].
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: Removes the resource.
///
/// The request is generic over `T: ActorEntity`, so an `Order` payload can never be sent
/// to an actor managing some other resource.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
