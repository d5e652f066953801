//! Error types for the Order actor.

use crate::model::OrderId;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// No order carries the requested ID.
    #[error("Order with ID {0} not found")]
    NotFound(String),

    /// The order service rejected the request.
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub fn not_found(id: OrderId) -> Self {
        OrderError::NotFound(id.to_string())
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => OrderError::Rejected(inner.to_string()),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
