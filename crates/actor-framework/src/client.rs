//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type‑safe, async API for interacting with a
/// `ResourceActor<T>`. It forwards requests over a Tokio mpsc channel and receives results
/// via oneshot channels. The client holds only a sender, so it is cheap to clone and can
/// be shared across tasks.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Creates an entity under a freshly assigned ID and returns it as stored.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Snapshot of the collection in insertion order; `None` returns everything.
    pub async fn list(&self, filter: Option<T::Filter>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { filter, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }
}
