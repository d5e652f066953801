//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of scripted expectations instead of a running actor. It lets you write fast,
//! deterministic tests for code that sits *around* a client (store adapters, view models)
//! and inject failures that a healthy actor never produces.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Item { id: u32 }
//! #[derive(Debug)] struct ItemCreate;
//! #[derive(Debug)] struct ItemUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct ItemError;
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = u32; type Create = ItemCreate; type Update = ItemUpdate;
//!     type Filter = (); type Context = (); type Error = ItemError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: ItemCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id })
//!     }
//!     async fn on_update(&mut self, _: ItemUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Item>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.list(None).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a raw receiver, or the fluent [`MockClient`] API.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request the mock receives.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn answer<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

fn check_id<I: PartialEq + std::fmt::Debug>(op: &str, expected: &I, actual: &I) {
    if expected != actual {
        panic!("{op} expected id {expected:?}, got {actual:?}");
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in FIFO order. A request that does not match the next
/// expectation (wrong operation or wrong ID) panics the mock task, which the caller
/// observes as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id("get", &expected, &id);
                        answer(respond_to, response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => answer(respond_to, response),
                    (
                        ResourceRequest::List { respond_to, .. },
                        Some(Expectation::List { response }),
                    ) => answer(respond_to, response),
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id("update", &expected, &id);
                        answer(respond_to, response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        check_id("delete", &expected, &id);
                        answer(respond_to, response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects a `list` operation, with or without a filter.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectations poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Completes an expectation with the value the mock should answer.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// Useful when a test wants to inspect request payloads (for example the filter a
/// `List` carries) before answering by hand.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Option<T::Filter>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: u32,
        title: String,
    }

    #[derive(Debug)]
    struct TicketCreate {
        title: String,
    }

    #[derive(Debug)]
    struct TicketUpdate;

    #[derive(Debug, thiserror::Error)]
    #[error("Ticket error")]
    struct TicketError;

    #[async_trait]
    impl ActorEntity for Ticket {
        type Id = u32;
        type Create = TicketCreate;
        type Update = TicketUpdate;
        type Filter = String;
        type Context = ();
        type Error = TicketError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                title: params.title,
            })
        }

        async fn on_update(
            &mut self,
            _update: TicketUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn ticket(id: u32, title: &str) -> Ticket {
        Ticket {
            id,
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_channel_helpers() {
        let (client, mut receiver) = create_mock_client::<Ticket>(10);

        let create_client = client.clone();
        let create_task = tokio::spawn(async move {
            create_client
                .create(TicketCreate {
                    title: "Broken printer".to_string(),
                })
                .await
        });
        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.title, "Broken printer");
        responder.send(Ok(ticket(7, &payload.title))).unwrap();
        assert_eq!(create_task.await.unwrap().unwrap().id, 7);

        let list_task = tokio::spawn(async move { client.list(Some("printer".into())).await });
        let (filter, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(filter.as_deref(), Some("printer"));
        responder.send(Ok(vec![ticket(7, "Broken printer")])).unwrap();
        assert_eq!(list_task.await.unwrap().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Ticket>::new();
        mock.expect_create().return_ok(ticket(1, "Login fails"));
        mock.expect_get(1).return_ok(Some(ticket(1, "Login fails")));
        mock.expect_update(1).return_ok(ticket(1, "Login fails on Safari"));
        mock.expect_delete(2).return_err(FrameworkError::NotFound("2".to_string()));

        let client = mock.client();

        let created = client
            .create(TicketCreate {
                title: "Login fails".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = client.get(1).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Login fails");

        let updated = client.update(1, TicketUpdate).await.unwrap();
        assert_eq!(updated.title, "Login fails on Safari");

        let err = client.delete(2).await.unwrap_err();
        assert!(err.is_not_found());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_response() {
        let mut mock = MockClient::<Ticket>::new();
        mock.expect_list().return_ok(Vec::new());

        let result = mock.client().delete(3).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
