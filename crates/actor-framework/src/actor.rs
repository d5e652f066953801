//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! entities. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Each actor processes its messages *sequentially*
/// in its own Tokio task, so the store needs no `Mutex` or `RwLock`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (or `with_entities()`) to get the `actor`
///     (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Filter = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, p: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: p.text })
///     }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
///     let id = note.id;
///     assert_eq!(client.list(None).await.unwrap().len(), 1);
///     assert_eq!(client.get(id).await.unwrap().unwrap().text, "hello");
/// }
/// ```
///
/// # Implementation Details
///
/// Entities live in a `HashMap` keyed by ID. A parallel `order` vector remembers insertion
/// order so `List` returns a stable snapshot. IDs come from a `u32` counter that only ever
/// increases; deleted IDs are never handed out again.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new, empty `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_entities(buffer_size, Vec::new(), 1)
    }

    /// Creates an actor pre-populated with `entities`, kept in the given order.
    ///
    /// `next_id` is the first counter value handed out by `Create`; callers seeding
    /// existing records must pass a value past every seeded ID.
    pub fn with_entities(
        buffer_size: usize,
        entities: impl IntoIterator<Item = T>,
        next_id: u32,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let mut actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id,
        };
        for entity in entities {
            actor.insert(entity);
        }
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn insert(&mut self, item: T) {
        let id = item.id().clone();
        if self.store.insert(id.clone(), item).is_none() {
            self.order.push(id);
        }
    }

    fn snapshot(&self, filter: Option<&T::Filter>) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.store.get(id))
            .filter(|item| filter.is_none_or(|f| item.matches(f)))
            .cloned()
            .collect()
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies that were created *after* the actor was
    /// instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Bare type name, e.g. "Order" rather than "order_tracker::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.insert(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items = self.snapshot(filter.as_ref());
                    debug!(entity_type, ?filter, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    // Work on a copy so a failing hook leaves the stored entity untouched.
                    let mut item = current.clone();
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), item.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        self.order.retain(|existing| existing != &id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
