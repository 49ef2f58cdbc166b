//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the stand-in for a remote API. It owns the
//! backing [`Store`] and processes requests sequentially, so the store needs no locks.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::latency::{Latency, NoLatency, Operation};
use crate::framework::message::ResourceRequest;
use crate::framework::store::Store;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that serves a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Requests are served one at a time in arrival order. Each request first awaits the
/// injected [`Latency`], then touches the store, then replies. Callers therefore see
/// operations resolve in the order they were issued.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Configure**: Optionally inject a latency or a pre-populated store.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ## Operations
///
/// * **List**: clones every non-deleted record, in insertion order.
/// * **Create**: draws the next id from the id source, builds the entity, appends it.
/// * **Update**: merges the partial update, replies with the merged record or `NotFound`.
/// * **SoftDelete**: flags the record if present and always replies with the id.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Store<T>,
    next_id_fn: Box<dyn FnMut() -> T::Id + Send>,
    latency: Arc<dyn Latency>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id_fn` - Id source called once per successful create request.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Store::new(),
            next_id_fn: Box::new(next_id_fn),
            latency: Arc::new(NoLatency),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Replaces the delay awaited before each request is served.
    pub fn with_latency(mut self, latency: impl Latency + 'static) -> Self {
        self.latency = Arc::new(latency);
        self
    }

    /// Starts the actor from an existing store instead of an empty one.
    pub fn with_store(mut self, store: Store<T>) -> Self {
        self.store = store;
        self
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "catalog_manager::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    self.latency.delay(Operation::List).await;
                    let items = self.store.visible();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Create { params, respond_to } => {
                    self.latency.delay(Operation::Create).await;
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    let item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    let result = self.store.insert(item).cloned();
                    match &result {
                        Ok(_) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    self.latency.delay(Operation::Update).await;
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.store.merge(&id, update);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::SoftDelete { id, respond_to } => {
                    self.latency.delay(Operation::SoftDelete).await;
                    debug!(entity_type, %id, "SoftDelete");
                    if self.store.mark_deleted(&id) {
                        info!(entity_type, %id, "Deleted");
                    } else {
                        debug!(entity_type, %id, "SoftDelete no-op");
                    }
                    let _ = respond_to.send(Ok(id));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
