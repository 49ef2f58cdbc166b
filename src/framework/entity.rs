//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that a resource must implement to be
//! served by the generic [`ResourceActor`](crate::framework::ResourceActor). It specifies
//! associated types for the id, the creation draft, the partial update and the error, and
//! the hooks the store calls while mutating records.
//!
//! # Soft Delete
//! Entities are never removed from the backing store. Deleting flips a flag through
//! [`ActorEntity::mark_deleted`], and every read filters on [`ActorEntity::is_deleted`].

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// We use associated types to enforce type safety: a `Product` requires a
/// `ProductDraft` payload, and you can't accidentally send it another resource's draft.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity. Assigned once, never reused.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// A partial update: every field present replaces the stored value.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned id and the draft.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The entity's id.
    fn id(&self) -> &Self::Id;

    /// Merges a partial update into the entity. The id is never touched.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Whether the entity has been soft-deleted.
    fn is_deleted(&self) -> bool;

    /// Flags the entity as deleted.
    fn mark_deleted(&mut self);
}
