//! Generic resource framework behind the mock remote.
//!
//! This module provides the building blocks for serving a collection of entities
//! from a single actor task, with a simulated network boundary in front of it.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`Store`] - Insertion-ordered backing store with soft-delete marking
//! - [`ResourceActor`] - Generic actor that owns a [`Store`] and serves requests
//! - [`ResourceClient`] - Cloneable handle that sends requests to the actor
//! - [`Latency`] - Injectable delay applied before every request is served
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod latency;
pub mod message;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use latency::{Latency, NoLatency, Operation, SimulatedLatency};
pub use message::{ResourceRequest, Response};
pub use store::Store;
