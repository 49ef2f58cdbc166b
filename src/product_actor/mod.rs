//! # Product Actor
//!
//! This module wires the [`Product`] entity into the generic framework: it is the
//! in-process stand-in for the remote catalog API.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use catalog_manager::config::CatalogConfig;
//! use catalog_manager::model::ProductDraft;
//! use catalog_manager::product_actor;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(&CatalogConfig::default());
//!     tokio::spawn(actor.run());
//!
//!     let pen = client
//!         .create_product(ProductDraft::new("Pen", Decimal::from(10), 100))
//!         .await?;
//!     client.soft_delete_product(pen.id).await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::config::CatalogConfig;
use crate::framework::{ResourceActor, SimulatedLatency};
use crate::model::{Product, ProductId};
use std::time::{SystemTime, UNIX_EPOCH};

/// Creates a new Product actor and its client, with the configured latency.
pub fn new(config: &CatalogConfig) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(config.channel_buffer, timestamp_ids());
    let actor = actor.with_latency(SimulatedLatency::from(&config.latency));
    (actor, ProductClient::new(generic_client))
}

/// Id source deriving ids from the wall clock in milliseconds.
///
/// Ids are strictly increasing even when several products are created within the
/// same millisecond or the clock steps backwards.
pub fn timestamp_ids() -> impl FnMut() -> ProductId + Send + 'static {
    let mut last = 0u64;
    move || {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        last = now.max(last.saturating_add(1));
        ProductId(last)
    }
}
