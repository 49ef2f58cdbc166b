//! # System Lifecycle
//!
//! Starting, wiring and stopping the catalog's actor, plus logging setup.
//!
//! [`CatalogSystem::new`] spawns the product actor in its own Tokio task and keeps its
//! handle. [`CatalogSystem::shutdown`] follows the usual channel-closure pattern:
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs final state** - and its task returns
//! 4. **Await completion** - a panicked task surfaces as an error
//!
//! See [`tracing`] for log configuration.

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::*;
pub use self::tracing::setup_tracing;
