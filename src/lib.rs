//! # Catalog Manager
//!
//! > **The core of a product catalog manager, without the UI.**
//!
//! A catalog session lists products, searches and pages through them, adds and edits
//! them through a validated form, and soft-deletes them. The backend is an in-process
//! actor with simulated latency, standing in for a future remote API.
//!
//! ## 🏗️ Architecture Notes
//!
//! ### 1. The remote is an actor
//! The product store is owned by a single [`ResourceActor`](framework::ResourceActor)
//! running in its own Tokio task. Requests are served one at a time, so the store needs
//! no locks and operations resolve in the order they were issued.
//!
//! ### 2. Mutations patch the cache
//! The product list is fetched once into the [`cache`]. A successful create, update or
//! delete patches the cached list with the result instead of refetching. The patch
//! functions are pure and tested against the store directly: a patched cache must equal
//! a fresh `list()`.
//!
//! ### 3. The view is derived
//! Search, pagination and currency formatting are a pure function of the cached list and
//! the [`ViewState`](view::ViewState). See [`view::derive_view`].
//!
//! ### 4. Type-Safe Error Handling
//! Each layer has its own `thiserror` enum: [`FrameworkError`](framework::FrameworkError)
//! for channel plumbing, [`ProductError`](product_actor::ProductError) for the remote,
//! [`SubmitError`](form::SubmitError) for the form, [`FetchError`](cache::FetchError)
//! for the initial load.
//!
//! ### 5. Observability
//! `tracing` everywhere, with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - generic actor, client, store, latency and mocks
//! - [`model`] - [`Product`](model::Product) and its create/patch payloads
//! - [`product_actor`] - wires `Product` into the framework
//! - [`clients`] - [`ProductClient`](clients::ProductClient), the remote API surface
//! - [`cache`] - query cache and its pure patch functions
//! - [`view`] - filter, paginate, format
//! - [`form`] - input validation and the add/edit submit flow
//! - [`manager`] - [`ProductManager`](manager::ProductManager), one UI-free session
//! - [`lifecycle`] - [`CatalogSystem`](lifecycle::CatalogSystem), start and shutdown
//! - [`config`] - page size, channel buffer, latencies
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cache;
pub mod clients;
pub mod config;
pub mod form;
pub mod framework;
pub mod lifecycle;
pub mod manager;
pub mod model;
pub mod product_actor;
pub mod view;
