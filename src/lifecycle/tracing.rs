//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); the actor tags its
//! lines with `entity_type` instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # outcomes: Created, Updated, Deleted, Query loaded
//! RUST_LOG=debug cargo run    # plus request payloads and cache patches
//! ```
//!
//! With `RUST_LOG=info` the demo scenario reads:
//!
//! ```text
//! INFO Actor started entity_type="Product" size=0
//! INFO refetch: Query loaded key=products count=0
//! INFO Created entity_type="Product" id=product_1760000000000 size=1
//! INFO Updated entity_type="Product" id=product_1760000000000
//! INFO Deleted entity_type="Product" id=product_1760000000000
//! ```
//!
//! Client calls run inside `#[instrument]` spans, so with `RUST_LOG=debug` the
//! request line carries its arguments:
//!
//! ```text
//! DEBUG create_product{draft=ProductDraft { name: "Pen", price: 10, stock: 100 }}: Sending request
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the source instead
        .compact()
        .init();
}
