//! # Derived View
//!
//! Turns the cached product list plus the transient [`ViewState`] into the rows of
//! one table page. Recomputed on every search keystroke, page change or cache patch.

pub mod format;
pub mod pipeline;

pub use format::{format_price, format_stock};
pub use pipeline::{ProductRow, ViewPage, ViewState, derive_view, filter_products, total_pages};

/// Shown in place of rows when nothing matches.
pub const EMPTY_MESSAGE: &str = "No products found";
