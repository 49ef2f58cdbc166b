//! # Client Query Cache
//!
//! Holds the last fetched product list under a single fixed query key. After a
//! mutation resolves, the cached list is patched with the mutation's result instead of
//! being refetched; the [`patch`] functions keep that patched list identical to what a
//! fresh `list()` would return.
//!
//! The cache only ever patches data it already holds. While the query is idle, loading
//! or failed there is nothing to patch, and a failed load never turns into partial data.

pub mod patch;

use crate::clients::{ActorClient, ProductClient};
use crate::model::{Product, ProductId};
use crate::product_actor::ProductError;
use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Identity of a cached query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey(&'static str);

impl QueryKey {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// The parameterless query for the whole product list.
pub const PRODUCTS_QUERY: QueryKey = QueryKey("products");

/// The initial product list could not be loaded.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Error loading data: {0}")]
pub struct FetchError(#[from] pub ProductError);

/// Lifecycle of the cached query.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum QueryState {
    /// Never fetched.
    #[default]
    Idle,
    Loading,
    Error(FetchError),
    Ready(Vec<Product>),
}

/// Cache entry for [`PRODUCTS_QUERY`].
#[derive(Debug, Clone, Default)]
pub struct ProductCache {
    state: QueryState,
}

impl ProductCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> QueryKey {
        PRODUCTS_QUERY
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// The cached list, if a fetch has succeeded.
    pub fn data(&self) -> Option<&[Product]> {
        match &self.state {
            QueryState::Ready(products) => Some(products),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, QueryState::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.state {
            QueryState::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Loads the list unless it is already cached.
    pub async fn fetch(&mut self, client: &ProductClient) -> &QueryState {
        if self.data().is_some() {
            debug!(key = %self.key(), "Cache hit");
            return &self.state;
        }
        self.refetch(client).await
    }

    /// Loads the list unconditionally, replacing whatever is cached.
    ///
    /// This is the manual retry after a [`FetchError`]; nothing retries automatically.
    /// Callers that render while the request is out use [`begin_loading`](Self::begin_loading)
    /// and [`resolve`](Self::resolve) around their own `list()` call instead.
    #[instrument(skip(self, client), fields(key = %PRODUCTS_QUERY))]
    pub async fn refetch(&mut self, client: &ProductClient) -> &QueryState {
        self.begin_loading();
        let result = client.list().await;
        self.resolve(result)
    }

    /// Enters [`QueryState::Loading`], dropping any cached list.
    pub fn begin_loading(&mut self) {
        debug!(key = %PRODUCTS_QUERY, "Query loading");
        self.state = QueryState::Loading;
    }

    /// Stores the outcome of a `list()` call.
    pub fn resolve(&mut self, result: Result<Vec<Product>, ProductError>) -> &QueryState {
        self.state = match result {
            Ok(products) => {
                info!(key = %PRODUCTS_QUERY, count = products.len(), "Query loaded");
                QueryState::Ready(products)
            }
            Err(e) => {
                warn!(key = %PRODUCTS_QUERY, error = %e, "Query failed");
                QueryState::Error(FetchError(e))
            }
        };
        &self.state
    }

    /// Replaces the cached list with `updater(current)`.
    ///
    /// Returns `false`, leaving the state untouched, when no list is cached.
    pub fn set_data(&mut self, updater: impl FnOnce(&[Product]) -> Vec<Product>) -> bool {
        match &mut self.state {
            QueryState::Ready(products) => {
                *products = updater(products);
                true
            }
            other => {
                debug!(key = %PRODUCTS_QUERY, state = ?other, "Nothing cached to patch");
                false
            }
        }
    }

    pub fn on_created(&mut self, created: Product) -> bool {
        self.set_data(|products| patch::apply_created(products, created))
    }

    pub fn on_updated(&mut self, updated: Product) -> bool {
        self.set_data(|products| patch::apply_updated(products, updated))
    }

    pub fn on_deleted(&mut self, id: ProductId) -> bool {
        self.set_data(|products| patch::apply_deleted(products, id))
    }
}
