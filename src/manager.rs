//! # Product Manager
//!
//! UI-free controller for one catalog session. It combines the query cache, the
//! table's view state and the form editor, and routes every successful mutation into
//! a cache patch. Nothing is refetched after a mutation.

use crate::cache::{FetchError, ProductCache, QueryState};
use crate::clients::ProductClient;
use crate::config::CatalogConfig;
use crate::form::{ProductEditor, ProductForm, SubmitError, Submitted};
use crate::model::{DeleteAck, Product, ProductId};
use crate::product_actor::ProductError;
use crate::view::{self, ViewPage, ViewState};
use tracing::{debug, info};

/// What the table area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    Loading,
    Error(FetchError),
    Ready(ViewPage),
}

pub struct ProductManager {
    client: ProductClient,
    cache: ProductCache,
    view: ViewState,
    editor: ProductEditor,
    page_size: usize,
}

impl ProductManager {
    pub fn new(client: ProductClient, config: &CatalogConfig) -> Self {
        Self {
            client,
            cache: ProductCache::new(),
            view: ViewState::new(),
            editor: ProductEditor::new(),
            page_size: config.page_size,
        }
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    pub fn cache(&self) -> &ProductCache {
        &self.cache
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn editor(&self) -> &ProductEditor {
        &self.editor
    }

    /// Fetches the product list once. Later calls reuse the cached data.
    pub async fn load(&mut self) -> &QueryState {
        self.cache.fetch(&self.client).await;
        self.clamp_page();
        self.cache.state()
    }

    /// Manual retry after a failed load.
    pub async fn reload(&mut self) -> &QueryState {
        self.cache.refetch(&self.client).await;
        self.clamp_page();
        self.cache.state()
    }

    /// First half of a load the caller awaits itself, so the table can render
    /// [`ViewModel::Loading`] meanwhile.
    ///
    /// Returns `false` when the list is already cached and nothing needs fetching.
    pub fn begin_load(&mut self) -> bool {
        if self.cache.data().is_some() {
            return false;
        }
        self.cache.begin_loading();
        true
    }

    /// Second half of [`begin_load`](Self::begin_load): stores the `list()` outcome.
    pub fn finish_load(&mut self, result: Result<Vec<Product>, ProductError>) -> &QueryState {
        self.cache.resolve(result);
        self.clamp_page();
        self.cache.state()
    }

    pub fn view_model(&self) -> ViewModel {
        match self.cache.state() {
            QueryState::Idle | QueryState::Loading => ViewModel::Loading,
            QueryState::Error(e) => ViewModel::Error(e.clone()),
            QueryState::Ready(products) => {
                ViewModel::Ready(view::derive_view(products, &self.view, self.page_size))
            }
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.view.set_search(text);
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.view.next_page(total);
    }

    pub fn prev_page(&mut self) {
        self.view.prev_page();
    }

    /// Starts editing a cached product, pre-filling the form.
    pub fn begin_edit(&mut self, id: ProductId) -> Result<(), ProductError> {
        let product = self
            .cached(id)
            .cloned()
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        self.editor.begin_edit(product);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        self.editor.form_mut()
    }

    /// Validates and sends the form, then patches the cache with the result.
    pub async fn submit(&mut self) -> Result<Submitted, SubmitError> {
        let submitted = self.editor.submit(&self.client).await?;
        let patched = match &submitted {
            Submitted::Created(product) => self.cache.on_created(product.clone()),
            Submitted::Updated(product) => self.cache.on_updated(product.clone()),
        };
        debug!(patched, "Cache patched after submit");
        self.clamp_page();
        Ok(submitted)
    }

    /// Soft-deletes a product and drops it from the cache.
    ///
    /// Deleting the product currently in the form also leaves edit mode.
    pub async fn delete(&mut self, id: ProductId) -> Result<DeleteAck, ProductError> {
        let ack = self.client.soft_delete_product(id).await?;
        self.cache.on_deleted(ack.id);
        self.clamp_page();
        if self.editor.editing_id() == Some(ack.id) {
            info!(%id, "Edited product deleted, leaving edit mode");
            self.editor.cancel();
        }
        Ok(ack)
    }

    fn cached(&self, id: ProductId) -> Option<&Product> {
        self.cache.data()?.iter().find(|p| p.id == id)
    }

    /// Keeps the stored page within the current page count.
    fn clamp_page(&mut self) {
        let total = self.total_pages();
        self.view.clamp(total);
    }

    fn total_pages(&self) -> usize {
        self.cache
            .data()
            .map(|products| {
                let matches = view::filter_products(products, self.view.search_text()).len();
                view::total_pages(matches, self.page_size)
            })
            .unwrap_or(0)
    }
}
