//! Filter, paginate, clamp, format.
//!
//! Every function here is pure: the same products and [`ViewState`] always yield the
//! same [`ViewPage`].

use super::format::{format_price, format_stock};
use crate::model::{Product, ProductId};

/// Transient table state owned by one view session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_text: String,
    page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            page: 1,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The requested page. It may exceed the page count of the current data;
    /// [`derive_view`] clamps it when rendering.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Any change to the search text goes back to the first page.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Pulls the stored page back into `[1, total_pages]` after the data shrank.
    pub fn clamp(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }
}

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: format_price(product.price),
            stock: format_stock(product.stock),
        }
    }
}

/// The rendered table for one [`ViewState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPage {
    pub rows: Vec<ProductRow>,
    /// Active page after clamping, starting at 1.
    pub page: usize,
    /// `ceil(matches / page_size)`; zero when nothing matches.
    pub total_pages: usize,
    /// Page count shown to the user, never below 1.
    pub displayed_total_pages: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

impl ViewPage {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// "Page 2 of 3"
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.displayed_total_pages)
    }
}

/// Case-insensitive substring match on the name. An empty search matches everything.
pub fn matches_search(product: &Product, search_text: &str) -> bool {
    search_text.is_empty()
        || product
            .name
            .to_lowercase()
            .contains(&search_text.to_lowercase())
}

pub fn filter_products<'a>(products: &'a [Product], search_text: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches_search(p, search_text))
        .collect()
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

pub fn derive_view(products: &[Product], state: &ViewState, page_size: usize) -> ViewPage {
    let page_size = page_size.max(1);
    let filtered = filter_products(products, &state.search_text);
    let total_pages = total_pages(filtered.len(), page_size);
    let page = state.page.clamp(1, total_pages.max(1));

    let rows = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(ProductRow::from)
        .collect();

    ViewPage {
        rows,
        page,
        total_pages,
        displayed_total_pages: total_pages.max(1),
        can_prev: page > 1,
        can_next: page < total_pages,
    }
}
