use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// Ids are derived from the creation time and are strictly increasing; see
/// [`product_actor::timestamp_ids`](crate::product_actor::timestamp_ids).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be served by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductDraft`])
/// - Update parameters ([`ProductPatch`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
    pub is_deleted: bool,
}

impl Product {
    /// Creates a new, non-deleted Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `stock` - Units in stock
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            is_deleted: false,
        }
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }
}

/// Partial update for a product. Every field that is `Some` overwrites the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl ProductPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }
}

/// An edit submitted from the form replaces all three editable fields.
impl From<ProductDraft> for ProductPatch {
    fn from(draft: ProductDraft) -> Self {
        Self {
            name: Some(draft.name),
            price: Some(draft.price),
            stock: Some(draft.stock),
        }
    }
}

/// Acknowledgement returned by a soft delete, whether or not the id existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
    pub id: ProductId,
}
