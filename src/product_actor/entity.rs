//! ActorEntity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Product`] to be served by the generic [`crate::framework::ResourceActor`].

use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductDraft, ProductId, ProductPatch};

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductDraft;
    type Update = ProductPatch;
    type Error = ProductError;

    /// Creates a new, non-deleted Product from the draft.
    fn from_create_params(id: ProductId, params: ProductDraft) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.price, params.stock))
    }

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `name`: Display name
    /// - `price`: Unit price
    /// - `stock`: Units in stock
    fn on_update(&mut self, update: ProductPatch) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }
}
