//! # Product Client
//!
//! Provides the catalog API surface on top of the `Product` actor: list, create,
//! partial update and soft delete. It wraps a `ResourceClient<Product>` and maps
//! framework errors onto [`ProductError`].
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{DeleteAck, Product, ProductDraft, ProductId, ProductPatch};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Creates a product and returns it with its assigned id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    /// Merges `patch` into the product with `id` and returns the merged record.
    ///
    /// Fails with [`ProductError::NotFound`] if no product with that id was ever created.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(Self::map_error)
    }

    /// Soft-deletes the product with `id`. Repeating the call, or passing an unknown id,
    /// is a successful no-op.
    #[instrument(skip(self))]
    pub async fn soft_delete_product(&self, id: ProductId) -> Result<DeleteAck, ProductError> {
        let id = self.soft_delete(id).await?;
        Ok(DeleteAck { success: true, id })
    }
}
