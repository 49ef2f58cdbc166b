use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read and delete calls.
///
/// This trait reduces boilerplate by providing default implementations for
/// the operations whose payload needs no resource-specific conversion.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch every non-deleted entity, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Soft-delete an entity by ID. Succeeds even if the id is unknown.
    #[tracing::instrument(skip(self))]
    async fn soft_delete(&self, id: T::Id) -> Result<T::Id, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().soft_delete(id).await.map_err(Self::map_error)
    }
}
