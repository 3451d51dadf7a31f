use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Provides default `get` and `delete` on top of [`inner`](ActorClient::inner), with every
/// framework error passed through [`map_error`](ActorClient::map_error).
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    ///
    /// Implementations should recover the entity's own error from
    /// [`FrameworkError::EntityError`] so callers can match on it.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

/// Recovers a typed entity error boxed inside [`FrameworkError::EntityError`].
///
/// Returns the original framework error when the box holds some other type.
pub fn downcast_entity_error<E>(e: FrameworkError) -> Result<E, FrameworkError>
where
    E: std::error::Error + 'static,
{
    match e {
        FrameworkError::EntityError(inner) => inner
            .downcast::<E>()
            .map(|typed| *typed)
            .map_err(FrameworkError::EntityError),
        other => Err(other),
    }
}
