//! # ActorClient Trait
//!
//! Common interface for domain-specific clients built on top of a generic [`StateClient`].
use crate::framework::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for domain-specific clients to inherit the standard read operation.
///
/// Implementors only supply access to the inner client and an error mapping;
/// `snapshot` comes for free.
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The domain-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<S>;

    /// Map framework errors to the domain-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
