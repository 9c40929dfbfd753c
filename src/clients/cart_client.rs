use crate::cart_actor::{CartCommand, CartError, CartReply, CartSummary};
use crate::engine::CartEngine;
use crate::framework::{ActorClient, FrameworkError, StateClient};
use crate::model::{OrderDraft, Product, ProductId};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the cart actor.
///
/// Cloning is cheap; every clone talks to the same cart. Reads go through
/// [`ActorClient::snapshot`].
#[derive(Clone)]
pub struct CartClient {
    inner: StateClient<CartEngine>,
}

impl CartClient {
    pub fn new(inner: StateClient<CartEngine>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn add_to_cart(&self, product: Product) -> Result<CartSummary, CartError> {
        debug!(?product, "add_to_cart called");
        self.update(CartCommand::Add(product)).await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: ProductId,
        quantity: i64,
    ) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        self.update(CartCommand::SetQuantity { id, quantity }).await
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: ProductId) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        self.update(CartCommand::Remove(id)).await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        self.update(CartCommand::Clear).await
    }

    /// Checks out the cart. `Ok(None)` means there was nothing to check out.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<Option<OrderDraft>, CartError> {
        info!("Sending checkout to actor");
        match self
            .inner
            .send(CartCommand::Checkout)
            .await
            .map_err(Self::map_error)?
        {
            CartReply::CheckedOut(draft) => Ok(draft),
            other => Err(CartError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    #[instrument(skip(self))]
    pub async fn total_count(&self) -> Result<u64, CartError> {
        Ok(self.snapshot().await?.total_count)
    }

    #[instrument(skip(self))]
    pub async fn total_price(&self) -> Result<f64, CartError> {
        Ok(self.snapshot().await?.total_price)
    }

    async fn update(&self, command: CartCommand) -> Result<CartSummary, CartError> {
        match self.inner.send(command).await.map_err(Self::map_error)? {
            CartReply::Updated(summary) => Ok(summary),
            other => Err(CartError::UnexpectedReply(format!("{other:?}"))),
        }
    }
}

#[async_trait]
impl ActorClient<CartEngine> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StateClient<CartEngine> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::ActorCommunicationError(e.to_string())
    }
}
