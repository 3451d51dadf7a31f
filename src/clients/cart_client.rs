//! # Cart Client
//!
//! High-level API for the register: open carts, edit lines, and check out.

use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::actor_client::{downcast_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartCreate, CartId, CartUpdate, CheckoutDetails, LineId, MenuItem, PlacedOrder};
use crate::pricing::PricingResult;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn open_cart(&self, table: Option<String>) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner
            .create(CartCreate { table })
            .await
            .map_err(Self::map_error)
    }

    /// Adds one unit of `item`. Returns the line holding it and the new totals.
    #[instrument(skip(self, item), fields(item = %item.id))]
    pub async fn add_item(
        &self,
        id: CartId,
        item: MenuItem,
    ) -> Result<(LineId, PricingResult), CartError> {
        match self.act(id, CartAction::AddItem(item)).await? {
            CartActionResult::AddItem { line, totals } => Ok((line, totals)),
            other => Err(unexpected(other)),
        }
    }

    /// Sets a line's quantity; zero or less removes the line.
    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        id: CartId,
        line: LineId,
        quantity: i64,
    ) -> Result<PricingResult, CartError> {
        match self.act(id, CartAction::SetQuantity { line, quantity }).await? {
            CartActionResult::SetQuantity(totals) => Ok(totals),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: CartId, line: LineId) -> Result<PricingResult, CartError> {
        match self.act(id, CartAction::RemoveItem(line)).await? {
            CartActionResult::RemoveItem(totals) => Ok(totals),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_notes(
        &self,
        id: CartId,
        line: LineId,
        notes: Option<String>,
    ) -> Result<(), CartError> {
        match self.act(id, CartAction::SetNotes { line, notes }).await? {
            CartActionResult::SetNotes(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn totals(&self, id: CartId) -> Result<PricingResult, CartError> {
        match self.act(id, CartAction::Totals).await? {
            CartActionResult::Totals(totals) => Ok(totals),
            other => Err(unexpected(other)),
        }
    }

    /// Assigns (or clears) the cart's table label.
    #[instrument(skip(self))]
    pub async fn set_table(&self, id: CartId, table: Option<String>) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner
            .update(id, CartUpdate { table })
            .await
            .map_err(Self::map_error)
    }

    /// Takes payment, sends the order to the kitchen and empties the cart.
    ///
    /// Fails with [`CartError::EmptyCart`] when there is nothing to sell.
    #[instrument(skip(self))]
    pub async fn checkout(
        &self,
        id: CartId,
        details: CheckoutDetails,
    ) -> Result<PlacedOrder, CartError> {
        info!("Checking out");
        match self.act(id, CartAction::Checkout(details)).await? {
            CartActionResult::Checkout(order) => Ok(*order),
            other => Err(unexpected(other)),
        }
    }

    async fn act(&self, id: CartId, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CartError {
        match downcast_entity_error::<CartError>(e) {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => CartError::NotFound(id),
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_create, MockClient};

    #[tokio::test]
    async fn test_open_cart_passes_table() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let carts = CartClient::new(client);

        let task = tokio::spawn(async move { carts.open_cart(Some("T3".into())).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.table.as_deref(), Some("T3"));
        responder.send(Ok(CartId(1))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), CartId(1));
    }

    #[tokio::test]
    async fn test_set_quantity_returns_totals() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let carts = CartClient::new(client);

        let task = tokio::spawn(async move { carts.set_quantity(CartId(1), LineId(2), 0).await });

        let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(id, CartId(1));
        assert!(matches!(
            action,
            CartAction::SetQuantity { line: LineId(2), quantity: 0 }
        ));
        responder
            .send(Ok(CartActionResult::SetQuantity(PricingResult::default())))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), PricingResult::default());
    }

    #[tokio::test]
    async fn test_empty_cart_error_survives_the_actor_boundary() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CartId(4))
            .return_err(FrameworkError::EntityError(Box::new(CartError::EmptyCart)));

        let carts = CartClient::new(mock.client());
        let err = carts
            .checkout(CartId(4), CheckoutDetails::default())
            .await
            .unwrap_err();

        assert_eq!(err, CartError::EmptyCart);
        assert_eq!(err.to_string(), "Cart is empty!");
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Cart>(1);
        drop(receiver);

        let err = CartClient::new(client).totals(CartId(1)).await.unwrap_err();
        assert!(matches!(err, CartError::ActorCommunicationError(_)));
    }
}
