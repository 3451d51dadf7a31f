//! Error types for the Cart actor.

use crate::kitchen_actor::KitchenError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested cart was not found.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// Checkout was attempted with no lines in the cart.
    #[error("Cart is empty!")]
    EmptyCart,

    /// The kitchen refused a ticket during checkout.
    #[error("Kitchen error: {0}")]
    Kitchen(#[from] KitchenError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
