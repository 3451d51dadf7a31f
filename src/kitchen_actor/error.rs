//! Error types for the Kitchen actor.

use crate::model::TicketStatus;
use thiserror::Error;

/// Errors that can occur during kitchen ticket operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KitchenError {
    /// The requested ticket was not found.
    #[error("Ticket not found: {0}")]
    NotFound(String),

    /// A ticket was sent without any items.
    #[error("Ticket for order {0} has no items")]
    EmptyTicket(String),

    /// The requested status change is not allowed from the ticket's current status.
    #[error("Ticket {ticket} cannot move from {from} to {to}")]
    InvalidTransition {
        ticket: String,
        from: TicketStatus,
        to: TicketStatus,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for KitchenError {
    fn from(msg: String) -> Self {
        KitchenError::ActorCommunicationError(msg)
    }
}
