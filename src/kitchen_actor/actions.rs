//! Custom actions for the Kitchen actor.
//!
//! These drive a [`KitchenTicket`](crate::model::KitchenTicket) through its lifecycle and are
//! handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use chrono::{DateTime, Utc};

/// Operator actions on a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketAction {
    /// Begin preparing a `Pending` ticket.
    Start,
    /// Finish an `In-Progress` ticket.
    MarkReady,
}

/// Results from TicketActions - variants match 1:1 with TicketAction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketActionResult {
    /// When preparation started
    Start(DateTime<Utc>),
    /// When the ticket became ready
    MarkReady(DateTime<Utc>),
}
