//! ActorEntity trait implementation for the KitchenTicket domain type.
//!
//! See the trait implementation on [`KitchenTicket`] for method documentation.

use super::actions::{TicketAction, TicketActionResult};
use super::error::KitchenError;
use crate::clock::Clock;
use crate::framework::ActorEntity;
use crate::model::{KitchenTicket, TicketCreate, TicketId};
use async_trait::async_trait;
use std::sync::Arc;

/// Runtime dependencies of the Kitchen actor.
#[derive(Clone)]
pub struct KitchenContext {
    pub clock: Arc<dyn Clock>,
}

#[async_trait]
impl ActorEntity for KitchenTicket {
    type Id = TicketId;
    type Create = TicketCreate;
    type Update = (); // Tickets only change through actions
    type Action = TicketAction;
    type ActionResult = TicketActionResult;
    type Context = KitchenContext;
    type Error = KitchenError;

    /// Creates a `Pending` ticket, stamped with the kitchen clock unless back-dated.
    fn from_create_params(
        id: TicketId,
        params: TicketCreate,
        ctx: &KitchenContext,
    ) -> Result<Self, KitchenError> {
        if params.items.is_empty() {
            return Err(KitchenError::EmptyTicket(params.order_number));
        }
        let created_at = params.created_at.unwrap_or_else(|| ctx.clock.now());
        Ok(Self::new(id, params, created_at))
    }

    async fn on_update(&mut self, _update: (), _ctx: &KitchenContext) -> Result<(), KitchenError> {
        Ok(())
    }

    /// Handles operator actions.
    ///
    /// # Actions
    /// - `Start`: `Pending` → `In-Progress`, records `started_at`
    /// - `MarkReady`: `In-Progress` → `Ready`, records `ready_at`
    ///
    /// Any other starting status is rejected and the ticket is left untouched.
    async fn handle_action(
        &mut self,
        action: TicketAction,
        ctx: &KitchenContext,
    ) -> Result<TicketActionResult, KitchenError> {
        let now = ctx.clock.now();
        match action {
            TicketAction::Start => self.start(now).map(TicketActionResult::Start),
            TicketAction::MarkReady => self.mark_ready(now).map(TicketActionResult::MarkReady),
        }
    }
}
