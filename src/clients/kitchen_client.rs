//! # Kitchen Client
//!
//! High-level API for the Kitchen actor: send tickets, move them along, and read the board.

use crate::clients::actor_client::{downcast_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::kitchen_actor::{KitchenBoard, KitchenError, TicketAction, TicketActionResult};
use crate::model::{KitchenTicket, Station, TicketCreate, TicketId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Client for interacting with the Kitchen actor.
#[derive(Clone)]
pub struct KitchenClient {
    inner: ResourceClient<KitchenTicket>,
    stations: Vec<Station>,
}

impl KitchenClient {
    /// `stations` are the board tabs, in display order.
    pub fn new(inner: ResourceClient<KitchenTicket>, stations: Vec<Station>) -> Self {
        Self { inner, stations }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    #[instrument(skip(self, params), fields(order_number = %params.order_number, station = %params.station))]
    pub async fn send_ticket(&self, params: TicketCreate) -> Result<TicketId, KitchenError> {
        debug!(?params, "send_ticket called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// `Pending` → `In-Progress`. Returns when preparation started.
    #[instrument(skip(self))]
    pub async fn start(&self, id: TicketId) -> Result<DateTime<Utc>, KitchenError> {
        debug!("Sending request");
        match self.inner.perform_action(id, TicketAction::Start).await {
            Ok(TicketActionResult::Start(at)) => Ok(at),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// `In-Progress` → `Ready`. Returns when the ticket became ready.
    #[instrument(skip(self))]
    pub async fn mark_ready(&self, id: TicketId) -> Result<DateTime<Utc>, KitchenError> {
        debug!("Sending request");
        match self.inner.perform_action(id, TicketAction::MarkReady).await {
            Ok(TicketActionResult::MarkReady(at)) => Ok(at),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Every ticket, oldest first.
    #[instrument(skip(self))]
    pub async fn tickets(&self) -> Result<Vec<KitchenTicket>, KitchenError> {
        self.inner.list().await.map_err(Self::map_error)
    }

    /// Snapshot of the board as of `now`.
    #[instrument(skip(self))]
    pub async fn board(&self, now: DateTime<Utc>) -> Result<KitchenBoard, KitchenError> {
        let tickets = self.tickets().await?;
        Ok(KitchenBoard::build(&tickets, &self.stations, now))
    }
}

fn unexpected(result: TicketActionResult) -> KitchenError {
    KitchenError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[async_trait]
impl ActorClient<KitchenTicket> for KitchenClient {
    type Error = KitchenError;

    fn inner(&self) -> &ResourceClient<KitchenTicket> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> KitchenError {
        match downcast_entity_error::<KitchenError>(e) {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => KitchenError::NotFound(id),
            Err(other) => KitchenError::ActorCommunicationError(other.to_string()),
        }
    }
}
