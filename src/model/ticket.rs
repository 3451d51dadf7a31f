use crate::kitchen_actor::KitchenError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Elapsed minutes at which a ticket turns amber.
pub const WARNING_AFTER_MINUTES: i64 = 10;

/// Elapsed minutes at which a ticket turns red.
pub const CRITICAL_AFTER_MINUTES: i64 = 15;

/// Type-safe identifier for kitchen tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub u32);

impl From<u32> for TicketId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "kot_{}", self.0)
    }
}

/// A kitchen preparation area.
///
/// Stations compare and hash by name, so `Other("Tandoor")` is the same station as
/// `Tandoor`. Prefer [`Station::from`] when building one from text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Station {
    #[default]
    MainKitchen,
    Tandoor,
    Fryer,
    Dessert,
    Beverage,
    Other(String),
}

impl Station {
    /// The stations every outlet starts with, in tab order.
    pub fn standard() -> Vec<Station> {
        vec![
            Station::MainKitchen,
            Station::Tandoor,
            Station::Fryer,
            Station::Dessert,
            Station::Beverage,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Station::MainKitchen => "Main Kitchen",
            Station::Tandoor => "Tandoor",
            Station::Fryer => "Fryer",
            Station::Dessert => "Dessert",
            Station::Beverage => "Beverage",
            Station::Other(name) => name,
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Station {}

impl std::hash::Hash for Station {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<String> for Station {
    fn from(name: String) -> Self {
        match name.trim() {
            "Main Kitchen" => Station::MainKitchen,
            "Tandoor" => Station::Tandoor,
            "Fryer" => Station::Fryer,
            "Dessert" => Station::Dessert,
            "Beverage" => Station::Beverage,
            other => Station::Other(other.to_string()),
        }
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Station::from(name.to_string())
    }
}

impl From<Station> for String {
    fn from(station: Station) -> Self {
        station.as_str().to_string()
    }
}

impl Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket lifecycle: `Pending` → `InProgress` → `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Pending,
    #[serde(rename = "In-Progress")]
    InProgress,
    Ready,
}

impl TicketStatus {
    /// Badge colour for the status tag.
    pub fn color(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "error",
            TicketStatus::InProgress => "warning",
            TicketStatus::Ready => "success",
        }
    }
}

impl Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TicketStatus::Pending => "Pending",
            TicketStatus::InProgress => "In-Progress",
            TicketStatus::Ready => "Ready",
        })
    }
}

/// How long a ticket has been waiting, bucketed for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Staleness {
    Normal,
    Warning,
    Critical,
}

impl Staleness {
    pub fn from_elapsed_minutes(minutes: i64) -> Self {
        if minutes >= CRITICAL_AFTER_MINUTES {
            Staleness::Critical
        } else if minutes >= WARNING_AFTER_MINUTES {
            Staleness::Warning
        } else {
            Staleness::Normal
        }
    }

    /// Card border colour.
    pub fn color(&self) -> &'static str {
        match self {
            Staleness::Normal => "#52c41a",
            Staleness::Warning => "#faad14",
            Staleness::Critical => "#ff4d4f",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketItem {
    pub name: String,
    pub quantity: u32,
    pub notes: Option<String>,
}

/// A kitchen order ticket (KOT): the slice of an order routed to one station.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for KitchenTicket`](#impl-ActorEntity-for-KitchenTicket) for details on:
/// - Creation parameters ([`TicketCreate`])
/// - Custom actions ([`TicketAction`](crate::kitchen_actor::TicketAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenTicket {
    pub id: TicketId,
    pub order_number: String,
    pub items: Vec<TicketItem>,
    pub station: Station,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub ready_at: Option<DateTime<Utc>>,
    pub table: Option<String>,
}

/// Payload for sending a ticket to the kitchen.
#[derive(Debug, Clone)]
pub struct TicketCreate {
    pub order_number: String,
    pub items: Vec<TicketItem>,
    pub station: Station,
    pub table: Option<String>,
    /// Back-dates the ticket; `None` stamps it with the kitchen clock.
    pub created_at: Option<DateTime<Utc>>,
}

impl KitchenTicket {
    /// Creates a `Pending` ticket.
    pub fn new(id: TicketId, params: TicketCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            order_number: params.order_number,
            items: params.items,
            station: params.station,
            status: TicketStatus::Pending,
            created_at,
            started_at: None,
            ready_at: None,
            table: params.table,
        }
    }

    /// `Pending` → `InProgress`, stamping `started_at`.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<DateTime<Utc>, KitchenError> {
        self.transition(TicketStatus::Pending, TicketStatus::InProgress)?;
        self.started_at = Some(now);
        Ok(now)
    }

    /// `InProgress` → `Ready`, stamping `ready_at`.
    pub fn mark_ready(&mut self, now: DateTime<Utc>) -> Result<DateTime<Utc>, KitchenError> {
        self.transition(TicketStatus::InProgress, TicketStatus::Ready)?;
        self.ready_at = Some(now);
        Ok(now)
    }

    fn transition(&mut self, from: TicketStatus, to: TicketStatus) -> Result<(), KitchenError> {
        if self.status != from {
            return Err(KitchenError::InvalidTransition {
                ticket: self.id.to_string(),
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    /// Whole minutes since creation, floored.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_milliseconds().div_euclid(60_000)
    }

    pub fn staleness(&self, now: DateTime<Utc>) -> Staleness {
        Staleness::from_elapsed_minutes(self.elapsed_minutes(now))
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
