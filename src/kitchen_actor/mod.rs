//! # Kitchen Actor
//!
//! Owns every kitchen order ticket (KOT) and drives them through
//! `Pending` → `In-Progress` → `Ready`.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`KitchenTicket`]
//! - [`error`] - [`KitchenError`] type for type-safe error handling
//! - [`actions`] - [`TicketAction`] and [`TicketActionResult`] for the status transitions
//! - [`board`] - [`KitchenBoard`] read model grouped by station
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use restaurant_pos::clock::SystemClock;
//! use restaurant_pos::clients::KitchenClient;
//! use restaurant_pos::kitchen_actor::{self, KitchenContext};
//! use restaurant_pos::model::{Station, TicketCreate, TicketItem};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = kitchen_actor::new(32);
//!     let kitchen = KitchenClient::new(generic_client, Station::standard());
//!     tokio::spawn(actor.run(KitchenContext { clock: Arc::new(SystemClock) }));
//!
//!     let id = kitchen
//!         .send_ticket(TicketCreate {
//!             order_number: "#1024".into(),
//!             items: vec![TicketItem { name: "Biryani".into(), quantity: 2, notes: None }],
//!             station: Station::MainKitchen,
//!             table: Some("T7".into()),
//!             created_at: None,
//!         })
//!         .await?;
//!     kitchen.start(id).await?;
//!     kitchen.mark_ready(id).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod board;
pub mod entity;
pub mod error;

pub use actions::*;
pub use board::*;
pub use entity::KitchenContext;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::KitchenTicket;

/// Creates a new Kitchen actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<KitchenTicket>, ResourceClient<KitchenTicket>) {
    ResourceActor::new(buffer_size)
}
