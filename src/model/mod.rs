//! Pure data structures (DTOs) for the POS core. [`Cart`] and [`KitchenTicket`] implement
//! the [`ActorEntity`](crate::framework::ActorEntity) trait; the menu and order types are
//! plain values passed between them.

pub mod cart;
pub mod menu;
pub mod order;
pub mod ticket;

pub use cart::*;
pub use menu::*;
pub use order::*;
pub use ticket::*;
