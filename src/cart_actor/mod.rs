//! # Cart Actor
//!
//! Hosts the open carts of the register. Each cart is priced on every mutation and, at
//! checkout, turns into a [`PlacedOrder`](crate::model::PlacedOrder) plus one kitchen
//! ticket per station.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`actions`] - [`CartAction`] and [`CartActionResult`] for line edits and checkout
//! - [`checkout`] - order numbering and routing of lines to stations
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! Checkout talks to the Kitchen actor, so the cart's [`CartContext`] carries a
//! [`KitchenClient`](crate::clients::KitchenClient). The kitchen never calls back into the
//! cart, which keeps shutdown ordering simple: stop carts first, then the kitchen.

pub mod actions;
pub mod checkout;
pub mod entity;
pub mod error;

pub use actions::*;
pub use checkout::OrderNumbers;
pub use entity::CartContext;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Cart;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(buffer_size)
}
