//! ActorEntity trait implementation for the Cart domain type.
//!
//! See the trait implementation on [`Cart`] for method documentation.

use super::actions::{CartAction, CartActionResult};
use super::checkout::{route_to_stations, OrderNumbers};
use super::error::CartError;
use crate::clients::KitchenClient;
use crate::clock::Clock;
use crate::framework::ActorEntity;
use crate::model::{Cart, CartCreate, CartId, CartUpdate, CheckoutDetails, Payment, PlacedOrder};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Runtime dependencies of the Cart actor.
#[derive(Clone)]
pub struct CartContext {
    pub kitchen: KitchenClient,
    pub clock: Arc<dyn Clock>,
    pub order_numbers: OrderNumbers,
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = CartUpdate;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = CartContext;
    type Error = CartError;

    /// Opens an empty cart.
    fn from_create_params(
        id: CartId,
        params: CartCreate,
        _ctx: &CartContext,
    ) -> Result<Self, CartError> {
        Ok(Self::new(id, non_blank(params.table)))
    }

    /// Handles updates to the Cart entity.
    ///
    /// # Fields Updated
    /// - `table`: replaced outright; `None` or blank clears it
    async fn on_update(&mut self, update: CartUpdate, _ctx: &CartContext) -> Result<(), CartError> {
        self.table = non_blank(update.table);
        Ok(())
    }

    /// Handles cart actions.
    ///
    /// # Actions
    /// - `AddItem`, `SetQuantity`, `RemoveItem`: mutate lines, return the new totals
    /// - `SetNotes`: annotate a line for the kitchen
    /// - `Totals`: read-only
    /// - `Checkout`: freeze totals, send one ticket per station, clear the lines
    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::AddItem(item) => {
                let line = self.add_item(&item);
                Ok(CartActionResult::AddItem {
                    line,
                    totals: self.totals(),
                })
            }
            CartAction::SetQuantity { line, quantity } => {
                self.set_quantity(line, quantity);
                Ok(CartActionResult::SetQuantity(self.totals()))
            }
            CartAction::RemoveItem(line) => {
                self.remove_item(line);
                Ok(CartActionResult::RemoveItem(self.totals()))
            }
            CartAction::SetNotes { line, notes } => {
                self.set_notes(line, notes);
                Ok(CartActionResult::SetNotes(()))
            }
            CartAction::Totals => Ok(CartActionResult::Totals(self.totals())),
            CartAction::Checkout(details) => checkout(self, details, ctx)
                .await
                .map(|order| CartActionResult::Checkout(Box::new(order))),
        }
    }
}

/// Takes payment and sends the order to the kitchen.
///
/// The cart is only cleared once every station ticket has been accepted. If the kitchen
/// rejects one, the error is returned and the lines stay in the cart; tickets already
/// accepted for that order number remain on the board.
///
/// Each attempt claims a fresh order number, so retrying after a partial failure sends
/// every station's ticket again under the new number. Tickets from the failed attempt
/// must be cleared from the board by hand.
async fn checkout(
    cart: &mut Cart,
    details: CheckoutDetails,
    ctx: &CartContext,
) -> Result<PlacedOrder, CartError> {
    if cart.is_empty() {
        return Err(CartError::EmptyCart);
    }

    let placed_at = ctx.clock.now();
    let order_number = ctx.order_numbers.next();
    let table = non_blank(details.table).or_else(|| cart.table.clone());
    let totals = cart.totals();

    let mut tickets = Vec::new();
    for params in route_to_stations(&order_number, cart.lines(), table.as_deref(), placed_at) {
        tickets.push(ctx.kitchen.send_ticket(params).await?);
    }

    info!(cart_id = %cart.id, %order_number, tickets = tickets.len(), total = totals.total, "Order placed");
    Ok(PlacedOrder {
        order_number,
        cart_id: cart.id,
        items: cart.take_lines(),
        totals,
        payment: Payment {
            method: details.payment_method,
            amount: totals.total,
            timestamp: placed_at,
        },
        table,
        customer_phone: non_blank(details.customer_phone),
        tickets,
        placed_at,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
