//! Custom actions for the Cart actor.
//!
//! Every mutation answers with the recomputed [`PricingResult`] so the register can redraw
//! its totals without a second round trip.

use crate::model::{CheckoutDetails, LineId, MenuItem, PlacedOrder};
use crate::pricing::PricingResult;

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add one unit of a menu item (merging into an existing line).
    AddItem(MenuItem),
    /// Set a line's quantity; zero or less removes it.
    SetQuantity { line: LineId, quantity: i64 },
    RemoveItem(LineId),
    /// Attach or clear a kitchen note on a line.
    SetNotes { line: LineId, notes: Option<String> },
    Totals,
    /// Take payment, send tickets to the kitchen and clear the cart.
    Checkout(CheckoutDetails),
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    AddItem { line: LineId, totals: PricingResult },
    SetQuantity(PricingResult),
    RemoveItem(PricingResult),
    SetNotes(()),
    Totals(PricingResult),
    Checkout(Box<PlacedOrder>),
}
