use crate::model::{LineId, MenuItem, OrderItem};
use crate::pricing::{compute_totals, PricingResult};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// Represents an in-progress order at a POS terminal.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Cart`](#impl-ActorEntity-for-Cart) for details on:
/// - Creation parameters ([`CartCreate`])
/// - Update parameters ([`CartUpdate`])
/// - Custom actions ([`CartAction`](crate::cart_actor::CartAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub table: Option<String>,
    lines: Vec<OrderItem>,
    next_line: u32,
}

/// Payload for opening a new cart.
#[derive(Debug, Clone, Default)]
pub struct CartCreate {
    pub table: Option<String>,
}

/// Payload for updating a cart. `table` replaces the current label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartUpdate {
    pub table: Option<String>,
}

impl Cart {
    pub fn new(id: CartId, table: Option<String>) -> Self {
        Self {
            id,
            table,
            lines: Vec::new(),
            next_line: 1,
        }
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[OrderItem] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&OrderItem> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Adds one unit of `item`.
    ///
    /// A line for the same menu item is incremented rather than duplicated. Returns the
    /// id of the line that now holds the item.
    pub fn add_item(&mut self, item: &MenuItem) -> LineId {
        if let Some(line) = self.lines.iter_mut().find(|l| l.menu_item_id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.id;
        }

        let id = LineId(self.next_line);
        self.next_line += 1;
        self.lines.push(OrderItem {
            id,
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            quantity: 1,
            price: item.price,
            station: item.routed_station(),
            notes: None,
        });
        id
    }

    /// Sets the quantity of a line; zero or less removes it. Unknown lines are ignored.
    pub fn set_quantity(&mut self, id: LineId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn remove_item(&mut self, id: LineId) {
        self.lines.retain(|line| line.id != id);
    }

    /// Kitchen note for a line (e.g. "Extra spicy"). Blank notes clear it.
    pub fn set_notes(&mut self, id: LineId, notes: Option<String>) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.notes = notes.filter(|n| !n.trim().is_empty());
        }
    }

    pub fn totals(&self) -> PricingResult {
        compute_totals(&self.lines)
    }

    /// Empties the cart, returning its lines.
    pub fn take_lines(&mut self) -> Vec<OrderItem> {
        std::mem::take(&mut self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Station;

    fn naan() -> MenuItem {
        MenuItem::new("m2", "Garlic Naan", "breads", 40.0).with_station(Station::Tandoor)
    }

    fn butter_chicken() -> MenuItem {
        MenuItem::new("m1", "Butter Chicken", "mains", 350.0)
    }

    #[test]
    fn test_adding_same_item_twice_increments_one_line() {
        let mut cart = Cart::new(CartId(1), None);
        let first = cart.add_item(&naan());
        let second = cart.add_item(&naan());

        assert_eq!(first, second);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[0].station, Station::Tandoor);
    }

    #[test]
    fn test_price_is_copied_at_add_time() {
        let mut cart = Cart::new(CartId(1), None);
        let mut item = butter_chicken();
        cart.add_item(&item);

        item.price = 999.0;
        cart.add_item(&item);

        assert_eq!(cart.lines()[0].price, 350.0);
        assert_eq!(cart.totals().subtotal, 700.0);
    }

    #[test]
    fn test_set_quantity_zero_removes_exactly_one_line() {
        let mut cart = Cart::new(CartId(1), None);
        let chicken = cart.add_item(&butter_chicken());
        cart.add_item(&naan());

        cart.set_quantity(chicken, 0);
        assert_eq!(cart.len(), 1);
        assert!(cart.line(chicken).is_none());
    }

    #[test]
    fn test_negative_quantity_removes_line() {
        let mut cart = Cart::new(CartId(1), None);
        let line = cart.add_item(&naan());
        cart.set_quantity(line, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_and_totals() {
        let mut cart = Cart::new(CartId(1), None);
        let chicken = cart.add_item(&butter_chicken());
        let bread = cart.add_item(&naan());
        cart.set_quantity(chicken, 2);
        cart.set_quantity(bread, 3);

        let totals = cart.totals();
        assert!((totals.total - 943.0).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_lines_are_ignored() {
        let mut cart = Cart::new(CartId(1), None);
        cart.add_item(&naan());
        cart.set_quantity(LineId(42), 5);
        cart.remove_item(LineId(42));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_line_ids_are_not_reused_after_removal() {
        let mut cart = Cart::new(CartId(1), None);
        let first = cart.add_item(&naan());
        cart.remove_item(first);
        let second = cart.add_item(&naan());
        assert_ne!(first, second);
    }

    #[test]
    fn test_blank_notes_clear() {
        let mut cart = Cart::new(CartId(1), None);
        let line = cart.add_item(&butter_chicken());
        cart.set_notes(line, Some("Extra spicy".into()));
        assert_eq!(cart.lines()[0].notes.as_deref(), Some("Extra spicy"));
        cart.set_notes(line, Some("  ".into()));
        assert_eq!(cart.lines()[0].notes, None);
    }
}
