use crate::model::{CartId, MenuItemId, Station, TicketId};
use crate::pricing::PricingResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a line within one cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub u32);

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line_{}", self.0)
    }
}

/// A cart line. Price, name and station are copied from the menu at add-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: LineId,
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub station: Station,
    pub notes: Option<String>,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    #[default]
    Upi,
    Wallet,
}

/// What the cashier enters when taking payment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutDetails {
    pub payment_method: PaymentMethod,
    /// Overrides the cart's table label when set.
    pub table: Option<String>,
    pub customer_phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub method: PaymentMethod,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

/// A checked-out order: frozen lines and totals plus the tickets it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub order_number: String,
    pub cart_id: CartId,
    pub items: Vec<OrderItem>,
    pub totals: PricingResult,
    pub payment: Payment,
    pub table: Option<String>,
    pub customer_phone: Option<String>,
    pub tickets: Vec<TicketId>,
    pub placed_at: DateTime<Utc>,
}
