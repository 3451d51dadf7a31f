//! # Order Pricing
//!
//! Totals for a list of cart lines. Everything here is a pure function of the lines:
//! nothing is cached and nothing is rounded (rounding belongs to whoever renders the
//! amounts).

use crate::model::OrderItem;
use serde::{Deserialize, Serialize};

/// GST applied to the subtotal.
pub const TAX_RATE: f64 = 0.05;

/// Service charge applied to the subtotal.
pub const SERVICE_CHARGE_RATE: f64 = 0.10;

/// Derived totals for a cart or a placed order.
///
/// Invariants: `tax == subtotal * TAX_RATE`, `service_charge == subtotal * SERVICE_CHARGE_RATE`
/// and `total == subtotal + tax + service_charge`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingResult {
    pub subtotal: f64,
    pub tax: f64,
    pub service_charge: f64,
    pub total: f64,
}

/// Central/state halves of the GST amount.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GstSplit {
    pub cgst: f64,
    pub sgst: f64,
}

impl PricingResult {
    /// Builds the full result from a subtotal.
    pub fn from_subtotal(subtotal: f64) -> Self {
        let tax = subtotal * TAX_RATE;
        let service_charge = subtotal * SERVICE_CHARGE_RATE;
        Self {
            subtotal,
            tax,
            service_charge,
            total: subtotal + tax + service_charge,
        }
    }

    /// Splits the tax evenly into CGST and SGST (intra-state supply).
    pub fn gst_split(&self) -> GstSplit {
        let half = self.tax / 2.0;
        GstSplit {
            cgst: half,
            sgst: half,
        }
    }
}

/// Computes subtotal, tax, service charge and total for `items`.
///
/// An empty slice yields all zeros.
pub fn compute_totals(items: &[OrderItem]) -> PricingResult {
    let subtotal = items.iter().map(OrderItem::line_total).sum();
    PricingResult::from_subtotal(subtotal)
}
