//! # View Synchronizer
//!
//! Pure derivation of display aggregates from a cart snapshot. No mutation,
//! no persistence.
//!
//! ## Recompute Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              After ANY mutation, recompute EVERYTHING                   │
//! │                                                                         │
//! │   Cart snapshot ──► CartView::project(cart, shipping)                   │
//! │                          │                                              │
//! │                          ├──► badge count      (total_item_count)       │
//! │                          ├──► line table       (line_total per line)    │
//! │                          ├──► subtotal         (round once, at the end) │
//! │                          └──► order total      (subtotal + flat fee)    │
//! │                                                                         │
//! │   One snapshot in, every aggregate out. A renderer can never observe    │
//! │   a count from one cart state and a subtotal from another.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Accumulation is exact and unrounded; rounding to 2 decimal places
//! happens once per displayed figure, so per-line rounding error never
//! compounds across a large cart.

use serde::Serialize;

use crate::cart::{Cart, CartLine};
use crate::identity::LineId;
use crate::money::Money;

// =============================================================================
// Aggregate Functions
// =============================================================================

/// Total number of items in the cart (sum of quantities).
///
/// 0 for an empty cart. Distinct from `cart.len()`, which counts lines.
pub fn total_item_count(cart: &Cart) -> i64 {
    cart.lines().iter().map(|l| l.quantity).sum()
}

/// A line's display total: unit price × quantity, rounded to 2 dp.
pub fn line_total(line: &CartLine) -> Money {
    unrounded_line_total(line).rounded()
}

/// The cart's display subtotal: sum of unrounded line totals, rounded once.
pub fn subtotal(cart: &Cart) -> Money {
    unrounded_subtotal(cart).rounded()
}

/// The order total: subtotal plus the flat shipping fee, rounded once.
///
/// The fee is injected configuration (weight and destination never factor
/// in), so this stays a pure function of its inputs.
pub fn order_total(cart: &Cart, flat_shipping: Money) -> Money {
    (unrounded_subtotal(cart) + flat_shipping).rounded()
}

fn unrounded_line_total(line: &CartLine) -> Money {
    line.price * line.quantity
}

fn unrounded_subtotal(cart: &Cart) -> Money {
    cart.lines().iter().map(unrounded_line_total).sum()
}

// =============================================================================
// Display Projection
// =============================================================================

/// One cart line prepared for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineView {
    pub id: LineId,
    pub title: String,
    pub price: Money,
    pub image: String,
    pub quantity: i64,
    pub line_total: Money,
}

impl From<&CartLine> for LineView {
    fn from(line: &CartLine) -> Self {
        LineView {
            id: line.id.clone(),
            title: line.title.clone(),
            price: line.price,
            image: line.image.clone(),
            quantity: line.quantity,
            line_total: line_total(line),
        }
    }
}

/// Cart totals summary for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub total_item_count: i64,
    pub subtotal: Money,
    pub shipping: Money,
    pub order_total: Money,
}

/// Everything a renderer needs, derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<LineView>,
    pub totals: CartTotals,
}

impl CartView {
    /// Projects a cart snapshot into display form, recomputing every
    /// aggregate from the same state.
    pub fn project(cart: &Cart, flat_shipping: Money) -> Self {
        let lines = cart.lines().iter().map(LineView::from).collect();
        let totals = CartTotals {
            total_item_count: total_item_count(cart),
            subtotal: subtotal(cart),
            shipping: flat_shipping,
            order_total: order_total(cart, flat_shipping),
        };

        CartView { lines, totals }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
