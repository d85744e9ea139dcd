//! # Cart Rendering
//!
//! Plain-text rendering of cart snapshots. Every mutation command prints
//! the cart page for the snapshot it got back, so the terminal always
//! shows the state the engine just persisted.
//!
//! ## Cart Page Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Cart (3 items)                                                      │
//! │                                                                      │
//! │  red_mug_9.99         Red Mug                  $9.99 x   3   $29.97 │
//! │                                                                      │
//! │  Subtotal: $29.97                                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The first column is the line id, which is what `tally qty`, `inc`,
//! `dec`, and `remove` take as their argument.

use tally_core::{view, Cart, CartView, Money};

/// Width of the label column in the order summary.
const SUMMARY_LABEL_WIDTH: usize = 32;

/// Renders the cart page: line table, badge count, subtotal.
pub fn cart_page(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("Cart ({})\n\n", badge(view::total_item_count(cart))));

    for line in cart.lines() {
        out.push_str(&format!(
            "  {:<20} {:<24} {:>8} x {:>3} {:>9}\n",
            line.id.as_str(),
            line.title,
            line.price.to_string(),
            line.quantity,
            view::line_total(line).to_string(),
        ));
    }

    out.push_str(&format!("\nSubtotal: {}\n", view::subtotal(cart)));
    out
}

/// Renders the order summary: one row per line, then subtotal, flat
/// shipping, and the order total.
///
/// An empty cart still gets a summary; shipping applies to every order.
pub fn order_summary(cart: &Cart, shipping: Money) -> String {
    let view = CartView::project(cart, shipping);

    let mut out = String::new();
    out.push_str("Order Summary\n");
    out.push_str(&rule('='));

    for line in &view.lines {
        let label = format!("{} x {}", line.title, line.quantity);
        out.push_str(&row(&label, line.line_total));
    }

    out.push_str(&rule('-'));
    out.push_str(&row("Subtotal", view.totals.subtotal));
    out.push_str(&row("Shipping", view.totals.shipping));
    out.push_str(&rule('-'));
    out.push_str(&row("Order Total", view.totals.order_total));
    out
}

/// Header badge text, e.g. "3 items".
pub fn badge(count: i64) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

fn row(label: &str, amount: Money) -> String {
    format!(
        "{:<width$} {:>10}\n",
        label,
        amount.to_string(),
        width = SUMMARY_LABEL_WIDTH
    )
}

fn rule(ch: char) -> String {
    let mut line: String = std::iter::repeat(ch).take(SUMMARY_LABEL_WIDTH + 11).collect();
    line.push('\n');
    line
}

// =============================================================================
// Unit Tests
// =============================================================================
