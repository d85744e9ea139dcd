//! # Cart Model
//!
//! The cart entity: an insertion-ordered sequence of lines, unique by
//! derived identity.
//!
//! This module is pure state manipulation. Persistence round-trips live in
//! `tally-store`; display aggregates live in [`crate::view`].
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Mutations                                    │
//! │                                                                         │
//! │  Front-end action         Store operation         Cart change           │
//! │  ────────────────         ───────────────         ───────────           │
//! │                                                                         │
//! │  Add to cart ────────────► add_item() ──────────► merge_line()          │
//! │                                                    same id? qty += n    │
//! │                                                    else push            │
//! │                                                                         │
//! │  Quantity input ─────────► set_quantity() ──────► set_line_quantity()   │
//! │                                                    <= 0 removes         │
//! │                                                                         │
//! │  Remove button ──────────► remove_item() ───────► remove_line()         │
//! │                                                                         │
//! │  Every mutation returns the full snapshot; views recompute from it.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::identity::{derive_identity, LineId};
use crate::money::Money;

// =============================================================================
// CartLine
// =============================================================================

/// One entry in the cart: a product identity plus its quantity.
///
/// ## Design Notes
/// - `id` is derived from title and price (see [`derive_identity`]); it is
///   the only "same product" key, and it stays stable for the life of the
///   line
/// - `price` is frozen when the line is created: re-adding the same
///   identity accumulates quantity and never touches the stored price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Derived identity, unique within a cart
    pub id: LineId,

    /// Display name as first added (frozen)
    pub title: String,

    /// Unit price as first added (frozen)
    pub price: Money,

    /// Opaque image reference for display, never validated
    pub image: String,

    /// Quantity in cart; at least 1 while the line exists
    pub quantity: i64,
}

impl CartLine {
    /// Builds a new line candidate, deriving its identity from title and
    /// price.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::cart::CartLine;
    /// use tally_core::money::Money;
    ///
    /// let line = CartLine::new("Red Mug", Money::from_cents(999), "mug.png", 1);
    /// assert_eq!(line.id.as_str(), "red_mug_9.99");
    /// ```
    pub fn new(
        title: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        quantity: i64,
    ) -> Self {
        let title = title.into();
        let id = derive_identity(&title, price);
        CartLine {
            id,
            title,
            price,
            image: image.into(),
            quantity,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: insertion-ordered lines, unique by id.
///
/// ## Invariants
/// - Lines are unique by `id` (adding the same identity merges quantities)
/// - Quantity is >= 1 for every line (a quantity of 0 removes the line)
/// - Insertion order is display order and is preserved
///
/// Serializes transparently as a JSON array of lines, which is exactly the
/// persisted slot layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Merges a candidate line into the cart.
    ///
    /// ## Behavior
    /// - Same `id` already present: its quantity grows by the candidate's
    ///   quantity; title, price, and image stay as first added
    /// - Otherwise: the candidate is appended as a new line
    ///
    /// Repeated adds accumulate; they never duplicate a line.
    pub fn merge_line(&mut self, candidate: CartLine) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == candidate.id) {
            line.quantity += candidate.quantity;
            return;
        }

        self.lines.push(candidate);
    }

    /// Sets a line's quantity to an absolute value.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: the line is removed entirely
    /// - Otherwise: the quantity is set exactly (not a delta)
    ///
    /// ## Returns
    /// Whether a line with that id existed. A missing id is a no-op, not an
    /// error.
    pub fn set_line_quantity(&mut self, id: &LineId, quantity: i64) -> bool {
        let Some(index) = self.lines.iter().position(|l| &l.id == id) else {
            return false;
        };

        if quantity <= 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = quantity;
        }

        true
    }

    /// Removes a line by id.
    ///
    /// ## Returns
    /// Whether a line was removed. A missing id is a no-op, not an error.
    pub fn remove_line(&mut self, id: &LineId) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        self.lines.len() != initial_len
    }

    /// Looks up a line by id.
    pub fn line(&self, id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    /// Read-only view of the lines, in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of distinct lines (not total quantity).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
