//! # Cart Store
//!
//! The command interface of the engine: load, save, and the three
//! mutations, each one a single read-modify-write round-trip against the
//! persisted slot.
//!
//! ## Operation Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Every mutation, same round-trip                         │
//! │                                                                         │
//! │   add_item / set_quantity / remove_item                                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   load()     ── read slot, absent ⇒ empty, corrupt ⇒ error             │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   mutate     ── pure Cart methods from tally-core                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   save()     ── full overwrite of the slot                              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   Cart       ── post-mutation snapshot returned to the caller,         │
//! │                 which recomputes ALL display aggregates from it        │
//! │                                                                         │
//! │  No long-lived in-memory cart exists between operations. The slot IS   │
//! │  the cart.                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Execution is synchronous and single-actor. Two stores over one medium
//! race as last-write-wins; the store adds no locking around the
//! round-trip.

use std::collections::HashSet;

use tracing::debug;

use tally_core::{Cart, CartLine, LineId};

use crate::error::{StoreError, StoreResult};
use crate::medium::StorageMedium;

/// Slot key the cart is persisted under unless overridden.
pub const CART_SLOT: &str = "cartItems";

// =============================================================================
// CartStore
// =============================================================================

/// The cart engine over an injected storage medium.
///
/// ## Example
/// ```rust
/// use tally_core::{CartLine, Money};
/// use tally_store::medium::MemoryMedium;
/// use tally_store::store::CartStore;
///
/// let store = CartStore::new(MemoryMedium::new());
///
/// let mug = CartLine::new("Red Mug", Money::from_cents(999), "mug.png", 1);
/// let cart = store.add_item(mug)?;
/// assert_eq!(cart.len(), 1);
/// # Ok::<(), tally_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CartStore<M: StorageMedium> {
    medium: M,
    slot: String,
}

impl<M: StorageMedium> CartStore<M> {
    /// Creates a store over the given medium, using the default slot key
    /// [`CART_SLOT`].
    pub fn new(medium: M) -> Self {
        CartStore {
            medium,
            slot: CART_SLOT.to_string(),
        }
    }

    /// Overrides the slot key the cart is persisted under.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let store = CartStore::new(medium).with_slot("cartItems.staging");
    /// ```
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    /// The slot key this store reads and writes.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    // =========================================================================
    // Persistence Round-Trip
    // =========================================================================

    /// Loads the current cart from the slot.
    ///
    /// ## Behavior
    /// - Absent slot: empty cart (the ordinary first-visit state)
    /// - Present but unparsable, or parsed data breaking a cart invariant:
    ///   [`StoreError::CorruptState`]
    ///
    /// The two cases are deliberately distinct. An absent slot is normal;
    /// a present-but-broken slot means stored purchases are at stake and
    /// the caller decides what to do.
    pub fn load(&self) -> StoreResult<Cart> {
        let Some(raw) = self.medium.read(&self.slot)? else {
            debug!(slot = %self.slot, "No persisted cart, starting empty");
            return Ok(Cart::new());
        };

        let cart: Cart = serde_json::from_str(&raw)
            .map_err(|e| StoreError::corrupt_state(&self.slot, e.to_string()))?;
        self.verify_loaded(&cart)?;

        debug!(slot = %self.slot, lines = cart.len(), "Cart loaded");
        Ok(cart)
    }

    /// Serializes the full cart and overwrites the slot.
    ///
    /// Always a complete overwrite; there are no partial-line updates.
    /// The written form is a compact JSON array of line objects.
    pub fn save(&self, cart: &Cart) -> StoreResult<()> {
        let raw = serde_json::to_string(cart)
            .map_err(|e| StoreError::Internal(format!("failed to encode cart: {e}")))?;

        self.medium.write(&self.slot, &raw)?;
        debug!(slot = %self.slot, lines = cart.len(), "Cart saved");
        Ok(())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a candidate line to the cart.
    ///
    /// ## Behavior
    /// - A line with the same id already exists: its quantity grows by the
    ///   candidate's quantity (repeated adds accumulate, they never
    ///   duplicate a line); stored title, price, and image stay untouched
    /// - Otherwise: the candidate is appended
    ///
    /// ## Returns
    /// The post-mutation cart snapshot; derive every display aggregate
    /// from it.
    pub fn add_item(&self, candidate: CartLine) -> StoreResult<Cart> {
        debug!(
            slot = %self.slot,
            id = %candidate.id,
            quantity = candidate.quantity,
            "Adding item"
        );

        let mut cart = self.load()?;
        cart.merge_line(candidate);
        self.save(&cart)?;
        Ok(cart)
    }

    /// Sets a line's quantity to an absolute value.
    ///
    /// ## Behavior
    /// - Missing id: no-op, nothing is written, the unchanged cart returns
    /// - `new_quantity <= 0`: the line is removed entirely
    /// - Otherwise: the quantity becomes exactly `new_quantity`
    pub fn set_quantity(&self, id: &LineId, new_quantity: i64) -> StoreResult<Cart> {
        debug!(slot = %self.slot, id = %id, new_quantity, "Setting quantity");

        let mut cart = self.load()?;
        if cart.set_line_quantity(id, new_quantity) {
            self.save(&cart)?;
        }
        Ok(cart)
    }

    /// Removes a line by id.
    ///
    /// Filters the cart and persists the result. A missing id is a no-op
    /// for the cart's contents, but the filtered state is still written.
    pub fn remove_item(&self, id: &LineId) -> StoreResult<Cart> {
        debug!(slot = %self.slot, id = %id, "Removing item");

        let mut cart = self.load()?;
        cart.remove_line(id);
        self.save(&cart)?;
        Ok(cart)
    }

    // =========================================================================
    // Integrity
    // =========================================================================

    /// Checks cart invariants on freshly parsed slot data.
    ///
    /// The engine never writes a cart that fails these, so a violation
    /// means the slot was produced or edited by something else and cannot
    /// be trusted.
    fn verify_loaded(&self, cart: &Cart) -> StoreResult<()> {
        let mut seen = HashSet::with_capacity(cart.len());

        for line in cart.lines() {
            if line.quantity <= 0 {
                return Err(StoreError::corrupt_state(
                    &self.slot,
                    format!(
                        "line '{}' has non-positive quantity {}",
                        line.id, line.quantity
                    ),
                ));
            }
            if line.price.is_negative() {
                return Err(StoreError::corrupt_state(
                    &self.slot,
                    format!("line '{}' has a negative price", line.id),
                ));
            }
            if !seen.insert(&line.id) {
                return Err(StoreError::corrupt_state(
                    &self.slot,
                    format!("duplicate line id '{}'", line.id),
                ));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;
    use tally_core::{view, Money};

    fn store() -> CartStore<MemoryMedium> {
        CartStore::new(MemoryMedium::new())
    }

    fn mug(quantity: i64) -> CartLine {
        CartLine::new("Red Mug", Money::from_cents(999), "mug.png", quantity)
    }

    fn mug_id() -> LineId {
        mug(1).id
    }

    #[test]
    fn test_load_absent_slot_is_empty_cart() {
        let cart = store().load().unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = store();

        let mut cart = Cart::new();
        cart.merge_line(mug(2));
        cart.merge_line(CartLine::new("Tray", Money::from_cents(1250), "t.png", 1));

        store.save(&cart).unwrap();
        assert_eq!(store.load().unwrap(), cart);
    }

    #[test]
    fn test_add_item_persists_across_stores() {
        let medium = MemoryMedium::new();
        CartStore::new(medium.clone()).add_item(mug(1)).unwrap();

        // A brand-new store over the same medium sees the line
        let cart = CartStore::new(medium).load().unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_add_item_merges_same_identity() {
        let store = store();
        store.add_item(mug(1)).unwrap();
        let cart = store.add_item(mug(2)).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_add_item_keeps_first_price() {
        let store = store();
        store.add_item(mug(1)).unwrap();

        // Same derived identity cannot exist at another price, so craft a
        // candidate with a matching id by hand
        let mut rogue = mug(1);
        rogue.price = Money::from_cents(1);
        let cart = store.add_item(rogue).unwrap();

        assert_eq!(cart.lines()[0].price, Money::from_cents(999));
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_absolute() {
        let store = store();
        store.add_item(mug(5)).unwrap();

        let cart = store.set_quantity(&mug_id(), 2).unwrap();
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(store.load().unwrap().lines()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let store = store();
        store.add_item(mug(3)).unwrap();

        let cart = store.set_quantity(&mug_id(), 0).unwrap();
        assert!(cart.is_empty());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_set_quantity_missing_id_writes_nothing() {
        let medium = MemoryMedium::new();
        let store = CartStore::new(medium.clone());

        let cart = store.set_quantity(&LineId::from("ghost_1"), 7).unwrap();
        assert!(cart.is_empty());
        // A true no-op: the slot was never created
        assert_eq!(medium.read(CART_SLOT).unwrap(), None);
    }

    #[test]
    fn test_remove_item() {
        let store = store();
        store.add_item(mug(3)).unwrap();

        let cart = store.remove_item(&mug_id()).unwrap();
        assert!(cart.is_empty());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_remove_missing_id_still_writes_filtered_state() {
        let medium = MemoryMedium::new();
        let store = CartStore::new(medium.clone());

        let cart = store.remove_item(&LineId::from("ghost_1")).unwrap();
        assert!(cart.is_empty());
        // The filtered (empty) cart was persisted even though nothing matched
        assert_eq!(medium.read(CART_SLOT).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_written_slot_is_compact_json_array() {
        let medium = MemoryMedium::new();
        let store = CartStore::new(medium.clone());
        store.add_item(mug(2)).unwrap();

        let raw = medium.read(CART_SLOT).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"id":"red_mug_9.99","title":"Red Mug","price":9.99,"image":"mug.png","quantity":2}]"#
        );
    }

    #[test]
    fn test_custom_slot_key() {
        let medium = MemoryMedium::new();
        let store = CartStore::new(medium.clone()).with_slot("cartItems.staging");
        store.add_item(mug(1)).unwrap();

        assert_eq!(medium.read(CART_SLOT).unwrap(), None);
        assert!(medium.read("cartItems.staging").unwrap().is_some());
    }

    #[test]
    fn test_corrupt_slot_not_json() {
        let medium = MemoryMedium::new();
        medium.write(CART_SLOT, "definitely not json").unwrap();

        let err = CartStore::new(medium).load().unwrap_err();
        assert!(matches!(err, StoreError::CorruptState { .. }));
    }

    #[test]
    fn test_corrupt_slot_wrong_shape() {
        let medium = MemoryMedium::new();
        medium.write(CART_SLOT, r#"{"id":"red_mug_9.99"}"#).unwrap();

        let err = CartStore::new(medium).load().unwrap_err();
        assert!(matches!(err, StoreError::CorruptState { .. }));
    }

    #[test]
    fn test_corrupt_non_positive_quantity() {
        let medium = MemoryMedium::new();
        medium
            .write(
                CART_SLOT,
                r#"[{"id":"red_mug_9.99","title":"Red Mug","price":9.99,"image":"m.png","quantity":0}]"#,
            )
            .unwrap();

        let err = CartStore::new(medium).load().unwrap_err();
        assert!(err.to_string().contains("non-positive quantity"));
    }

    #[test]
    fn test_corrupt_negative_price() {
        let medium = MemoryMedium::new();
        medium
            .write(
                CART_SLOT,
                r#"[{"id":"red_mug_9.99","title":"Red Mug","price":-9.99,"image":"m.png","quantity":1}]"#,
            )
            .unwrap();

        let err = CartStore::new(medium).load().unwrap_err();
        assert!(err.to_string().contains("negative price"));
    }

    #[test]
    fn test_corrupt_duplicate_ids() {
        let medium = MemoryMedium::new();
        let line = r#"{"id":"red_mug_9.99","title":"Red Mug","price":9.99,"image":"m.png","quantity":1}"#;
        medium
            .write(CART_SLOT, &format!("[{line},{line}]"))
            .unwrap();

        let err = CartStore::new(medium).load().unwrap_err();
        assert!(err.to_string().contains("duplicate line id"));
    }

    #[test]
    fn test_corrupt_slot_is_left_untouched() {
        let medium = MemoryMedium::new();
        medium.write(CART_SLOT, "definitely not json").unwrap();

        let store = CartStore::new(medium.clone());
        assert!(store.load().is_err());

        // Nothing rewrote or cleared the slot behind the shopper's back
        assert_eq!(
            medium.read(CART_SLOT).unwrap().as_deref(),
            Some("definitely not json")
        );
    }

    #[test]
    fn test_two_fronts_share_one_medium() {
        let medium = MemoryMedium::new();
        let listing_page = CartStore::new(medium.clone());
        let cart_page = CartStore::new(medium);

        listing_page.add_item(mug(1)).unwrap();
        let cart = cart_page
            .add_item(CartLine::new("Tray", Money::from_cents(1250), "t.png", 1))
            .unwrap();

        assert_eq!(cart.len(), 2);
    }

    /// The full shopper journey: add, re-add, inspect totals, empty out.
    #[test]
    fn test_end_to_end_red_mug_scenario() {
        let store = store();
        let shipping = Money::from_cents(1500);

        // First add: one line, quantity 1
        let cart = store.add_item(mug(1)).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].id.as_str(), "red_mug_9.99");
        assert_eq!(cart.lines()[0].quantity, 1);

        // Same title and price again: merges to quantity 3
        let cart = store.add_item(mug(2)).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);

        // Aggregates recomputed from the returned snapshot
        assert_eq!(view::total_item_count(&cart), 3);
        assert_eq!(view::subtotal(&cart), Money::from_cents(2997)); // $29.97
        assert_eq!(view::order_total(&cart, shipping), Money::from_cents(4497)); // $44.97

        // Setting quantity to zero empties the cart
        let cart = store
            .set_quantity(&LineId::from("red_mug_9.99"), 0)
            .unwrap();
        assert!(cart.is_empty());
        assert_eq!(view::total_item_count(&cart), 0);
    }
}
