//! # Kiosk Commands
//!
//! One function per subcommand. Each mutation sanitizes its raw input,
//! runs a single store operation, and prints the cart page for the
//! snapshot the engine returned.
//!
//! ## Input Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CLI argument strings (raw, untrusted)                                  │
//! │       │                                                                 │
//! │       ├── quantity ──► sanitize_quantity   "abc" / "-3" ⇒ 1, "0" ⇒ 0   │
//! │       ├── price ─────► parse_price         "free" ⇒ error              │
//! │       └── title ─────► validate_title      "" ⇒ error                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore operation ──► post-mutation snapshot ──► render             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations on an id that is not in the cart print the unchanged cart;
//! they are defined no-ops, not errors.

use anyhow::Result;
use tracing::debug;

use tally_core::validation::{parse_price, sanitize_quantity, validate_quantity, validate_title};
use tally_core::{view, CartLine, LineId, Money};
use tally_store::{CartStore, StorageMedium};

use crate::render;

/// `tally add` - the listing page's add-to-cart button.
///
/// Quantity comes in as raw text and is sanitized like a form field; a
/// sanitized 0 is rejected because a line never enters the cart empty.
pub fn add<M: StorageMedium>(
    store: &CartStore<M>,
    title: &str,
    price: &str,
    image: &str,
    qty: &str,
) -> Result<()> {
    debug!(title, "add command");

    validate_title(title)?;
    let price = parse_price(price)?;
    let quantity = sanitize_quantity(qty);
    validate_quantity(quantity)?;

    let cart = store.add_item(CartLine::new(title, price, image, quantity))?;
    print!("{}", render::cart_page(&cart));
    Ok(())
}

/// `tally qty` - the cart page's quantity input.
///
/// The raw value is sanitized, then applied as an absolute quantity;
/// 0 removes the line.
pub fn set_quantity<M: StorageMedium>(store: &CartStore<M>, id: &str, quantity: &str) -> Result<()> {
    debug!(id, "qty command");

    let quantity = sanitize_quantity(quantity);
    let cart = store.set_quantity(&LineId::from(id), quantity)?;
    print!("{}", render::cart_page(&cart));
    Ok(())
}

/// `tally inc` - the cart page's + button.
pub fn increment<M: StorageMedium>(store: &CartStore<M>, id: &str) -> Result<()> {
    debug!(id, "inc command");
    step_quantity(store, &LineId::from(id), 1)
}

/// `tally dec` - the cart page's − button. Decrementing from 1 removes
/// the line.
pub fn decrement<M: StorageMedium>(store: &CartStore<M>, id: &str) -> Result<()> {
    debug!(id, "dec command");
    step_quantity(store, &LineId::from(id), -1)
}

/// Reads the line's current quantity and applies an absolute update one
/// step away. A missing id leaves the cart untouched.
fn step_quantity<M: StorageMedium>(store: &CartStore<M>, id: &LineId, delta: i64) -> Result<()> {
    let loaded = store.load()?;
    let current = loaded.line(id).map(|line| line.quantity);

    let cart = match current {
        Some(quantity) => store.set_quantity(id, quantity + delta)?,
        None => loaded,
    };

    print!("{}", render::cart_page(&cart));
    Ok(())
}

/// `tally remove` - the cart page's remove button.
pub fn remove<M: StorageMedium>(store: &CartStore<M>, id: &str) -> Result<()> {
    debug!(id, "remove command");

    let cart = store.remove_item(&LineId::from(id))?;
    print!("{}", render::cart_page(&cart));
    Ok(())
}

/// `tally show` - render the cart page without mutating anything.
pub fn show<M: StorageMedium>(store: &CartStore<M>) -> Result<()> {
    let cart = store.load()?;
    print!("{}", render::cart_page(&cart));
    Ok(())
}

/// `tally checkout` - render the order summary with the flat shipping
/// fee and the order total.
pub fn checkout<M: StorageMedium>(store: &CartStore<M>, shipping: Money) -> Result<()> {
    let cart = store.load()?;
    print!("{}", render::order_summary(&cart, shipping));
    Ok(())
}

/// `tally count` - print the header badge count, nothing else.
///
/// Bare number on stdout so scripts can consume it.
pub fn count<M: StorageMedium>(store: &CartStore<M>) -> Result<()> {
    let cart = store.load()?;
    println!("{}", view::total_item_count(&cart));
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tally_store::{MemoryMedium, CART_SLOT};

    fn store() -> CartStore<MemoryMedium> {
        CartStore::new(MemoryMedium::new())
    }

    #[test]
    fn test_add_builds_line_from_raw_input() {
        let store = store();
        add(&store, "Red Mug", "9.99", "mug.png", "2").unwrap();

        let cart = store.load().unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].id.as_str(), "red_mug_9.99");
        assert_eq!(cart.lines()[0].price, Money::from_cents(999));
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_add_sanitizes_junk_quantity_to_one() {
        let store = store();
        add(&store, "Red Mug", "9.99", "mug.png", "lots").unwrap();

        assert_eq!(store.load().unwrap().lines()[0].quantity, 1);
    }

    #[test]
    fn test_add_rejects_zero_quantity() {
        // "0" survives sanitization but a new line may not start at 0
        assert!(add(&store(), "Red Mug", "9.99", "mug.png", "0").is_err());
    }

    #[test]
    fn test_add_rejects_blank_title() {
        assert!(add(&store(), "   ", "9.99", "mug.png", "1").is_err());
    }

    #[test]
    fn test_add_rejects_garbled_price() {
        assert!(add(&store(), "Red Mug", "free", "mug.png", "1").is_err());
    }

    #[test]
    fn test_set_quantity_sanitizes_raw_value() {
        let store = store();
        add(&store, "Red Mug", "9.99", "mug.png", "5").unwrap();

        set_quantity(&store, "red_mug_9.99", "junk").unwrap();
        assert_eq!(store.load().unwrap().lines()[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let store = store();
        add(&store, "Red Mug", "9.99", "mug.png", "2").unwrap();

        set_quantity(&store, "red_mug_9.99", "0").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_increment_adds_one() {
        let store = store();
        add(&store, "Red Mug", "9.99", "mug.png", "2").unwrap();

        increment(&store, "red_mug_9.99").unwrap();
        assert_eq!(store.load().unwrap().lines()[0].quantity, 3);
    }

    #[test]
    fn test_decrement_from_one_removes() {
        let store = store();
        add(&store, "Red Mug", "9.99", "mug.png", "1").unwrap();

        decrement(&store, "red_mug_9.99").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_step_on_missing_id_writes_nothing() {
        let medium = MemoryMedium::new();
        let store = CartStore::new(medium.clone());

        increment(&store, "ghost_1").unwrap();
        decrement(&store, "ghost_1").unwrap();

        // Neither step created the slot
        assert_eq!(medium.read(CART_SLOT).unwrap(), None);
    }

    #[test]
    fn test_remove_missing_id_keeps_cart_contents() {
        let store = store();
        add(&store, "Red Mug", "9.99", "mug.png", "2").unwrap();

        remove(&store, "ghost_1").unwrap();
        let cart = store.load().unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }
}
