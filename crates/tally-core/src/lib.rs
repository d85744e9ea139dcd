//! # tally-core: Pure Cart Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains the cart's entity
//! model and every display calculation as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front ends (kiosk CLI, tests)                   │   │
//! │  │    add ──► qty / inc / dec ──► remove ──► show / checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command interface                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tally-store (CartStore)                         │   │
//! │  │    load ──► mutate ──► save, one round-trip per operation       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │   money   │  │ identity  │  │   view    │  │   │
//! │  │   │   Cart    │  │   Money   │  │  LineId   │  │ CartView  │  │   │
//! │  │   │ CartLine  │  │ rounding  │  │ derive_*  │  │ totals    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart entity model (Cart, CartLine) and pure mutations
//! - [`identity`] - Deterministic line identity derived from title + price
//! - [`money`] - Money type backed by exact decimals (no floating point!)
//! - [`view`] - Display aggregates, recomputed together after any mutation
//! - [`validation`] - Input sanitization and candidate validation
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Exact Money**: Prices are decimals; rounding happens once, explicitly
//! 4. **Missing ids are no-ops**: never errors, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Cart, CartLine, Money};
//! use tally_core::view;
//!
//! // Two adds of the same product merge into one line
//! let mut cart = Cart::new();
//! cart.merge_line(CartLine::new("Red Mug", Money::from_cents(999), "mug.png", 1));
//! cart.merge_line(CartLine::new("Red Mug", Money::from_cents(999), "mug.png", 2));
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(view::total_item_count(&cart), 3);
//! assert_eq!(view::subtotal(&cart), Money::from_cents(2997)); // $29.97
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod identity;
pub mod money;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Cart` instead of
// `use tally_core::cart::Cart`

pub use cart::{Cart, CartLine};
pub use error::ValidationError;
pub use identity::{derive_identity, LineId};
pub use money::Money;
pub use view::{CartTotals, CartView, LineView};
