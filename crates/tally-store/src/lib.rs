//! # Tally Store
//!
//! Persistence layer for the Tally cart engine. Wraps a pluggable storage
//! medium and exposes the cart operations as read-modify-write round-trips
//! against a single named slot.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Front Ends (kiosk, ...)                  │
//! └──────────────────────────┬──────────────────────────────────┘
//!                            │ add_item / set_quantity / remove_item
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        CartStore                            │
//! │    load ─► mutate (tally-core) ─► save ─► Cart snapshot     │
//! └──────────────────────────┬──────────────────────────────────┘
//!                            │ StorageMedium trait
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//!      ┌──────────────┐            ┌──────────────┐
//!      │ MemoryMedium │            │  FileMedium  │
//!      │  (tests,     │            │ (one .json   │
//!      │   embedding) │            │  per slot)   │
//!      └──────────────┘            └──────────────┘
//! ```
//!
//! ## Design Principles
//! - The slot is the source of truth; no cart state lives between calls
//! - An absent slot is an empty cart, a broken slot is a loud error
//! - Saves are full overwrites of the slot, never partial edits
//! - Mediums are swappable through [`StorageMedium`]; the engine logic
//!   never touches the filesystem directly

pub mod error;
pub mod file;
pub mod medium;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use file::FileMedium;
pub use medium::{MemoryMedium, StorageMedium};
pub use store::{CartStore, CART_SLOT};
