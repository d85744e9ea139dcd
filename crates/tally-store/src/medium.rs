//! # Storage Medium
//!
//! The pluggable seam between the cart store and whatever actually holds
//! the bytes.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      StorageMedium Seam                                 │
//! │                                                                         │
//! │           CartStore<M>                                                  │
//! │                │                                                        │
//! │                │  read(key) -> Option<String>                           │
//! │                │  write(key, value)                                     │
//! │                ▼                                                        │
//! │   ┌────────────────────────┐      ┌────────────────────────┐           │
//! │   │      MemoryMedium      │      │       FileMedium       │           │
//! │   │  HashMap behind a      │      │  one file per slot     │           │
//! │   │  shared lock (tests)   │      │  under a data dir      │           │
//! │   └────────────────────────┘      └────────────────────────┘           │
//! │                                                                         │
//! │  The store never knows which one it has. Tests run the exact           │
//! │  production code paths against MemoryMedium.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Contract
//! A medium is a shared mutable resource with NO cross-operation locking.
//! Two independent stores over one medium race as last-write-wins; that is
//! the accepted behavior of the whole engine, and media must not add
//! transactions on top. The lock inside [`MemoryMedium`] spans a single
//! `read` or `write` call only.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreResult;

// =============================================================================
// StorageMedium Trait
// =============================================================================

/// A key-value string store holding persisted slots.
///
/// Semantics the cart store relies on:
/// - `read` of a key never written returns `Ok(None)` (absent, not an error)
/// - `write` fully replaces any previous value for the key
/// - Calls are synchronous and complete or fail on their own
pub trait StorageMedium {
    /// Reads the full value of a slot, or `None` if the slot is absent.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrites a slot with a full new value.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;
}

// =============================================================================
// MemoryMedium
// =============================================================================

/// In-memory medium: the test double for the real persisted store.
///
/// ## Cloning Shares Storage
/// Clones hand out the same backing map, so several stores (or several
/// fronts in a test) can share one medium the way independent pages share
/// one persisted slot:
///
/// ```rust
/// use tally_store::medium::{MemoryMedium, StorageMedium};
///
/// let medium = MemoryMedium::new();
/// let other = medium.clone();
///
/// medium.write("cartItems", "[]").unwrap();
/// assert_eq!(other.read("cartItems").unwrap().as_deref(), Some("[]"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryMedium {
    /// Creates an empty in-memory medium.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryMedium {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let slots = self.slots.lock().expect("storage mutex poisoned");
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut slots = self.slots.lock().expect("storage mutex poisoned");
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
