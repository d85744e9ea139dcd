//! # Store Error Types
//!
//! Error types for persisted-slot operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Medium failure (std::io::Error)        Bad slot content                │
//! │       │                                      │                          │
//! │       ▼                                      ▼                          │
//! │  ReadFailed / WriteFailed               CorruptState                    │
//! │       │                                      │                          │
//! │       └──────────────┬───────────────────────┘                          │
//! │                      ▼                                                  │
//! │           Front end (kiosk) adds context and exits non-zero            │
//! │                                                                         │
//! │  NOT HERE: missing line ids. Operations on an id that is not in the    │
//! │  cart are defined no-ops, never errors.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persisted-slot operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Slot content exists but is not a valid cart.
    ///
    /// ## When This Occurs
    /// - Slot text is not JSON, or not an array of line objects
    /// - A line carries a non-positive quantity or a negative price
    /// - Two lines share one id
    ///
    /// A corrupt slot is surfaced, never silently replaced with an empty
    /// cart: quietly resetting a shopper's cart loses real purchases.
    /// An ABSENT slot is different and simply means an empty cart.
    #[error("Corrupt cart state in slot '{slot}': {reason}")]
    CorruptState { slot: String, reason: String },

    /// The medium failed while reading a slot.
    ///
    /// ## When This Occurs
    /// - Backing file unreadable (permissions, disk error)
    /// - Anything except "slot absent", which reads as `None`
    #[error("Failed to read slot '{slot}'")]
    ReadFailed {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    /// The medium failed while writing a slot.
    #[error("Failed to write slot '{slot}'")]
    WriteFailed {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    /// Internal store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a CorruptState error for a slot.
    pub fn corrupt_state(slot: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::CorruptState {
            slot: slot.into(),
            reason: reason.into(),
        }
    }

    /// Creates a ReadFailed error wrapping a medium I/O failure.
    pub fn read_failed(slot: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::ReadFailed {
            slot: slot.into(),
            source,
        }
    }

    /// Creates a WriteFailed error wrapping a medium I/O failure.
    pub fn write_failed(slot: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::WriteFailed {
            slot: slot.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
