//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  └── ValidationError  - Input validation failures at the boundary      │
//! │                                                                         │
//! │  tally-store errors (separate crate)                                   │
//! │  └── StoreError       - Persistence failures (corrupt slot, I/O)       │
//! │                                                                         │
//! │  Kiosk binary                                                          │
//! │  └── anyhow::Error    - Thin shell, context added at the edge          │
//! │                                                                         │
//! │  Missing ids are NOT errors anywhere: operations on an id that is      │
//! │  not in the cart are defined no-ops.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a new-line candidate from a front end doesn't
/// meet requirements. Used at the input boundary, before the engine runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive (> 0).
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative (>= 0).
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Raw text could not be parsed into the field's type.
    ///
    /// Raised for price strings that are not decimal numbers. Quantity
    /// strings never raise this: bad quantities sanitize to 1 instead.
    #[error("{field} is not a valid value: '{value}'")]
    InvalidFormat { field: String, value: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");

        let err = ValidationError::InvalidFormat {
            field: "price".to_string(),
            value: "free".to_string(),
        };
        assert_eq!(err.to_string(), "price is not a valid value: 'free'");
    }
}
