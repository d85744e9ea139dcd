//! # Validation Module
//!
//! Input boundary for Tally: sanitization of raw user input and validation
//! of new-line candidates.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (kiosk CLI, test harness, ...)                     │
//! │  ├── Raw strings from the user                                         │
//! │  └── THIS MODULE: sanitize_quantity, validate_* before the engine      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart Store                                                   │
//! │  ├── Trusts sanitized input (only rule it applies: qty <= 0 removes)   │
//! │  └── Structural checks on LOADED data (corrupt-slot detection)         │
//! │                                                                         │
//! │  The engine never sees a non-numeric quantity: coercion happens        │
//! │  here, once, explicitly.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{sanitize_quantity, validate_title};
//!
//! // Raw quantity input from a form field or CLI argument
//! assert_eq!(sanitize_quantity("3"), 3);
//! assert_eq!(sanitize_quantity("lots"), 1);
//!
//! // Candidate fields before building a new line
//! validate_title("Red Mug").unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Input Sanitization
// =============================================================================

/// Sanitizes a raw quantity string into a usable integer.
///
/// ## Rules
/// - Trimmed, then parsed as a whole base-10 integer
/// - Parse failure or a negative value coerces to `1`
/// - `0` passes through unchanged (setting a line to 0 removes it)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart page: quantity field edited                                       │
/// │                                                                         │
/// │  User types: "abc" / "-3" / "0" / "7"                                  │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  sanitize_quantity(raw) ← THIS FUNCTION                                │
/// │       │                                                                 │
/// │       ├── not a whole number? → 1 (keep the line, never trust junk)    │
/// │       ├── negative?           → 1                                       │
/// │       └── 0 or positive       → unchanged                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  set_quantity(id, sanitized)                                           │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Note the parse is strict: `"3.5"` and `"7x"` are not whole numbers and
/// coerce to 1 rather than being partially read.
pub fn sanitize_quantity(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(qty) if qty >= 0 => qty,
        _ => 1,
    }
}

// =============================================================================
// Candidate Validators
// =============================================================================

/// Validates a line title.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_title;
///
/// assert!(validate_title("Red Mug").is_ok());
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Parses a raw price string into validated [`Money`].
///
/// Front ends hold prices as text (form fields, CLI arguments) right up to
/// this boundary. Unlike quantities there is no safe coercion for a garbled
/// price, so parse failures are errors rather than defaults.
///
/// ## Example
/// ```rust
/// use tally_core::validation::parse_price;
/// use tally_core::Money;
///
/// assert_eq!(parse_price("9.99").unwrap(), Money::from_cents(999));
/// assert!(parse_price("free").is_err());
/// assert!(parse_price("-1.00").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<Money> {
    let price: Money = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "price".to_string(),
        value: raw.to_string(),
    })?;

    validate_price(price)?;
    Ok(price)
}

/// Validates the quantity of a new-line candidate.
///
/// ## Rules
/// - Must be positive (> 0): a line never enters the cart at quantity 0
///
/// Absolute quantity UPDATES are different: they go through
/// `set_quantity`, where 0 and below mean removal.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_quantity_passes_whole_numbers() {
        assert_eq!(sanitize_quantity("7"), 7);
        assert_eq!(sanitize_quantity(" 7 "), 7);
        assert_eq!(sanitize_quantity("0"), 0);
    }

    #[test]
    fn test_sanitize_quantity_coerces_junk_to_one() {
        assert_eq!(sanitize_quantity("abc"), 1);
        assert_eq!(sanitize_quantity(""), 1);
        assert_eq!(sanitize_quantity("3.5"), 1);
        assert_eq!(sanitize_quantity("7x"), 1);
    }

    #[test]
    fn test_sanitize_quantity_coerces_negatives_to_one() {
        assert_eq!(sanitize_quantity("-3"), 1);
        assert_eq!(sanitize_quantity("-1"), 1);
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Red Mug").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(999)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("9.99").unwrap(), Money::from_cents(999));
        assert_eq!(parse_price(" 15.00 ").unwrap(), Money::from_cents(1500));
        assert_eq!(parse_price("0").unwrap(), Money::zero());

        assert!(matches!(
            parse_price("free"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_price("-1.00"),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
    }
}
