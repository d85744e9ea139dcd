//! # Line Identity
//!
//! Deterministic identity derivation: how Tally decides two adds refer to
//! the same product.
//!
//! There is no product catalog. A line's identity is derived entirely from
//! its title and unit price, so repeated adds of "the same thing" converge
//! on one cart line no matter which page, session, or front end produced
//! them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Identity Derivation                                 │
//! │                                                                         │
//! │   "  Red   MUG "  +  9.99                                              │
//! │         │                                                               │
//! │         ▼  trim, lowercase, whitespace runs → "_"                      │
//! │   "red_mug"                                                             │
//! │         │                                                               │
//! │         ▼  append "_" + price decimal string                           │
//! │   "red_mug_9.99"   ◄── the LineId                                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// LineId Type
// =============================================================================

/// Identity key of a cart line.
///
/// Serializes as a bare string. Equal normalized title + equal price always
/// produce an equal `LineId`; this is the cart's only notion of "same
/// product".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Wraps an already-derived identity string.
    ///
    /// Front ends normally obtain ids from [`derive_identity`] or from
    /// lines the engine returned; this constructor exists for replaying
    /// such an id (e.g. a CLI argument).
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        LineId(id.into())
    }

    /// The identity as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineId {
    fn from(id: &str) -> Self {
        LineId::new(id)
    }
}

impl From<String> for LineId {
    fn from(id: String) -> Self {
        LineId(id)
    }
}

// =============================================================================
// Derivation
// =============================================================================

/// Derives the identity of a line from its title and unit price.
///
/// ## Rules
/// - Surrounding whitespace is trimmed
/// - Letters are lowercased (Unicode-aware)
/// - Each internal whitespace run collapses to a single `_`
/// - The price's decimal string is appended after a final `_`
///   (trailing fractional zeros stripped: `15.00` contributes `"15"`)
///
/// Deterministic and idempotent: equivalent titles under the rules above,
/// with an equal price, always yield the same id.
///
/// ## Example
/// ```rust
/// use tally_core::identity::derive_identity;
/// use tally_core::money::Money;
///
/// let id = derive_identity("Red Mug", Money::from_cents(999));
/// assert_eq!(id.as_str(), "red_mug_9.99");
///
/// // Case and whitespace width never matter
/// let same = derive_identity("  RED   mug ", Money::from_cents(999));
/// assert_eq!(same, id);
/// ```
pub fn derive_identity(title: &str, price: Money) -> LineId {
    let trimmed = title.trim();
    let mut normalized = String::with_capacity(trimmed.len() + 8);

    let mut in_whitespace_run = false;
    for ch in trimmed.chars() {
        if ch.is_whitespace() {
            if !in_whitespace_run {
                normalized.push('_');
                in_whitespace_run = true;
            }
        } else {
            normalized.extend(ch.to_lowercase());
            in_whitespace_run = false;
        }
    }

    normalized.push('_');
    normalized.push_str(&price.identity_component());

    LineId(normalized)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_identity_basic() {
        let id = derive_identity("Red Mug", Money::from_cents(999));
        assert_eq!(id.as_str(), "red_mug_9.99");
    }

    #[test]
    fn test_identity_ignores_case() {
        let price = Money::from_cents(999);
        assert_eq!(
            derive_identity("RED MUG", price),
            derive_identity("red mug", price)
        );
    }

    #[test]
    fn test_identity_ignores_whitespace_width() {
        let price = Money::from_cents(999);
        let canonical = derive_identity("red mug", price);

        assert_eq!(derive_identity("  red mug  ", price), canonical);
        assert_eq!(derive_identity("red    mug", price), canonical);
        assert_eq!(derive_identity("red\t mug", price), canonical);
        assert_eq!(derive_identity("red\nmug", price), canonical);
    }

    #[test]
    fn test_identity_differs_by_price() {
        let a = derive_identity("red mug", Money::from_cents(999));
        let b = derive_identity("red mug", Money::from_cents(1099));
        assert_ne!(a, b);
    }

    #[test]
    fn test_identity_whole_price_has_no_decimals() {
        let id = derive_identity("Gift Card", Money::from_cents(1500));
        assert_eq!(id.as_str(), "gift_card_15");
    }

    #[test]
    fn test_identity_single_word_title() {
        let id = derive_identity("Mug", Money::from_cents(550));
        assert_eq!(id.as_str(), "mug_5.5");
    }

    #[test]
    fn test_line_id_display_and_from() {
        let id = LineId::from("red_mug_9.99");
        assert_eq!(id.to_string(), "red_mug_9.99");
        assert_eq!(LineId::new(String::from("red_mug_9.99")), id);
    }
}
