//! # Error Types
//!
//! Domain-specific error types for pierogi-core.
//!
//! ## Error Philosophy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The pricing core is deliberately hard to anger.                        │
//! │                                                                         │
//! │  VALID (prices to zero, not an error)    ERROR (typed, synchronous)    │
//! │  ──────────────────────────────────────  ────────────────────────────  │
//! │  • Empty order                           • Negative quantity           │
//! │  • Zero-quantity line item               • Negative unit price         │
//! │  • Zero-price line item                  • Unrecognized coupon code    │
//! │  • Absent coupon (None)                                                │
//! │                                                                         │
//! │  No retries, no partial results: a call returns a complete              │
//! │  PricingResult or one of the errors below, never a mix.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, offending value)
//! 3. Errors are enum variants, never String
//! 4. Negative inputs are REJECTED, never clamped - clamping would mask
//!    bugs in the upstream intake layer

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors the pricing core can surface to the checkout layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A line item carries a negative quantity or price.
    ///
    /// ## When This Occurs
    /// Upstream validation (an external collaborator) should have rejected
    /// the cart before it reached this core. Surfacing the error instead of
    /// clamping keeps the intake bug visible.
    #[error("invalid line item {sku}: {field} is {value}, must be non-negative")]
    InvalidLineItem {
        sku: String,
        field: String,
        value: i64,
    },

    /// A coupon code was presented that this core does not recognize.
    ///
    /// Note: an ABSENT coupon is `None` at the call sites and applies zero
    /// discount; only an unparseable code is an error.
    #[error("unknown coupon code: {0}")]
    UnknownCoupon(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type EngineResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_line_item_message() {
        let err = PricingError::InvalidLineItem {
            sku: "PIEROGI-POTATO-6".to_string(),
            field: "qty".to_string(),
            value: -2,
        };
        assert_eq!(
            err.to_string(),
            "invalid line item PIEROGI-POTATO-6: qty is -2, must be non-negative"
        );
    }

    #[test]
    fn test_unknown_coupon_message() {
        let err = PricingError::UnknownCoupon("FREE-LUNCH".to_string());
        assert_eq!(err.to_string(), "unknown coupon code: FREE-LUNCH");
    }
}
