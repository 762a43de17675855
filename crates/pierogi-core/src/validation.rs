//! # Validation Module
//!
//! Line-item validation for the pricing core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Order intake (external collaborator)                         │
//! │  ├── Rich checks: SKU exists, coupon eligibility, address, ...         │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Only what would corrupt the math: negative qty / price            │
//! │  └── Rejects with InvalidLineItem, never clamps                        │
//! │                                                                         │
//! │  Everything else (empty order, zero qty, zero price) is valid input    │
//! │  that legitimately prices to zero.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{EngineResult, PricingError};
use crate::types::{Order, OrderItem};

/// Validates a single line item.
///
/// ## Rules
/// - `qty >= 0` (zero is allowed, contributes nothing)
/// - `unit_price_cents >= 0` (zero is allowed, promo items)
///
/// ## Example
/// ```rust
/// use pierogi_core::types::{ItemKind, OrderItem};
/// use pierogi_core::validation::validate_item;
///
/// let mut item = OrderItem {
///     kind: ItemKind::Frozen,
///     sku: "PIEROGI-POTATO-6".to_string(),
///     title: "Potato Pierogi 6-pack".to_string(),
///     filling: "potato".to_string(),
///     qty: 6,
///     unit_price_cents: 1000,
///     add_ons: vec![],
/// };
/// assert!(validate_item(&item).is_ok());
///
/// item.qty = -1;
/// assert!(validate_item(&item).is_err());
/// ```
pub fn validate_item(item: &OrderItem) -> EngineResult<()> {
    if item.qty < 0 {
        return Err(PricingError::InvalidLineItem {
            sku: item.sku.clone(),
            field: "qty".to_string(),
            value: item.qty,
        });
    }

    if item.unit_price_cents < 0 {
        return Err(PricingError::InvalidLineItem {
            sku: item.sku.clone(),
            field: "unit_price_cents".to_string(),
            value: item.unit_price_cents,
        });
    }

    Ok(())
}

/// Validates every line item in an order.
///
/// Fails on the first invalid item; an empty order is trivially valid.
pub fn validate_order(order: &Order) -> EngineResult<()> {
    for item in order.items() {
        validate_item(item)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
