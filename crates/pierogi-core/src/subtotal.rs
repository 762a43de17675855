//! # Subtotal Calculator
//!
//! Sums line-item costs into the order subtotal.
//!
//! ## Contract
//! ```text
//! subtotal(order) = Σ qty × unit_price_cents     (exact integer arithmetic)
//!
//! • Zero-quantity items contribute 0 (appending them changes nothing)
//! • Scaling every quantity by k scales the subtotal by exactly k
//! • Negative qty/price ⇒ InvalidLineItem, never clamped
//! ```
//!
//! This calculator needs no configuration, so unlike the discount/tax/fee
//! calculators it is a free function.

use crate::error::EngineResult;
use crate::money::Money;
use crate::types::Order;
use crate::validation::validate_order;

/// Computes the order subtotal in integer cents.
///
/// ## Example
/// ```rust
/// use pierogi_core::subtotal::subtotal;
/// use pierogi_core::types::{ItemKind, Order, OrderItem};
///
/// let order = Order::new(vec![OrderItem {
///     kind: ItemKind::Hot,
///     sku: "PIEROGI-POTATO-6".to_string(),
///     title: "Potato Pierogi 6-pack".to_string(),
///     filling: "potato".to_string(),
///     qty: 6,
///     unit_price_cents: 250,
///     add_ons: vec![],
/// }]);
///
/// assert_eq!(subtotal(&order).unwrap().cents(), 1500);
/// ```
pub fn subtotal(order: &Order) -> EngineResult<Money> {
    validate_order(order)?;

    let mut sum = Money::zero();
    for item in order.items() {
        sum += item.line_total();
    }
    Ok(sum)
}

// =============================================================================
// Unit Tests
// =============================================================================
