//! # Tax Calculator
//!
//! Computes tax owed on the taxable portion of an order.
//!
//! ## Taxation Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHAT IS TAXED                                                          │
//! │                                                                         │
//! │  Hot (prepared) items    → taxed at the zone rate                      │
//! │  Frozen take-home packs  → fully exempt                                │
//! │                                                                         │
//! │  tax = floor(hot_subtotal × zone_rate), minimum 1¢ whenever the        │
//! │  taxable base is positive and the rate is positive                      │
//! │                                                                         │
//! │  • The base is the PRE-discount hot subtotal (discounts reduce what    │
//! │    the customer pays, not what is owed on the sale)                     │
//! │  • Zone picks the rate (local 8%, outer 6% by default)                 │
//! │  • Rush never affects tax                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The 1¢ minimum exists because flooring alone would tax a 1¢ hot order at
//! zero; a sale of hot food with positive value must never owe zero tax.

use crate::config::PricingConfig;
use crate::error::EngineResult;
use crate::money::Money;
use crate::types::{DeliveryContext, ItemKind, Order};
use crate::validation::validate_order;

// =============================================================================
// Tax Calculator
// =============================================================================

/// Computes zone-rated tax on hot items only.
///
/// ## Example
/// ```rust
/// use pierogi_core::config::PricingConfig;
/// use pierogi_core::tax::TaxCalculator;
/// use pierogi_core::types::{DeliveryContext, ItemKind, Order, OrderItem, Zone};
///
/// let calc = TaxCalculator::new(&PricingConfig::default());
/// let order = Order::new(vec![OrderItem {
///     kind: ItemKind::Hot,
///     sku: "PIEROGI-CHEESE-6".to_string(),
///     title: "Cheese Pierogi, served hot".to_string(),
///     filling: "cheese".to_string(),
///     qty: 1,
///     unit_price_cents: 1500,
///     add_ons: vec![],
/// }]);
///
/// let delivery = DeliveryContext::new(Zone::Local, false);
/// // floor(1500 × 8%) = 120
/// assert_eq!(calc.tax(&order, &delivery).unwrap().cents(), 120);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator {
    config: PricingConfig,
}

impl TaxCalculator {
    /// Creates a tax calculator with the given policy.
    pub fn new(config: &PricingConfig) -> Self {
        TaxCalculator { config: *config }
    }

    /// Computes the tax owed for an order delivered into a zone.
    pub fn tax(&self, order: &Order, delivery: &DeliveryContext) -> EngineResult<Money> {
        validate_order(order)?;

        let mut hot_subtotal = Money::zero();
        for item in order.items() {
            if item.kind == ItemKind::Hot {
                hot_subtotal += item.line_total();
            }
        }

        let rate = self.config.tax_rate(delivery.zone);
        let tax = hot_subtotal.percent_floor(rate);

        // Positive hot value at a positive rate must owe at least one cent.
        if tax.is_zero() && hot_subtotal.is_positive() && !rate.is_zero() {
            return Ok(Money::from_cents(1));
        }
        Ok(tax)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
