//! # Total Aggregator
//!
//! Composes the four calculators into one priced order.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PricingEngine::price                               │
//! │                                                                         │
//! │   Order ────┬──► subtotal ───────────────────────────┐                 │
//! │             ├──► DiscountEngine (profile, coupon) ───┤                 │
//! │             ├──► TaxCalculator (zone) ───────────────┤                 │
//! │             └──► DeliveryFeeCalculator (zone, rush,  │                 │
//! │                  tier) ──────────────────────────────┤                 │
//! │                                                      ▼                 │
//! │        total = subtotal − discount + tax + delivery_fee                │
//! │                (floored at zero)                                        │
//! │                                                                         │
//! │  POLICY: tax is computed on the PRE-discount hot subtotal. Discounts   │
//! │  reduce what the customer pays, never the taxable base. Auditors       │
//! │  rely on this ordering.                                                 │
//! │                                                                         │
//! │  The rush surcharge lives inside delivery_fee and appears in the       │
//! │  total exactly once - the aggregator adds nothing of its own.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every calculator stays independently callable; the engine only wires the
//! relevant input subset into each and combines the four integers.

use tracing::debug;

use crate::config::PricingConfig;
use crate::delivery::DeliveryFeeCalculator;
use crate::discount::DiscountEngine;
use crate::error::EngineResult;
use crate::subtotal::subtotal;
use crate::tax::TaxCalculator;
use crate::types::{Coupon, DeliveryContext, Order, PricingResult, Profile};

// =============================================================================
// Pricing Context
// =============================================================================

/// Everything about a pricing request that is not the cart itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingContext {
    pub profile: Profile,
    pub delivery: DeliveryContext,
    pub coupon: Option<Coupon>,
}

impl PricingContext {
    pub const fn new(
        profile: Profile,
        delivery: DeliveryContext,
        coupon: Option<Coupon>,
    ) -> Self {
        PricingContext {
            profile,
            delivery,
            coupon,
        }
    }
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// The total aggregator: one engine, constructed once with the policy,
/// shared freely across threads (it is plain immutable data).
///
/// ## Example
/// ```rust
/// use pierogi_core::config::PricingConfig;
/// use pierogi_core::pricing::{PricingContext, PricingEngine};
/// use pierogi_core::types::{
///     DeliveryContext, ItemKind, Order, OrderItem, Profile, Tier, Zone,
/// };
///
/// let engine = PricingEngine::new(PricingConfig::default());
/// let order = Order::new(vec![OrderItem {
///     kind: ItemKind::Hot,
///     sku: "PIEROGI-CHEESE-12".to_string(),
///     title: "Cheese Pierogi, served hot".to_string(),
///     filling: "cheese".to_string(),
///     qty: 1,
///     unit_price_cents: 1500,
///     add_ons: vec![],
/// }]);
/// let ctx = PricingContext::new(
///     Profile::new(Tier::Regular),
///     DeliveryContext::new(Zone::Local, false),
///     None,
/// );
///
/// let priced = engine.price(&order, &ctx).unwrap();
/// assert_eq!(priced.total_cents, 2120); // 1500 − 0 + 120 tax + 500 fee
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine {
    discounts: DiscountEngine,
    tax: TaxCalculator,
    delivery: DeliveryFeeCalculator,
}

impl PricingEngine {
    /// Creates an engine with the given policy.
    pub fn new(config: PricingConfig) -> Self {
        PricingEngine {
            discounts: DiscountEngine::new(&config),
            tax: TaxCalculator::new(&config),
            delivery: DeliveryFeeCalculator::new(&config),
        }
    }

    /// Prices an order end to end.
    ///
    /// Returns a complete [`PricingResult`] or an error - never a partial
    /// breakdown. All components are non-negative and satisfy
    /// `total = subtotal − discount + tax + delivery_fee`, floored at zero.
    pub fn price(&self, order: &Order, ctx: &PricingContext) -> EngineResult<PricingResult> {
        let subtotal = subtotal(order)?;
        let discount = self
            .discounts
            .discounts(order, &ctx.profile, ctx.coupon)?;
        let tax = self.tax.tax(order, &ctx.delivery)?;
        let delivery_fee = self
            .delivery
            .delivery_fee(order, &ctx.delivery, &ctx.profile)?;

        // Discount is already capped at subtotal, so this floor only guards
        // the arithmetic identity, it never hides a pricing bug.
        let total = (subtotal - discount + tax + delivery_fee).floor_at_zero();

        debug!(
            subtotal = subtotal.cents(),
            discount = discount.cents(),
            tax = tax.cents(),
            delivery_fee = delivery_fee.cents(),
            total = total.cents(),
            coupon = ctx.coupon.map(|c| c.code()),
            "order priced"
        );

        Ok(PricingResult {
            subtotal_cents: subtotal.cents(),
            discount_cents: discount.cents(),
            tax_cents: tax.cents(),
            delivery_fee_cents: delivery_fee.cents(),
            total_cents: total.cents(),
        })
    }
}

impl Default for PricingEngine {
    /// An engine running the shop's standard policy.
    fn default() -> Self {
        PricingEngine::new(PricingConfig::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
