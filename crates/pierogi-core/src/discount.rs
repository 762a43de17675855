//! # Discount Engine
//!
//! Computes the total order discount from a set of independent,
//! composable rules.
//!
//! ## Rule Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Discount Pipeline                                  │
//! │                                                                         │
//! │   ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────┐    │
//! │   │ TierDiscount │  │VolumeDiscount│  │ Coupon rule (0 or 1)     │    │
//! │   │ vip: 5% off  │  │ 12/24 packs  │  │ FIRST10 or PIEROGI-BOGO  │    │
//! │   └──────┬───────┘  └──────┬───────┘  └───────────┬──────────────┘    │
//! │          │                 │                      │                    │
//! │          └────────────┬────┴──────────────────────┘                    │
//! │                       ▼                                                 │
//! │            sum of independent rules                                     │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │            cap at subtotal  ──►  0 ≤ discount ≤ subtotal, always       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each rule sees the PRE-coupon subtotal and never another rule's output,
//! so adding a coupon or a tier never changes how the others compute.
//! New rules are new `DiscountRule` impls, not new branches in old ones.

use crate::config::PricingConfig;
use crate::error::EngineResult;
use crate::money::Money;
use crate::subtotal::subtotal;
use crate::types::{Coupon, Order, Profile, Rate, Tier};
use crate::{BOGO_PACK_QTY, BULK_PACK_LARGE, BULK_PACK_SMALL};

// =============================================================================
// Discount Rule Trait
// =============================================================================

/// One independent discount policy.
///
/// Rules are pure: they read the order, profile and pre-coupon subtotal and
/// return a non-negative amount. Summing and capping is the engine's job.
pub trait DiscountRule {
    /// Stable rule name, used in log output.
    fn name(&self) -> &'static str;

    /// The discount this rule grants, in cents. Must be non-negative.
    fn amount(&self, order: &Order, profile: &Profile, subtotal: Money) -> Money;
}

// =============================================================================
// Tier Discount
// =============================================================================

/// Vip customers get a fixed percentage off the pre-coupon subtotal,
/// floored to the cent. Regular and guest tiers get nothing.
struct TierDiscount {
    vip_bps: u32,
}

impl DiscountRule for TierDiscount {
    fn name(&self) -> &'static str {
        "tier"
    }

    fn amount(&self, _order: &Order, profile: &Profile, subtotal: Money) -> Money {
        match profile.tier {
            Tier::Vip => subtotal.percent_floor(Rate::from_bps(self.vip_bps)),
            Tier::Guest | Tier::Regular => Money::zero(),
        }
    }
}

// =============================================================================
// Volume Discount
// =============================================================================

/// Bulk-size lines earn a per-unit rebate: exactly 12 units on a line
/// rebates `bulk12` per unit, exactly 24 rebates `bulk24` per unit.
/// 6-packs and every other quantity earn nothing here.
struct VolumeDiscount {
    bulk12: Money,
    bulk24: Money,
}

impl DiscountRule for VolumeDiscount {
    fn name(&self) -> &'static str {
        "volume"
    }

    fn amount(&self, order: &Order, _profile: &Profile, _subtotal: Money) -> Money {
        let mut total = Money::zero();
        for item in order.items() {
            let per_unit = match item.qty {
                q if q == BULK_PACK_SMALL => self.bulk12,
                q if q == BULK_PACK_LARGE => self.bulk24,
                _ => Money::zero(),
            };
            total += per_unit.multiply_quantity(item.qty);
        }
        total
    }
}

// =============================================================================
// Coupon: FIRST10
// =============================================================================

/// First-order coupon: a flat percentage off the subtotal, floored to the
/// cent. The floor guarantees the result sits in `[0, subtotal]` for any
/// order size.
struct First10 {
    bps: u32,
}

impl DiscountRule for First10 {
    fn name(&self) -> &'static str {
        "coupon:FIRST10"
    }

    fn amount(&self, _order: &Order, _profile: &Profile, subtotal: Money) -> Money {
        subtotal.percent_floor(Rate::from_bps(self.bps))
    }
}

// =============================================================================
// Coupon: PIEROGI-BOGO
// =============================================================================

/// Buy-one-get-one on 6-packs: qualifying lines (qty == 6) are paired up by
/// ascending unit price; each COMPLETE pair grants the cheaper line's unit
/// price. A leftover unpaired 6-pack and every other quantity are untouched.
struct PierogiBogo;

impl DiscountRule for PierogiBogo {
    fn name(&self) -> &'static str {
        "coupon:PIEROGI-BOGO"
    }

    fn amount(&self, order: &Order, _profile: &Profile, _subtotal: Money) -> Money {
        let mut six_pack_prices: Vec<Money> = order
            .items()
            .filter(|item| item.qty == BOGO_PACK_QTY)
            .map(|item| item.unit_price())
            .collect();
        six_pack_prices.sort();

        // Pair ascending neighbours; the first of each complete pair is the
        // cheaper one and rides free.
        let mut discount = Money::zero();
        for pair in six_pack_prices.chunks(2) {
            if let [cheaper, _dearer] = pair {
                discount += *cheaper;
            }
        }
        discount
    }
}

// =============================================================================
// Discount Engine
// =============================================================================

/// Evaluates every applicable rule, sums them, and caps at the subtotal.
///
/// ## Example
/// ```rust
/// use pierogi_core::config::PricingConfig;
/// use pierogi_core::discount::DiscountEngine;
/// use pierogi_core::types::{Order, Profile, Tier};
///
/// let engine = DiscountEngine::new(&PricingConfig::default());
/// let profile = Profile::new(Tier::Regular);
///
/// // An empty cart earns no discount, coupon or not
/// let discount = engine.discounts(&Order::empty(), &profile, None).unwrap();
/// assert!(discount.is_zero());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DiscountEngine {
    config: PricingConfig,
}

impl DiscountEngine {
    /// Creates a discount engine with the given policy.
    pub fn new(config: &PricingConfig) -> Self {
        DiscountEngine { config: *config }
    }

    /// Computes the total discount for an order.
    ///
    /// ## Guarantees
    /// - `0 ≤ result ≤ subtotal(order)`
    /// - `coupon = None` applies zero coupon discount (not an error)
    /// - rules combine additively and never see each other's output
    pub fn discounts(
        &self,
        order: &Order,
        profile: &Profile,
        coupon: Option<Coupon>,
    ) -> EngineResult<Money> {
        // Validates the order as a side effect; invalid items surface here.
        let subtotal = subtotal(order)?;

        let mut rules: Vec<Box<dyn DiscountRule>> = vec![
            Box::new(TierDiscount {
                vip_bps: self.config.vip_discount_bps,
            }),
            Box::new(VolumeDiscount {
                bulk12: Money::from_cents(self.config.bulk12_rebate_cents),
                bulk24: Money::from_cents(self.config.bulk24_rebate_cents),
            }),
        ];
        if let Some(coupon) = coupon {
            rules.push(self.coupon_rule(coupon));
        }

        let mut total = Money::zero();
        for rule in &rules {
            total += rule.amount(order, profile, subtotal);
        }

        // The combined discount may exceed the subtotal (e.g. vip + volume
        // on a near-free order); it must never drive the total negative.
        Ok(total.min(subtotal))
    }

    /// Maps a recognized coupon onto its rule.
    fn coupon_rule(&self, coupon: Coupon) -> Box<dyn DiscountRule> {
        match coupon {
            Coupon::First10 => Box::new(First10 {
                bps: self.config.first10_bps,
            }),
            Coupon::PierogiBogo => Box::new(PierogiBogo),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemKind, OrderItem};
    use proptest::prelude::*;

    fn item(qty: i64, unit_price_cents: i64) -> OrderItem {
        OrderItem {
            kind: ItemKind::Frozen,
            sku: format!("PIEROGI-POTATO-{qty}"),
            title: "Potato Pierogi".to_string(),
            filling: "potato".to_string(),
            qty,
            unit_price_cents,
            add_ons: vec![],
        }
    }

    fn engine() -> DiscountEngine {
        DiscountEngine::new(&PricingConfig::default())
    }

    // -------------------------------------------------------------------------
    // Tier rule
    // -------------------------------------------------------------------------

    #[test]
    fn test_vip_gets_five_percent_floored() {
        let order = Order::new(vec![item(1, 1001)]);
        let discount = engine()
            .discounts(&order, &Profile::new(Tier::Vip), None)
            .unwrap();
        // floor(1001 × 5%) = floor(50.05) = 50
        assert_eq!(discount.cents(), 50);
    }

    #[test]
    fn test_guest_and_regular_get_no_tier_discount() {
        let order = Order::new(vec![item(1, 10_000)]);
        for tier in [Tier::Guest, Tier::Regular] {
            let discount = engine()
                .discounts(&order, &Profile::new(tier), None)
                .unwrap();
            assert!(discount.is_zero());
        }
    }

    // -------------------------------------------------------------------------
    // Volume rule
    // -------------------------------------------------------------------------

    #[test]
    fn test_bulk_packs_rebate_per_unit() {
        let regular = Profile::new(Tier::Regular);

        // 12-pack: 12 × 10¢
        let discount = engine()
            .discounts(&Order::new(vec![item(12, 150)]), &regular, None)
            .unwrap();
        assert_eq!(discount.cents(), 120);

        // 24-pack: 24 × 25¢
        let discount = engine()
            .discounts(&Order::new(vec![item(24, 140)]), &regular, None)
            .unwrap();
        assert_eq!(discount.cents(), 600);
    }

    #[test]
    fn test_six_packs_and_odd_quantities_earn_no_volume_rebate() {
        let regular = Profile::new(Tier::Regular);
        for qty in [1, 5, 6, 11, 13, 23, 25, 48] {
            let discount = engine()
                .discounts(&Order::new(vec![item(qty, 150)]), &regular, None)
                .unwrap();
            assert!(discount.is_zero(), "qty {qty} should earn nothing");
        }
    }

    #[test]
    fn test_volume_rebates_sum_across_lines() {
        let order = Order::new(vec![item(12, 150), item(24, 140), item(6, 250)]);
        let discount = engine()
            .discounts(&order, &Profile::new(Tier::Regular), None)
            .unwrap();
        assert_eq!(discount.cents(), 120 + 600);
    }

    // -------------------------------------------------------------------------
    // FIRST10 coupon
    // -------------------------------------------------------------------------

    #[test]
    fn test_first10_is_ten_percent_floored() {
        let order = Order::new(vec![item(1, 1005)]);
        let discount = engine()
            .discounts(&order, &Profile::new(Tier::Regular), Some(Coupon::First10))
            .unwrap();
        // floor(1005 × 10%) = 100
        assert_eq!(discount.cents(), 100);
    }

    #[test]
    fn test_first10_on_empty_order_is_zero() {
        let discount = engine()
            .discounts(
                &Order::empty(),
                &Profile::new(Tier::Regular),
                Some(Coupon::First10),
            )
            .unwrap();
        assert!(discount.is_zero());
    }

    // -------------------------------------------------------------------------
    // PIEROGI-BOGO coupon
    // -------------------------------------------------------------------------

    #[test]
    fn test_bogo_pairs_equal_priced_six_packs() {
        // Two 6-packs at 1000 each → one pair → cheaper unit price = 1000
        let order = Order::new(vec![item(6, 1000), item(6, 1000)]);
        let discount = engine()
            .discounts(
                &order,
                &Profile::new(Tier::Regular),
                Some(Coupon::PierogiBogo),
            )
            .unwrap();
        assert_eq!(discount.cents(), 1000);
    }

    #[test]
    fn test_bogo_pairs_by_ascending_price() {
        // Four 6-packs: 300, 500, 700, 900 → pairs (300,500) and (700,900)
        // → discount 300 + 700
        let order = Order::new(vec![
            item(6, 900),
            item(6, 300),
            item(6, 700),
            item(6, 500),
        ]);
        let discount = engine()
            .discounts(
                &order,
                &Profile::new(Tier::Regular),
                Some(Coupon::PierogiBogo),
            )
            .unwrap();
        assert_eq!(discount.cents(), 1000);
    }

    #[test]
    fn test_bogo_ignores_unpaired_and_non_six_pack_lines() {
        // A lone 6-pack pairs with nothing
        let lone = Order::new(vec![item(6, 1000)]);
        let discount = engine()
            .discounts(
                &lone,
                &Profile::new(Tier::Regular),
                Some(Coupon::PierogiBogo),
            )
            .unwrap();
        assert!(discount.is_zero());

        // Three 6-packs: one pair (cheapest two), one leftover
        let three = Order::new(vec![item(6, 400), item(6, 200), item(6, 800)]);
        let discount = engine()
            .discounts(
                &three,
                &Profile::new(Tier::Regular),
                Some(Coupon::PierogiBogo),
            )
            .unwrap();
        assert_eq!(discount.cents(), 200);

        // 12-packs never qualify for BOGO (they get the volume rebate instead)
        let twelves = Order::new(vec![item(12, 150), item(12, 150)]);
        let discount = engine()
            .discounts(
                &twelves,
                &Profile::new(Tier::Regular),
                Some(Coupon::PierogiBogo),
            )
            .unwrap();
        // Only the volume rebate: 2 × 12 × 10¢
        assert_eq!(discount.cents(), 240);
    }

    // -------------------------------------------------------------------------
    // Combination and capping
    // -------------------------------------------------------------------------

    #[test]
    fn test_rules_combine_additively() {
        // Vip with a 12-pack and FIRST10: subtotal 12×150 = 1800
        // tier: floor(1800×5%) = 90, volume: 120, coupon: floor(1800×10%) = 180
        let order = Order::new(vec![item(12, 150)]);
        let discount = engine()
            .discounts(&order, &Profile::new(Tier::Vip), Some(Coupon::First10))
            .unwrap();
        assert_eq!(discount.cents(), 90 + 120 + 180);
    }

    #[test]
    fn test_combined_discount_capped_at_subtotal() {
        // A 24-pack of 1¢ pierogi: subtotal 24, volume rebate alone is
        // 24 × 25¢ = 600. The cap keeps the order payable.
        let order = Order::new(vec![item(24, 1)]);
        let subtotal_cents = 24;
        let discount = engine()
            .discounts(&order, &Profile::new(Tier::Vip), Some(Coupon::First10))
            .unwrap();
        assert_eq!(discount.cents(), subtotal_cents);
    }

    #[test]
    fn test_invalid_items_propagate() {
        let order = Order::new(vec![item(-6, 1000)]);
        assert!(engine()
            .discounts(&order, &Profile::new(Tier::Regular), None)
            .is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: for any order, profile and coupon,
        /// 0 ≤ discount ≤ subtotal.
        #[test]
        fn discount_bounded_by_subtotal(
            lines in prop::collection::vec((0i64..30, 0i64..10_000), 0..10),
            tier_pick in 0u8..3,
            coupon_pick in 0u8..3,
        ) {
            let order = Order::new(
                lines.into_iter().map(|(qty, price)| item(qty, price)).collect(),
            );
            let tier = match tier_pick {
                0 => Tier::Guest,
                1 => Tier::Regular,
                _ => Tier::Vip,
            };
            let coupon = match coupon_pick {
                0 => None,
                1 => Some(Coupon::First10),
                _ => Some(Coupon::PierogiBogo),
            };

            let subtotal = crate::subtotal::subtotal(&order).unwrap();
            let discount = engine()
                .discounts(&order, &Profile::new(tier), coupon)
                .unwrap();

            prop_assert!(discount.cents() >= 0);
            prop_assert!(discount.cents() <= subtotal.cents());
        }

        /// Property: dropping the coupon never INCREASES the discount.
        #[test]
        fn removing_coupon_never_increases_discount(
            lines in prop::collection::vec((0i64..30, 0i64..10_000), 0..10),
            coupon_pick in 0u8..2,
        ) {
            let order = Order::new(
                lines.into_iter().map(|(qty, price)| item(qty, price)).collect(),
            );
            let profile = Profile::new(Tier::Vip);
            let coupon = if coupon_pick == 0 {
                Coupon::First10
            } else {
                Coupon::PierogiBogo
            };

            let with_coupon = engine().discounts(&order, &profile, Some(coupon)).unwrap();
            let without = engine().discounts(&order, &profile, None).unwrap();

            prop_assert!(without.cents() <= with_coupon.cents());
        }
    }
}
