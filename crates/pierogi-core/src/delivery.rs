//! # Delivery Fee Calculator
//!
//! Computes the single order-level delivery charge.
//!
//! ## Fee Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Delivery Fee Decision                               │
//! │                                                                         │
//! │  base fee = zone fee (local $5.00 / outer $9.00)                       │
//! │       │                                                                 │
//! │       ├── vip tier?                    → base waived                   │
//! │       ├── subtotal ≥ threshold ($40)?  → base waived                   │
//! │       └── otherwise                    → base charged                  │
//! │                                                                         │
//! │  rush? → +$2.99, exactly once, even when the base was waived           │
//! │                                                                         │
//! │  FLATNESS: the fee is a function of (subtotal, zone, rush, tier)       │
//! │  only. Item count is invisible here - ten cheap lines and one line     │
//! │  of the same value pay the identical fee.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::config::PricingConfig;
use crate::error::EngineResult;
use crate::money::Money;
use crate::subtotal::subtotal;
use crate::types::{DeliveryContext, Order, Profile, Tier};

// =============================================================================
// Delivery Fee Calculator
// =============================================================================

/// Computes the flat per-order delivery fee.
///
/// ## Example
/// ```rust
/// use pierogi_core::config::PricingConfig;
/// use pierogi_core::delivery::DeliveryFeeCalculator;
/// use pierogi_core::types::{
///     DeliveryContext, ItemKind, Order, OrderItem, Profile, Tier, Zone,
/// };
///
/// let calc = DeliveryFeeCalculator::new(&PricingConfig::default());
/// let order = Order::new(vec![OrderItem {
///     kind: ItemKind::Frozen,
///     sku: "PIEROGI-POTATO-6".to_string(),
///     title: "Potato Pierogi 6-pack".to_string(),
///     filling: "potato".to_string(),
///     qty: 6,
///     unit_price_cents: 250,
///     add_ons: vec![],
/// }]);
///
/// let fee = calc
///     .delivery_fee(
///         &order,
///         &DeliveryContext::new(Zone::Local, false),
///         &Profile::new(Tier::Regular),
///     )
///     .unwrap();
/// assert_eq!(fee.cents(), 500); // below the free threshold: base fee due
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DeliveryFeeCalculator {
    config: PricingConfig,
}

impl DeliveryFeeCalculator {
    /// Creates a delivery fee calculator with the given policy.
    pub fn new(config: &PricingConfig) -> Self {
        DeliveryFeeCalculator { config: *config }
    }

    /// Computes the delivery fee for an order.
    ///
    /// The base fee is waived for vip customers and for orders meeting the
    /// free-delivery threshold; the rush surcharge is charged exactly once
    /// regardless of any waiver.
    pub fn delivery_fee(
        &self,
        order: &Order,
        delivery: &DeliveryContext,
        profile: &Profile,
    ) -> EngineResult<Money> {
        let subtotal = subtotal(order)?;

        let base_waived = profile.tier == Tier::Vip
            || subtotal >= self.config.free_delivery_threshold();

        let mut fee = if base_waived {
            Money::zero()
        } else {
            self.config.base_fee(delivery.zone)
        };

        if delivery.rush {
            fee += self.config.rush_surcharge();
        }

        Ok(fee)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemKind, OrderItem, Zone};
    use proptest::prelude::*;

    fn item(qty: i64, unit_price_cents: i64) -> OrderItem {
        OrderItem {
            kind: ItemKind::Frozen,
            sku: "PIEROGI-POTATO-6".to_string(),
            title: "Potato Pierogi 6-pack".to_string(),
            filling: "potato".to_string(),
            qty,
            unit_price_cents,
            add_ons: vec![],
        }
    }

    fn calc() -> DeliveryFeeCalculator {
        DeliveryFeeCalculator::new(&PricingConfig::default())
    }

    fn regular() -> Profile {
        Profile::new(Tier::Regular)
    }

    #[test]
    fn test_zone_base_fees() {
        let order = Order::new(vec![item(1, 1000)]);
        let local = calc()
            .delivery_fee(&order, &DeliveryContext::new(Zone::Local, false), &regular())
            .unwrap();
        assert_eq!(local.cents(), 500);

        let outer = calc()
            .delivery_fee(&order, &DeliveryContext::new(Zone::Outer, false), &regular())
            .unwrap();
        assert_eq!(outer.cents(), 900);
    }

    #[test]
    fn test_free_threshold_waives_base_fee() {
        let delivery = DeliveryContext::new(Zone::Outer, false);

        // Exactly at the threshold counts
        let at = Order::new(vec![item(1, 4000)]);
        assert!(calc().delivery_fee(&at, &delivery, &regular()).unwrap().is_zero());

        // One cent under does not
        let under = Order::new(vec![item(1, 3999)]);
        assert_eq!(
            calc().delivery_fee(&under, &delivery, &regular()).unwrap().cents(),
            900
        );
    }

    #[test]
    fn test_vip_base_fee_always_waived() {
        let vip = Profile::new(Tier::Vip);
        let small = Order::new(vec![item(1, 100)]);
        for zone in [Zone::Local, Zone::Outer] {
            let fee = calc()
                .delivery_fee(&small, &DeliveryContext::new(zone, false), &vip)
                .unwrap();
            assert!(fee.is_zero());
        }
    }

    #[test]
    fn test_rush_surcharge_added_once() {
        let order = Order::new(vec![item(1, 1000)]);
        let fee = calc()
            .delivery_fee(&order, &DeliveryContext::new(Zone::Local, true), &regular())
            .unwrap();
        assert_eq!(fee.cents(), 500 + 299);
    }

    #[test]
    fn test_rush_applies_on_top_of_waived_base() {
        // Free-threshold order, rush requested: only the surcharge remains
        let big = Order::new(vec![item(1, 5000)]);
        let fee = calc()
            .delivery_fee(&big, &DeliveryContext::new(Zone::Outer, true), &regular())
            .unwrap();
        assert_eq!(fee.cents(), 299);

        // Same for a vip's small order
        let small = Order::new(vec![item(1, 100)]);
        let fee = calc()
            .delivery_fee(
                &small,
                &DeliveryContext::new(Zone::Outer, true),
                &Profile::new(Tier::Vip),
            )
            .unwrap();
        assert_eq!(fee.cents(), 299);
    }

    #[test]
    fn test_fee_ignores_item_count() {
        // Ten lines of 400 vs one line of 4000: identical fee inputs
        let many = Order::new(vec![item(1, 400); 10]);
        let one = Order::new(vec![item(1, 4000)]);
        for zone in [Zone::Local, Zone::Outer] {
            for rush in [false, true] {
                let delivery = DeliveryContext::new(zone, rush);
                assert_eq!(
                    calc().delivery_fee(&many, &delivery, &regular()).unwrap(),
                    calc().delivery_fee(&one, &delivery, &regular()).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_invalid_items_propagate() {
        let order = Order::new(vec![item(-1, 100)]);
        let delivery = DeliveryContext::new(Zone::Local, false);
        assert!(calc().delivery_fee(&order, &delivery, &regular()).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property (flatness): the fee for any multi-item order equals the
        /// fee for a single synthetic item holding the same subtotal, with
        /// the same zone/rush/tier.
        #[test]
        fn fee_is_flat_in_item_count(
            lines in prop::collection::vec((0i64..30, 0i64..5_000), 0..10),
            outer in proptest::bool::ANY,
            rush in proptest::bool::ANY,
            tier_pick in 0u8..3,
        ) {
            let order = Order::new(
                lines.into_iter().map(|(q, p)| item(q, p)).collect(),
            );
            let total_cents = subtotal(&order).unwrap().cents();
            let synthetic = Order::new(vec![item(1, total_cents)]);

            let zone = if outer { Zone::Outer } else { Zone::Local };
            let delivery = DeliveryContext::new(zone, rush);
            let profile = Profile::new(match tier_pick {
                0 => Tier::Guest,
                1 => Tier::Regular,
                _ => Tier::Vip,
            });

            prop_assert_eq!(
                calc().delivery_fee(&order, &delivery, &profile).unwrap(),
                calc().delivery_fee(&synthetic, &delivery, &profile).unwrap()
            );
        }
    }
}
