//! # Pricing Configuration
//!
//! The immutable policy constants every calculator is constructed with.
//!
//! ## Configuration Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Flow                                   │
//! │                                                                         │
//! │  Host application (startup, once)                                      │
//! │       │  loads/overrides policy numbers however it likes               │
//! │       ▼                                                                 │
//! │  PricingConfig  ──────► PricingEngine::new(config)                     │
//! │   (plain value)              │                                          │
//! │                              ├──► DiscountEngine                        │
//! │                              ├──► TaxCalculator                         │
//! │                              └──► DeliveryFeeCalculator                 │
//! │                                                                         │
//! │  No calculator ever mutates the config. Tests vary policy by           │
//! │  constructing a different PricingConfig, never by touching the         │
//! │  calculators.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Default` impl carries the shop's standard policy; the exact numbers
//! are policy, not code, which is why nothing below is a hardcoded constant
//! inside a calculator.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Rate, Zone};

// =============================================================================
// Pricing Config
// =============================================================================

/// Process-wide pricing policy. Construct once at startup, share freely:
/// the struct is `Copy`-cheap and fully immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingConfig {
    /// Vip tier discount on the pre-coupon subtotal, in basis points.
    pub vip_discount_bps: u32,

    /// Per-unit rebate for 12-pack lines, in cents.
    pub bulk12_rebate_cents: i64,

    /// Per-unit rebate for 24-pack lines, in cents. Larger packs rebate
    /// more per unit.
    pub bulk24_rebate_cents: i64,

    /// FIRST10 coupon discount, in basis points.
    pub first10_bps: u32,

    /// Tax rate for the local zone, in basis points.
    pub local_tax_bps: u32,

    /// Tax rate for the outer zone, in basis points.
    pub outer_tax_bps: u32,

    /// Base delivery fee for the local zone, in cents.
    pub local_fee_cents: i64,

    /// Base delivery fee for the outer zone, in cents.
    pub outer_fee_cents: i64,

    /// Subtotal at or above which the base delivery fee is waived, in cents.
    pub free_delivery_threshold_cents: i64,

    /// Rush surcharge, in cents. Charged exactly once per order.
    pub rush_surcharge_cents: i64,
}

impl PricingConfig {
    /// Returns the tax rate for a delivery zone.
    #[inline]
    pub fn tax_rate(&self, zone: Zone) -> Rate {
        match zone {
            Zone::Local => Rate::from_bps(self.local_tax_bps),
            Zone::Outer => Rate::from_bps(self.outer_tax_bps),
        }
    }

    /// Returns the base delivery fee for a zone, before any waiver.
    #[inline]
    pub fn base_fee(&self, zone: Zone) -> Money {
        match zone {
            Zone::Local => Money::from_cents(self.local_fee_cents),
            Zone::Outer => Money::from_cents(self.outer_fee_cents),
        }
    }

    /// Returns the free-delivery threshold as Money.
    #[inline]
    pub fn free_delivery_threshold(&self) -> Money {
        Money::from_cents(self.free_delivery_threshold_cents)
    }

    /// Returns the rush surcharge as Money.
    #[inline]
    pub fn rush_surcharge(&self) -> Money {
        Money::from_cents(self.rush_surcharge_cents)
    }
}

/// The shop's standard policy:
/// - vip 5% off, FIRST10 10% off
/// - 12-packs rebate 10¢/unit, 24-packs 25¢/unit
/// - tax: local 8%, outer 6%
/// - delivery: local $5.00, outer $9.00, free at $40.00+, rush +$2.99
impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            vip_discount_bps: 500,
            bulk12_rebate_cents: 10,
            bulk24_rebate_cents: 25,
            first10_bps: 1000,
            local_tax_bps: 800,
            outer_tax_bps: 600,
            local_fee_cents: 500,
            outer_fee_cents: 900,
            free_delivery_threshold_cents: 4000,
            rush_surcharge_cents: 299,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
