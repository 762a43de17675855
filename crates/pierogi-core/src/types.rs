//! # Domain Types
//!
//! Core value objects for the pierogi checkout pricing core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Pricing Inputs                                  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OrderItem     │   │    Profile      │   │ DeliveryContext │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  kind hot/frozen│   │  tier           │   │  zone           │       │
//! │  │  sku, title     │   │  guest/regular/ │   │  local/outer    │       │
//! │  │  qty, price     │   │  vip            │   │  rush (bool)    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │     Coupon      │   │     Rate        │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  PIEROGI-BOGO   │   │  bps (u32)      │                             │
//! │  │  FIRST10        │   │  800 = 8.00%    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │                    Output: PricingResult (all integer cents)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Value Object Semantics
//! Every type here is created fresh per pricing request and never mutated.
//! There is no persistent identity: two orders with the same items price
//! identically, always.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::PricingError;
use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A percentage rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8.00% (the local-zone tax rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Item Kind
// =============================================================================

/// What state the pierogi are sold in. Taxation hinges on this:
/// hot (prepared) food is taxed, frozen take-home packs are exempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Cooked and served hot. Taxable.
    Hot,
    /// Frozen pack for home cooking. Tax-exempt.
    Frozen,
}

// =============================================================================
// Order Item
// =============================================================================

/// A single cart line: one pierogi product at one quantity.
///
/// ## Pricing-Relevant Fields
/// Only `kind`, `qty` and `unit_price_cents` feed the math. `sku` is carried
/// for error reporting, `title`/`filling` for display, and `add_ons` are
/// priced at zero in this core (add-on pricing is the catalog's concern).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    /// Hot (taxable) or frozen (exempt).
    pub kind: ItemKind,

    /// Business identifier, e.g. "PIEROGI-POTATO-6".
    pub sku: String,

    /// Display name shown at checkout. Never used in pricing.
    pub title: String,

    /// Filling identifier (potato, cheese, ...). Never used in pricing math.
    pub filling: String,

    /// Quantity ordered. Zero is valid and contributes nothing.
    pub qty: i64,

    /// Unit price in cents. Zero is valid (promo items).
    pub unit_price_cents: i64,

    /// Add-on identifiers (sour cream, fried onions, ...). Priced at zero
    /// in this core.
    #[serde(default)]
    pub add_ons: Vec<String>,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.qty)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A cart of line items.
///
/// ## Invariants
/// - Item order never affects any price (the cart is a multiset)
/// - Empty orders and zero-quantity items are valid and price to zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, TS)]
#[ts(export)]
pub struct Order {
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Creates an order from line items.
    pub fn new(items: Vec<OrderItem>) -> Self {
        Order { items }
    }

    /// An empty cart. Prices to an all-zero result.
    pub fn empty() -> Self {
        Order { items: Vec::new() }
    }

    /// Iterates the line items.
    pub fn items(&self) -> impl Iterator<Item = &OrderItem> {
        self.items.iter()
    }
}

// =============================================================================
// Customer Profile
// =============================================================================

/// Customer loyalty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Anonymous checkout. No tier benefits.
    Guest,
    /// Registered customer. No tier discount.
    Regular,
    /// Loyalty tier: percentage off subtotal, free base delivery.
    Vip,
}

impl Default for Tier {
    fn default() -> Self {
        Tier::Guest
    }
}

/// Customer profile as seen by the pricing core. Immutable per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, TS)]
#[ts(export)]
pub struct Profile {
    pub tier: Tier,
}

impl Profile {
    pub const fn new(tier: Tier) -> Self {
        Profile { tier }
    }
}

// =============================================================================
// Delivery Context
// =============================================================================

/// Delivery distance classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// Close to the shop: cheaper base fee, higher tax rate.
    Local,
    /// Further out: pricier base fee, lower tax rate.
    Outer,
}

/// Where and how fast the order ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliveryContext {
    pub zone: Zone,
    /// Expedited delivery. Adds one fixed surcharge per order; never
    /// affects tax.
    pub rush: bool,
}

impl DeliveryContext {
    pub const fn new(zone: Zone, rush: bool) -> Self {
        DeliveryContext { zone, rush }
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A coupon code presented at checkout.
///
/// ## Semantics
/// - `PierogiBogo`: buy-one-get-one on 6-packs; qualifying items are paired
///   by ascending unit price and each complete pair discounts the cheaper
///   item's unit price
/// - `First10`: flat 10% off the subtotal, floored to the cent
///
/// An absent coupon is `Option::None` at the call sites, never an error.
/// An unrecognized code string fails parsing with
/// [`PricingError::UnknownCoupon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Coupon {
    #[serde(rename = "PIEROGI-BOGO")]
    PierogiBogo,
    #[serde(rename = "FIRST10")]
    First10,
}

impl Coupon {
    /// The printed code as it appears on the coupon.
    pub const fn code(&self) -> &'static str {
        match self {
            Coupon::PierogiBogo => "PIEROGI-BOGO",
            Coupon::First10 => "FIRST10",
        }
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Coupon {
    type Err = PricingError;

    /// Parses a coupon code exactly as printed. Codes are case-sensitive;
    /// anything unrecognized is `UnknownCoupon`.
    ///
    /// ## Example
    /// ```rust
    /// use pierogi_core::types::Coupon;
    ///
    /// assert_eq!("FIRST10".parse::<Coupon>().unwrap(), Coupon::First10);
    /// assert!("SECOND20".parse::<Coupon>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PIEROGI-BOGO" => Ok(Coupon::PierogiBogo),
            "FIRST10" => Ok(Coupon::First10),
            other => Err(PricingError::UnknownCoupon(other.to_string())),
        }
    }
}

// =============================================================================
// Pricing Result
// =============================================================================

/// The complete priced breakdown of one order. All fields are non-negative
/// integer cents and satisfy
/// `total = subtotal - discount + tax + delivery_fee` (floored at zero).
///
/// This is the record the checkout layer persists and renders; the core
/// never returns a partial breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingResult {
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub tax_cents: i64,
    pub delivery_fee_cents: i64,
    pub total_cents: i64,
}

impl PricingResult {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_bps() {
        let rate = Rate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert!((rate.percentage() - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_line_total() {
        let item = OrderItem {
            kind: ItemKind::Frozen,
            sku: "PIEROGI-POTATO-12".to_string(),
            title: "Potato Pierogi 12-pack".to_string(),
            filling: "potato".to_string(),
            qty: 12,
            unit_price_cents: 150,
            add_ons: vec![],
        };
        assert_eq!(item.line_total().cents(), 1800);
    }

    #[test]
    fn test_coupon_round_trips_through_code() {
        for coupon in [Coupon::PierogiBogo, Coupon::First10] {
            assert_eq!(coupon.code().parse::<Coupon>().unwrap(), coupon);
        }
    }

    #[test]
    fn test_unknown_coupon_code_is_an_error() {
        let err = "FREE-LUNCH".parse::<Coupon>().unwrap_err();
        assert_eq!(
            err,
            PricingError::UnknownCoupon("FREE-LUNCH".to_string())
        );
    }

    #[test]
    fn test_coupon_codes_are_case_sensitive() {
        assert!("first10".parse::<Coupon>().is_err());
    }

    #[test]
    fn test_coupon_serde_uses_printed_codes() {
        let json = serde_json::to_string(&Coupon::PierogiBogo).unwrap();
        assert_eq!(json, "\"PIEROGI-BOGO\"");
        let back: Coupon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Coupon::PierogiBogo);
    }

    #[test]
    fn test_tier_default_is_guest() {
        assert_eq!(Tier::default(), Tier::Guest);
    }
}
