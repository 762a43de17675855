//! # pierogi-core: Pure Pricing Logic for the Pierogi Checkout
//!
//! This crate is the **heart** of the pierogi checkout. It contains all
//! pricing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pierogi Checkout Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Order Intake / Checkout (external)                 │   │
//! │  │   collects the cart, validates input, persists results,        │   │
//! │  │   formats currency for display                                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Order, Profile, DeliveryContext,       │
//! │                                │ Option<Coupon>                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pierogi-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌─────┐ ┌──────────┐ ┌──────────┐ │   │
//! │  │   │ subtotal │ │ discount │ │ tax │ │ delivery │ │ pricing  │ │   │
//! │  │   │  Σ lines │ │ tier/vol │ │ hot │ │ zone/rush│ │aggregator│ │   │
//! │  │   │          │ │ /coupon  │ │ only│ │ /waivers │ │          │ │   │
//! │  │   └──────────┘ └──────────┘ └─────┘ └──────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                     PricingResult (integer cents)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain value objects (Order, Profile, Coupon, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`config`] - Immutable pricing policy, injected at construction
//! - [`error`] - Typed pricing errors
//! - [`validation`] - Line-item validation (reject, never clamp)
//! - [`subtotal`] - Subtotal Calculator
//! - [`discount`] - Discount Engine (composable rules)
//! - [`tax`] - Tax Calculator (hot items only, zone-rated)
//! - [`delivery`] - Delivery Fee Calculator (flat, per-order)
//! - [`pricing`] - Total Aggregator
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculator is deterministic - same input =
//!    same output; any number of pricing requests may run concurrently
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64), percentages
//!    floor to the cent before any further arithmetic
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use pierogi_core::{
//!     DeliveryContext, ItemKind, Order, OrderItem, PricingConfig,
//!     PricingContext, PricingEngine, Profile, Tier, Zone,
//! };
//!
//! let engine = PricingEngine::new(PricingConfig::default());
//!
//! let order = Order::new(vec![OrderItem {
//!     kind: ItemKind::Hot,
//!     sku: "PIEROGI-POTATO-6".to_string(),
//!     title: "Potato Pierogi, served hot".to_string(),
//!     filling: "potato".to_string(),
//!     qty: 6,
//!     unit_price_cents: 250,
//!     add_ons: vec!["sour-cream".to_string()],
//! }]);
//!
//! let ctx = PricingContext::new(
//!     Profile::new(Tier::Regular),
//!     DeliveryContext::new(Zone::Local, false),
//!     None,
//! );
//!
//! let priced = engine.price(&order, &ctx).unwrap();
//! assert_eq!(priced.subtotal_cents, 1500);
//! assert_eq!(priced.total_cents, 1500 + 120 + 500); // + tax + delivery
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod delivery;
pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod subtotal;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pierogi_core::Money` instead of
// `use pierogi_core::money::Money`

pub use config::PricingConfig;
pub use delivery::DeliveryFeeCalculator;
pub use discount::{DiscountEngine, DiscountRule};
pub use error::{EngineResult, PricingError};
pub use money::Money;
pub use pricing::{PricingContext, PricingEngine};
pub use subtotal::subtotal;
pub use tax::TaxCalculator;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Line quantity that qualifies for the PIEROGI-BOGO coupon.
///
/// ## Business Reason
/// The shop sells pierogi in 6/12/24 packs; the BOGO promotion was designed
/// around the 6-pack impulse size and deliberately excludes bulk packs,
/// which already earn the volume rebate.
pub const BOGO_PACK_QTY: i64 = 6;

/// Smaller bulk size earning the per-unit volume rebate.
pub const BULK_PACK_SMALL: i64 = 12;

/// Larger bulk size. Rebates more per unit than the 12-pack.
pub const BULK_PACK_LARGE: i64 = 24;
