//! Per-unit fulfillment (pick, pack and ship) fee.
//!
//! Table selection happens in three steps: price band, then category and
//! tier, then the optional premium surcharge. Standard-size tiers use bracketed
//! tables; oversize tiers use a base fee plus a per-pound overweight charge.

use serde::{Deserialize, Serialize};

use crate::context::Category;
use crate::physical::PhysicalSpec;
use crate::rate_table::{Overflow, RateBracket, RateTable, round_cents};
use crate::tier::{SizeTier, classify_tier};

/// Prices strictly below this use the low-price tables (standard-size only).
pub const LOW_PRICE_THRESHOLD: f64 = 10.0;

/// Prices strictly above this pay [`PREMIUM_SURCHARGE`] (standard-size only).
pub const PREMIUM_PRICE_THRESHOLD: f64 = 50.0;

pub const PREMIUM_SURCHARGE: f64 = 0.50;

/// Base fee covering the first `included` pounds, plus a charge per started
/// pound above that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverweightFormula {
    pub base_fee: f64,
    pub overflow: Overflow,
}

impl OverweightFormula {
    const fn new(base_fee: f64, included_lb: f64, per_lb: f64) -> Self {
        Self {
            base_fee,
            overflow: Overflow {
                per_unit: per_lb,
                base_threshold: included_lb,
            },
        }
    }

    pub fn fee(&self, billable_weight_lb: f64) -> f64 {
        self.overflow.charge(self.base_fee, billable_weight_lb)
    }
}

pub static LOW_PRICE_SMALL_STANDARD: RateTable = RateTable::new(&[
    RateBracket::flat(0.125, 2.29),
    RateBracket::flat(0.25, 2.38),
    RateBracket::flat(0.375, 2.47),
    RateBracket::flat(0.5, 2.56),
    RateBracket::flat(0.625, 2.66),
    RateBracket::flat(0.75, 2.76),
    RateBracket::flat(0.875, 2.83),
    RateBracket::flat(1.0, 2.88),
]);

pub static LOW_PRICE_LARGE_STANDARD: RateTable = RateTable::new(&[
    RateBracket::flat(0.25, 2.91),
    RateBracket::flat(0.5, 3.13),
    RateBracket::flat(0.75, 3.38),
    RateBracket::flat(1.0, 3.78),
    RateBracket::flat(1.25, 4.22),
    RateBracket::flat(1.5, 4.60),
    RateBracket::flat(1.75, 4.75),
    RateBracket::flat(2.0, 5.00),
    RateBracket::flat(2.25, 5.10),
    RateBracket::flat(2.5, 5.28),
    RateBracket::flat(2.75, 5.44),
    RateBracket::with_overflow(3.0, 5.85, 0.32, 3.0),
]);

pub static STANDARD_SMALL_STANDARD: RateTable = RateTable::new(&[
    RateBracket::flat(0.125, 3.06),
    RateBracket::flat(0.25, 3.15),
    RateBracket::flat(0.375, 3.24),
    RateBracket::flat(0.5, 3.33),
    RateBracket::flat(0.625, 3.43),
    RateBracket::flat(0.75, 3.53),
    RateBracket::flat(0.875, 3.60),
    RateBracket::flat(1.0, 3.65),
]);

pub static STANDARD_LARGE_STANDARD: RateTable = RateTable::new(&[
    RateBracket::flat(0.25, 3.68),
    RateBracket::flat(0.5, 3.90),
    RateBracket::flat(0.75, 4.15),
    RateBracket::flat(1.0, 4.55),
    RateBracket::flat(1.25, 4.99),
    RateBracket::flat(1.5, 5.37),
    RateBracket::flat(1.75, 5.52),
    RateBracket::flat(2.0, 5.77),
    RateBracket::flat(2.25, 5.87),
    RateBracket::flat(2.5, 6.05),
    RateBracket::flat(2.75, 6.21),
    RateBracket::with_overflow(3.0, 6.62, 0.32, 3.0),
]);

pub static APPAREL_SMALL_STANDARD: RateTable = RateTable::new(&[
    RateBracket::flat(0.125, 3.27),
    RateBracket::flat(0.25, 3.35),
    RateBracket::flat(0.375, 3.42),
    RateBracket::flat(0.5, 3.50),
    RateBracket::flat(0.625, 3.62),
    RateBracket::flat(0.75, 3.72),
    RateBracket::flat(0.875, 3.85),
    RateBracket::flat(1.0, 3.98),
]);

pub static APPAREL_LARGE_STANDARD: RateTable = RateTable::new(&[
    RateBracket::flat(0.25, 4.00),
    RateBracket::flat(0.5, 4.22),
    RateBracket::flat(0.75, 4.56),
    RateBracket::flat(1.0, 4.88),
    RateBracket::flat(1.25, 5.33),
    RateBracket::flat(1.5, 5.72),
    RateBracket::flat(1.75, 5.90),
    RateBracket::flat(2.0, 6.18),
    RateBracket::flat(2.25, 6.30),
    RateBracket::flat(2.5, 6.49),
    RateBracket::flat(2.75, 6.66),
    RateBracket::with_overflow(3.0, 7.08, 0.32, 3.0),
]);

pub static STANDARD_LARGE_BULKY: OverweightFormula = OverweightFormula::new(9.61, 1.0, 0.38);
pub static APPAREL_LARGE_BULKY: OverweightFormula = OverweightFormula::new(10.25, 1.0, 0.38);
pub static STANDARD_EXTRA_LARGE: OverweightFormula = OverweightFormula::new(26.33, 1.0, 0.38);
pub static APPAREL_EXTRA_LARGE: OverweightFormula = OverweightFormula::new(27.50, 1.0, 0.38);

/// Which family of tables a price falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBand {
    LowPrice,
    Standard,
}

impl PriceBand {
    pub fn for_sale(tier: SizeTier, price: f64) -> Self {
        if price < LOW_PRICE_THRESHOLD && tier.is_standard_size() {
            PriceBand::LowPrice
        } else {
            PriceBand::Standard
        }
    }
}

/// The schedule that prices one shipment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShippingRate {
    Bracketed(&'static RateTable),
    Overweight(&'static OverweightFormula),
}

impl ShippingRate {
    pub fn select(tier: SizeTier, category: Category, price: f64) -> Self {
        use Category::{Apparel, Standard};
        use SizeTier::{ExtraLarge, LargeBulky, LargeStandard, SmallStandard};

        let low_price = PriceBand::for_sale(tier, price) == PriceBand::LowPrice;
        match (tier, category) {
            (SmallStandard, _) if low_price => Self::Bracketed(&LOW_PRICE_SMALL_STANDARD),
            (LargeStandard, _) if low_price => Self::Bracketed(&LOW_PRICE_LARGE_STANDARD),
            (SmallStandard, Standard) => Self::Bracketed(&STANDARD_SMALL_STANDARD),
            (LargeStandard, Standard) => Self::Bracketed(&STANDARD_LARGE_STANDARD),
            (SmallStandard, Apparel) => Self::Bracketed(&APPAREL_SMALL_STANDARD),
            (LargeStandard, Apparel) => Self::Bracketed(&APPAREL_LARGE_STANDARD),
            // Oversize tiers have no low-price schedule.
            (LargeBulky, Standard) => Self::Overweight(&STANDARD_LARGE_BULKY),
            (LargeBulky, Apparel) => Self::Overweight(&APPAREL_LARGE_BULKY),
            (ExtraLarge, Standard) => Self::Overweight(&STANDARD_EXTRA_LARGE),
            (ExtraLarge, Apparel) => Self::Overweight(&APPAREL_EXTRA_LARGE),
        }
    }

    /// Unrounded base fee for a billable weight.
    pub fn base_fee(&self, billable_weight_lb: f64) -> f64 {
        match self {
            ShippingRate::Bracketed(table) => table.lookup(billable_weight_lb),
            ShippingRate::Overweight(formula) => formula.fee(billable_weight_lb),
        }
    }
}

/// Shipping fee for a unit whose tier and billable weight are already known.
pub fn shipping_fee(tier: SizeTier, category: Category, price: f64, billable_weight_lb: f64) -> f64 {
    let mut fee = ShippingRate::select(tier, category, price).base_fee(billable_weight_lb);
    if price > PREMIUM_PRICE_THRESHOLD && tier.is_standard_size() {
        fee += PREMIUM_SURCHARGE;
    }
    round_cents(fee)
}

/// Classify the unit and price its shipment.
pub fn calculate_shipping_fee(spec: &PhysicalSpec, category: Category, price: f64) -> f64 {
    shipping_fee(classify_tier(spec), category, price, spec.billable_weight_lb())
}
