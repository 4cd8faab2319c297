//! Returns processing fee.
//!
//! Only apparel pays this fee by default. Standard-category items would need
//! the high-return-rate policy, which is not modelled. Apparel in oversize
//! tiers has no published returns fee and resolves to zero.

use crate::context::Category;
use crate::rate_table::{RateBracket, RateTable, round_cents};
use crate::tier::SizeTier;

pub static APPAREL_SMALL_STANDARD_RETURNS: RateTable = RateTable::new(&[
    RateBracket::flat(0.25, 2.12),
    RateBracket::flat(0.5, 2.20),
    RateBracket::flat(0.75, 2.34),
    RateBracket::flat(1.0, 2.47),
]);

pub static APPAREL_LARGE_STANDARD_RETURNS: RateTable = RateTable::new(&[
    RateBracket::flat(0.5, 2.85),
    RateBracket::flat(1.0, 3.30),
    RateBracket::flat(2.0, 4.27),
    RateBracket::with_overflow(3.0, 5.20, 0.40, 3.0),
]);

/// Schedule for a tier and category, if one exists.
pub fn returns_schedule(tier: SizeTier, category: Category) -> Option<&'static RateTable> {
    match (category, tier) {
        (Category::Apparel, SizeTier::SmallStandard) => Some(&APPAREL_SMALL_STANDARD_RETURNS),
        (Category::Apparel, SizeTier::LargeStandard) => Some(&APPAREL_LARGE_STANDARD_RETURNS),
        (Category::Apparel, SizeTier::LargeBulky | SizeTier::ExtraLarge) => None,
        (Category::Standard, _) => None,
    }
}

pub fn returns_processing_fee(tier: SizeTier, billable_weight_lb: f64, category: Category) -> f64 {
    returns_schedule(tier, category)
        .map(|table| round_cents(table.lookup(billable_weight_lb)))
        .unwrap_or(0.0)
}
