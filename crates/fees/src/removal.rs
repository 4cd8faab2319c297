//! Removal and disposal fees.
//!
//! Both are billed from the same weight schedule. Standard-size and oversize
//! units have separate schedules; within each, the tier does not matter.

use crate::rate_table::{RateBracket, RateTable, round_cents};
use crate::tier::SizeTier;

pub static STANDARD_SIZE_REMOVAL: RateTable = RateTable::new(&[
    RateBracket::flat(0.5, 1.04),
    RateBracket::flat(1.0, 1.53),
    RateBracket::with_overflow(2.0, 2.27, 1.06, 2.0),
]);

pub static OVERSIZE_REMOVAL: RateTable = RateTable::new(&[
    RateBracket::flat(1.0, 3.12),
    RateBracket::flat(2.0, 4.07),
    RateBracket::flat(4.0, 5.51),
    RateBracket::with_overflow(10.0, 8.00, 1.06, 10.0),
]);

pub fn removal_schedule(tier: SizeTier) -> &'static RateTable {
    if tier.is_oversize() {
        &OVERSIZE_REMOVAL
    } else {
        &STANDARD_SIZE_REMOVAL
    }
}

/// Fee to have one unit returned to the seller.
pub fn removal_fee(tier: SizeTier, billable_weight_lb: f64) -> f64 {
    round_cents(removal_schedule(tier).lookup(billable_weight_lb))
}

/// Fee to have one unit destroyed. Same schedule as [`removal_fee`].
pub fn disposal_fee(tier: SizeTier, billable_weight_lb: f64) -> f64 {
    removal_fee(tier, billable_weight_lb)
}
