//! Inbound placement fee.
//!
//! The published schedule has only a handful of bands per tier, so it is a
//! direct match rather than a [`RateTable`](crate::rate_table::RateTable).

use crate::context::PlacementMode;
use crate::rate_table::round_cents;
use crate::tier::SizeTier;
use crate::units::within;

/// Share of the minimal-split fee charged for a partial split.
///
/// Stand-in until a published partial-split table is available.
pub const PARTIAL_PLACEMENT_FACTOR: f64 = 0.5;

/// Fee per unit when every unit is shipped to a single location.
fn minimal_split_fee(tier: SizeTier, billable_weight_lb: f64) -> f64 {
    let w = billable_weight_lb;
    match tier {
        SizeTier::SmallStandard => match w {
            w if within(w, 0.25) => 0.21,
            w if within(w, 0.5) => 0.24,
            w if within(w, 0.75) => 0.27,
            _ => 0.30,
        },
        SizeTier::LargeStandard => match w {
            w if within(w, 1.0) => 0.39,
            w if within(w, 2.0) => 0.48,
            w if within(w, 5.0) => 0.68,
            w if within(w, 12.0) => 0.88,
            _ => 1.03,
        },
        SizeTier::LargeBulky => match w {
            w if within(w, 5.0) => 2.16,
            w if within(w, 12.0) => 2.88,
            w if within(w, 28.0) => 3.52,
            _ => 4.28,
        },
        SizeTier::ExtraLarge => 5.85,
    }
}

pub fn inbound_placement_fee(tier: SizeTier, billable_weight_lb: f64, mode: PlacementMode) -> f64 {
    match mode {
        PlacementMode::Optimized => 0.0,
        PlacementMode::Minimal => minimal_split_fee(tier, billable_weight_lb),
        PlacementMode::Partial => {
            round_cents(minimal_split_fee(tier, billable_weight_lb) * PARTIAL_PLACEMENT_FACTOR)
        }
    }
}
