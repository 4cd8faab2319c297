//! Aged-inventory surcharge.
//!
//! Charged monthly on units that have sat in a fulfillment center for 181 days
//! or more, per cubic foot, with a per-unit floor for the oldest stock.

use crate::context::Category;
use crate::physical::PhysicalSpec;
use crate::rate_table::round_cents;
use crate::tier::SizeTier;

/// Youngest age (in days) that can be surcharged at all.
pub const MIN_SURCHARGE_AGE_DAYS: u32 = 181;

/// Brackets starting before this day are waived for apparel.
pub const APPAREL_CHARGED_FROM_DAY: u32 = 271;

/// Smallest amount billed once a surcharge applies.
pub const MIN_BILLED_SURCHARGE: f64 = 0.01;

/// A contiguous range of inventory ages sharing one rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBracket {
    pub first_day: u32,
    /// Inclusive; `None` for the open-ended oldest bracket.
    pub last_day: Option<u32>,
    pub rate_per_cubic_foot: f64,
    /// Per-unit floor; zero where none applies.
    pub per_unit_minimum: f64,
}

impl AgeBracket {
    const fn new(first_day: u32, last_day: u32, rate: f64) -> Self {
        Self {
            first_day,
            last_day: Some(last_day),
            rate_per_cubic_foot: rate,
            per_unit_minimum: 0.0,
        }
    }

    const fn with_minimum(first_day: u32, last_day: Option<u32>, rate: f64, minimum: f64) -> Self {
        Self {
            first_day,
            last_day,
            rate_per_cubic_foot: rate,
            per_unit_minimum: minimum,
        }
    }

    pub fn contains(&self, age_days: u32) -> bool {
        age_days >= self.first_day && self.last_day.is_none_or(|last| age_days <= last)
    }

    pub fn waived_for(&self, category: Category) -> bool {
        category == Category::Apparel && self.first_day < APPAREL_CHARGED_FROM_DAY
    }

    fn charge(&self, cubic_feet: f64) -> f64 {
        (cubic_feet * self.rate_per_cubic_foot).max(self.per_unit_minimum)
    }
}

pub static AGE_BRACKETS: [AgeBracket; 8] = [
    AgeBracket::new(181, 210, 0.50),
    AgeBracket::new(211, 240, 1.00),
    AgeBracket::new(241, 270, 1.50),
    AgeBracket::new(271, 300, 5.45),
    AgeBracket::new(301, 330, 5.70),
    AgeBracket::new(331, 365, 5.90),
    AgeBracket::with_minimum(366, Some(455), 6.90, 0.15),
    AgeBracket::with_minimum(456, None, 7.90, 0.30),
];

/// Bracket for an inventory age, if it is old enough to be surcharged.
pub fn age_bracket(age_days: u32) -> Option<&'static AgeBracket> {
    if age_days < MIN_SURCHARGE_AGE_DAYS {
        return None;
    }
    AGE_BRACKETS.iter().find(|b| b.contains(age_days))
}

/// Monthly aged-inventory surcharge for one unit.
///
/// The tier does not change the rate; it is accepted so every calculator
/// shares the same call shape. A unit in a charged bracket always pays at
/// least [`MIN_BILLED_SURCHARGE`], even when its volume charge rounds to zero
/// cents.
pub fn aged_inventory_surcharge(
    _tier: SizeTier,
    spec: &PhysicalSpec,
    age_days: u32,
    category: Category,
) -> f64 {
    match age_bracket(age_days) {
        Some(bracket) if !bracket.waived_for(category) => {
            round_cents(bracket.charge(spec.cubic_feet())).max(MIN_BILLED_SURCHARGE)
        }
        _ => 0.0,
    }
}
