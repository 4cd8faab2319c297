//! Monthly storage fee, billed per cubic foot.

use crate::context::StorageSeason;
use crate::physical::PhysicalSpec;
use crate::rate_table::round_cents;
use crate::tier::SizeTier;

/// Per-cubic-foot storage rates for one size class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageRates {
    pub non_peak: f64,
    pub peak: f64,
}

impl StorageRates {
    pub fn for_season(&self, season: StorageSeason) -> f64 {
        match season {
            StorageSeason::Peak => self.peak,
            StorageSeason::NonPeak => self.non_peak,
        }
    }
}

pub static STANDARD_STORAGE: StorageRates = StorageRates {
    non_peak: 0.78,
    peak: 2.40,
};

pub static OVERSIZE_STORAGE: StorageRates = StorageRates {
    non_peak: 0.56,
    peak: 1.40,
};

pub fn storage_rate_per_cubic_foot(tier: SizeTier, season: StorageSeason) -> f64 {
    let rates = if tier.is_oversize() {
        &OVERSIZE_STORAGE
    } else {
        &STANDARD_STORAGE
    };
    rates.for_season(season)
}

pub fn monthly_storage_fee(tier: SizeTier, spec: &PhysicalSpec, season: StorageSeason) -> f64 {
    round_cents(spec.cubic_feet() * storage_rate_per_cubic_foot(tier, season))
}
