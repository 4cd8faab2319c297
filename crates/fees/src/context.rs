use core::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use sellerkit_core::{DomainError, DomainResult, ValueObject};

/// Product category as far as the fee schedule is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Standard,
    Apparel,
}

/// How inbound shipments are split across fulfillment centers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Seller ships everything to a single location.
    Minimal,
    /// Seller ships to a reduced set of locations.
    Partial,
    /// Seller follows the marketplace's full split; no placement fee.
    #[default]
    Optimized,
}

/// Storage billing season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageSeason {
    /// October through December.
    Peak,
    #[default]
    NonPeak,
}

impl StorageSeason {
    /// Season for a calendar month (1 = January).
    ///
    /// Months outside 1..=12 are treated as non-peak.
    pub fn for_month(month: u32) -> Self {
        match month {
            10..=12 => StorageSeason::Peak,
            _ => StorageSeason::NonPeak,
        }
    }

    pub fn for_date(date: impl Datelike) -> Self {
        Self::for_month(date.month())
    }
}

macro_rules! impl_enum_str {
    ($t:ty, $name:literal, { $($variant:path => $text:literal),+ $(,)? }) => {
        impl $t {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($variant => $text,)+
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
                match normalized.as_str() {
                    $($text => Ok($variant),)+
                    _ => Err(DomainError::validation(format!("unknown {}: {:?}", $name, s))),
                }
            }
        }
    };
}

impl_enum_str!(Category, "category", {
    Category::Standard => "standard",
    Category::Apparel => "apparel",
});

impl_enum_str!(PlacementMode, "placement mode", {
    PlacementMode::Minimal => "minimal",
    PlacementMode::Partial => "partial",
    PlacementMode::Optimized => "optimized",
});

impl_enum_str!(StorageSeason, "storage season", {
    StorageSeason::Peak => "peak",
    StorageSeason::NonPeak => "non_peak",
});

/// Sale price assumed when the caller does not provide one.
pub const DEFAULT_SALE_PRICE: f64 = 20.0;

/// Commercial context of a fee quote.
///
/// Every field has a default, and a partially filled JSON object deserializes
/// with the missing fields defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercialContext {
    pub category: Category,
    /// Sale price in the marketplace currency.
    pub price: f64,
    pub inventory_age_days: u32,
    pub placement: PlacementMode,
    pub season: StorageSeason,
}

impl ValueObject for CommercialContext {}

impl Default for CommercialContext {
    fn default() -> Self {
        Self {
            category: Category::default(),
            price: DEFAULT_SALE_PRICE,
            inventory_age_days: 0,
            placement: PlacementMode::default(),
            season: StorageSeason::default(),
        }
    }
}

impl CommercialContext {
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_inventory_age_days(mut self, days: u32) -> Self {
        self.inventory_age_days = days;
        self
    }

    pub fn with_placement(mut self, placement: PlacementMode) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_season(mut self, season: StorageSeason) -> Self {
        self.season = season;
        self
    }

    /// Boundary check for contexts assembled from untrusted input.
    pub fn validate(&self) -> DomainResult<()> {
        DomainError::ensure_non_negative("price", self.price)?;
        Ok(())
    }
}
