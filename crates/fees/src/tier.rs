//! Size-tier classification.
//!
//! Tiers are evaluated smallest first and the first match wins. A product that
//! fits no envelope is extra large; that is a normal outcome, not an error.

use serde::{Deserialize, Serialize};

use crate::physical::PhysicalSpec;
use crate::units::within;

/// Discrete size/weight classification selecting the applicable schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeTier {
    SmallStandard,
    LargeStandard,
    LargeBulky,
    ExtraLarge,
}

impl SizeTier {
    /// Small or large standard.
    pub fn is_standard_size(self) -> bool {
        matches!(self, SizeTier::SmallStandard | SizeTier::LargeStandard)
    }

    /// Large bulky or extra large.
    pub fn is_oversize(self) -> bool {
        !self.is_standard_size()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeTier::SmallStandard => "small_standard",
            SizeTier::LargeStandard => "large_standard",
            SizeTier::LargeBulky => "large_bulky",
            SizeTier::ExtraLarge => "extra_large",
        }
    }
}

impl core::fmt::Display for SizeTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight ceiling plus a longest/median/shortest envelope, in pounds and inches.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Envelope {
    max_weight_lb: f64,
    longest: f64,
    median: f64,
    shortest: f64,
}

const SMALL_STANDARD: Envelope = Envelope {
    max_weight_lb: 1.0,
    longest: 15.0,
    median: 12.0,
    shortest: 0.75,
};

const LARGE_STANDARD: Envelope = Envelope {
    max_weight_lb: 20.0,
    longest: 18.0,
    median: 14.0,
    shortest: 8.0,
};

pub const LARGE_BULKY_MAX_WEIGHT_LB: f64 = 50.0;
pub const LARGE_BULKY_MAX_LONGEST_IN: f64 = 59.0;
pub const LARGE_BULKY_MAX_LENGTH_PLUS_GIRTH_IN: f64 = 130.0;

/// Classify a unit by its actual weight and sorted dimensions.
pub fn classify_tier(spec: &PhysicalSpec) -> SizeTier {
    let weight = spec.weight_lb();
    let dims = spec.sorted_dimensions_in();

    let fits = |env: &Envelope| {
        within(weight, env.max_weight_lb)
            && within(dims.longest, env.longest)
            && within(dims.median, env.median)
            && within(dims.shortest, env.shortest)
    };

    let tier = if fits(&SMALL_STANDARD) {
        SizeTier::SmallStandard
    } else if fits(&LARGE_STANDARD) {
        SizeTier::LargeStandard
    } else if within(weight, LARGE_BULKY_MAX_WEIGHT_LB)
        && within(dims.longest, LARGE_BULKY_MAX_LONGEST_IN)
        && within(dims.length_plus_girth(), LARGE_BULKY_MAX_LENGTH_PLUS_GIRTH_IN)
    {
        SizeTier::LargeBulky
    } else {
        SizeTier::ExtraLarge
    };

    tracing::trace!(
        weight_lb = weight,
        longest_in = dims.longest,
        median_in = dims.median,
        shortest_in = dims.shortest,
        tier = %tier,
        "classified size tier"
    );

    tier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{inches_to_cm, lb_to_kg};

    fn imperial(l: f64, w: f64, h: f64, lb: f64) -> PhysicalSpec {
        PhysicalSpec::from_imperial(l, w, h, lb).unwrap()
    }

    #[test]
    fn tiers_are_ordered_smallest_first() {
        assert!(SizeTier::SmallStandard < SizeTier::LargeStandard);
        assert!(SizeTier::LargeStandard < SizeTier::LargeBulky);
        assert!(SizeTier::LargeBulky < SizeTier::ExtraLarge);
        assert!(SizeTier::LargeBulky.is_oversize());
        assert!(SizeTier::LargeStandard.is_standard_size());
    }

    #[test]
    fn exactly_on_the_small_envelope_is_small_standard() {
        assert_eq!(classify_tier(&imperial(15.0, 12.0, 0.75, 1.0)), SizeTier::SmallStandard);
    }

    #[test]
    fn metric_measurements_on_the_small_envelope_are_small_standard() {
        let spec = PhysicalSpec::new(
            inches_to_cm(15.0),
            inches_to_cm(12.0),
            inches_to_cm(0.75),
            lb_to_kg(1.0),
        )
        .unwrap();
        assert_eq!(classify_tier(&spec), SizeTier::SmallStandard);
    }

    #[test]
    fn one_gram_over_the_small_weight_ceiling_is_large_standard() {
        let spec = PhysicalSpec::new(
            inches_to_cm(15.0),
            inches_to_cm(12.0),
            inches_to_cm(0.75),
            lb_to_kg(1.0) + 0.001,
        )
        .unwrap();
        assert_eq!(classify_tier(&spec), SizeTier::LargeStandard);
    }

    #[test]
    fn any_dimension_over_the_small_envelope_is_large_standard() {
        assert_eq!(classify_tier(&imperial(15.1, 12.0, 0.75, 0.5)), SizeTier::LargeStandard);
        assert_eq!(classify_tier(&imperial(15.0, 12.1, 0.75, 0.5)), SizeTier::LargeStandard);
        assert_eq!(classify_tier(&imperial(15.0, 12.0, 0.76, 0.5)), SizeTier::LargeStandard);
    }

    #[test]
    fn orientation_does_not_matter() {
        assert_eq!(classify_tier(&imperial(0.75, 15.0, 12.0, 1.0)), SizeTier::SmallStandard);
        assert_eq!(classify_tier(&imperial(8.0, 18.0, 14.0, 20.0)), SizeTier::LargeStandard);
    }

    #[test]
    fn large_standard_boundaries() {
        assert_eq!(classify_tier(&imperial(18.0, 14.0, 8.0, 20.0)), SizeTier::LargeStandard);
        assert_eq!(classify_tier(&imperial(18.0, 14.0, 8.0, 20.01)), SizeTier::LargeBulky);
        assert_eq!(classify_tier(&imperial(18.1, 14.0, 8.0, 10.0)), SizeTier::LargeBulky);
    }

    #[test]
    fn large_bulky_boundaries() {
        // 59 + 2 × (17 + 16) = 125 ≤ 130
        assert_eq!(classify_tier(&imperial(59.0, 17.0, 16.0, 50.0)), SizeTier::LargeBulky);
        assert_eq!(classify_tier(&imperial(59.0, 17.0, 16.0, 50.1)), SizeTier::ExtraLarge);
        assert_eq!(classify_tier(&imperial(59.1, 10.0, 10.0, 30.0)), SizeTier::ExtraLarge);
        // 50 + 2 × (20 + 20) = 130, exactly on the bound.
        assert_eq!(classify_tier(&imperial(50.0, 20.0, 20.0, 30.0)), SizeTier::LargeBulky);
        assert_eq!(classify_tier(&imperial(50.0, 20.0, 20.1, 30.0)), SizeTier::ExtraLarge);
    }

    #[test]
    fn huge_items_fall_through_to_extra_large() {
        assert_eq!(classify_tier(&imperial(96.0, 48.0, 48.0, 150.0)), SizeTier::ExtraLarge);
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&SizeTier::LargeStandard).unwrap(),
            "\"large_standard\""
        );
        assert_eq!(SizeTier::ExtraLarge.to_string(), "extra_large");
    }

    #[test]
    fn labels_follow_tier_order() {
        let tiers = [
            SizeTier::SmallStandard,
            SizeTier::LargeStandard,
            SizeTier::LargeBulky,
            SizeTier::ExtraLarge,
        ];
        assert_eq!(
            tiers.map(SizeTier::as_str),
            ["small_standard", "large_standard", "large_bulky", "extra_large"]
        );
        assert_eq!(tiers.iter().filter(|t| t.is_oversize()).count(), 2);
    }
}
