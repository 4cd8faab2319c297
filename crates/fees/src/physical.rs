use serde::{Deserialize, Serialize};

use sellerkit_core::{DomainError, DomainResult, ValueObject};

use crate::units::{CUBIC_INCHES_PER_CUBIC_FOOT, cm_to_inches, inches_to_cm, kg_to_lb, lb_to_kg};

/// Divisor turning cubic inches into a dimensional weight in pounds.
pub const DIM_WEIGHT_DIVISOR: f64 = 194.0;

/// Physical measurements of one packaged unit, in centimetres and kilograms.
///
/// Construction validates the measurements (finite, non-negative). Once built
/// the value is immutable, so every calculator can trust it without checking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPhysicalSpec")]
pub struct PhysicalSpec {
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
    weight_kg: f64,
}

impl ValueObject for PhysicalSpec {}

/// The three dimensions of a unit, in inches, sorted longest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortedDimensions {
    pub longest: f64,
    pub median: f64,
    pub shortest: f64,
}

impl SortedDimensions {
    /// 2 × (median + shortest).
    pub fn girth(&self) -> f64 {
        2.0 * (self.median + self.shortest)
    }

    pub fn length_plus_girth(&self) -> f64 {
        self.longest + self.girth()
    }
}

impl PhysicalSpec {
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64, weight_kg: f64) -> DomainResult<Self> {
        Ok(Self {
            length_cm: DomainError::ensure_non_negative("length_cm", length_cm)?,
            width_cm: DomainError::ensure_non_negative("width_cm", width_cm)?,
            height_cm: DomainError::ensure_non_negative("height_cm", height_cm)?,
            weight_kg: DomainError::ensure_non_negative("weight_kg", weight_kg)?,
        })
    }

    /// Build from inches and pounds.
    pub fn from_imperial(
        length_in: f64,
        width_in: f64,
        height_in: f64,
        weight_lb: f64,
    ) -> DomainResult<Self> {
        Self::new(
            inches_to_cm(length_in),
            inches_to_cm(width_in),
            inches_to_cm(height_in),
            lb_to_kg(weight_lb),
        )
    }

    pub fn length_cm(&self) -> f64 {
        self.length_cm
    }

    pub fn width_cm(&self) -> f64 {
        self.width_cm
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn weight_lb(&self) -> f64 {
        kg_to_lb(self.weight_kg)
    }

    pub fn dimensions_in(&self) -> [f64; 3] {
        [
            cm_to_inches(self.length_cm),
            cm_to_inches(self.width_cm),
            cm_to_inches(self.height_cm),
        ]
    }

    pub fn sorted_dimensions_in(&self) -> SortedDimensions {
        let mut dims = self.dimensions_in();
        dims.sort_by(|a, b| b.total_cmp(a));
        SortedDimensions {
            longest: dims[0],
            median: dims[1],
            shortest: dims[2],
        }
    }

    pub fn cubic_inches(&self) -> f64 {
        self.dimensions_in().iter().product()
    }

    pub fn cubic_feet(&self) -> f64 {
        self.cubic_inches() / CUBIC_INCHES_PER_CUBIC_FOOT
    }

    pub fn dimensional_weight_lb(&self) -> f64 {
        self.cubic_inches() / DIM_WEIGHT_DIVISOR
    }

    /// max(actual weight, dimensional weight), in pounds.
    pub fn billable_weight_lb(&self) -> f64 {
        self.weight_lb().max(self.dimensional_weight_lb())
    }
}

/// Wire shape accepted on deserialization; validated into [`PhysicalSpec`].
#[derive(Debug, Deserialize)]
struct RawPhysicalSpec {
    #[serde(alias = "length")]
    length_cm: f64,
    #[serde(alias = "width")]
    width_cm: f64,
    #[serde(alias = "height")]
    height_cm: f64,
    #[serde(alias = "weight")]
    weight_kg: f64,
}

impl TryFrom<RawPhysicalSpec> for PhysicalSpec {
    type Error = DomainError;

    fn try_from(raw: RawPhysicalSpec) -> Result<Self, Self::Error> {
        Self::new(raw.length_cm, raw.width_cm, raw.height_cm, raw.weight_kg)
    }
}
