//! Metric ↔ imperial conversions.
//!
//! The fee schedule is published in inches and pounds while sellers usually
//! measure in centimetres and kilograms. Conversions do no validation: negative
//! inputs pass through unchanged.

/// Centimetres per inch (exact).
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per avoirdupois pound (exact).
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Cubic inches per cubic foot.
pub const CUBIC_INCHES_PER_CUBIC_FOOT: f64 = 1728.0;

/// Slack used when comparing converted measurements against published bounds.
///
/// `38.1 cm / 2.54` is not exactly `15.0` in binary floating point; without this
/// a product measured exactly on a boundary could be pushed into the next tier
/// or the next billable pound.
pub const TOLERANCE: f64 = 1e-9;

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn kg_to_lb(kg: f64) -> f64 {
    kg / KG_PER_LB
}

pub fn lb_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

/// Centimetres to inches.
pub fn to_imperial_length(cm: f64) -> f64 {
    cm_to_inches(cm)
}

/// Kilograms to pounds.
pub fn to_imperial_mass(kg: f64) -> f64 {
    kg_to_lb(kg)
}

/// `value <= bound`, allowing for conversion noise.
pub(crate) fn within(value: f64, bound: f64) -> bool {
    value <= bound + TOLERANCE
}
