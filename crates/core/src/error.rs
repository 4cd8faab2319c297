//! Domain error model.

use thiserror::Error;

/// Result type used at the boundary of the fee engine.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The calculators themselves are total and never fail. These errors are
/// raised by constructors and parsers that guard the boundary, so that
/// malformed measurements or unknown enum strings never reach a fee table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (negative measurement, unknown category, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Static data broke one of its structural invariants.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Reject a measurement that is negative, NaN or infinite.
    ///
    /// Zero is accepted.
    pub fn ensure_non_negative(field: &str, value: f64) -> DomainResult<f64> {
        if !value.is_finite() {
            return Err(Self::validation(format!("{field} must be a finite number")));
        }
        if value < 0.0 {
            return Err(Self::validation(format!(
                "{field} cannot be negative (got {value})"
            )));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_non_negative_accepts_zero_and_positive() {
        assert_eq!(DomainError::ensure_non_negative("price", 0.0), Ok(0.0));
        assert_eq!(DomainError::ensure_non_negative("price", 12.5), Ok(12.5));
    }

    #[test]
    fn ensure_non_negative_rejects_negative_values() {
        let err = DomainError::ensure_non_negative("length_cm", -1.0).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("length_cm")),
            _ => panic!("Expected Validation error for negative value"),
        }
    }

    #[test]
    fn ensure_non_negative_rejects_nan_and_infinity() {
        assert!(DomainError::ensure_non_negative("weight_kg", f64::NAN).is_err());
        assert!(DomainError::ensure_non_negative("weight_kg", f64::INFINITY).is_err());
    }
}
