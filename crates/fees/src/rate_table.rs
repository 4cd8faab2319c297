//! Generic "first bracket that fits, else extrapolate" lookup.
//!
//! Every weight-keyed fee in the engine goes through [`RateTable::lookup`], so
//! boundary handling and overflow rounding are defined in exactly one place.

use sellerkit_core::{DomainError, DomainResult};

use crate::units::{TOLERANCE, within};

/// Extrapolation parameters for values past the last listed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overflow {
    /// Fee per started unit above `base_threshold`.
    pub per_unit: f64,
    pub base_threshold: f64,
}

impl Overflow {
    /// Whole units above `base_threshold`, rounded up. Zero at or below it.
    pub fn units_above(&self, value: f64) -> f64 {
        billable_units(value - self.base_threshold)
    }

    pub fn charge(&self, base_fee: f64, value: f64) -> f64 {
        base_fee + self.units_above(value) * self.per_unit
    }
}

/// One row of a rate table: values up to `max` (inclusive) cost `fee`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBracket {
    pub max: f64,
    pub fee: f64,
    pub overflow: Option<Overflow>,
}

impl RateBracket {
    pub const fn flat(max: f64, fee: f64) -> Self {
        Self {
            max,
            fee,
            overflow: None,
        }
    }

    pub const fn with_overflow(max: f64, fee: f64, per_unit: f64, base_threshold: f64) -> Self {
        Self {
            max,
            fee,
            overflow: Some(Overflow {
                per_unit,
                base_threshold,
            }),
        }
    }
}

/// Brackets sorted ascending by `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    brackets: &'static [RateBracket],
}

impl RateTable {
    pub const fn new(brackets: &'static [RateBracket]) -> Self {
        Self { brackets }
    }

    pub fn brackets(&self) -> &'static [RateBracket] {
        self.brackets
    }

    /// Fee for `value`.
    ///
    /// The first bracket whose `max` is at least `value` wins. Past the last
    /// bracket, its overflow (if any) extrapolates with the excess rounded up
    /// to a whole unit; without overflow its fee acts as a cap. An empty table
    /// charges nothing.
    pub fn lookup(&self, value: f64) -> f64 {
        if let Some(bracket) = self.brackets.iter().find(|b| within(value, b.max)) {
            return bracket.fee;
        }

        match self.brackets.last() {
            Some(RateBracket {
                fee,
                overflow: Some(overflow),
                ..
            }) => overflow.charge(*fee, value),
            Some(last) => last.fee,
            None => 0.0,
        }
    }

    /// Check the structural invariants of the table: non-empty, strictly
    /// ascending thresholds, non-decreasing fees, and overflow only on the
    /// final bracket.
    pub fn validate(&self) -> DomainResult<()> {
        if self.brackets.is_empty() {
            return Err(DomainError::invariant("rate table has no brackets"));
        }

        for (i, pair) in self.brackets.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            if next.max <= prev.max {
                return Err(DomainError::invariant(format!(
                    "bracket {} threshold {} does not exceed {}",
                    i + 1,
                    next.max,
                    prev.max
                )));
            }
            if next.fee < prev.fee {
                return Err(DomainError::invariant(format!(
                    "bracket {} fee {} is below the previous fee {}",
                    i + 1,
                    next.fee,
                    prev.fee
                )));
            }
            if prev.overflow.is_some() {
                return Err(DomainError::invariant(format!(
                    "bracket {i} carries overflow but is not the last bracket"
                )));
            }
        }

        if let Some(RateBracket {
            max,
            overflow: Some(overflow),
            ..
        }) = self.brackets.last()
        {
            if overflow.per_unit < 0.0 || overflow.base_threshold > *max {
                return Err(DomainError::invariant(
                    "overflow must charge a non-negative rate from at most the last threshold",
                ));
            }
        }

        Ok(())
    }
}

/// Whole billable units in `excess`, rounded up in the fee's favour.
pub(crate) fn billable_units(excess: f64) -> f64 {
    (excess - TOLERANCE).max(0.0).ceil()
}

/// Round to the nearest cent.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
