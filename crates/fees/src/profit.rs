//! Per-unit profitability on top of a [`FeeBreakdown`].
//!
//! Assumes the unit sells within one month of arrival: one month of recurring
//! storage is charged alongside the per-unit fulfillment fees.

use serde::{Deserialize, Serialize};

use sellerkit_core::{DomainError, DomainResult, ValueObject};

use crate::breakdown::FeeBreakdown;
use crate::rate_table::round_cents;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitSummary {
    pub sale_price: f64,
    pub unit_cost: f64,
    /// Shipping plus inbound placement.
    pub fulfillment_fees: f64,
    /// One month of storage plus aged-inventory surcharge.
    pub recurring_fees: f64,
    pub net_profit: f64,
    /// Net profit as a percentage of the sale price; zero for a free item.
    pub margin_percent: f64,
    /// Net profit as a percentage of the unit cost; `None` when the unit cost
    /// is zero.
    pub roi_percent: Option<f64>,
}

impl ValueObject for ProfitSummary {}

pub fn estimate_profit(
    breakdown: &FeeBreakdown,
    sale_price: f64,
    unit_cost: f64,
) -> DomainResult<ProfitSummary> {
    let sale_price = DomainError::ensure_non_negative("sale_price", sale_price)?;
    let unit_cost = DomainError::ensure_non_negative("unit_cost", unit_cost)?;

    let fulfillment_fees = breakdown.per_unit_fulfillment();
    let recurring_fees = breakdown.total_monthly_recurring;
    let net_profit = round_cents(sale_price - unit_cost - fulfillment_fees - recurring_fees);

    let margin_percent = if sale_price > 0.0 {
        round_cents(net_profit / sale_price * 100.0)
    } else {
        0.0
    };
    let roi_percent = (unit_cost > 0.0).then(|| round_cents(net_profit / unit_cost * 100.0));

    Ok(ProfitSummary {
        sale_price,
        unit_cost,
        fulfillment_fees,
        recurring_fees,
        net_profit,
        margin_percent,
        roi_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::SizeTier;

    fn breakdown() -> FeeBreakdown {
        FeeBreakdown {
            size_tier: SizeTier::LargeStandard,
            billable_weight_lb: 0.8,
            shipping: 4.55,
            inbound_placement: 0.45,
            monthly_storage: 0.20,
            aged_inventory_surcharge: 0.0,
            removal: 1.53,
            disposal: 1.53,
            returns_processing: 0.0,
            total_monthly_recurring: 0.20,
        }
    }

    #[test]
    fn net_profit_subtracts_cost_fulfillment_and_one_month_of_storage() {
        let summary = estimate_profit(&breakdown(), 25.0, 8.0).unwrap();
        assert_eq!(summary.fulfillment_fees, 5.00);
        assert_eq!(summary.recurring_fees, 0.20);
        assert_eq!(summary.net_profit, 11.80);
        assert_eq!(summary.margin_percent, 47.2);
        assert_eq!(summary.roi_percent, Some(147.5));
    }

    #[test]
    fn losses_are_reported_as_negative_profit() {
        let summary = estimate_profit(&breakdown(), 6.0, 4.0).unwrap();
        assert_eq!(summary.net_profit, -3.20);
        assert!(summary.margin_percent < 0.0);
    }

    #[test]
    fn zero_price_and_zero_cost_do_not_divide_by_zero() {
        let summary = estimate_profit(&breakdown(), 0.0, 0.0).unwrap();
        assert_eq!(summary.margin_percent, 0.0);
        assert_eq!(summary.roi_percent, None);
    }

    #[test]
    fn rejects_negative_inputs() {
        assert!(estimate_profit(&breakdown(), -1.0, 2.0).is_err());
        assert!(estimate_profit(&breakdown(), 10.0, f64::NAN).is_err());
    }
}
