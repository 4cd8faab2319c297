use serde::{Deserialize, Serialize};

use sellerkit_core::ValueObject;

use crate::aged::aged_inventory_surcharge;
use crate::context::CommercialContext;
use crate::physical::PhysicalSpec;
use crate::placement::inbound_placement_fee;
use crate::rate_table::round_cents;
use crate::removal::{disposal_fee, removal_fee};
use crate::returns::returns_processing_fee;
use crate::shipping::shipping_fee;
use crate::storage::monthly_storage_fee;
use crate::tier::{SizeTier, classify_tier};

/// Complete fee schedule for one unit under one commercial context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub size_tier: SizeTier,
    /// max(actual, dimensional) weight in pounds.
    pub billable_weight_lb: f64,
    /// Per unit sold.
    pub shipping: f64,
    /// Per unit received.
    pub inbound_placement: f64,
    /// Per unit per month.
    pub monthly_storage: f64,
    /// Per unit per month.
    pub aged_inventory_surcharge: f64,
    /// Per unit removed.
    pub removal: f64,
    /// Per unit disposed of.
    pub disposal: f64,
    /// Per unit returned.
    pub returns_processing: f64,
    /// `monthly_storage + aged_inventory_surcharge`; one-time and per-event
    /// fees are excluded.
    pub total_monthly_recurring: f64,
}

impl ValueObject for FeeBreakdown {}

impl FeeBreakdown {
    /// Fees incurred once for every unit that is received and sold.
    pub fn per_unit_fulfillment(&self) -> f64 {
        round_cents(self.shipping + self.inbound_placement)
    }
}

/// Run every calculator for one unit and assemble the breakdown.
///
/// Total over its inputs: a validated [`PhysicalSpec`] and any
/// [`CommercialContext`] always produce a breakdown.
pub fn calculate_all_fees(spec: &PhysicalSpec, context: &CommercialContext) -> FeeBreakdown {
    let tier = classify_tier(spec);
    let billable = spec.billable_weight_lb();

    let monthly_storage = monthly_storage_fee(tier, spec, context.season);
    let aged = aged_inventory_surcharge(tier, spec, context.inventory_age_days, context.category);

    let breakdown = FeeBreakdown {
        size_tier: tier,
        billable_weight_lb: billable,
        shipping: shipping_fee(tier, context.category, context.price, billable),
        inbound_placement: inbound_placement_fee(tier, billable, context.placement),
        monthly_storage,
        aged_inventory_surcharge: aged,
        removal: removal_fee(tier, billable),
        disposal: disposal_fee(tier, billable),
        returns_processing: returns_processing_fee(tier, billable, context.category),
        total_monthly_recurring: round_cents(monthly_storage + aged),
    };

    tracing::debug!(
        tier = %breakdown.size_tier,
        billable_weight_lb = breakdown.billable_weight_lb,
        category = %context.category,
        price = context.price,
        shipping = breakdown.shipping,
        total_monthly_recurring = breakdown.total_monthly_recurring,
        "calculated fee breakdown"
    );

    breakdown
}
