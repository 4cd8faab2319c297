//! `sellerkit-quote`: JSON in, fee breakdown out.
//!
//! Reads one [`QuoteRequest`] from a reader and writes one [`QuoteResponse`]
//! to a writer. Validation failures surface as errors before any fee is
//! computed.

use std::io::{Read, Write};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use sellerkit_fees::{
    CommercialContext, FEE_SCHEDULE_VERSION, FeeBreakdown, PhysicalSpec, ProfitSummary,
    calculate_all_fees, estimate_profit,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuoteRequest {
    /// Measurements in cm/kg; validated during deserialization.
    pub spec: PhysicalSpec,
    #[serde(default)]
    pub context: CommercialContext,
    /// Landed cost per unit; enables the profit summary.
    #[serde(default)]
    pub unit_cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResponse {
    pub schedule_version: &'static str,
    pub fees: FeeBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit: Option<ProfitSummary>,
}

/// Validate a request and price it.
pub fn quote(request: &QuoteRequest) -> anyhow::Result<QuoteResponse> {
    request.context.validate().context("invalid commercial context")?;

    let fees = calculate_all_fees(&request.spec, &request.context);
    let profit = request
        .unit_cost
        .map(|cost| estimate_profit(&fees, request.context.price, cost))
        .transpose()
        .context("invalid unit cost")?;

    Ok(QuoteResponse {
        schedule_version: FEE_SCHEDULE_VERSION,
        fees,
        profit,
    })
}

pub fn run(reader: impl Read, mut writer: impl Write) -> anyhow::Result<()> {
    let request: QuoteRequest =
        serde_json::from_reader(reader).context("failed to parse quote request")?;

    let response = quote(&request)?;
    tracing::info!(
        tier = %response.fees.size_tier,
        shipping = response.fees.shipping,
        total_monthly_recurring = response.fees.total_monthly_recurring,
        "quote computed"
    );

    serde_json::to_writer_pretty(&mut writer, &response).context("failed to write quote")?;
    writeln!(writer)?;
    Ok(())
}
