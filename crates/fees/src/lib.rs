//! Fulfillment fee engine.
//!
//! Converts a unit's measurements and commercial context into the marketplace
//! fees it will incur: shipping, inbound placement, monthly storage,
//! aged-inventory surcharge, removal/disposal and returns processing.
//!
//! Every calculator is a pure function over immutable inputs and `static` rate
//! tables, so the engine can be called from any number of threads at once.
//! Input validation happens at construction ([`PhysicalSpec::new`],
//! [`CommercialContext::validate`], the enums' `FromStr`); past that point no
//! calculation can fail.
//!
//! ```ignore
//! use sellerkit_fees::{calculate_all_fees, Category, CommercialContext, PhysicalSpec};
//!
//! let spec = PhysicalSpec::new(35.0, 25.0, 2.0, 0.25)?;
//! let ctx = CommercialContext::default()
//!     .with_category(Category::Apparel)
//!     .with_price(29.99);
//! let fees = calculate_all_fees(&spec, &ctx);
//! assert_eq!(fees.shipping, 4.56);
//! ```

pub mod aged;
pub mod breakdown;
pub mod context;
pub mod physical;
pub mod placement;
pub mod profit;
pub mod rate_table;
pub mod removal;
pub mod returns;
pub mod shipping;
pub mod storage;
pub mod tier;
pub mod units;

/// Identifier of the compiled-in rate schedule.
pub const FEE_SCHEDULE_VERSION: &str = "2024-02";

pub use aged::aged_inventory_surcharge;
pub use breakdown::{FeeBreakdown, calculate_all_fees};
pub use context::{Category, CommercialContext, PlacementMode, StorageSeason};
pub use physical::PhysicalSpec;
pub use placement::inbound_placement_fee;
pub use profit::{ProfitSummary, estimate_profit};
pub use rate_table::{RateBracket, RateTable, round_cents};
pub use removal::{disposal_fee, removal_fee};
pub use returns::returns_processing_fee;
pub use shipping::{calculate_shipping_fee, shipping_fee};
pub use storage::monthly_storage_fee;
pub use tier::{SizeTier, classify_tier};
pub use units::{to_imperial_length, to_imperial_mass};
