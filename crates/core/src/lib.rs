//! `sellerkit-core`: shared building blocks for the seller toolkit crates.
//!
//! This crate contains **pure** primitives only (no IO, no logging setup).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
