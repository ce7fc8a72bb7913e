//! Core Kernel - Foundational value types for the claims report pipeline
//!
//! This crate provides the building blocks shared by every other crate:
//! - Non-negative monetary amounts with precise decimal arithmetic
//! - The numeric coercion policy applied to raw amount cells
//! - Reference identifiers for claims and customers
//! - Best-effort claim date parsing

pub mod amount;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use amount::{Amount, AmountError, coerce_decimal};
pub use temporal::{parse_claim_date, format_claim_date};
pub use identifiers::{ClaimId, CustomerId, RunId};
pub use error::CoreError;
