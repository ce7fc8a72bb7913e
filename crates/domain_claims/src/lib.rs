//! Claims Domain
//!
//! This crate turns rows of an insurance-claim export into typed [`Claim`]
//! records.
//!
//! # Normalization
//!
//! ```text
//! RawRow -> required ids -> amount coercion -> non-negative check -> date -> classification -> Claim
//! ```
//!
//! Rows failing a check are dropped; nothing partial is emitted.

pub mod raw_row;
pub mod claim;
pub mod rejection;
pub mod normalizer;
pub mod ports;
pub mod error;

pub use raw_row::{Column, RawCell, RawRow};
pub use claim::{Claim, RejectionClass};
pub use rejection::{classify, classify_cell};
pub use normalizer::{normalize, normalize_row, NormalizedClaims};
pub use ports::{Document, ParseFailure, RowParser};
pub use error::RowRejection;
