//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims report test suite.
//!
//! # Modules
//!
//! - `fixtures`: Ready-made CSV documents and row sets
//! - `builders`: Builder patterns for raw rows and claims
//! - `assertions`: Custom assertion helpers for decimals and claims
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
