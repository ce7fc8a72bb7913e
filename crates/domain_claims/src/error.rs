//! Claims domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::raw_row::Column;

/// Why a raw row was dropped during normalization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowRejection {
    #[error("Missing required value: {0}")]
    MissingField(Column),

    #[error("Negative amount in {column}: {value}")]
    NegativeAmount { column: Column, value: Decimal },
}
