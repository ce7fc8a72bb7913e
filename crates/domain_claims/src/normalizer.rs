//! Claim normalization
//!
//! Validates and coerces raw rows into [`Claim`] records. The checks run in
//! a fixed order and the first failing check drops the row:
//!
//! 1. `CLAIM_ID` and `CUSTOMER_ID` must be present and non-blank
//! 2. the three amounts are coerced (unparseable means zero)
//! 3. no amount may be negative
//!
//! Date, city and remark never drop a row.

use tracing::debug;

use core_kernel::{Amount, AmountError, ClaimId, CustomerId, parse_claim_date};

use crate::claim::Claim;
use crate::error::RowRejection;
use crate::raw_row::{Column, RawCell, RawRow};
use crate::rejection::classify_cell;

/// Output of a normalization pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedClaims {
    /// Valid claims, in input order
    pub claims: Vec<Claim>,
    /// Number of rows received
    pub rows_read: usize,
    /// Number of rows dropped
    pub rows_dropped: usize,
}

impl NormalizedClaims {
    /// True when no row survived
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

/// Normalizes every row, keeping the input order of the survivors
pub fn normalize<I>(rows: I) -> NormalizedClaims
where
    I: IntoIterator<Item = RawRow>,
{
    let mut outcome = NormalizedClaims::default();

    for (index, row) in rows.into_iter().enumerate() {
        outcome.rows_read += 1;
        match normalize_row(&row) {
            Ok(claim) => outcome.claims.push(claim),
            Err(reason) => {
                debug!(row = index + 1, %reason, "Dropping row");
                outcome.rows_dropped += 1;
            }
        }
    }

    outcome
}

/// Normalizes a single row
pub fn normalize_row(row: &RawRow) -> Result<Claim, RowRejection> {
    let id = required(row, Column::ClaimId, ClaimId::parse)?;
    let customer_id = required(row, Column::CustomerId, CustomerId::parse)?;

    let claim_amount = amount(row, Column::ClaimAmount)?;
    let premium_collected = amount(row, Column::PremiumCollected)?;
    let paid_amount = amount(row, Column::PaidAmount)?;

    Ok(Claim {
        id,
        date: row.text(Column::ClaimDate).and_then(parse_claim_date),
        customer_id,
        claim_amount,
        premium_collected,
        paid_amount,
        city: text_or_empty(row, Column::City),
        rejection_remarks: text_or_empty(row, Column::RejectionRemarks),
        rejection_class: classify_cell(row.cell(Column::RejectionRemarks)),
    })
}

fn required<T, E>(
    row: &RawRow,
    column: Column,
    parse: impl Fn(&str) -> Result<T, E>,
) -> Result<T, RowRejection> {
    row.text(column)
        .and_then(|raw| parse(raw).ok())
        .ok_or(RowRejection::MissingField(column))
}

fn amount(row: &RawRow, column: Column) -> Result<Amount, RowRejection> {
    Amount::coerce(row.text(column).unwrap_or_default()).map_err(|err| match err {
        AmountError::Negative(value) => RowRejection::NegativeAmount { column, value },
        AmountError::Overflow => unreachable!("Amount::coerce only rejects negatives"),
    })
}

fn text_or_empty(row: &RawRow, column: Column) -> String {
    row.cell(column)
        .map(RawCell::display)
        .unwrap_or_default()
        .to_string()
}
