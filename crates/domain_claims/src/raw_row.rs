//! Raw rows as produced by the row parser
//!
//! A [`RawRow`] only keeps the columns the pipeline knows about. Unknown
//! headers are ignored when the row is built, and a column that never
//! appeared reads as absent.

use std::collections::HashMap;
use std::fmt;

/// A column of the claims export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    ClaimId,
    ClaimDate,
    CustomerId,
    ClaimAmount,
    PremiumCollected,
    PaidAmount,
    City,
    RejectionRemarks,
}

impl Column {
    /// Every column the pipeline reads
    pub const ALL: [Column; 8] = [
        Column::ClaimId,
        Column::ClaimDate,
        Column::CustomerId,
        Column::ClaimAmount,
        Column::PremiumCollected,
        Column::PaidAmount,
        Column::City,
        Column::RejectionRemarks,
    ];

    /// Returns the exact header name (case-sensitive)
    pub fn header(&self) -> &'static str {
        match self {
            Column::ClaimId => "CLAIM_ID",
            Column::ClaimDate => "CLAIM_DATE",
            Column::CustomerId => "CUSTOMER_ID",
            Column::ClaimAmount => "CLAIM_AMOUNT",
            Column::PremiumCollected => "PREMIUM_COLLECTED",
            Column::PaidAmount => "PAID_AMOUNT",
            Column::City => "CITY",
            Column::RejectionRemarks => "REJECTION_REMARKS",
        }
    }

    /// Looks up a column by its exact header name
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.header() == header)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A single cell value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCell {
    /// Decoded text
    Text(String),
    /// Bytes that were not valid UTF-8, kept as a lossy rendering
    Undecodable(String),
}

impl RawCell {
    /// Returns the text if the cell decoded cleanly
    pub fn text(&self) -> Option<&str> {
        match self {
            RawCell::Text(text) => Some(text),
            RawCell::Undecodable(_) => None,
        }
    }

    /// Returns the best available rendering of the cell
    pub fn display(&self) -> &str {
        match self {
            RawCell::Text(text) | RawCell::Undecodable(text) => text,
        }
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::Text(value.to_string())
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        RawCell::Text(value)
    }
}

/// One row of the export, keyed by known column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<Column, RawCell>,
}

impl RawRow {
    /// Creates an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a cell under its header.
    ///
    /// Returns false (and stores nothing) when the header is not a known
    /// column. A repeated header overwrites the earlier value.
    pub fn insert(&mut self, header: &str, cell: RawCell) -> bool {
        match Column::from_header(header) {
            Some(column) => {
                self.cells.insert(column, cell);
                true
            }
            None => false,
        }
    }

    /// Sets a text cell
    pub fn with(mut self, column: Column, value: impl Into<String>) -> Self {
        self.cells.insert(column, RawCell::Text(value.into()));
        self
    }

    /// Returns the cell for a column, if present
    pub fn cell(&self, column: Column) -> Option<&RawCell> {
        self.cells.get(&column)
    }

    /// Returns the decoded text for a column, if present and decodable
    pub fn text(&self, column: Column) -> Option<&str> {
        self.cell(column).and_then(RawCell::text)
    }
}

impl<H, V> FromIterator<(H, V)> for RawRow
where
    H: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (H, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (header, value) in iter {
            row.insert(header.as_ref(), RawCell::Text(value.into()));
        }
        row
    }
}
