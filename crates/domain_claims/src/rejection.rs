//! Rejection remark classification
//!
//! Remarks are free text. Classification looks for a small set of tokens,
//! case-insensitively, in a fixed priority order: the first token found wins
//! regardless of where it sits in the remark.

use crate::claim::RejectionClass;
use crate::raw_row::RawCell;

/// Tokens in priority order
const REJECTION_TOKENS: [(&str, RejectionClass); 3] = [
    ("fake_document", RejectionClass::FakeDocument),
    ("not_covered", RejectionClass::NotCovered),
    ("policy_expired", RejectionClass::PolicyExpired),
];

/// Classifies a remark.
///
/// Blank remarks are `NoRemark`; remarks with none of the tokens are
/// `Unknown`.
///
/// # Examples
///
/// ```
/// use domain_claims::{classify, RejectionClass};
///
/// assert_eq!(classify("  "), RejectionClass::NoRemark);
/// assert_eq!(classify("POLICY_EXPIRED in March"), RejectionClass::PolicyExpired);
/// assert_eq!(classify("not_covered; fake_document"), RejectionClass::FakeDocument);
/// ```
pub fn classify(remark: &str) -> RejectionClass {
    if remark.trim().is_empty() {
        return RejectionClass::NoRemark;
    }

    let folded = remark.to_lowercase();
    REJECTION_TOKENS
        .iter()
        .find(|(token, _)| folded.contains(token))
        .map(|(_, class)| *class)
        .unwrap_or(RejectionClass::Unknown)
}

/// Classifies the remark cell of a raw row.
///
/// A missing cell is `NoRemark`. A cell that could not be decoded is
/// `Error`; the fault stops here.
pub fn classify_cell(cell: Option<&RawCell>) -> RejectionClass {
    match cell {
        None => RejectionClass::NoRemark,
        Some(RawCell::Text(remark)) => classify(remark),
        Some(RawCell::Undecodable(_)) => RejectionClass::Error,
    }
}
