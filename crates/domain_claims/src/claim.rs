//! Claim record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Amount, ClaimId, CustomerId, format_claim_date};

/// Rejection class assigned to a claim's remark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionClass {
    /// No remark recorded
    NoRemark,
    /// Remark mentions a fake document
    #[serde(rename = "Fake_document")]
    FakeDocument,
    /// Remark mentions the loss not being covered
    #[serde(rename = "Not_Covered")]
    NotCovered,
    /// Remark mentions an expired policy
    #[serde(rename = "Policy_expired")]
    PolicyExpired,
    /// Remark present but not recognised
    Unknown,
    /// Remark could not be read
    Error,
}

impl RejectionClass {
    /// Returns the label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            RejectionClass::NoRemark => "NoRemark",
            RejectionClass::FakeDocument => "Fake_document",
            RejectionClass::NotCovered => "Not_Covered",
            RejectionClass::PolicyExpired => "Policy_expired",
            RejectionClass::Unknown => "Unknown",
            RejectionClass::Error => "Error",
        }
    }
}

impl fmt::Display for RejectionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A normalized claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim reference (not unique across the export)
    pub id: ClaimId,
    /// Date of the claim, when it could be read
    pub date: Option<NaiveDate>,
    /// Customer reference
    pub customer_id: CustomerId,
    /// Amount claimed
    pub claim_amount: Amount,
    /// Premium collected from the customer
    pub premium_collected: Amount,
    /// Amount paid out
    pub paid_amount: Amount,
    /// City, possibly empty
    pub city: String,
    /// Free-text rejection remark, possibly empty
    pub rejection_remarks: String,
    /// Classification of the remark
    pub rejection_class: RejectionClass,
}

impl Claim {
    /// Returns the claim date as ISO `YYYY-MM-DD`, or an empty string
    pub fn date_iso(&self) -> String {
        format_claim_date(self.date)
    }

    /// True when nothing was paid and a remark was recorded.
    ///
    /// This is what counts as a rejection in city aggregates. The
    /// classification is not consulted.
    pub fn is_rejection(&self) -> bool {
        self.paid_amount.is_zero() && !self.rejection_remarks.is_empty()
    }
}
