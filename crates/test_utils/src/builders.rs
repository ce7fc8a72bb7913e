//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! Tests set only the fields they care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{Amount, ClaimId, CustomerId};
use domain_claims::{classify, Claim, Column, RawRow};

/// Builder for raw export rows.
///
/// Defaults describe a valid, paid claim in Pune without a remark.
#[derive(Debug, Clone)]
pub struct RawRowBuilder {
    values: Vec<(Column, Option<String>)>,
}

impl Default for RawRowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RawRowBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        let defaults = [
            (Column::ClaimId, "CLM-1"),
            (Column::ClaimDate, "2024-01-15"),
            (Column::CustomerId, "CUST-1"),
            (Column::ClaimAmount, "1000"),
            (Column::PremiumCollected, "250"),
            (Column::PaidAmount, "1000"),
            (Column::City, "Pune"),
            (Column::RejectionRemarks, ""),
        ];
        Self {
            values: defaults
                .into_iter()
                .map(|(column, value)| (column, Some(value.to_string())))
                .collect(),
        }
    }

    fn set(mut self, column: Column, value: Option<String>) -> Self {
        if let Some(slot) = self.values.iter_mut().find(|(c, _)| *c == column) {
            slot.1 = value;
        }
        self
    }

    /// Sets any column
    pub fn with(self, column: Column, value: impl Into<String>) -> Self {
        self.set(column, Some(value.into()))
    }

    /// Removes a column entirely
    pub fn without(self, column: Column) -> Self {
        self.set(column, None)
    }

    /// Sets the claim ID
    pub fn with_claim_id(self, id: impl Into<String>) -> Self {
        self.with(Column::ClaimId, id)
    }

    /// Sets the customer ID
    pub fn with_customer_id(self, id: impl Into<String>) -> Self {
        self.with(Column::CustomerId, id)
    }

    /// Sets the claim date cell
    pub fn with_date(self, date: impl Into<String>) -> Self {
        self.with(Column::ClaimDate, date)
    }

    /// Sets claimed, premium and paid cells
    pub fn with_amounts(
        self,
        claim_amount: impl Into<String>,
        premium_collected: impl Into<String>,
        paid_amount: impl Into<String>,
    ) -> Self {
        self.with(Column::ClaimAmount, claim_amount)
            .with(Column::PremiumCollected, premium_collected)
            .with(Column::PaidAmount, paid_amount)
    }

    /// Sets the city
    pub fn with_city(self, city: impl Into<String>) -> Self {
        self.with(Column::City, city)
    }

    /// Sets the rejection remark
    pub fn with_remarks(self, remarks: impl Into<String>) -> Self {
        self.with(Column::RejectionRemarks, remarks)
    }

    /// Builds the raw row
    pub fn build(self) -> RawRow {
        self.values
            .into_iter()
            .filter_map(|(column, value)| value.map(|v| (column.header(), v)))
            .collect()
    }

    /// Renders the row as a CSV line matching [`csv_header`].
    ///
    /// Removed columns render as empty cells. Values containing a comma or
    /// quote are quoted.
    pub fn to_csv_line(&self) -> String {
        self.values
            .iter()
            .map(|(_, value)| csv_escape(value.as_deref().unwrap_or_default()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Header line listing every column in builder order
pub fn csv_header() -> String {
    Column::ALL
        .iter()
        .map(|c| c.header())
        .collect::<Vec<_>>()
        .join(",")
}

fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Builder for normalized claims
#[derive(Debug, Clone)]
pub struct ClaimBuilder {
    id: String,
    customer_id: String,
    date: Option<NaiveDate>,
    claim_amount: Decimal,
    premium_collected: Decimal,
    paid_amount: Decimal,
    city: String,
    rejection_remarks: String,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: "CLM-1".to_string(),
            customer_id: "CUST-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15),
            claim_amount: Decimal::from(1000),
            premium_collected: Decimal::from(250),
            paid_amount: Decimal::from(1000),
            city: "Pune".to_string(),
            rejection_remarks: String::new(),
        }
    }

    /// Sets the claim ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the city
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets claimed, premium and paid amounts
    pub fn with_amounts(mut self, claim_amount: Decimal, premium_collected: Decimal, paid_amount: Decimal) -> Self {
        self.claim_amount = claim_amount;
        self.premium_collected = premium_collected;
        self.paid_amount = paid_amount;
        self
    }

    /// Sets the rejection remark; the class is derived from it
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.rejection_remarks = remarks.into();
        self
    }

    /// Marks the claim as rejected: nothing paid, remark recorded
    pub fn rejected(self, remarks: impl Into<String>) -> Self {
        let claim_amount = self.claim_amount;
        let premium_collected = self.premium_collected;
        self.with_amounts(claim_amount, premium_collected, Decimal::ZERO)
            .with_remarks(remarks)
    }

    /// Builds the claim
    ///
    /// # Panics
    ///
    /// Panics on blank identifiers or negative amounts.
    pub fn build(self) -> Claim {
        Claim {
            id: ClaimId::parse(&self.id).expect("test claim id must not be blank"),
            date: self.date,
            customer_id: CustomerId::parse(&self.customer_id).expect("test customer id must not be blank"),
            claim_amount: Amount::new(self.claim_amount).expect("test claim amount must be non-negative"),
            premium_collected: Amount::new(self.premium_collected).expect("test premium must be non-negative"),
            paid_amount: Amount::new(self.paid_amount).expect("test paid amount must be non-negative"),
            city: self.city,
            rejection_class: classify(&self.rejection_remarks),
            rejection_remarks: self.rejection_remarks,
        }
    }
}
