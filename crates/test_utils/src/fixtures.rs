//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claim exports for tests. These fixtures are
//! consistent and predictable.

use domain_claims::RawRow;

use crate::builders::{csv_header, RawRowBuilder};

/// Fixture for raw row sets
pub struct RowFixtures;

impl RowFixtures {
    /// Two Pune claims: one rejected for an expired policy, one paid in full
    pub fn pune_scenario() -> Vec<RawRowBuilder> {
        vec![
            RawRowBuilder::new()
                .with_claim_id("1")
                .with_customer_id("C1")
                .with_amounts("1000", "200", "0")
                .with_city("Pune")
                .with_remarks("policy_expired"),
            RawRowBuilder::new()
                .with_claim_id("2")
                .with_customer_id("C2")
                .with_amounts("500", "100", "500")
                .with_city("Pune")
                .with_remarks(""),
        ]
    }

    /// Three cities with one invalid row in the middle
    ///
    /// | city      | claims | rejections | claimed | paid | premium |
    /// |-----------|--------|------------|---------|------|---------|
    /// | Mumbai    | 2      | 1          | 3000    | 2000 | 900     |
    /// | Delhi     | 2      | 2          | 1500    | 0    | 400     |
    /// | Unknown   | 1      | 0          | 0       | 0    | 50      |
    pub fn multi_city() -> Vec<RawRowBuilder> {
        vec![
            RawRowBuilder::new()
                .with_claim_id("M1")
                .with_amounts("2000", "600", "2000")
                .with_city("Mumbai"),
            RawRowBuilder::new()
                .with_claim_id("D1")
                .with_amounts("1000", "300", "0")
                .with_city("Delhi")
                .with_remarks("fake_document found"),
            RawRowBuilder::new()
                .with_claim_id("X1")
                .with_amounts("-10", "300", "0")
                .with_city("Delhi"),
            RawRowBuilder::new()
                .with_claim_id("M2")
                .with_amounts("1000", "300", "0")
                .with_city("Mumbai")
                .with_remarks("NOT_COVERED"),
            RawRowBuilder::new()
                .with_claim_id("D2")
                .with_amounts("500", "100", "0")
                .with_city("Delhi")
                .with_remarks("customer unreachable"),
            RawRowBuilder::new()
                .with_claim_id("U1")
                .with_amounts("0", "50", "0")
                .with_city(""),
        ]
    }

    /// Builds the rows
    pub fn build(builders: Vec<RawRowBuilder>) -> Vec<RawRow> {
        builders.into_iter().map(RawRowBuilder::build).collect()
    }
}

/// Fixture for CSV documents
pub struct CsvFixtures;

impl CsvFixtures {
    /// Renders builders as a CSV document with a header row
    pub fn document(rows: &[RawRowBuilder]) -> String {
        let mut lines = vec![csv_header()];
        lines.extend(rows.iter().map(RawRowBuilder::to_csv_line));
        lines.join("\n") + "\n"
    }

    /// The two-row Pune scenario as CSV
    pub fn pune_scenario() -> String {
        Self::document(&RowFixtures::pune_scenario())
    }

    /// The multi-city scenario as CSV
    pub fn multi_city() -> String {
        Self::document(&RowFixtures::multi_city())
    }

    /// A document whose only row is invalid
    pub fn all_rows_invalid() -> String {
        Self::document(&[RawRowBuilder::new().with_customer_id("")])
    }

    /// Just the header row
    pub fn header_only() -> String {
        csv_header() + "\n"
    }
}
