//! Report assembly
//!
//! A [`Report`] is built once per run and never modified. Besides the raw
//! figures it offers the three views the presentation layer draws: a bar
//! series per city, a pie series per rejection class, and a claim table.

use serde::Serialize;

use core_kernel::Amount;
use domain_claims::{Claim, NormalizedClaims, RejectionClass};

use crate::histogram::{HistogramEntry, RejectionHistogram};
use crate::metrics::{CityMetrics, Recommendations};

/// Claimed and paid totals for one city
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityAmountPoint {
    pub city: String,
    pub total_claim_amount: Amount,
    pub total_paid_amount: Amount,
}

/// One line of the claim table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimTableRow {
    pub id: String,
    pub date: String,
    pub customer_id: String,
    pub claim_amount: Amount,
    pub premium_collected: Amount,
    pub paid_amount: Amount,
    pub city: String,
    pub rejection_class: RejectionClass,
}

impl From<&Claim> for ClaimTableRow {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id.to_string(),
            date: claim.date_iso(),
            customer_id: claim.customer_id.to_string(),
            claim_amount: claim.claim_amount,
            premium_collected: claim.premium_collected,
            paid_amount: claim.paid_amount,
            city: claim.city.clone(),
            rejection_class: claim.rejection_class,
        }
    }
}

/// Immutable result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    claims: Vec<Claim>,
    city_metrics: Vec<CityMetrics>,
    rejection_histogram: RejectionHistogram,
    highest_rejection_city: CityMetrics,
    closure_recommendation_city: CityMetrics,
    rows_read: usize,
    rows_dropped: usize,
}

impl Report {
    pub(crate) fn assemble(
        normalized: NormalizedClaims,
        city_metrics: Vec<CityMetrics>,
        rejection_histogram: RejectionHistogram,
        recommendations: Recommendations,
    ) -> Self {
        Self {
            claims: normalized.claims,
            city_metrics,
            rejection_histogram,
            highest_rejection_city: recommendations.highest_rejection_city,
            closure_recommendation_city: recommendations.closure_recommendation_city,
            rows_read: normalized.rows_read,
            rows_dropped: normalized.rows_dropped,
        }
    }

    /// Valid claims in input order
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Per-city figures in first-occurrence order
    pub fn city_metrics(&self) -> &[CityMetrics] {
        &self.city_metrics
    }

    /// Looks up a city's figures by label
    pub fn city(&self, label: &str) -> Option<&CityMetrics> {
        self.city_metrics.iter().find(|m| m.city() == label)
    }

    pub fn rejection_histogram(&self) -> &RejectionHistogram {
        &self.rejection_histogram
    }

    pub fn highest_rejection_city(&self) -> &CityMetrics {
        &self.highest_rejection_city
    }

    pub fn closure_recommendation_city(&self) -> &CityMetrics {
        &self.closure_recommendation_city
    }

    /// Rows received from the parser.
    ///
    /// Blank lines are not rows; lines holding only delimiters are, and show
    /// up in [`Report::rows_dropped`].
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Rows dropped during normalization
    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped
    }

    /// Bar chart series: claimed and paid per city
    pub fn bar_series(&self) -> Vec<CityAmountPoint> {
        self.city_metrics
            .iter()
            .map(|m| CityAmountPoint {
                city: m.aggregate.city.clone(),
                total_claim_amount: m.aggregate.total_claim_amount,
                total_paid_amount: m.aggregate.total_paid_amount,
            })
            .collect()
    }

    /// Pie chart series: claims per rejection class
    pub fn pie_series(&self) -> &[HistogramEntry] {
        self.rejection_histogram.entries()
    }

    /// The first `limit` claims as table rows
    pub fn claim_table(&self, limit: usize) -> Vec<ClaimTableRow> {
        self.claims.iter().take(limit).map(ClaimTableRow::from).collect()
    }
}
