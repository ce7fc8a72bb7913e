//! Report DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::RunId;
use domain_reporting::{CityAmountPoint, CityMetrics, ClaimTableRow, HistogramEntry, Report};

/// Query parameters for a report upload
#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
    /// Original file name, used when no content type is sent
    pub filename: Option<String>,
}

/// The city picked for a recommendation and the figure that decided it
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub city: String,
    pub value: Decimal,
}

/// Report response
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub run_id: String,
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub claim_count: usize,
    pub city_metrics: Vec<CityMetrics>,
    pub bar_series: Vec<CityAmountPoint>,
    pub pie_series: Vec<HistogramEntry>,
    pub claim_table: Vec<ClaimTableRow>,
    pub highest_rejection_city: RecommendationResponse,
    pub closure_recommendation_city: RecommendationResponse,
}

impl ReportResponse {
    /// Builds the response, keeping at most `preview_rows` table rows
    pub fn from_report(run_id: RunId, report: &Report, preview_rows: usize) -> Self {
        let highest = report.highest_rejection_city();
        let closure = report.closure_recommendation_city();

        Self {
            run_id: run_id.to_string(),
            rows_read: report.rows_read(),
            rows_dropped: report.rows_dropped(),
            claim_count: report.claims().len(),
            city_metrics: report.city_metrics().to_vec(),
            bar_series: report.bar_series(),
            pie_series: report.pie_series().to_vec(),
            claim_table: report.claim_table(preview_rows),
            highest_rejection_city: RecommendationResponse {
                city: highest.city().to_string(),
                value: highest.rejection_rate,
            },
            closure_recommendation_city: RecommendationResponse {
                city: closure.city().to_string(),
                value: closure.profitability,
            },
        }
    }
}
