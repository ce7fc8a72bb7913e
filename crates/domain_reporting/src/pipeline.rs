//! Report pipeline entry points

use tracing::{info, instrument};

use domain_claims::{normalize, Document, RawRow, RowParser};

use crate::aggregate::aggregate_by_city;
use crate::error::PipelineError;
use crate::histogram::RejectionHistogram;
use crate::metrics::{derive_metrics, Recommendations};
use crate::report::Report;

/// Builds a report from parsed rows.
///
/// Fails with [`PipelineError::EmptyDataset`] when there are no rows or no
/// row survives normalization, and with [`PipelineError::AmountOverflow`]
/// when a city's figures leave the decimal range.
#[instrument(skip_all, fields(rows = rows.len()))]
pub fn build_report(rows: Vec<RawRow>) -> Result<Report, PipelineError> {
    if rows.is_empty() {
        return Err(PipelineError::EmptyDataset { rows_read: 0 });
    }

    let normalized = normalize(rows);
    let empty = PipelineError::EmptyDataset {
        rows_read: normalized.rows_read,
    };
    if normalized.is_empty() {
        return Err(empty);
    }

    let aggregates = aggregate_by_city(&normalized.claims)?;
    let histogram = RejectionHistogram::from_claims(&normalized.claims);
    let city_metrics = derive_metrics(aggregates)?;
    let recommendations = Recommendations::select(&city_metrics).ok_or(empty)?;

    info!(
        rows_read = normalized.rows_read,
        rows_dropped = normalized.rows_dropped,
        claims = normalized.claims.len(),
        cities = city_metrics.len(),
        "Report built"
    );

    Ok(Report::assemble(normalized, city_metrics, histogram, recommendations))
}

/// Runs the whole pipeline on an uploaded document.
///
/// Checks that a document was provided and that the parser handles its
/// format before parsing it and building the report.
pub fn run_pipeline<P>(parser: &P, document: Option<&Document>) -> Result<Report, PipelineError>
where
    P: RowParser + ?Sized,
{
    let document = document.ok_or(PipelineError::FileSelection)?;

    if !parser.accepts(document) {
        return Err(PipelineError::UnsupportedFormat {
            format: document.describe_format(),
            expected: parser.format_name(),
        });
    }

    let rows = parser.parse(document)?;
    build_report(rows)
}
