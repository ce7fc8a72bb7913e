//! Claims Reporting Domain
//!
//! Folds normalized claims into the figures a claims performance report
//! shows: per-city totals and ratios, a histogram of rejection classes, and
//! two recommendations.
//!
//! # Pipeline
//!
//! ```text
//! Document -> RowParser -> RawRow* -> normalize -> Claim*
//!                                                   |-> aggregate_by_city -> derive_metrics -> Recommendations
//!                                                   `-> RejectionHistogram
//!                                                                         => Report
//! ```
//!
//! Every run is independent: [`build_report`] and [`run_pipeline`] take
//! their input by value or reference and keep no state between calls.

pub mod aggregate;
pub mod histogram;
pub mod metrics;
pub mod report;
pub mod pipeline;
pub mod error;

pub use aggregate::{aggregate_by_city, CityAggregate, UNKNOWN_CITY};
pub use histogram::{HistogramEntry, RejectionHistogram};
pub use metrics::{derive_metrics, CityMetrics, Recommendations};
pub use report::{CityAmountPoint, ClaimTableRow, Report};
pub use pipeline::{build_report, run_pipeline};
pub use error::PipelineError;
