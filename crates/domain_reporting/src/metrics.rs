//! Derived city metrics and recommendations

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::AmountError;

use crate::aggregate::CityAggregate;
use crate::error::PipelineError;

/// A city aggregate with its derived ratios
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityMetrics {
    #[serde(flatten)]
    pub aggregate: CityAggregate,
    /// Percentage of rejected claims
    pub rejection_rate: Decimal,
    /// Paid over claimed
    pub payout_ratio: Decimal,
    /// Premium collected minus amount paid
    pub profitability: Decimal,
}

impl CityMetrics {
    /// Computes the ratios for an aggregate
    pub fn derive(aggregate: CityAggregate) -> Result<Self, AmountError> {
        Ok(Self {
            rejection_rate: aggregate.rejection_rate(),
            payout_ratio: aggregate.payout_ratio()?,
            profitability: aggregate.profitability(),
            aggregate,
        })
    }

    /// City label
    pub fn city(&self) -> &str {
        &self.aggregate.city
    }
}

/// Computes the ratios for every aggregate, keeping their order
pub fn derive_metrics(aggregates: Vec<CityAggregate>) -> Result<Vec<CityMetrics>, PipelineError> {
    aggregates
        .into_iter()
        .map(|aggregate| {
            let city = aggregate.city.clone();
            CityMetrics::derive(aggregate).map_err(|_| PipelineError::AmountOverflow { city })
        })
        .collect()
}

/// The two headline recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    /// City with the highest rejection rate
    pub highest_rejection_city: CityMetrics,
    /// City with the lowest profitability
    pub closure_recommendation_city: CityMetrics,
}

impl Recommendations {
    /// Selects both recommendations.
    ///
    /// Ties go to the city that comes first. Returns `None` for an empty
    /// slice.
    pub fn select(metrics: &[CityMetrics]) -> Option<Self> {
        let highest_rejection_city =
            first_best(metrics, |candidate, best| candidate.rejection_rate > best.rejection_rate)?;
        let closure_recommendation_city =
            first_best(metrics, |candidate, best| candidate.profitability < best.profitability)?;

        Some(Self {
            highest_rejection_city: highest_rejection_city.clone(),
            closure_recommendation_city: closure_recommendation_city.clone(),
        })
    }
}

/// Keeps the current best unless a later entry is strictly better
fn first_best<F>(metrics: &[CityMetrics], is_better: F) -> Option<&CityMetrics>
where
    F: Fn(&CityMetrics, &CityMetrics) -> bool,
{
    let (first, rest) = metrics.split_first()?;
    Some(rest.iter().fold(first, |best, candidate| {
        if is_better(candidate, best) {
            candidate
        } else {
            best
        }
    }))
}
