//! Per-city aggregation

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Amount, AmountError};
use domain_claims::Claim;

use crate::error::PipelineError;

/// Label used for claims without a city
pub const UNKNOWN_CITY: &str = "Unknown";

/// Running totals for one city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityAggregate {
    /// City label
    pub city: String,
    /// Number of claims
    pub total_claims: u64,
    /// Sum of claimed amounts
    pub total_claim_amount: Amount,
    /// Sum of paid amounts
    pub total_paid_amount: Amount,
    /// Sum of premiums collected
    pub total_premium: Amount,
    /// Claims with nothing paid and a remark recorded
    pub rejection_count: u64,
}

impl CityAggregate {
    fn empty(city: &str) -> Self {
        Self {
            city: city.to_string(),
            total_claims: 0,
            total_claim_amount: Amount::zero(),
            total_paid_amount: Amount::zero(),
            total_premium: Amount::zero(),
            rejection_count: 0,
        }
    }

    /// Adds one claim to the totals.
    ///
    /// Fails without touching the totals when any sum would leave the
    /// decimal range.
    pub fn record(&mut self, claim: &Claim) -> Result<(), AmountError> {
        let total_claim_amount = self.total_claim_amount.checked_add(claim.claim_amount)?;
        let total_paid_amount = self.total_paid_amount.checked_add(claim.paid_amount)?;
        let total_premium = self.total_premium.checked_add(claim.premium_collected)?;

        self.total_claims += 1;
        self.total_claim_amount = total_claim_amount;
        self.total_paid_amount = total_paid_amount;
        self.total_premium = total_premium;
        if claim.is_rejection() {
            self.rejection_count += 1;
        }
        Ok(())
    }

    /// Share of rejected claims, as a percentage in `[0, 100]`
    pub fn rejection_rate(&self) -> Decimal {
        if self.total_claims == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.rejection_count) * Decimal::ONE_HUNDRED / Decimal::from(self.total_claims)
    }

    /// Paid over claimed; a city with nothing claimed divides by one
    pub fn payout_ratio(&self) -> Result<Decimal, AmountError> {
        self.total_paid_amount.ratio_to(self.total_claim_amount)
    }

    /// Premium collected minus amount paid
    pub fn profitability(&self) -> Decimal {
        self.total_premium.minus(self.total_paid_amount)
    }
}

/// Returns the aggregation label for a claim's city
pub fn city_label(city: &str) -> &str {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        UNKNOWN_CITY
    } else {
        trimmed
    }
}

/// Folds claims into one aggregate per city.
///
/// Aggregates are emitted in the order each city first appears. Fails with
/// [`PipelineError::AmountOverflow`] when a city's totals leave the decimal
/// range.
pub fn aggregate_by_city(claims: &[Claim]) -> Result<Vec<CityAggregate>, PipelineError> {
    let mut aggregates: Vec<CityAggregate> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for claim in claims {
        let label = city_label(&claim.city);
        let position = match positions.get(label) {
            Some(&position) => position,
            None => {
                aggregates.push(CityAggregate::empty(label));
                positions.insert(label.to_string(), aggregates.len() - 1);
                aggregates.len() - 1
            }
        };
        let aggregate = &mut aggregates[position];
        aggregate.record(claim).map_err(|_| PipelineError::AmountOverflow {
            city: aggregate.city.clone(),
        })?;
    }

    Ok(aggregates)
}
