//! Monetary amounts with precise decimal arithmetic
//!
//! Claim exports carry three monetary columns (claimed, premium collected,
//! paid). Every one of them must be non-negative once it reaches a `Claim`,
//! so the invariant is carried by the [`Amount`] type rather than checked at
//! each use site.
//!
//! Currency is not modelled here: the export is single-currency and
//! formatting belongs to the presentation layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when constructing an amount
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Negative amount: {0}")]
    Negative(Decimal),

    #[error("Overflow during calculation")]
    Overflow,
}

/// Coerces a raw cell into a decimal using the locale-agnostic policy.
///
/// - surrounding whitespace is ignored
/// - an empty cell is zero
/// - plain decimal notation (`1200`, `-5`, `12.50`) and scientific notation
///   (`1.2e3`) are accepted
/// - anything else, including thousands separators, `NaN` and `inf`,
///   coerces to zero instead of failing
///
/// Sign is preserved; rejecting negatives is the caller's decision.
pub fn coerce_decimal(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// A non-negative monetary amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Creates an amount, rejecting negative values
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(value));
        }
        // -0 normalises to 0
        Ok(Self(value.abs()))
    }

    /// Applies [`coerce_decimal`] to a raw cell and validates the result
    pub fn coerce(raw: &str) -> Result<Self, AmountError> {
        Self::new(coerce_decimal(raw))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds two amounts, failing instead of overflowing
    pub fn checked_add(&self, other: Amount) -> Result<Amount, AmountError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    /// Signed difference `self - other`.
    ///
    /// The result is a plain decimal because it may be negative
    /// (e.g. premium collected minus amount paid). Both sides are
    /// non-negative, so the difference always fits.
    pub fn minus(&self, other: Amount) -> Decimal {
        self.0 - other.0
    }

    /// Divides by `denominator`, treating a zero denominator as one.
    ///
    /// A tiny denominator can push the quotient past the decimal range,
    /// which fails with [`AmountError::Overflow`].
    pub fn ratio_to(&self, denominator: Amount) -> Result<Decimal, AmountError> {
        if denominator.is_zero() {
            return Ok(self.0);
        }
        self.0.checked_div(denominator.0).ok_or(AmountError::Overflow)
    }

    /// Sums amounts, failing on the first overflow
    pub fn checked_sum<I>(amounts: I) -> Result<Amount, AmountError>
    where
        I: IntoIterator<Item = Amount>,
    {
        amounts
            .into_iter()
            .try_fold(Amount::zero(), |total, amount| total.checked_add(amount))
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Decimal {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
