//! Custom Test Assertions
//!
//! Provides assertion helpers for report figures.

use rust_decimal::Decimal;

use domain_claims::Claim;

/// Asserts that two decimals differ by at most `tolerance`
///
/// # Panics
///
/// Panics when the difference exceeds the tolerance.
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimal mismatch: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that every amount on every claim is non-negative
pub fn assert_claims_non_negative(claims: &[Claim]) {
    for claim in claims {
        for (name, value) in [
            ("claim_amount", claim.claim_amount.value()),
            ("premium_collected", claim.premium_collected.value()),
            ("paid_amount", claim.paid_amount.value()),
        ] {
            assert!(
                value >= Decimal::ZERO,
                "Claim {} has negative {}: {}",
                claim.id,
                name,
                value
            );
        }
    }
}

/// Asserts that a percentage lies in `[0, 100]`
pub fn assert_percentage(value: Decimal) {
    assert!(
        value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED,
        "Expected a percentage in [0, 100], got {}",
        value
    );
}
