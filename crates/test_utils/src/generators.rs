//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claim export data.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_claims::{Claim, RawRow};

use crate::builders::{ClaimBuilder, RawRowBuilder};

/// Strategy for non-negative amounts with two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for amounts at the edges of the decimal range.
///
/// Mixes magnitudes up to about 10^28, values with 10 to 28 decimal places,
/// `Decimal::MAX` and ordinary amounts. Sums and ratios of these can leave
/// the representable range.
pub fn extreme_amount_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (1i64..=i64::MAX, 0u32..10u32)
            .prop_map(|(mantissa, zeros)| Decimal::from(mantissa) * Decimal::from(10i64.pow(zeros))),
        (1i64..1000i64, 10u32..=28u32).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale)),
        Just(Decimal::MAX),
        amount_strategy(),
    ]
}

/// Strategy for amount cells as they appear in exports.
///
/// Mixes plain numbers, scientific notation, blanks and junk. Never
/// produces a negative value.
pub fn amount_cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => amount_strategy().prop_map(|d| d.to_string()),
        1 => (1u32..100u32).prop_map(|m| format!("{}e2", m)),
        1 => Just(String::new()),
        1 => Just("n/a".to_string()),
    ]
}

/// Strategy for city cells, including blanks
pub fn city_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Pune".to_string()),
        Just("Mumbai".to_string()),
        Just("Delhi".to_string()),
        Just("Chennai".to_string()),
        Just(" Kolkata ".to_string()),
        Just(String::new()),
    ]
}

/// Strategy for rejection remarks covering every classifier outcome
pub fn remark_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Fake_document submitted".to_string()),
        Just("NOT_COVERED under plan".to_string()),
        Just("policy_expired".to_string()),
        Just("fake_document and not_covered".to_string()),
        "[a-z ]{1,20}",
    ]
}

/// Strategy for well-formed raw rows
pub fn raw_row_strategy() -> impl Strategy<Value = RawRow> {
    raw_row_builder_strategy().prop_map(RawRowBuilder::build)
}

/// Strategy for well-formed raw row builders
pub fn raw_row_builder_strategy() -> impl Strategy<Value = RawRowBuilder> {
    (
        "[A-Z0-9]{1,8}",
        "[A-Z0-9]{1,8}",
        amount_cell_strategy(),
        amount_cell_strategy(),
        amount_cell_strategy(),
        city_strategy(),
        remark_strategy(),
    )
        .prop_map(|(id, customer, claimed, premium, paid, city, remarks)| {
            RawRowBuilder::new()
                .with_claim_id(id)
                .with_customer_id(customer)
                .with_amounts(claimed, premium, paid)
                .with_city(city)
                .with_remarks(remarks)
        })
}

/// Strategy for normalized claims
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    (
        amount_strategy(),
        amount_strategy(),
        prop_oneof![Just(Decimal::ZERO), amount_strategy()],
        city_strategy(),
        remark_strategy(),
    )
        .prop_map(|(claimed, premium, paid, city, remarks)| {
            ClaimBuilder::new()
                .with_amounts(claimed, premium, paid)
                .with_city(city)
                .with_remarks(remarks)
                .build()
        })
}

/// Strategy for non-empty claim lists
pub fn claims_strategy(max_len: usize) -> impl Strategy<Value = Vec<Claim>> {
    prop::collection::vec(claim_strategy(), 1..=max_len.max(1))
}

/// Strategy for claims whose amounts come from [`extreme_amount_strategy`]
pub fn extreme_claim_strategy() -> impl Strategy<Value = Claim> {
    (
        extreme_amount_strategy(),
        extreme_amount_strategy(),
        extreme_amount_strategy(),
        prop_oneof![Just("Pune".to_string()), Just("Goa".to_string())],
    )
        .prop_map(|(claimed, premium, paid, city)| {
            ClaimBuilder::new()
                .with_amounts(claimed, premium, paid)
                .with_city(city)
                .build()
        })
}

/// Strategy for non-empty lists of extreme claims
pub fn extreme_claims_strategy(max_len: usize) -> impl Strategy<Value = Vec<Claim>> {
    prop::collection::vec(extreme_claim_strategy(), 1..=max_len.max(1))
}
