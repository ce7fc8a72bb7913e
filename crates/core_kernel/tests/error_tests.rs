//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::ClaimId;

#[test]
fn test_core_error_display() {
    let error = CoreError::EmptyIdentifier("claim id");
    let display = format!("{}", error);

    assert!(display.contains("claim id"));
}

#[test]
fn test_blank_claim_id_is_empty_identifier() {
    assert!(matches!(
        ClaimId::parse(""),
        Err(CoreError::EmptyIdentifier("claim id"))
    ));
}
