//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Empty identifier: {0} must not be blank")]
    EmptyIdentifier(&'static str),
}
