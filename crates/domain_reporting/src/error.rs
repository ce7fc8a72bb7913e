//! Pipeline errors

use thiserror::Error;

use domain_claims::ParseFailure;

/// File-level failures that abort a report run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("No file selected: choose a claims export to upload")]
    FileSelection,

    #[error("Unsupported file format '{format}': expected a {expected} file")]
    UnsupportedFormat { format: String, expected: &'static str },

    #[error("Failed to parse file: {0}")]
    Parse(String),

    #[error("No valid claim records found ({rows_read} rows read)")]
    EmptyDataset { rows_read: usize },

    #[error("Amounts for city '{city}' exceed the supported range")]
    AmountOverflow { city: String },
}

impl PipelineError {
    /// Stable machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::FileSelection => "file_selection",
            PipelineError::UnsupportedFormat { .. } => "unsupported_format",
            PipelineError::Parse(_) => "parse_error",
            PipelineError::EmptyDataset { .. } => "empty_dataset",
            PipelineError::AmountOverflow { .. } => "amount_overflow",
        }
    }
}

impl From<ParseFailure> for PipelineError {
    fn from(failure: ParseFailure) -> Self {
        PipelineError::Parse(failure.to_string())
    }
}
