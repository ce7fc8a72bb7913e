//! API error handling

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_reporting::PipelineError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiError {
    /// HTTP status and machine-readable error type
    pub fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Pipeline(err) => {
                let status = match err {
                    PipelineError::FileSelection => StatusCode::BAD_REQUEST,
                    PipelineError::UnsupportedFormat { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    PipelineError::Parse(_)
                    | PipelineError::EmptyDataset { .. }
                    | PipelineError::AmountOverflow { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (status, err.kind())
            }
            ApiError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_kind();

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_statuses() {
        let cases = [
            (PipelineError::FileSelection, StatusCode::BAD_REQUEST),
            (
                PipelineError::UnsupportedFormat {
                    format: "application/pdf".to_string(),
                    expected: "csv",
                },
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (PipelineError::Parse("bad".to_string()), StatusCode::UNPROCESSABLE_ENTITY),
            (PipelineError::EmptyDataset { rows_read: 3 }, StatusCode::UNPROCESSABLE_ENTITY),
            (
                PipelineError::AmountOverflow { city: "Pune".to_string() },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (err, expected) in cases {
            let (status, _) = ApiError::from(err).status_and_kind();
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn test_message_is_pipeline_message() {
        let err = ApiError::from(PipelineError::EmptyDataset { rows_read: 3 });
        assert_eq!(err.to_string(), "No valid claim records found (3 rows read)");
        assert_eq!(err.status_and_kind().1, "empty_dataset");
    }
}
