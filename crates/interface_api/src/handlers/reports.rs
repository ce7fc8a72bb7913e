//! Report handlers

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use tracing::{error, info, warn};

use core_kernel::RunId;
use domain_claims::Document;
use domain_reporting::run_pipeline;
use infra_ingest::CsvRowParser;

use crate::dto::report::{ReportResponse, UploadQuery};
use crate::{error::ApiError, AppState};

/// Builds a report from an uploaded claims export
///
/// The request body is the file itself. An empty body counts as no file
/// selected. Parsing and aggregation run on the blocking thread pool.
pub async fn create_report(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ReportResponse>, ApiError> {
    let run_id = RunId::new_v7();
    let body = body?;
    let document = upload_document(&headers, query.filename, body);

    let report = tokio::task::spawn_blocking(move || run_pipeline(&CsvRowParser::new(), document.as_ref()))
        .await
        .map_err(|err| {
            error!(%run_id, error = %err, "Report task failed");
            ApiError::Internal("report run did not complete".to_string())
        })?
        .map_err(|err| {
            warn!(%run_id, kind = err.kind(), error = %err, "Report run failed");
            err
        })?;

    info!(
        %run_id,
        claims = report.claims().len(),
        cities = report.city_metrics().len(),
        "Report run complete"
    );

    Ok(Json(ReportResponse::from_report(
        run_id,
        &report,
        state.config.preview_rows,
    )))
}

fn upload_document(headers: &HeaderMap, filename: Option<String>, body: Bytes) -> Option<Document> {
    if body.is_empty() {
        return None;
    }

    let mut document = Document::new(body.to_vec());
    if let Some(name) = filename.filter(|name| !name.trim().is_empty()) {
        document = document.with_name(name);
    }
    if let Some(media_type) = headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()) {
        document = document.with_media_type(media_type);
    }
    Some(document)
}
