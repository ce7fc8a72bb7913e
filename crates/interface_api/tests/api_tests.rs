//! HTTP API tests driving the router through an in-process test server.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use interface_api::{config::ApiConfig, create_router};
use test_utils::{CsvFixtures, RawRowBuilder};

fn server_with(config: ApiConfig) -> TestServer {
    TestServer::new(create_router(config)).unwrap()
}

fn server() -> TestServer {
    server_with(ApiConfig::default())
}

async fn upload_csv(server: &TestServer, body: impl Into<Bytes>) -> TestResponse {
    server
        .post("/api/v1/reports")
        .content_type("text/csv")
        .bytes(body.into())
        .await
}

fn decimal(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = server().get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_report_for_pune_scenario() {
    let response = upload_csv(&server(), CsvFixtures::pune_scenario()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let json: Value = response.json();
    assert!(json["run_id"].as_str().unwrap().starts_with("RUN-"));
    assert_eq!(json["rows_read"], 2);
    assert_eq!(json["rows_dropped"], 0);
    assert_eq!(json["claim_count"], 2);

    let pune = &json["city_metrics"][0];
    assert_eq!(pune["city"], "Pune");
    assert_eq!(pune["total_claims"], 2);
    assert_eq!(decimal(&pune["rejection_rate"]), dec!(50));
    assert_eq!(decimal(&pune["profitability"]), dec!(-200));

    assert_eq!(json["highest_rejection_city"]["city"], "Pune");
    assert_eq!(decimal(&json["highest_rejection_city"]["value"]), dec!(50));
    assert_eq!(json["closure_recommendation_city"]["city"], "Pune");
    assert_eq!(decimal(&json["closure_recommendation_city"]["value"]), dec!(-200));

    assert_eq!(json["pie_series"][0]["label"], "Policy_expired");
    assert_eq!(json["pie_series"][1]["label"], "NoRemark");
    assert_eq!(json["bar_series"][0]["city"], "Pune");
    assert_eq!(json["claim_table"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_filename_stands_in_for_content_type() {
    let response = server()
        .post("/api/v1/reports")
        .add_query_param("filename", "claims.csv")
        .bytes(CsvFixtures::multi_city().into())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let json: Value = response.json();
    assert_eq!(json["rows_dropped"], 1);
    assert_eq!(json["highest_rejection_city"]["city"], "Delhi");
    assert_eq!(json["closure_recommendation_city"]["city"], "Mumbai");
}

#[tokio::test]
async fn test_table_is_limited_to_preview_rows() {
    let server = server_with(ApiConfig {
        preview_rows: 2,
        ..ApiConfig::default()
    });

    let response = upload_csv(&server, CsvFixtures::multi_city()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let json: Value = response.json();
    assert_eq!(json["claim_count"], 5);
    assert_eq!(json["claim_table"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_empty_body_is_bad_request() {
    let response = upload_csv(&server(), Bytes::new()).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["error"], "file_selection");
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn test_unsupported_media_type() {
    let response = server()
        .post("/api/v1/reports")
        .add_query_param("filename", "claims.pdf")
        .content_type("application/pdf")
        .bytes(Bytes::from_static(b"%PDF-1.7"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let json: Value = response.json();
    assert_eq!(json["error"], "unsupported_format");
}

#[tokio::test]
async fn test_no_valid_rows_is_unprocessable() {
    let response = upload_csv(&server(), CsvFixtures::all_rows_invalid()).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = response.json();
    assert_eq!(json["error"], "empty_dataset");
}

#[tokio::test]
async fn test_undecodable_header_is_unprocessable() {
    let response = upload_csv(&server(), vec![0xffu8, 0xfe, b'\n', b'1', b'\n']).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = response.json();
    assert_eq!(json["error"], "parse_error");
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let server = server_with(ApiConfig {
        max_upload_bytes: 64,
        ..ApiConfig::default()
    });
    let rows: Vec<RawRowBuilder> = (0..20)
        .map(|i| RawRowBuilder::new().with_claim_id(format!("CLM-{i}")))
        .collect();

    let response = upload_csv(&server, CsvFixtures::document(&rows)).await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_amounts_past_decimal_range_are_unprocessable() {
    let rows = vec![
        RawRowBuilder::new()
            .with_claim_id("BIG-1")
            .with_amounts("70000000000000000000000000000", "0", "0"),
        RawRowBuilder::new()
            .with_claim_id("BIG-2")
            .with_amounts("70000000000000000000000000000", "0", "0"),
    ];

    let response = upload_csv(&server(), CsvFixtures::document(&rows)).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = response.json();
    assert_eq!(json["error"], "amount_overflow");
    assert!(json["message"].as_str().unwrap().contains("Pune"));
}
