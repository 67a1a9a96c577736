use std::sync::Arc;

use checker_engine::{
    Inspect, InspectorSettings, StaticTokenProvider, UrlInspectionClient,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> UrlInspectionClient {
    let settings = InspectorSettings {
        endpoint: format!("{}/v1/urlInspection/index:inspect", server.uri()),
        ..InspectorSettings::default()
    };
    UrlInspectionClient::new(settings, Arc::new(StaticTokenProvider::new("test-token")))
        .expect("client")
}

#[tokio::test]
async fn pass_verdict_is_reported_as_indexed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/urlInspection/index:inspect"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({
            "inspectionUrl": "https://a.com/page",
            "siteUrl": "sc-domain:a.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inspectionResult": {
                "inspectionResultLink": "https://search.google.com/search-console/inspect",
                "indexStatusResult": {
                    "verdict": "PASS",
                    "coverageState": "Submitted and indexed",
                    "lastCrawlTime": "2026-08-20T07:33:00Z",
                    "googleCanonical": "https://a.com/page"
                }
            }
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .inspect("https://a.com/page", "sc-domain:a.com")
        .await;

    assert!(result.indexed);
    assert_eq!(result.error, "");
    assert_eq!(result.coverage_state, "Submitted and indexed");
    assert_eq!(result.last_crawl_date, "2026-08-20T07:33:00Z");
    assert_eq!(result.canonical_url, "https://a.com/page");
}

#[tokio::test]
async fn fail_verdict_is_not_indexed_but_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inspectionResult": {
                "indexStatusResult": {
                    "verdict": "FAIL",
                    "coverageState": "Crawled - currently not indexed"
                }
            }
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .inspect("https://a.com/gone", "sc-domain:a.com")
        .await;

    assert!(!result.indexed);
    assert!(result.is_ok());
    assert_eq!(result.coverage_state, "Crawled - currently not indexed");
    assert_eq!(result.last_crawl_date, "—");
    assert_eq!(result.canonical_url, "—");
}

#[tokio::test]
async fn empty_payload_yields_no_data_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .inspect("https://a.com", "sc-domain:a.com")
        .await;

    assert!(!result.indexed);
    assert_eq!(result.error, "Нет данных от API");
}

#[tokio::test]
async fn payload_without_index_status_yields_no_data_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inspectionResult": {
                "inspectionResultLink": "https://search.google.com/search-console/inspect"
            }
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .inspect("https://a.com", "sc-domain:a.com")
        .await;

    assert_eq!(result.error, "Нет данных от API");
}

#[tokio::test]
async fn http_error_status_is_folded_into_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"error": {"message": "permission denied"}})),
        )
        .mount(&server)
        .await;

    let result = client_for(&server)
        .inspect("https://a.com", "sc-domain:a.com")
        .await;

    assert!(!result.indexed);
    assert!(result.error.contains("HTTP 403"), "error was: {}", result.error);
    assert!(result.error.contains("permission denied"));
}

#[tokio::test]
async fn malformed_body_is_folded_into_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .inspect("https://a.com", "sc-domain:a.com")
        .await;

    assert!(!result.indexed);
    assert!(!result.error.is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_is_folded_into_error_field() {
    // Nothing listens on the mock server once it is dropped.
    let endpoint = {
        let server = MockServer::start().await;
        format!("{}/v1/urlInspection/index:inspect", server.uri())
    };
    let settings = InspectorSettings {
        endpoint,
        ..InspectorSettings::default()
    };
    let client =
        UrlInspectionClient::new(settings, Arc::new(StaticTokenProvider::new("test-token")))
            .expect("client");

    let result = client.inspect("https://a.com", "sc-domain:a.com").await;

    assert!(!result.indexed);
    assert!(!result.error.is_empty());
}
