//! Tests for the HTTP transport

use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::config::{AuthConfig, ClientConfig};
use crate::error::Error;
use crate::types::{BackoffType, CallOptions, RetryPolicy};

fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .endpoint(server.uri())
        .no_rate_limit()
        .build()
}

/// Fast retry policy so tests don't sleep for real backoff intervals
fn fast_retry(max_retries: u32) -> RetryPolicy {
    RetryPolicy::default()
        .with_max_retries(max_retries)
        .with_backoff(
            BackoffType::Constant,
            Duration::from_millis(5),
            Duration::from_millis(5),
        )
}

#[tokio::test]
async fn test_get_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/zones/eu-1/inventories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "inventories": [{"name": "zones/eu-1/hosts/web-1/inventory"}],
            "nextPageToken": "tok-1"
        })))
        .mount(&server)
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    let body: serde_json::Value = client
        .get_json("/v1/zones/eu-1/inventories", &[], &CallOptions::new())
        .await
        .unwrap();

    assert_eq!(body["nextPageToken"], "tok-1");
    assert_eq!(
        body["inventories"][0]["name"],
        "zones/eu-1/hosts/web-1/inventory"
    );
}

#[tokio::test]
async fn test_query_parameters_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/zones/eu-1/patchJobs"))
        .and(query_param("pageToken", "tok-2"))
        .and(query_param("pageSize", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    let query = vec![
        ("pageToken".to_string(), "tok-2".to_string()),
        ("pageSize".to_string(), "25".to_string()),
    ];
    let _: serde_json::Value = client
        .get_json("/v1/zones/eu-1/patchJobs", &query, &CallOptions::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_metadata_sent_as_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/zones/eu-1/inventories"))
        .and(header("x-trace-id", "trace-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    let options = CallOptions::new().with_metadata("x-trace-id", "trace-7");
    let _: serde_json::Value = client
        .get_json("/v1/zones/eu-1/inventories", &[], &options)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_default_headers_and_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/zones/eu-1/inventories"))
        .and(header("x-team", "fleet-ops"))
        .and(header("x-api-key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .endpoint(server.uri())
        .no_rate_limit()
        .header("x-team", "fleet-ops")
        .auth(AuthConfig::ApiKey {
            header: "x-api-key".to_string(),
            key: "secret".to_string(),
        })
        .build();

    let client = HttpClient::new(config).unwrap();
    let _: serde_json::Value = client
        .get_json("/v1/zones/eu-1/inventories", &[], &CallOptions::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_retries_then_succeeds() {
    let server = MockServer::start().await;

    // First attempt fails with a retryable status, the retry succeeds.
    Mock::given(method("GET"))
        .and(path("/v1/zones/eu-1/inventories"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/zones/eu-1/inventories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "inventories": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    let options = CallOptions::new().with_retry(fast_retry(3));
    let body: serde_json::Value = client
        .get_json("/v1/zones/eu-1/inventories", &[], &options)
        .await
        .unwrap();

    assert!(body["inventories"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_client_error_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/zones/missing/inventories"))
        .respond_with(ResponseTemplate::new(404).set_body_string("zone not found"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    let options = CallOptions::new().with_retry(fast_retry(3));
    let result: crate::error::Result<serde_json::Value> = client
        .get_json("/v1/zones/missing/inventories", &[], &options)
        .await;

    match result.unwrap_err() {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "zone not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_no_retry_policy_fails_fast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/zones/eu-1/inventories"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(test_config(&server)).unwrap();
    let options = CallOptions::new().with_retry(RetryPolicy::none());
    let result: crate::error::Result<serde_json::Value> = client
        .get_json("/v1/zones/eu-1/inventories", &[], &options)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        Error::HttpStatus { status: 503, .. }
    ));
}

#[test]
fn test_invalid_endpoint_rejected() {
    let config = ClientConfig::new("not a url");
    assert!(HttpClient::new(config).is_err());
}
