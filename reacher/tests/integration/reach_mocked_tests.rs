//! Integration tests for REACH text processing using mocked HTTP responses
//!
//! These tests verify form submission, response passthrough, and error
//! mapping against a wiremock stand-in for the REACH web service.

mod common;

use common::{FRIES_SINGLE_ACTIVATION, create_mock_reach_client, mount_reach_response};
use reacher::ReacherError;
use tracing_test::traced_test;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test that process_text posts the form fields the service expects
#[tokio::test]
#[traced_test]
async fn test_process_text_posts_form_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/text"))
        .and(header(
            "content-type",
            "application/x-www-form-urlencoded",
        ))
        .and(body_string_contains("text=MEK+phosphorylates+ERK."))
        .and(body_string_contains("output=fries"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FRIES_SINGLE_ACTIVATION))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_reach_client(&mock_server);
    client
        .process_text("MEK phosphorylates ERK.")
        .await
        .expect("Processing should succeed");

    // wiremock will verify expect(1) on drop
}

/// Test that the response body passes through without re-serialization
#[tokio::test]
#[traced_test]
async fn test_process_text_returns_body_verbatim() {
    // Unusual spacing and key order must survive untouched
    let body = "{\n  \"events\" : {\"frames\":[]},\n  \"zeta\": 1, \"alpha\": 2\n}";
    let mock_server = MockServer::start().await;
    mount_reach_response(&mock_server, body).await;

    let client = create_mock_reach_client(&mock_server);
    let result = client
        .process_text("Some abstract text.")
        .await
        .expect("Processing should succeed");

    assert_eq!(result, body);
}

/// Test that non-JSON bodies also pass through; parsing is not this client's job
#[tokio::test]
#[traced_test]
async fn test_process_text_does_not_validate_body() {
    let mock_server = MockServer::start().await;
    mount_reach_response(&mock_server, "not json at all").await;

    let client = create_mock_reach_client(&mock_server);
    let result = client
        .process_text("Some abstract text.")
        .await
        .expect("Processing should succeed");

    assert_eq!(result, "not json at all");
}

/// Test that a client error from the service maps to an API error
#[tokio::test]
#[traced_test]
async fn test_process_text_client_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/text"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&mock_server)
        .await;

    let client = create_mock_reach_client(&mock_server);
    let err = client.process_text("text").await.unwrap_err();

    match err {
        ReacherError::ApiError { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Bad Request");
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}

/// Test that a server error from the service maps to an API error
#[tokio::test]
#[traced_test]
async fn test_process_text_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/text"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = create_mock_reach_client(&mock_server);
    let err = client.process_text("text").await.unwrap_err();

    assert!(matches!(err, ReacherError::ApiError { status: 503, .. }));
}

/// Test that transport failures surface as request errors
#[tokio::test]
#[traced_test]
async fn test_process_text_connection_refused() {
    // The server must be exclusive (builder-created): pooled servers
    // outlive their handle and keep listening after drop.
    let uri = {
        let mock_server = MockServer::builder().start().await;
        mock_server.uri()
    };

    let config = reacher::ClientConfig::new().with_reach_base_url(uri);
    let client = reacher::ReachClient::with_config(config);

    let err = client.process_text("text").await.unwrap_err();
    assert!(matches!(err, ReacherError::RequestError(_)));
}
