use novachef::detect::{ClientError, DetectorClient, DetectorConfig};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/test-model:generateContent";

fn test_client(server: &MockServer) -> DetectorClient {
    let mut config = DetectorConfig::new("test-key");
    config.endpoint = Url::parse(&server.uri()).expect("mock server URL");
    config.model = "test-model".to_string();
    config.sample_bytes = 64;
    DetectorClient::new(config)
}

fn suggestion_body(suggestions: &[&str]) -> serde_json::Value {
    let inner = json!({
        "format": "Base64",
        "confidence": 0.92,
        "explanation": "Alphabet and padding look like standard Base64.",
        "suggestedOperations": suggestions,
    });
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": inner.to_string() } ] } }
        ]
    })
}

#[tokio::test]
async fn test_detect_returns_parsed_suggestion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .and(body_string_contains("Input Data: aGVsbG8="))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(suggestion_body(&["base64-decode"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.detect("aGVsbG8=").await.expect("suggestion");
    assert_eq!(result.format, "Base64");
    assert!(result.confidence > 0.9);
    assert_eq!(result.suggested_operations, vec!["base64-decode"]);
}

#[tokio::test]
async fn test_detect_degrades_to_none_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(client.detect("aGVsbG8=").await.is_none());
}

#[tokio::test]
async fn test_detect_degrades_to_none_on_malformed_suggestion() {
    let server = MockServer::start().await;
    let body = json!({
        "candidates": [
            { "content": { "parts": [ { "text": "this is not the JSON you asked for" } ] } }
        ]
    });
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(client.detect("aGVsbG8=").await.is_none());
}

#[tokio::test]
async fn test_detect_degrades_to_none_on_empty_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(client.detect("aGVsbG8=").await.is_none());
}

#[tokio::test]
async fn test_short_input_never_reaches_the_collaborator() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    assert!(client.detect("ab").await.is_none());
    assert!(client.detect("  \n ").await.is_none());

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_sample_is_capped_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(suggestion_body(&["hex-decode"])),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let long_input = "a".repeat(500);
    client.detect(&long_input).await.expect("suggestion");

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8(requests[0].body.clone()).expect("utf8 body");
    // Sample cap is 64 bytes in the test config; the full 500-byte input must
    // not appear in the prompt.
    assert!(!body.contains(&long_input));
    assert!(body.contains(&"a".repeat(64)));
}

#[tokio::test]
async fn test_request_detection_surfaces_server_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .request_detection("aGVsbG8=")
        .await
        .expect_err("server error");
    assert!(matches!(err, ClientError::ServerError(_)));
}

#[tokio::test]
async fn test_overlapping_calls_keep_their_own_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(suggestion_body(&["rot13"])),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let (first, second) = tokio::join!(client.detect("guvf vf ebg13"), client.detect("nabgure bar"));
    assert_eq!(first.expect("first").suggested_operations, vec!["rot13"]);
    assert_eq!(second.expect("second").suggested_operations, vec!["rot13"]);
}
