use quill::completion::{CompletionClient, CompletionError, GeminiClient};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

/// Creates a client pointed at the mock server.
fn create_test_client(server: &MockServer) -> GeminiClient {
    GeminiClient::try_new(
        "test-key".to_string(),
        Some(server.uri()),
        "test-model".to_string(),
    )
    .expect("client construction with a valid mock URL")
}

/// A minimal successful generateContent body with the given part texts.
fn success_body(parts: &[&str]) -> serde_json::Value {
    let parts: Vec<serde_json::Value> = parts
        .iter()
        .map(|text| serde_json::json!({"text": text}))
        .collect();
    serde_json::json!({
        "candidates": [{"content": {"parts": parts, "role": "model"}}]
    })
}

// ============================================================================
// Gemini Client Tests
// ============================================================================

#[tokio::test]
async fn test_successful_completion_concatenates_parts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&["Hello", " world"])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.complete("Hi").await;

    assert_eq!(result.unwrap(), "Hello world");
}

#[tokio::test]
async fn test_request_shape_matches_generate_content_api() {
    let mock_server = MockServer::start().await;

    // The mock only matches when the request carries the API key header and
    // the exact single-turn body; expect(1) fails the test otherwise.
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "What is Rust?"}]}],
            "generationConfig": {"temperature": 0.5}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&["A language."])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.complete("What is Rust?").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_prompt_is_sent_unmodified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"parts": [{"text": "  spaced  "}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&["ok"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.complete("  spaced  ").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_api_error_surfaces_status_and_message() {
    let mock_server = MockServer::start().await;

    let error_body = serde_json::json!({
        "error": {
            "code": 400,
            "message": "API key not valid",
            "status": "INVALID_ARGUMENT"
        }
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.complete("Hi").await;

    match result {
        Err(CompletionError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_raw_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.complete("Hi").await;

    match result {
        Err(CompletionError::Api { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_success_without_candidates_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": []
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.complete("Hi").await;

    assert!(matches!(result, Err(CompletionError::MalformedResponse(_))));
}

#[tokio::test]
async fn test_invalid_json_success_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.complete("Hi").await;

    assert!(matches!(result, Err(CompletionError::MalformedResponse(_))));
}
