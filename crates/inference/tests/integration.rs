use std::time::Duration;

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tegaki_encoder::EncodedPart;
use tegaki_inference::{GeminiClient, GeminiConfig, InferenceError, TextReviewer};

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(GeminiConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        timeout: Duration::from_secs(5),
        ..GeminiConfig::default()
    })
    .unwrap()
}

fn part() -> EncodedPart {
    EncodedPart {
        data: "aGVsbG8=".to_string(),
        mime_type: "image/jpeg".to_string(),
    }
}

const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn candidate_with_text(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn successful_review_returns_feedback() {
    let server = MockServer::start().await;

    // Padded with whitespace: the client must trim before parsing.
    let feedback_text = "\n  {\"extractedText\":\"こんにちは\",\"summary\":\"挨拶\",\
                         \"praisePoints\":[\"丁寧\"],\"improvementPoints\":[\"文脈を足す\"]}  \n";

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [
                { "parts": [ { "inlineData": { "mimeType": "image/jpeg", "data": "aGVsbG8=" } } ] }
            ],
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_with_text(feedback_text)))
        .expect(1)
        .mount(&server)
        .await;

    let feedback = client_for(&server).review(&part()).await.unwrap();
    assert_eq!(feedback.extracted_text, "こんにちは");
    assert_eq!(feedback.praise_points, vec!["丁寧"]);
}

#[tokio::test]
async fn missing_required_field_fails_closed() {
    let server = MockServer::start().await;

    // No improvementPoints: must not surface as a partial result.
    let text = r#"{"extractedText":"x","summary":"y","praisePoints":[]}"#;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_with_text(text)))
        .mount(&server)
        .await;

    let err = client_for(&server).review(&part()).await.unwrap_err();
    assert!(matches!(err, InferenceError::Schema(_)), "got {err:?}");
}

#[tokio::test]
async fn non_json_model_output_fails_closed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_with_text("I could not read the image, sorry.")),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).review(&part()).await.unwrap_err();
    assert!(matches!(err, InferenceError::Schema(_)));
}

#[tokio::test]
async fn service_error_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
        .mount(&server)
        .await;

    let err = client_for(&server).review(&part()).await.unwrap_err();
    match err {
        InferenceError::Service { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "quota exhausted");
        }
        other => panic!("expected Service error, got {other:?}"),
    }

    // Error messages carry the service context for the task record.
    let rendered = client_for(&server).review(&part()).await.unwrap_err();
    assert!(rendered.to_string().contains("429"));
}

#[tokio::test]
async fn empty_candidates_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).review(&part()).await.unwrap_err();
    assert!(matches!(err, InferenceError::EmptyResponse));
}

#[tokio::test]
async fn single_invocation_per_call() {
    let server = MockServer::start().await;

    // No retry: a failing call hits the service exactly once.
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let _ = client_for(&server).review(&part()).await;
    // expectation checked on MockServer drop
}
