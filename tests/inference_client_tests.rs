use medibot::config::InferenceConfig;
use medibot::inference::{HostedModelClient, InferenceClient, InferenceError};
use medibot::shaper::shorten;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: &str) -> HostedModelClient {
    HostedModelClient::new(InferenceConfig {
        base_url: base_url.to_string(),
        model: "google/flan-t5-large".to_string(),
        api_key: "test-token".to_string(),
        pacing_delay_ms: 0,
    })
}

#[tokio::test]
async fn returns_generated_text_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/google/flan-t5-large"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({"inputs": "What is aspirin?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"generated_text": "Aspirin is a common pain reliever."}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let text = client.generate("What is aspirin?").await.unwrap();

    assert_eq!(text, "Aspirin is a common pain reliever.");
}

#[tokio::test]
async fn long_generation_shortens_to_the_first_forty_tokens() {
    let words: Vec<String> = (0..45).map(|i| format!("word{i}")).collect();
    let generated = words.join(" ");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"generated_text": generated}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let text = client.generate("prompt").await.unwrap();

    assert_eq!(shorten(&text), words[..40].join(" "));
}

#[tokio::test]
async fn non_success_status_carries_the_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, InferenceError::UpstreamStatus(503)));
    assert_eq!(
        err.user_message(),
        "API request failed with status code 503"
    );
}

#[tokio::test]
async fn non_json_body_is_an_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, InferenceError::InvalidBody));
    assert_eq!(err.user_message(), "Invalid API response.");
}

#[tokio::test]
async fn empty_candidate_list_is_not_understood() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, InferenceError::EmptyCandidates));
    assert_eq!(err.user_message(), "Sorry, I couldn't understand that.");
}

#[tokio::test]
async fn json_object_body_counts_as_no_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "model is loading"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, InferenceError::EmptyCandidates));
}

#[tokio::test]
async fn candidate_without_generated_text_is_not_understood() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"score": 0.9}])))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, InferenceError::MissingField));
    assert_eq!(err.user_message(), "Sorry, I couldn't understand that.");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = client_for(&uri);
    let err = client.generate("prompt").await.unwrap_err();

    assert!(matches!(err, InferenceError::Network(_)));
    assert_eq!(err.user_message(), "Check your internet connection.");
}

#[tokio::test]
async fn pacing_delay_is_applied_after_the_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"generated_text": "ok"}
        ])))
        .mount(&server)
        .await;

    let client = HostedModelClient::new(InferenceConfig {
        base_url: server.uri(),
        model: "m".to_string(),
        api_key: String::new(),
        pacing_delay_ms: 50,
    });

    let started = std::time::Instant::now();
    client.generate("prompt").await.unwrap();

    assert!(started.elapsed() >= std::time::Duration::from_millis(50));
}
