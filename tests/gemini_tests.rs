use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use portfolio_chat_api::services::gemini::GeminiClient;
use portfolio_chat_api::services::generator::{GeneratorError, TextGenerator};
use serde_json::{Value, json};

/// Serves `router` on an ephemeral port and returns its base url.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1beta")
}

async fn echo_prompt(
    Path(model_action): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("test-key") {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}})),
        );
    }
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default();
    let reply = format!("{model_action} saw: {prompt}");
    (
        StatusCode::OK,
        Json(json!({"candidates": [{"content": {"role": "model", "parts": [{"text": reply}]}, "finishReason": "STOP"}]})),
    )
}

#[tokio::test]
async fn test_generate_content_round_trip() {
    let base = spawn_upstream(Router::new().route("/v1beta/models/{model_action}", post(echo_prompt))).await;
    let client = GeminiClient::new(Some("test-key".to_string()), base, "gemini-2.5-flash");

    let reply = client.generate("Visitor says: hi").await.unwrap();
    assert_eq!(reply, "gemini-2.5-flash:generateContent saw: Visitor says: hi");
}

#[tokio::test]
async fn test_provider_error_message_is_surfaced() {
    let base = spawn_upstream(Router::new().route("/v1beta/models/{model_action}", post(echo_prompt))).await;
    let client = GeminiClient::new(Some("wrong-key".to_string()), base, "gemini-2.5-flash");

    let err = client.generate("hi").await.unwrap_err();
    match err {
        GeneratorError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_quota_error_with_plain_body() {
    let router = Router::new().route(
        "/v1beta/models/{model_action}",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exceeded") }),
    );
    let base = spawn_upstream(router).await;
    let client = GeminiClient::new(Some("test-key".to_string()), base, "gemini-2.5-flash");

    let err = client.generate("hi").await.unwrap_err();
    assert!(err.to_string().contains("429"));
    assert!(err.to_string().contains("quota exceeded"));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let router = Router::new().route("/v1beta/models/{model_action}", post(|| async { "not json" }));
    let base = spawn_upstream(router).await;
    let client = GeminiClient::new(Some("test-key".to_string()), base, "gemini-2.5-flash");

    let err = client.generate("hi").await.unwrap_err();
    assert!(matches!(err, GeneratorError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_upstream_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::new(Some("test-key".to_string()), format!("http://{addr}"), "gemini-2.5-flash");
    let err = client.generate("hi").await.unwrap_err();
    assert!(matches!(err, GeneratorError::Network(_)));
}
