//! Integration tests for the gateway router
//!
//! The upstream chat-completion endpoint is stubbed so the full
//! request/response cycle can be exercised without a model server.

use std::sync::Arc;

use ai_core::{ChatCompletion, CompletionConfig, CompletionError, ModelEntry};
use application::TutorService;
use async_trait::async_trait;
use axum_test::TestServer;
use presentation_http::{GatewayState, gateway_router};
use serde_json::json;

/// What the stub upstream should do for each call.
enum StubBehavior {
    Reply(String),
    FailStatus,
    FailTransport,
}

struct StubCompletion {
    behavior: StubBehavior,
    models: Vec<ModelEntry>,
}

#[async_trait]
impl ChatCompletion for StubCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        match &self.behavior {
            StubBehavior::Reply(text) => Ok(text.clone()),
            StubBehavior::FailStatus => {
                Err(CompletionError::ServerError("Status 500: boom".to_string()))
            }
            StubBehavior::FailTransport => {
                Err(CompletionError::ConnectionFailed("refused".to_string()))
            }
        }
    }

    async fn list_models(&self) -> Result<Vec<ModelEntry>, CompletionError> {
        match &self.behavior {
            StubBehavior::FailTransport => {
                Err(CompletionError::ConnectionFailed("refused".to_string()))
            }
            _ => Ok(self.models.clone()),
        }
    }
}

fn server_with(behavior: StubBehavior, models: Vec<ModelEntry>) -> TestServer {
    server_with_config(behavior, models, CompletionConfig::default())
}

fn server_with_config(
    behavior: StubBehavior,
    models: Vec<ModelEntry>,
    config: CompletionConfig,
) -> TestServer {
    let stub = Arc::new(StubCompletion { behavior, models });
    let tutor = TutorService::new(stub, config);
    let state = GatewayState {
        tutor: Arc::new(tutor),
    };
    TestServer::new(gateway_router(state)).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let server = server_with(StubBehavior::Reply(String::new()), vec![]);

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn chat_returns_upstream_text_verbatim() {
    let server = server_with(
        StubBehavior::Reply("Great effort! Keep practicing.".to_string()),
        vec![],
    );

    let response = server
        .post("/chat")
        .json(&json!({"message": "I goed home", "level": "beginner"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Great effort! Keep practicing.");
}

#[tokio::test]
async fn chat_upstream_failure_is_500() {
    let server = server_with(StubBehavior::FailStatus, vec![]);

    let response = server.post("/chat").json(&json!({"message": "hi"})).await;

    response.assert_status_internal_server_error();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "upstream_error");
}

#[tokio::test]
async fn chat_unknown_provider_is_400() {
    let config = CompletionConfig {
        provider: "openai".to_string(),
        ..Default::default()
    };
    let server = server_with_config(
        StubBehavior::Reply("ignored".to_string()),
        vec![],
        config,
    );

    let response = server.post("/chat").json(&json!({"message": "hi"})).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn analyze_returns_typed_shape() {
    let analysis = json!({
        "grammarScore": 70, "vocabularyScore": 75, "coherenceScore": 60,
        "overallScore": 68, "corrections": [], "suggestions": [],
        "feedback": "continue assim"
    });
    let server = server_with(StubBehavior::Reply(analysis.to_string()), vec![]);

    let response = server
        .post("/writing/analyze")
        .json(&json!({"text": "I has a cat"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["grammarScore"], 70.0);
    assert_eq!(body["feedback"], "continue assim");
}

#[tokio::test]
async fn analyze_non_json_output_is_distinct_500() {
    let server = server_with(
        StubBehavior::Reply("Sure, here's my analysis in plain prose.".to_string()),
        vec![],
    );

    let response = server
        .post("/writing/analyze")
        .json(&json!({"text": "text"}))
        .await;

    response.assert_status_internal_server_error();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "malformed_model_output");
    assert_eq!(body["error"], "Failed to parse model response");
}

#[tokio::test]
async fn analyze_upstream_failure_stays_generic() {
    let server = server_with(StubBehavior::FailStatus, vec![]);

    let response = server
        .post("/writing/analyze")
        .json(&json!({"text": "text"}))
        .await;

    response.assert_status_internal_server_error();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "upstream_error");
}

#[tokio::test]
async fn improve_wraps_free_text() {
    let server = server_with(
        StubBehavior::Reply("Versão melhorada: I want coffee.".to_string()),
        vec![],
    );

    let response = server
        .post("/writing/improve")
        .json(&json!({"text": "me wants coffee"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["improved_text"], "Versão melhorada: I want coffee.");
}

#[tokio::test]
async fn model_info_reports_first_entry() {
    let server = server_with(
        StubBehavior::Reply(String::new()),
        vec![ModelEntry {
            id: "phi-2".to_string(),
            parameters: Some("2.7B".to_string()),
            context_length: Some(2048),
        }],
    );

    let response = server.get("/model").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "phi-2");
    assert_eq!(body["type"], "LM Studio Model");
    assert_eq!(body["parameters"], "2.7B");
    assert_eq!(body["contextLength"], 2048);
}

#[tokio::test]
async fn model_info_empty_list_returns_default_record() {
    let server = server_with(StubBehavior::Reply(String::new()), vec![]);

    let response = server.get("/model").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "LM Studio Model");
    assert_eq!(body["type"], "Unknown");
    assert_eq!(body["contextLength"], 4096);
    assert!(body.get("parameters").is_none());
}

#[tokio::test]
async fn model_info_transport_error_is_500() {
    let server = server_with(StubBehavior::FailTransport, vec![]);

    let response = server.get("/model").await;

    response.assert_status_internal_server_error();
}
