//! Integration tests for the generation router
//!
//! The model is stubbed; the tests pin the request/response contract and
//! the token bookkeeping.

use std::sync::{Arc, Mutex};

use ai_generation::{GenerationError, TextGeneration};
use axum_test::TestServer;
use domain::{GenerationParams, GenerationResult, TokenUsage};
use presentation_http::{GenerationState, generation_router};
use serde_json::json;

struct StubGenerator {
    fail: bool,
    seen_params: Mutex<Option<GenerationParams>>,
}

impl TextGeneration for StubGenerator {
    fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerationResult, GenerationError> {
        if self.fail {
            return Err(GenerationError::Generation("llama decode failed".to_string()));
        }
        *self.seen_params.lock().unwrap() = Some(params.clone());
        Ok(GenerationResult {
            text: format!("continuation of '{prompt}'"),
            usage: TokenUsage::new(5, 9),
        })
    }
}

fn server_with(stub: Arc<StubGenerator>) -> TestServer {
    let state = GenerationState { generator: stub };
    TestServer::new(generation_router(state)).unwrap()
}

#[tokio::test]
async fn health_is_fixed_healthy() {
    let server = server_with(Arc::new(StubGenerator {
        fail: false,
        seen_params: Mutex::new(None),
    }));

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn generate_returns_text_and_usage() {
    let server = server_with(Arc::new(StubGenerator {
        fail: false,
        seen_params: Mutex::new(None),
    }));

    let response = server
        .post("/generate")
        .json(&json!({"prompt": "Once upon a time"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["text"], "continuation of 'Once upon a time'");
    assert_eq!(body["usage"]["promptTokens"], 5);
    assert_eq!(body["usage"]["completionTokens"], 9);
    assert_eq!(body["usage"]["totalTokens"], 14);
}

#[tokio::test]
async fn generate_applies_default_knobs() {
    let stub = Arc::new(StubGenerator {
        fail: false,
        seen_params: Mutex::new(None),
    });
    let server = server_with(Arc::clone(&stub));

    server
        .post("/generate")
        .json(&json!({"prompt": "p"}))
        .await
        .assert_status_ok();

    let params = stub.seen_params.lock().unwrap().clone().unwrap();
    assert!((params.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(params.max_tokens, 1000);
    assert!((params.top_p - 0.95).abs() < f32::EPSILON);
    assert!((params.repetition_penalty - 1.1).abs() < f32::EPSILON);
}

#[tokio::test]
async fn generate_honors_explicit_knobs() {
    let stub = Arc::new(StubGenerator {
        fail: false,
        seen_params: Mutex::new(None),
    });
    let server = server_with(Arc::clone(&stub));

    server
        .post("/generate")
        .json(&json!({"prompt": "p", "maxTokens": 32, "temperature": 0.1}))
        .await
        .assert_status_ok();

    let params = stub.seen_params.lock().unwrap().clone().unwrap();
    assert_eq!(params.max_tokens, 32);
    assert!((params.temperature - 0.1).abs() < f32::EPSILON);
}

#[tokio::test]
async fn generate_failure_is_500_with_message() {
    let server = server_with(Arc::new(StubGenerator {
        fail: true,
        seen_params: Mutex::new(None),
    }));

    let response = server
        .post("/generate")
        .json(&json!({"prompt": "p"}))
        .await;

    response.assert_status_internal_server_error();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "internal_error");
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("llama decode failed")
    );
}

#[tokio::test]
async fn generate_without_prompt_is_client_error() {
    let server = server_with(Arc::new(StubGenerator {
        fail: false,
        seen_params: Mutex::new(None),
    }));

    let response = server.post("/generate").json(&json!({})).await;
    assert!(response.status_code().is_client_error());
}
