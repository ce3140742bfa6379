// REST API tests for /api/llm/available, /api/llm/compare and /api/llm/health
//
// Every test talks to a real server bound to an ephemeral port.

#[path = "../common/mod.rs"]
mod common;

use common::{BrokenBackend, ScriptedBackend, default_registry, spawn_app, with_defaults};
use llm_compare_core::model::ModelRegistry;
use llm_compare_core::server::{CompareResponse, ErrorResponse};
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::time::{Duration, Instant};

async fn post_compare(base: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base}/api/llm/compare"))
        .json(&body)
        .send()
        .await
        .expect("request")
}

#[tokio::test]
async fn compare_returns_one_result_per_backend_in_order() {
    let base = spawn_app(default_registry()).await;

    let response = post_compare(
        &base,
        json!({"prompt": "What is the capital of France?", "llms": ["openai", "anthropic"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: CompareResponse = response.json().await.expect("json");
    assert_eq!(body.responses.len(), 2);
    assert_eq!(body.responses[0].backend_name, "openai");
    assert_eq!(body.responses[1].backend_name, "anthropic");

    let metadata = body.responses[1].metadata.as_ref().expect("metadata");
    assert_eq!(body.responses[1].text, "Paris.");
    assert_eq!(metadata.model, "claude-3-5-haiku-20241022");
    assert_eq!(metadata.finish_reason.as_deref(), Some("stop"));
    assert_eq!(metadata.prompt_tokens, 12);
    assert_eq!(metadata.generation_tokens, 8);
    assert_eq!(metadata.total_tokens, 20);
    assert_eq!(metadata.rate_limit.requests_remaining, Some(499));
}

#[tokio::test]
async fn compare_uses_frontend_field_names() {
    let base = spawn_app(default_registry()).await;

    let body: Value = post_compare(&base, json!({"prompt": "hi", "llms": ["ollama"]}))
        .await
        .json()
        .await
        .expect("json");

    let entry = &body["responses"][0];
    assert_eq!(entry["llm"], "ollama");
    assert_eq!(entry["response"], "The capital is Paris.");
    let metadata = &entry["metadata"];
    assert!(metadata["responseTime"].is_u64());
    assert!(metadata["timestamp"].is_string());
    assert_eq!(metadata["generationTokens"], 8);
    assert_eq!(metadata["rateLimit"]["requestsLimit"], 500);
    assert!(metadata["rateLimit"]["resetAfter"].is_null());
}

#[tokio::test]
async fn failing_backend_does_not_affect_others() {
    let registry = with_defaults(ModelRegistry::builder())
        .register("mistral", std::sync::Arc::new(BrokenBackend))
        .build()
        .expect("registry");
    let base = spawn_app(registry).await;

    let response = post_compare(&base, json!({"prompt": "hi", "llms": ["mistral", "openai"]})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("json");
    let failed = &body["responses"][0];
    assert_eq!(failed["llm"], "mistral");
    assert!(failed["response"].as_str().unwrap().starts_with("Error: "));
    assert!(failed["response"].as_str().unwrap().contains("overloaded"));
    assert!(failed.get("metadata").is_none());
    assert!(body["responses"][1]["metadata"].is_object());
}

#[tokio::test]
async fn empty_llm_list_returns_empty_responses() {
    let base = spawn_app(default_registry()).await;

    let response = post_compare(&base, json!({"prompt": "hi", "llms": []})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: CompareResponse = response.json().await.expect("json");
    assert!(body.responses.is_empty());
}

#[tokio::test]
async fn whitespace_only_prompt_is_dispatched() {
    let base = spawn_app(default_registry()).await;

    let response = post_compare(&base, json!({"prompt": "   ", "llms": ["openai"]})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: CompareResponse = response.json().await.expect("json");
    assert_eq!(body.responses.len(), 1);
    assert!(body.responses[0].is_success());
}

#[tokio::test]
async fn unknown_backend_is_404() {
    let base = spawn_app(default_registry()).await;

    let response = post_compare(
        &base,
        json!({"prompt": "hi", "llms": ["openai", "doesnotexist"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = response.json().await.expect("json");
    assert_eq!(body.status, 404);
    assert_eq!(body.error, "Model Not Found");
    assert!(body.message.contains("doesnotexist"));
    assert!(!body.message.contains("openai"));
}

#[tokio::test]
async fn slow_backends_are_called_concurrently() {
    let registry = ModelRegistry::builder()
        .register("a", ScriptedBackend::slow("a", "A", 400))
        .register("b", ScriptedBackend::slow("b", "B", 400))
        .register("c", ScriptedBackend::slow("c", "C", 400))
        .build()
        .expect("registry");
    let base = spawn_app(registry).await;

    let started = Instant::now();
    let response = post_compare(&base, json!({"prompt": "hi", "llms": ["a", "b", "c"]})).await;
    let elapsed = started.elapsed();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(elapsed < Duration::from_millis(1100), "took {elapsed:?}");
    let body: CompareResponse = response.json().await.expect("json");
    let names: Vec<_> = body.responses.iter().map(|r| r.backend_name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
    for result in &body.responses {
        assert!(result.metadata.as_ref().unwrap().response_time >= 400);
    }
}

#[tokio::test]
async fn available_lists_every_configured_backend() {
    let base = spawn_app(default_registry()).await;

    let response = reqwest::get(format!("{base}/api/llm/available"))
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::OK);

    let mut names: Vec<String> = response.json().await.expect("json");
    names.sort();
    assert_eq!(names, ["anthropic", "ollama", "openai"]);
}

#[tokio::test]
async fn health_returns_200() {
    let base = spawn_app(default_registry()).await;

    let response = reqwest::get(format!("{base}/api/llm/health"))
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let base = spawn_app(default_registry()).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base}/api/llm/compare"))
        .header("Origin", common::FRONTEND_ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("request");

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        common::FRONTEND_ORIGIN
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-max-age"], "3600");
}
