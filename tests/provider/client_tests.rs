// Provider client tests against fake upstream APIs served by axum

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use llm_compare_core::config::BackendConfig;
use llm_compare_core::model::clients::{AnthropicClient, OllamaClient, OpenAIClient};
use llm_compare_core::model::factory::ProviderFactory;
use llm_compare_core::model::{ModelClient, ModelError, ModelRequest};
use serde_json::{Value, json};
use serial_test::serial;
use tokio::net::TcpListener;

const KEY_VAR: &str = "LLM_COMPARE_TEST_PROVIDER_KEY";
const KEY_VALUE: &str = "sk-test-123";

async fn spawn_upstream(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .expect("upstream");
    });
    format!("http://{addr}")
}

fn set_key() {
    unsafe {
        std::env::set_var(KEY_VAR, KEY_VALUE);
    }
}

fn request() -> ModelRequest {
    ModelRequest::new("Be brief.", "What is the capital of France?")
}

async fn openai_handler(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {KEY_VALUE}"));
    if !authorized {
        return (StatusCode::UNAUTHORIZED, HeaderMap::new(), Json(json!({"error": "bad key"})));
    }
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");

    let mut reply_headers = HeaderMap::new();
    reply_headers.insert("x-ratelimit-limit-requests", "5000".parse().unwrap());
    reply_headers.insert("x-ratelimit-remaining-requests", "4999".parse().unwrap());
    reply_headers.insert("x-ratelimit-limit-tokens", "160000".parse().unwrap());
    reply_headers.insert("x-ratelimit-remaining-tokens", "159980".parse().unwrap());
    reply_headers.insert("x-ratelimit-reset-requests", "12ms".parse().unwrap());
    (
        StatusCode::OK,
        reply_headers,
        Json(json!({
            "model": "gpt-4o-mini-2024-07-18",
            "choices": [{"message": {"role": "assistant", "content": "Paris."}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 25, "completion_tokens": 2, "total_tokens": 27}
        })),
    )
}

#[tokio::test]
#[serial]
async fn openai_client_reads_usage_and_rate_limits() {
    set_key();
    let base = spawn_upstream(Router::new().route("/v1/chat/completions", post(openai_handler))).await;
    let config = BackendConfig::new("openai", "openai", base, "gpt-4o-mini").with_api_key(KEY_VAR);

    let response = OpenAIClient::from_config(&config)
        .chat(request())
        .await
        .expect("chat");

    assert_eq!(response.text, "Paris.");
    assert_eq!(response.model, "gpt-4o-mini-2024-07-18");
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    assert_eq!(response.usage.total_tokens, 27);
    assert_eq!(response.rate_limit.requests_limit, Some(5000));
    assert_eq!(response.rate_limit.tokens_remaining, Some(159980));
    assert_eq!(response.rate_limit.reset_after, Some(1));
}

#[tokio::test]
async fn openai_client_without_key_fails_per_call() {
    let config = BackendConfig::new("openai", "openai", "http://127.0.0.1:9", "gpt-4o-mini")
        .with_api_key("LLM_COMPARE_TEST_NEVER_SET");

    let error = OpenAIClient::from_config(&config)
        .chat(request())
        .await
        .unwrap_err();
    assert!(matches!(error, ModelError::MissingApiKey { .. }));
}

#[tokio::test]
#[serial]
async fn anthropic_client_sends_system_separately() {
    set_key();
    let app = Router::new().route(
        "/v1/messages",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            assert_eq!(headers["x-api-key"], KEY_VALUE);
            assert_eq!(headers["anthropic-version"], "2023-06-01");
            assert_eq!(body["system"], "Be brief.");
            assert_eq!(body["messages"].as_array().unwrap().len(), 1);
            assert_eq!(body["max_tokens"], 1024);

            let mut reply_headers = HeaderMap::new();
            reply_headers.insert("anthropic-ratelimit-requests-limit", "50".parse().unwrap());
            reply_headers.insert("anthropic-ratelimit-requests-remaining", "49".parse().unwrap());
            (
                reply_headers,
                Json(json!({
                    "model": "claude-3-5-haiku-20241022",
                    "content": [{"type": "text", "text": "Paris."}],
                    "stop_reason": "end_turn",
                    "usage": {"input_tokens": 20, "output_tokens": 4}
                })),
            )
        }),
    );
    let base = spawn_upstream(app).await;
    let config = BackendConfig::new("anthropic", "anthropic", base, "claude-3-5-haiku-latest")
        .with_api_key(KEY_VAR);

    let response = AnthropicClient::from_config(&config)
        .chat(request())
        .await
        .expect("chat");

    assert_eq!(response.text, "Paris.");
    assert_eq!(response.finish_reason.as_deref(), Some("end_turn"));
    assert_eq!(response.usage.prompt_tokens, 20);
    assert_eq!(response.usage.completion_tokens, 4);
    assert_eq!(response.usage.total_tokens, 24);
    assert_eq!(response.rate_limit.requests_remaining, Some(49));
    assert_eq!(response.rate_limit.reset_after, None);
}

#[tokio::test]
async fn ollama_client_needs_no_key() {
    let app = Router::new().route(
        "/api/chat",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["stream"], false);
            Json(json!({
                "model": "llama3.2",
                "message": {"role": "assistant", "content": "Paris is the capital."},
                "done_reason": "stop",
                "prompt_eval_count": 30,
                "eval_count": 6
            }))
        }),
    );
    let base = spawn_upstream(app).await;
    let config = BackendConfig::new("ollama", "ollama", base, "llama3.2");

    let response = OllamaClient::from_config(&config)
        .chat(request())
        .await
        .expect("chat");

    assert_eq!(response.text, "Paris is the capital.");
    assert_eq!(response.usage.total_tokens, 36);
    assert!(response.rate_limit.is_empty());
}

#[tokio::test]
async fn upstream_error_status_surfaces_body() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model is loading") }),
    );
    let base = spawn_upstream(app).await;
    let config = BackendConfig::new("ollama", "ollama", base, "llama3.2");

    let error = ProviderFactory::create(&config)
        .chat(request())
        .await
        .unwrap_err();

    match error {
        ModelError::Status { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "model is loading");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn configured_timeout_bounds_a_slow_upstream() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            Json(json!({"message": {"content": "too late"}}))
        }),
    );
    let base = spawn_upstream(app).await;
    let mut config = BackendConfig::new("ollama", "ollama", base, "llama3.2");
    config.timeout_secs = 1;

    let started = std::time::Instant::now();
    let error = OllamaClient::from_config(&config)
        .chat(request())
        .await
        .unwrap_err();

    assert!(matches!(error, ModelError::Network { .. }), "got {error}");
    assert!(started.elapsed() < std::time::Duration::from_secs(4));
}
