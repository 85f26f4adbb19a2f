//! Mock OpenAI-compatible completion backend for integration tests
//!
//! Serves `POST /v1/chat/completions` with a canned status and body

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Mock completion backend that returns predictable responses
pub struct MockLlm {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockLlmState>,
}

struct MockLlmState {
    completion_count: AtomicU32,
    status: StatusCode,
    content_type: &'static str,
    body: String,
    last_request: Mutex<Option<Value>>,
    last_authorization: Mutex<Option<String>>,
}

impl MockLlm {
    /// Start a mock whose single choice carries `content`
    pub async fn start_with_content(content: &str) -> anyhow::Result<Self> {
        Self::start_with_json(StatusCode::OK, &completion_body(content)).await
    }

    /// Start a mock answering with a JSON body
    pub async fn start_with_json(status: StatusCode, body: &Value) -> anyhow::Result<Self> {
        Self::start_inner(status, "application/json", body.to_string()).await
    }

    /// Start a mock answering with a plain text body
    pub async fn start_with_text(status: StatusCode, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(status, "text/plain", body.to_owned()).await
    }

    async fn start_inner(status: StatusCode, content_type: &'static str, body: String) -> anyhow::Result<Self> {
        let state = Arc::new(MockLlmState {
            completion_count: AtomicU32::new(0),
            status,
            content_type,
            body,
            last_request: Mutex::new(None),
            last_authorization: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    ///
    /// Includes `/v1` since the provider appends `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent completion request
    pub fn last_request(&self) -> Option<Value> {
        self.state.last_request.lock().expect("lock").clone()
    }

    /// `Authorization` header of the most recent completion request
    pub fn last_authorization(&self) -> Option<String> {
        self.state.last_authorization.lock().expect("lock").clone()
    }
}

impl Drop for MockLlm {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Chat completion body with a single assistant choice
pub fn completion_body(content: &str) -> Value {
    serde_json::json!({
        "id": "gen-mock-1",
        "object": "chat.completion",
        "model": "mistralai/mistral-7b-instruct:free",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 90, "completion_tokens": 24, "total_tokens": 114}
    })
}

async fn handle_chat_completions(
    State(state): State<Arc<MockLlmState>>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> impl IntoResponse {
    state.completion_count.fetch_add(1, Ordering::Relaxed);

    *state.last_authorization.lock().expect("lock") = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    *state.last_request.lock().expect("lock") = Some(request);

    (state.status, [(header::CONTENT_TYPE, state.content_type)], state.body.clone())
}
