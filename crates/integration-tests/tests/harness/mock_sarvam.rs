//! Mock Sarvam AI speech-to-text backend
//!
//! Accepts `POST /speech-to-text` multipart uploads and answers with a
//! canned status and body, recording what it received.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// What the mock saw in the last upload
#[derive(Debug, Clone, Default)]
pub struct ReceivedUpload {
    pub subscription_key: Option<String>,
    pub filename: Option<String>,
    pub file_len: usize,
    pub model: Option<String>,
    pub language_code: Option<String>,
}

pub struct MockSarvam {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockSarvamState>,
}

struct MockSarvamState {
    request_count: AtomicU32,
    status: StatusCode,
    body: String,
    delay: Duration,
    last_upload: Mutex<Option<ReceivedUpload>>,
}

impl MockSarvam {
    /// Answer every upload with a successful transcript
    pub async fn start() -> anyhow::Result<Self> {
        let body = serde_json::json!({
            "transcript": "hello world",
            "language_code": "en-IN",
            "model": "saarika:v2.5"
        });

        Self::start_with_response(StatusCode::OK, &body.to_string()).await
    }

    /// Answer every upload with `status` and `body`
    pub async fn start_with_response(status: StatusCode, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(status, body.to_owned(), Duration::ZERO).await
    }

    /// Answer successfully, but only after `delay`
    pub async fn start_slow(delay: Duration) -> anyhow::Result<Self> {
        Self::start_inner(StatusCode::OK, r#"{"transcript":"late"}"#.to_owned(), delay).await
    }

    async fn start_inner(status: StatusCode, body: String, delay: Duration) -> anyhow::Result<Self> {
        let state = Arc::new(MockSarvamState {
            request_count: AtomicU32::new(0),
            status,
            body,
            delay,
            last_upload: Mutex::new(None),
        });

        let app = Router::new()
            .route("/speech-to-text", routing::post(handle_speech_to_text))
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

    /// Base URL for configuring the mock as the transcription provider
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of uploads received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Details of the most recent upload
    pub fn last_upload(&self) -> Option<ReceivedUpload> {
        self.state.last_upload.lock().expect("lock").clone()
    }
}

impl Drop for MockSarvam {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_speech_to_text(
    State(state): State<Arc<MockSarvamState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let mut upload = ReceivedUpload {
        subscription_key: headers
            .get("api-subscription-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        ..ReceivedUpload::default()
    };

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name() {
            Some("file") => {
                upload.filename = field.file_name().map(str::to_owned);
                upload.file_len = field.bytes().await.map(|b| b.len()).unwrap_or_default();
            }
            Some("model") => upload.model = field.text().await.ok(),
            Some("language_code") => upload.language_code = field.text().await.ok(),
            _ => {}
        }
    }

    *state.last_upload.lock().expect("lock") = Some(upload);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (
        state.status,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
