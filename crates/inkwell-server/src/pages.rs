use std::path::Path;

use anyhow::Context as _;
use axum::{
    body::Bytes,
    http::StatusCode,
    response::{Html, IntoResponse},
};

/// Landing page shipped with the binary
const BUNDLED_INDEX: &str = include_str!("../static/index.html");

/// Load the landing page, preferring a configured file over the bundled one
///
/// The file is read once; edits require a restart.
pub(crate) async fn load_index(path: Option<&Path>) -> anyhow::Result<Bytes> {
    let Some(path) = path else {
        return Ok(Bytes::from_static(BUNDLED_INDEX.as_bytes()));
    };

    let page = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read index page {}", path.display()))?;

    tracing::debug!(path = %path.display(), "serving custom index page");

    Ok(Bytes::from(page))
}

pub(crate) async fn index(page: Bytes) -> Html<Bytes> {
    Html(page)
}

pub(crate) async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
