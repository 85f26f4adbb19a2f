#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod prompt;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{MethodRouter, post},
};

pub use error::{Result, TitlesError};
pub use request::ExtractTitleRequest;
pub use server::Server;
pub use types::{TitleSuggestionRequest, TitleSuggestionResult};

use server::TitlesServerBuilder;

/// Build the title suggestion server from configuration
pub fn build_server(config: &inkwell_config::Config) -> Arc<Server> {
    Arc::new(TitlesServerBuilder::new(config).build())
}

/// Create the endpoint router for title suggestions
///
/// Serves `/api/suggest-titles/` and its slash-less form; any method other
/// than POST gets a JSON 405.
pub fn endpoint_router() -> Router<Arc<Server>> {
    let endpoint: MethodRouter<Arc<Server>> = post(suggest_titles).fallback(method_not_allowed);

    Router::new()
        .route("/api/suggest-titles/", endpoint.clone())
        .route("/api/suggest-titles", endpoint)
}

/// Handle title suggestion requests
async fn suggest_titles(
    State(server): State<Arc<Server>>,
    ExtractTitleRequest(request): ExtractTitleRequest,
) -> Result<Json<TitleSuggestionResult>> {
    tracing::debug!("Title suggestion handler called ({} bytes of content)", request.content.len());

    let result = server.suggest(request).await?;

    tracing::debug!("Title suggestion complete");

    Ok(Json(result))
}

async fn method_not_allowed() -> TitlesError {
    TitlesError::MethodNotAllowed
}
