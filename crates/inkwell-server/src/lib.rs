mod pages;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use inkwell_config::{Config, DEFAULT_LISTEN_ADDRESS};
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the transcription service cannot be initialized
    /// or a configured index page cannot be read
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config.server.listen_address.unwrap_or(DEFAULT_LISTEN_ADDRESS);

        let transcribe_state = transcribe::build_server(&config)?;
        let titles_state = titles::build_server(&config);
        let index_page = pages::load_index(config.server.index_page.as_deref()).await?;

        let mut app = Router::new().route("/", get(move || pages::index(index_page.clone())));

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(pages::health));
        }

        // Transcription routes
        app = app.merge(transcribe::endpoint_router().with_state(transcribe_state));

        // Title suggestion routes
        app = app.merge(titles::endpoint_router().with_state(titles_state));

        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
