//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (CORS, trace, request ID, timeout, body limit)
//! - Own the shared state: FAQ store, upload directory, translator
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    routing::{get, post},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::FaqConfig;
use crate::http::request::{request_id, MakeRequestUuid, X_REQUEST_ID};
use crate::http::{faqs, translate, uploads};
use crate::store::FaqStore;
use crate::translation::{GoogleTranslator, TranslateError, Translator};
use crate::uploads::UploadDir;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: FaqStore,
    pub uploads: Arc<UploadDir>,
    pub translator: Arc<dyn Translator>,
}

/// Errors that prevent the server from starting.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("cannot prepare upload directory '{path}': {source}")]
    UploadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Translation(#[from] TranslateError),
}

/// HTTP server for the FAQ service.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a server using the HTTP translation provider from `config`.
    pub fn new(config: FaqConfig) -> Result<Self, ServerError> {
        let translator = Arc::new(GoogleTranslator::new(&config.translation)?);
        Self::with_translator(config, translator)
    }

    /// Create a server with a caller-supplied translator.
    pub fn with_translator(
        config: FaqConfig,
        translator: Arc<dyn Translator>,
    ) -> Result<Self, ServerError> {
        let uploads = UploadDir::create(&config.uploads.directory).map_err(|source| {
            ServerError::UploadDir {
                path: config.uploads.directory.clone(),
                source,
            }
        })?;

        let state = AppState {
            store: FaqStore::new(),
            uploads: Arc::new(uploads),
            translator,
        };

        let router = Self::build_router(&config, state.clone());
        Ok(Self { router, state })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &FaqConfig, state: AppState) -> Router {
        Router::new()
            .route("/faqs", get(faqs::list_faqs).post(faqs::create_faq))
            .route(
                "/faqs/{id}",
                get(faqs::get_faq)
                    .put(faqs::update_faq)
                    .delete(faqs::delete_faq),
            )
            .route("/uploads/{filename}", get(uploads::serve_upload))
            .route("/translate", post(translate::translate))
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(CorsLayer::permissive())
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id(request),
                    )
                }),
            )
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// The fully layered router, e.g. for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared state backing the handlers.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server, accepting connections on the given listener until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
