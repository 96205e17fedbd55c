//! Application startup and lifecycle management.

use crate::config::ContactConfig;
use crate::handlers;
use crate::services::{MongoStore, SubmissionStore};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SubmissionStore>,
    pub write_timeout: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn SubmissionStore>, write_timeout: Duration) -> Self {
        Self {
            store,
            write_timeout,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .route("/submit-form", post(handlers::submit_form))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Connect to MongoDB and bind the listener.
    ///
    /// Any error here is fatal: the caller must not serve requests.
    pub async fn build(config: ContactConfig) -> Result<Self, AppError> {
        let store = MongoStore::connect(
            &config.mongodb.uri,
            &config.mongodb.database,
            config.write_timeout,
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            e
        })?;

        store.initialize_collections().await.map_err(|e| {
            tracing::error!("Failed to initialize collections: {}", e);
            e
        })?;

        Self::build_with_store(config, Arc::new(store)).await
    }

    /// Bind the listener around an already connected store.
    pub async fn build_with_store(
        config: ContactConfig,
        store: Arc<dyn SubmissionStore>,
    ) -> Result<Self, AppError> {
        let state = AppState::new(store, config.write_timeout);
        let router = build_router(state);

        // Port 0 picks a free port, which the tests rely on.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Server is running on http://localhost:{}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests.
    pub async fn run_with_graceful_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}
