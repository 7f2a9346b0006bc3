// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the question API.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    routing::{get, post},
};
use furrow_classifier::QuestionClassifier;
use furrow_config::model::ServerConfig;
use furrow_core::FurrowError;
use furrow_router::QuestionRouter;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// State for the health and metrics endpoints.
#[derive(Clone)]
pub struct HealthState {
    /// Process start time for uptime calculation.
    pub start_time: Instant,
    /// Optional Prometheus metrics render function.
    pub prometheus_render: Option<Arc<dyn Fn() -> String + Send + Sync>>,
}

impl HealthState {
    pub fn new(prometheus_render: Option<Arc<dyn Fn() -> String + Send + Sync>>) -> Self {
        Self {
            start_time: Instant::now(),
            prometheus_render,
        }
    }
}

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub classifier: Arc<QuestionClassifier>,
    pub router: Arc<QuestionRouter>,
    pub health: HealthState,
}

/// Build the application router.
///
/// - POST /api/v1/questions/classify
/// - GET  /api/v1/questions/types
/// - POST /api/v1/questions/classify-only
/// - POST /api/v1/questions/route-only
/// - GET  /health
/// - GET  /metrics
pub fn build_router(state: GatewayState) -> Router {
    let api_routes = Router::new()
        .route("/classify", post(handlers::post_classify))
        .route("/types", get(handlers::get_types))
        .route("/classify-only", post(handlers::post_classify_only))
        .route("/route-only", post(handlers::post_route_only));

    Router::new()
        .nest("/api/v1/questions", api_routes)
        .route("/health", get(handlers::get_health))
        .route("/metrics", get(handlers::get_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API until `shutdown` is cancelled.
pub async fn start_server(
    config: &ServerConfig,
    state: GatewayState,
    shutdown: CancellationToken,
) -> Result<(), FurrowError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FurrowError::Server {
            message: format!("failed to bind to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("question router listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| FurrowError::Server {
            message: format!("server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("question router stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use furrow_config::model::{ClassifierConfig, NlpConfig};

    #[test]
    fn gateway_state_is_clone() {
        let state = GatewayState {
            classifier: Arc::new(QuestionClassifier::new(
                &ClassifierConfig::default(),
                &NlpConfig::default(),
            )),
            router: Arc::new(QuestionRouter::default()),
            health: HealthState::new(None),
        };
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.classifier, &cloned.classifier));
    }

    #[tokio::test]
    async fn bind_failure_is_a_server_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
        };
        let state = GatewayState {
            classifier: Arc::new(QuestionClassifier::new(
                &ClassifierConfig::default(),
                &NlpConfig::default(),
            )),
            router: Arc::new(QuestionRouter::default()),
            health: HealthState::new(None),
        };
        let err = start_server(&config, state, CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, FurrowError::Server { .. }));
    }
}
