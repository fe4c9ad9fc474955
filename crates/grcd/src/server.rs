//! HTTP server for grcd.

use crate::auth::{JwtVerifier, TokenVerifier};
use crate::generator::{Generator, GroqGenerator};
use crate::pipeline::RecommendationPipeline;
use crate::routes;
use anyhow::Result;
use axum::Router;
use grc_common::EngineConfig;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Application state shared across handlers. Everything in here is immutable
/// after startup, so concurrent requests share it without locking.
pub struct AppState {
    pub pipeline: RecommendationPipeline,
    pub verifier: Arc<dyn TokenVerifier>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(generator: Arc<dyn Generator>, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            pipeline: RecommendationPipeline::new(generator),
            verifier,
            start_time: Instant::now(),
        }
    }
}

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::lookup_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until the process is stopped.
pub async fn run(config: EngineConfig) -> Result<()> {
    if config.secret_key.is_empty() {
        warn!("SECRET_KEY is empty; all bearer tokens will be rejected");
    }
    if config.generator.api_key.is_none() {
        warn!("GROQ_API_KEY not set; knowledge-base misses will fail");
    }

    let generator = Arc::new(GroqGenerator::new(config.generator.clone())?);
    let verifier = Arc::new(JwtVerifier::new(&config.secret_key));
    let state = Arc::new(AppState::new(generator, verifier));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("  Listening on http://{}", config.bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
