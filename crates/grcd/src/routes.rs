//! API routes for grcd.

use crate::auth::bearer_token;
use crate::server::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use grc_common::{ErrorBody, HealthResponse, LookupError, LookupRequest, ToolRecommendation};
use std::sync::Arc;
use tracing::error;

type AppStateArc = Arc<AppState>;

type ApiError = (StatusCode, Json<ErrorBody>);

fn reject(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody::new(detail)))
}

pub fn lookup_routes() -> Router<AppStateArc> {
    Router::new().route("/api/ai-engine/v1/lookup", post(lookup))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/api/ai-engine/v1/health", get(health_check))
}

async fn lookup(
    State(state): State<AppStateArc>,
    headers: HeaderMap,
    Json(req): Json<LookupRequest>,
) -> Result<Json<Vec<ToolRecommendation>>, ApiError> {
    // Auth runs before the pipeline is ever invoked.
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let token = bearer_token(header_value)
        .map_err(|e| reject(StatusCode::UNAUTHORIZED, e.to_string()))?;
    let identity = state
        .verifier
        .verify(token)
        .map_err(|e| reject(StatusCode::UNAUTHORIZED, e.to_string()))?;

    match state.pipeline.handle(&req, &identity).await {
        Ok(tools) => Ok(Json(tools)),
        Err(e) => {
            let status = match &e {
                LookupError::InvalidRequest(_) | LookupError::UnrecognizedStandard(_) => {
                    StatusCode::BAD_REQUEST
                }
                LookupError::GenerationFailed(_) => {
                    error!("  Generation failed: {}", e);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            Err(reject(status, e.to_string()))
        }
    }
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "AI Engine is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
