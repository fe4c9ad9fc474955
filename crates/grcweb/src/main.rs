//! GRC lookup frontend - renders the form and relays submissions to grcd.

mod client;
mod render;

use anyhow::Result;
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Router,
};
use client::{EngineClient, RelayOutcome};
use grc_common::WebConfig;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

struct WebState {
    client: EngineClient,
}

#[derive(Debug, Deserialize)]
struct Submission {
    #[serde(default)]
    task: String,
    #[serde(default)]
    compliance: String,
    #[serde(default)]
    jwt_token: String,
}

async fn index() -> Html<String> {
    Html(render::page(&[], &[]))
}

async fn submit(
    State(state): State<Arc<WebState>>,
    Form(submission): Form<Submission>,
) -> Html<String> {
    if submission.task.is_empty()
        || submission.compliance.is_empty()
        || submission.jwt_token.is_empty()
    {
        return Html(render::page(
            &["Please fill in all fields including JWT token.".to_string()],
            &[],
        ));
    }

    match state
        .client
        .lookup(&submission.task, &submission.compliance, &submission.jwt_token)
        .await
    {
        RelayOutcome::Tools(tools) => Html(render::page(&[], &tools)),
        RelayOutcome::Errors(messages) => Html(render::page(&messages, &[])),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = WebConfig::load();
    info!("GRC frontend forwarding to {}", config.api_url);

    let state = Arc::new(WebState {
        client: EngineClient::new(config.api_url.clone()),
    });

    let app = Router::new()
        .route("/", get(index).post(submit))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("  Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
