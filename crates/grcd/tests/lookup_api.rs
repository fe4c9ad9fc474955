//! Router-level tests for the lookup API, driven with fakes instead of a live
//! token issuer or generation provider.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use grcd::auth::{Claims, JwtVerifier};
use grcd::generator::{FakeGenerator, GeneratorError};
use grcd::server::{app, AppState};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;
use tower::ServiceExt;

const SECRET: &str = "integration-test-secret";

const GENERATED: &str = "### Tool: Wazuh\nSteps:\n1. Install the manager.\n2. Enroll agents.\n---\nEnd of response.";

fn mint_token() -> String {
    let claims = Claims {
        sub: "test_user".to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

fn test_app(generator: Arc<FakeGenerator>) -> Router {
    let state = Arc::new(AppState::new(
        generator,
        Arc::new(JwtVerifier::new(SECRET)),
    ));
    app(state)
}

async fn post_lookup(
    app: Router,
    auth: Option<String>,
    task: &str,
    compliance: &str,
) -> (StatusCode, serde_json::Value) {
    let body = serde_json::json!({ "task": task, "compliance": compliance });
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/ai-engine/v1/lookup")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_is_unauthenticated() {
    let app = test_app(Arc::new(FakeGenerator::returning(GENERATED)));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/ai-engine/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "AI Engine is running");
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = test_app(Arc::new(FakeGenerator::returning(GENERATED)));
    let (status, json) = post_lookup(
        app,
        None,
        "All servers should have an AntiMalware tool installed",
        "iso27001",
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["detail"], "Not authenticated");
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let app = test_app(Arc::new(FakeGenerator::returning(GENERATED)));
    let (status, json) = post_lookup(
        app,
        Some("Bearer not.a.token".to_string()),
        "All servers should have an AntiMalware tool installed",
        "iso27001",
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["detail"], "Invalid or expired token");
}

#[tokio::test]
async fn test_knowledge_hit_returns_stored_records() {
    let generator = Arc::new(FakeGenerator::returning(GENERATED));
    let app = test_app(generator.clone());
    let (status, json) = post_lookup(
        app,
        Some(format!("Bearer {}", mint_token())),
        "All servers should have an AntiMalware tool installed",
        "iso27001",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let tools = json.as_array().unwrap();
    assert_eq!(tools.len(), 5);
    assert_eq!(tools[0]["tool"], "Microsoft Defender");
    assert!(tools[0]["Steps"].as_str().unwrap().contains("real-time protection"));
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn test_miss_falls_through_to_generation() {
    let generator = Arc::new(FakeGenerator::returning(GENERATED));
    let app = test_app(generator.clone());
    let (status, json) = post_lookup(
        app,
        Some(format!("Bearer {}", mint_token())),
        "Ensure all servers have antivirus installed and monitored continuously",
        "iso27001",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let tools = json.as_array().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["tool"], "Wazuh");
    assert_eq!(generator.call_count(), 1);
}

#[tokio::test]
async fn test_short_task_is_rejected_with_length_rule() {
    let app = test_app(Arc::new(FakeGenerator::returning(GENERATED)));
    let (status, json) = post_lookup(
        app,
        Some(format!("Bearer {}", mint_token())),
        "short text",
        "iso27001",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["detail"],
        "Compliance Task must be longer than 20 characters."
    );
}

#[tokio::test]
async fn test_unknown_standard_is_rejected_by_name() {
    let app = test_app(Arc::new(FakeGenerator::returning(GENERATED)));
    let (status, json) = post_lookup(
        app,
        Some(format!("Bearer {}", mint_token())),
        "Ensure all servers have antivirus installed and monitored continuously",
        "hipaa2",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Compliance 'hipaa2' not recognized or supported.");
}

#[tokio::test]
async fn test_generation_failure_is_a_server_error() {
    let generator = Arc::new(FakeGenerator::failing(GeneratorError::Status(503)));
    let app = test_app(generator);
    let (status, json) = post_lookup(
        app,
        Some(format!("Bearer {}", mint_token())),
        "Ensure all servers have antivirus installed and monitored continuously",
        "gdpr",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["detail"]
        .as_str()
        .unwrap()
        .starts_with("Error querying generation API"));
}
