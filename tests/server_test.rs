//! Router-level tests over the assembled application

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::util::ServiceExt;

use agentforge::catalog::StaticCatalog;
use agentforge::learning::SmartContext;
use agentforge::pipeline::AgentGenerator;
use agentforge::server::{ForgeServer, HealthHandler};
use agentforge::store::InMemoryAgentStore;

fn app() -> axum::Router {
    let catalog = Arc::new(StaticCatalog::new());
    let catalog_size = catalog.len();
    let generator = Arc::new(AgentGenerator::new(
        catalog,
        Arc::new(InMemoryAgentStore::new()),
        Arc::new(SmartContext::new()),
        50,
    ));
    agentforge::create_app(
        ForgeServer::new(generator),
        Arc::new(HealthHandler::new(catalog_size)),
    )
}

#[tokio::test]
async fn health_reports_catalog_size() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert!(json["catalog_components"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn readiness_is_ok_with_populated_catalog() {
    let request = Request::builder()
        .uri("/health/ready")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn liveness_always_responds() {
    let request = Request::builder()
        .uri("/health/live")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "alive");
}
