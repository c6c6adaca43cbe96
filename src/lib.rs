//! # AgentForge - AI Agent Specification Generator
//!
//! AgentForge turns free-text descriptions into declarative AI agent
//! specifications: it detects the business domain and complexity, infers
//! implicit requirements, selects and configures components, assembles a
//! sequential workflow with error handlers, and scores the result. It is an
//! authoring tool - no component is ever executed and no LLM API is called.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use agentforge::catalog::StaticCatalog;
//! use agentforge::learning::SmartContext;
//! use agentforge::pipeline::{AgentGenerator, CreateAgentRequest};
//! use agentforge::store::InMemoryAgentStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let generator = AgentGenerator::new(
//!         Arc::new(StaticCatalog::new()),
//!         Arc::new(InMemoryAgentStore::new()),
//!         Arc::new(SmartContext::new()),
//!         50,
//!     );
//!     let result = generator
//!         .create_agent(CreateAgentRequest {
//!             name: "Mailbot".to_string(),
//!             description: "śledzenie poczty i wysyłanie maili".to_string(),
//!             domain: Default::default(),
//!             complexity: Default::default(),
//!         })
//!         .await?;
//!     println!("{} components", result.agent.components.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **domain**: data model, error taxonomy and collaborator ports
//! - **analysis**: pattern detection, classification, requirement synthesis
//! - **pipeline**: component selection, auto-configuration, workflow assembly
//! - **catalog / store / learning**: injected collaborators
//! - **server**: MCP protocol surface and health endpoints (thin glue)

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod learning;
pub mod pipeline;
pub mod server;
pub mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};

use crate::server::{ForgeServer, HealthHandler};

/// Creates the Axum application router: health endpoints plus the MCP
/// protocol endpoint at `/mcp` (rmcp streamable HTTP transport).
pub fn create_app(forge_server: ForgeServer, health_handler: Arc<HealthHandler>) -> Router {
    let session_manager = Arc::new(LocalSessionManager::default());
    let config = StreamableHttpServerConfig::default();
    let mcp_service =
        StreamableHttpService::new(move || Ok(forge_server.clone()), session_manager, config);

    let router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }))
        .nest_service("/mcp", mcp_service);

    router.layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
