use agentforge::catalog::StaticCatalog;
use agentforge::cli::Cli;
use agentforge::config::Settings;
use agentforge::learning::SmartContext;
use agentforge::pipeline::AgentGenerator;
use agentforge::server::{ForgeServer, HealthHandler};
use agentforge::store::InMemoryAgentStore;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting AgentForge MCP server on {}:{}", host, port);

    // Wire the collaborators into the pipeline
    let catalog = Arc::new(StaticCatalog::new());
    let catalog_size = catalog.len();
    let store = Arc::new(InMemoryAgentStore::new());
    let memory = Arc::new(SmartContext::new());
    let generator = Arc::new(AgentGenerator::new(
        catalog,
        store,
        memory,
        settings.generation.max_components,
    ));

    info!("Component catalog loaded with {} components", catalog_size);

    let forge_server = ForgeServer::new(generator);
    let health_handler = Arc::new(HealthHandler::new(catalog_size));
    let app = agentforge::create_app(forge_server, health_handler);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
