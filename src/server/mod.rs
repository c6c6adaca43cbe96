//! Delivery adapters: MCP protocol surface and health endpoints

pub mod health;
pub mod mcp;

pub use health::HealthHandler;
pub use mcp::ForgeServer;
