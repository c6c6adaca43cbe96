use clap::Parser;
use std::path::PathBuf;

/// AI agent specification generator - MCP server
#[derive(Parser, Debug, Clone)]
#[command(name = "agentforge", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "AGENTFORGE_CONFIG", default_value = "agentforge.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "AGENTFORGE_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "AGENTFORGE_PORT")]
    pub port: Option<u16>,
}
