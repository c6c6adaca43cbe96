//! Application configuration
//!
//! Settings are loaded from an optional TOML file; CLI flags (which also read
//! `AGENTFORGE_*` environment variables) win over file values.

use std::path::Path;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub generation: GenerationSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Knobs for the generation pipeline
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationSettings {
    /// Domain assumed when the caller does not pass one
    #[serde(default = "default_domain")]
    pub default_domain: String,
    /// Complexity assumed when the caller does not pass one
    #[serde(default = "default_complexity")]
    pub default_complexity: String,
    /// Hard cap on components per agent
    #[serde(default = "default_max_components")]
    pub max_components: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            default_domain: default_domain(),
            default_complexity: default_complexity(),
            max_components: default_max_components(),
        }
    }
}

fn default_domain() -> String {
    "general".to_string()
}

fn default_complexity() -> String {
    "medium".to_string()
}

fn default_max_components() -> usize {
    50
}

impl Settings {
    /// Loads settings from the given config file (optional) and environment.
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(config_path.to_path_buf()).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Loads settings and applies CLI overrides.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let mut settings = Self::load(&cli.config)?;
        if let Some(host) = &cli.host {
            settings.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            settings.server.port = port;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_apply_without_config_file() {
        let settings = Settings::load(&PathBuf::from("does-not-exist.toml")).unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.generation.max_components, 50);
        assert_eq!(settings.generation.default_domain, "general");
        assert_eq!(settings.generation.default_complexity, "medium");
    }
}
