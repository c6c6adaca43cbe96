//! Component catalog types
//!
//! Descriptors are purely descriptive capability records; the pipeline never
//! executes a component, it only selects and configures them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::GeneratorError;

/// Configuration class of a component.
///
/// Drives the auto-configurator and error-handler injection through an
/// explicit tagged variant instead of id-substring checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Large-language-model call; receives adaptive LLM parameters
    Llm,
    /// External service integration; receives timeout/retry/rate-limit defaults
    Integration,
    /// Classification/routing over inputs; receives threshold defaults
    Classifier,
    /// Workflow control (routers, schedulers, loop controllers)
    WorkflowControl,
    /// Anything else; falls back to the catalog default configuration
    #[default]
    Generic,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComponentKind::Llm => "llm",
            ComponentKind::Integration => "integration",
            ComponentKind::Classifier => "classifier",
            ComponentKind::WorkflowControl => "workflow_control",
            ComponentKind::Generic => "generic",
        };
        write!(f, "{}", s)
    }
}

/// Catalog category a component is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    AiProcessing,
    Integrations,
    DataTools,
    WorkflowControl,
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComponentCategory::AiProcessing => "ai_processing",
            ComponentCategory::Integrations => "integrations",
            ComponentCategory::DataTools => "data_tools",
            ComponentCategory::WorkflowControl => "workflow_control",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ComponentCategory {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai_processing" => Ok(ComponentCategory::AiProcessing),
            "integrations" => Ok(ComponentCategory::Integrations),
            "data_tools" => Ok(ComponentCategory::DataTools),
            "workflow_control" => Ok(ComponentCategory::WorkflowControl),
            other => Err(GeneratorError::Validation(format!(
                "Unknown component category: {}",
                other
            ))),
        }
    }
}

/// A descriptive component record owned by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Stable catalog identifier
    pub component_id: String,
    /// Human-readable name
    pub name: String,
    /// Configuration class
    pub kind: ComponentKind,
    /// Catalog category
    pub category: ComponentCategory,
    /// Short description
    pub description: String,
    /// Capability labels
    pub capabilities: Vec<String>,
    /// Default configuration used when no smarter configuration applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_config: Option<Value>,
}

/// Aggregate counts over the catalog, surfaced through the catalog resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_components: usize,
    pub by_category: Vec<(String, usize)>,
    pub by_kind: Vec<(String, usize)>,
    pub total_capabilities: usize,
}
