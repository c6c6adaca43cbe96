//! Agent aggregate and workflow types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::analysis::{
    ComplexityLevel, ComponentSuggestion, Domain, ImplicitRequirement, WorkflowPattern,
};
use super::component::ComponentKind;
use super::error::GeneratorError;

/// Lifecycle status of an agent record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    #[default]
    Draft,
    Active,
    Deployed,
    Inactive,
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentStatus::Draft => "draft",
            AgentStatus::Active => "active",
            AgentStatus::Deployed => "deployed",
            AgentStatus::Inactive => "inactive",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AgentStatus {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(AgentStatus::Draft),
            "active" => Ok(AgentStatus::Active),
            "deployed" => Ok(AgentStatus::Deployed),
            "inactive" => Ok(AgentStatus::Inactive),
            other => Err(GeneratorError::Validation(format!(
                "Unknown agent status: {}",
                other
            ))),
        }
    }
}

/// One entry in an agent's component list.
///
/// Created by the component selector, configured in place by the
/// auto-configurator, then frozen into the workflow assembler's node list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedComponent {
    /// Freshly generated unique id, distinct from `component_id`
    pub id: String,
    /// Catalog component id (or a synthetic id for auto-injected components)
    pub component_id: String,
    pub name: String,
    /// Configuration class, resolved from the catalog at selection time
    pub kind: ComponentKind,
    /// Why the component was selected
    pub reason: String,
    /// Selection confidence in percent
    pub confidence: u8,
    /// Whether the pipeline added this component on its own
    pub auto_added: bool,
    /// Sort key for workflow ordering; materialized from the final splice order
    pub position: f64,
    /// Configuration attached by the auto-configurator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Value>,
    pub auto_configured: bool,
}

/// One workflow node, derived from a selected component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    /// Component id of the backing component
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
    pub position: f64,
    pub configuration: Value,
    pub auto_configured: bool,
    pub execution_order: usize,
}

/// A directed connection between two workflow nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConnection {
    pub id: String,
    pub from_node: String,
    pub to_node: String,
    #[serde(rename = "type")]
    pub connection_type: String,
    pub auto_generated: bool,
}

/// An error handler attached to an LLM-class node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandler {
    pub id: String,
    pub node_id: String,
    #[serde(rename = "type")]
    pub handler_type: String,
    pub configuration: Value,
}

/// A workflow entry trigger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    #[serde(rename = "type")]
    pub trigger_type: String,
    pub accepted_inputs: Vec<String>,
    pub validation_enabled: bool,
    pub auto_retry: bool,
}

/// How the assembled workflow is meant to be driven
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionStrategy {
    pub strategy: String,
    pub parallel_capable: bool,
    pub error_recovery: String,
}

/// Assembled workflow: a simple chain of nodes in position order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub nodes: Vec<WorkflowNode>,
    pub connections: Vec<WorkflowConnection>,
    pub error_handling: Vec<ErrorHandler>,
    pub triggers: Vec<TriggerConfig>,
    pub execution_strategy: ExecutionStrategy,
}

/// Agent-level input/output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfiguration {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub triggers: Vec<String>,
    pub response_style: String,
}

/// Snapshot of the analysis kept on the agent for later inspection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub confidence_score: u8,
    pub implicit_requirements: Vec<ImplicitRequirement>,
    pub smart_suggestions: Vec<ComponentSuggestion>,
    pub workflow_patterns: Vec<WorkflowPattern>,
    /// True when the detected domain differs from the effective one
    pub auto_detected_domain: bool,
    /// True when the detected complexity differs from the effective one
    pub auto_detected_complexity: bool,
}

/// Usage and quality metrics.
///
/// Both scores are recomputed whenever components change; testing may bump
/// `readiness_score` incrementally but never decreases it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentMetrics {
    pub test_runs: u32,
    pub deployments: u32,
    pub last_tested: Option<DateTime<Utc>>,
    pub intelligence_score: u8,
    pub readiness_score: u8,
}

/// The root agent aggregate, exclusively owned by the agent store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub domain: Domain,
    pub complexity: ComplexityLevel,
    pub status: AgentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub components: Vec<SelectedComponent>,
    pub workflow: Workflow,
    pub configuration: AgentConfiguration,
    pub ai_analysis: AiAnalysis,
    pub metrics: AgentMetrics,
}

impl Agent {
    /// Number of components carrying an auto-generated configuration.
    pub fn auto_configured_count(&self) -> usize {
        self.components.iter().filter(|c| c.auto_configured).count()
    }

    /// Builds the listing summary for this agent.
    pub fn to_summary(&self) -> AgentSummary {
        let description = if self.description.chars().count() > 100 {
            let truncated: String = self.description.chars().take(100).collect();
            format!("{}...", truncated)
        } else {
            self.description.clone()
        };
        AgentSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description,
            domain: self.domain,
            status: self.status,
            created_at: self.created_at,
            component_count: self.components.len(),
            intelligence_score: self.metrics.intelligence_score,
            readiness_score: self.metrics.readiness_score,
            confidence_score: self.ai_analysis.confidence_score,
        }
    }
}

/// Compact agent listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSummary {
    pub id: String,
    pub name: String,
    /// Description truncated to 100 characters
    pub description: String,
    pub domain: Domain,
    pub status: AgentStatus,
    pub created_at: DateTime<Utc>,
    pub component_count: usize,
    pub intelligence_score: u8,
    pub readiness_score: u8,
    pub confidence_score: u8,
}
