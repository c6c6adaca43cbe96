//! Collaborator ports consumed by the generation pipeline
//!
//! The pipeline holds no process-wide state; every external dependency is an
//! explicitly injected trait object, so tests can substitute fakes for the
//! catalog, the agent store and the suggestion memory.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::agent::{Agent, AgentStatus, AgentSummary};
use super::analysis::{ComponentSuggestion, Domain};
use super::component::{CatalogStats, ComponentCategory, ComponentDescriptor};
use super::error::GeneratorResult;

/// Read-only registry of component descriptors
#[async_trait]
pub trait ComponentCatalog: Send + Sync {
    /// Look up a single component by id.
    async fn get_component(&self, component_id: &str) -> GeneratorResult<Option<ComponentDescriptor>>;

    /// List all components in one category.
    async fn list_by_category(
        &self,
        category: ComponentCategory,
    ) -> GeneratorResult<Vec<ComponentDescriptor>>;

    /// Case-insensitive free-text search over name, description and capabilities.
    async fn search(
        &self,
        query: &str,
        category: Option<ComponentCategory>,
    ) -> GeneratorResult<Vec<ComponentDescriptor>>;

    /// Aggregate catalog counts.
    async fn stats(&self) -> GeneratorResult<CatalogStats>;
}

/// Filter for agent listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentFilter {
    pub domain: Option<Domain>,
    pub status: Option<AgentStatus>,
}

/// Key-value store of agent records, keyed by generated id.
///
/// No persistence guarantees beyond process lifetime; at most one writer per
/// agent id at a time (last-writer-wins).
#[async_trait]
pub trait AgentStore: Send + Sync {
    async fn put(&self, agent: Agent) -> GeneratorResult<()>;

    async fn get(&self, agent_id: &str) -> GeneratorResult<Option<Agent>>;

    /// Returns true when an agent was actually removed.
    async fn delete(&self, agent_id: &str) -> GeneratorResult<bool>;

    /// Summaries matching the filter, sorted by intelligence then confidence,
    /// descending.
    async fn list(&self, filter: AgentFilter) -> GeneratorResult<Vec<AgentSummary>>;
}

/// A success pattern learned from tested agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessPattern {
    pub pattern: String,
    pub count: u32,
    pub top_components: Vec<(String, u32)>,
}

/// Insights for one domain, derived from usage counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainInsights {
    pub popular_components: Vec<String>,
    pub success_patterns: Vec<SuccessPattern>,
    pub recommendations: Vec<String>,
}

/// Frequency-counter memory of successful agent compositions.
///
/// This is a plain usage counter, not a statistical model: suggestions get
/// more confident the more often a component appears in agents whose test
/// runs succeeded.
#[async_trait]
pub trait SuggestionMemory: Send + Sync {
    /// Suggest components for a description, excluding ids already selected.
    async fn suggest(
        &self,
        description: &str,
        domain: Domain,
        existing_ids: &[String],
    ) -> GeneratorResult<Vec<ComponentSuggestion>>;

    /// Record a successfully tested agent.
    async fn record_success(&self, agent: &Agent) -> GeneratorResult<()>;

    /// Insights for one domain.
    async fn domain_insights(&self, domain: Domain) -> GeneratorResult<DomainInsights>;
}
