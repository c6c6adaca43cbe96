//! The agent generation pipeline
//!
//! `AgentGenerator` drives the full flow: description analysis, component
//! selection, auto-configuration, workflow assembly and scoring, plus the
//! management operations over the agent store. All collaborators are
//! injected; the generator itself holds no global state.

pub mod assembler;
pub mod configurator;
pub mod selector;
pub mod simulator;

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::DescriptionAnalyzer;
use crate::domain::{
    Agent, AgentConfiguration, AgentFilter, AgentMetrics, AgentStatus, AgentStore, AgentSummary,
    AiAnalysis, ComplexityLevel, ComponentCatalog, ComponentCategory, ComponentDescriptor,
    Domain, DomainInsights, GeneratorError, GeneratorResult, SelectedComponent, SuggestionMemory,
};
use configurator::AutoConfigurator;
use selector::ComponentSelector;
use simulator::AgentSimulator;

/// Readiness bonus applied once per successful test run
const TEST_SUCCESS_BONUS: u8 = 10;
/// Success rate a test run must exceed to count as successful
const TEST_SUCCESS_THRESHOLD: f64 = 80.0;

/// Input to `create_agent`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAgentRequest {
    pub name: String,
    pub description: String,
    /// `general` means auto-detect
    #[serde(default)]
    pub domain: Domain,
    /// `medium` means auto-detect
    #[serde(default)]
    pub complexity: ComplexityLevel,
}

/// Summary of what the analysis added to a freshly created agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiEnhancementSummary {
    pub detected_domain: Domain,
    pub detected_complexity: ComplexityLevel,
    pub total_components: usize,
    pub auto_configured_components: usize,
    pub smart_suggestions_applied: usize,
    pub implicit_requirements_detected: usize,
    pub intelligence_score: u8,
    pub readiness_score: u8,
    pub confidence_score: u8,
}

/// Result of `create_agent`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAgentResult {
    pub agent: Agent,
    pub enhancements: AiEnhancementSummary,
}

/// Derived stats returned with a single agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentStats {
    pub total_components: usize,
    pub auto_configured_components: usize,
    pub workflow_nodes: usize,
    pub intelligence_level: String,
}

/// Result of `get_agent`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDetails {
    pub agent: Agent,
    pub stats: AgentStats,
}

/// Result of `list_agents`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentListing {
    pub agents: Vec<AgentSummary>,
    pub total_count: usize,
    pub average_intelligence_score: f64,
}

/// Timing and quality metrics of one simulated test run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub execution_time_ms: u64,
    pub success_rate: f64,
    pub components_executed: usize,
    pub auto_optimizations: usize,
    pub error_count: usize,
}

/// Result of `test_agent`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    pub scenario: String,
    pub input: Value,
    pub output: Value,
    pub performance: PerformanceMetrics,
    /// Whether this run fed the suggestion memory
    pub learning_contribution: bool,
    pub intelligence_score: u8,
    pub readiness_score: u8,
    pub test_runs: u32,
}

pub struct AgentGenerator {
    catalog: Arc<dyn ComponentCatalog>,
    store: Arc<dyn AgentStore>,
    memory: Arc<dyn SuggestionMemory>,
    analyzer: DescriptionAnalyzer,
    selector: ComponentSelector,
    configurator: AutoConfigurator,
    simulator: AgentSimulator,
}

impl AgentGenerator {
    pub fn new(
        catalog: Arc<dyn ComponentCatalog>,
        store: Arc<dyn AgentStore>,
        memory: Arc<dyn SuggestionMemory>,
        max_components: usize,
    ) -> Self {
        Self {
            selector: ComponentSelector::new(catalog.clone(), memory.clone(), max_components),
            configurator: AutoConfigurator::new(catalog.clone()),
            analyzer: DescriptionAnalyzer::new(),
            simulator: AgentSimulator::new(),
            catalog,
            store,
            memory,
        }
    }

    /// Replaces the simulator, used by tests to get deterministic runs.
    pub fn with_simulator(mut self, simulator: AgentSimulator) -> Self {
        self.simulator = simulator;
        self
    }

    /// Creates an agent from a free-text description.
    ///
    /// The agent is only persisted once the full record (components, workflow
    /// and scores) is assembled; a failed creation leaves the store untouched.
    pub async fn create_agent(
        &self,
        request: CreateAgentRequest,
    ) -> GeneratorResult<CreateAgentResult> {
        if request.name.trim().is_empty() {
            return Err(GeneratorError::Validation(
                "Agent name must not be empty".to_string(),
            ));
        }

        let analysis = self.analyzer.analyze(&request.description);
        debug!(
            patterns = analysis.detected_patterns.len(),
            requirements = analysis.implicit_requirements.len(),
            confidence = analysis.confidence_score,
            "description analyzed"
        );

        // Explicit domain/complexity win; the sentinels adopt detected values.
        let domain = if request.domain == Domain::General {
            analysis.detected_domain
        } else {
            request.domain
        };
        let complexity = if request.complexity == ComplexityLevel::Medium {
            analysis.complexity_level
        } else {
            request.complexity
        };

        let selection = self
            .selector
            .select(&request.description, domain, complexity, &analysis)
            .await?;
        let mut components = selection.components;

        self.configurator
            .configure_all(&mut components, domain, &request.description, &analysis)
            .await?;

        let workflow = assembler::assemble(&components, &analysis);
        let intelligence = assembler::intelligence_score(&analysis);
        let readiness = assembler::readiness_score(&components, &workflow);

        // The completeness pass guarantees at least the essential components.
        if components.is_empty() {
            return Err(GeneratorError::Internal(
                "component selection produced an empty set".to_string(),
            ));
        }

        let now = Utc::now();
        let agent = Agent {
            id: Uuid::new_v4().to_string(),
            name: request.name.clone(),
            description: request.description.clone(),
            domain,
            complexity,
            status: AgentStatus::Draft,
            created_at: now,
            updated_at: now,
            components,
            workflow,
            configuration: AgentConfiguration {
                inputs: analysis.io_requirements.inputs.clone(),
                outputs: analysis.io_requirements.outputs.clone(),
                triggers: vec!["user_message".to_string()],
                response_style: response_style(domain).to_string(),
            },
            ai_analysis: AiAnalysis {
                confidence_score: analysis.confidence_score,
                implicit_requirements: analysis.implicit_requirements.clone(),
                smart_suggestions: analysis.suggested_components.clone(),
                workflow_patterns: analysis.workflow_patterns.clone(),
                auto_detected_domain: analysis.detected_domain != domain,
                auto_detected_complexity: analysis.complexity_level != complexity,
            },
            metrics: AgentMetrics {
                test_runs: 0,
                deployments: 0,
                last_tested: None,
                intelligence_score: intelligence,
                readiness_score: readiness,
            },
        };

        self.store.put(agent.clone()).await?;
        info!(
            agent_id = %agent.id,
            name = %agent.name,
            domain = %agent.domain,
            components = agent.components.len(),
            intelligence,
            readiness,
            "agent created"
        );

        let enhancements = AiEnhancementSummary {
            detected_domain: analysis.detected_domain,
            detected_complexity: analysis.complexity_level,
            total_components: agent.components.len(),
            auto_configured_components: agent.auto_configured_count(),
            smart_suggestions_applied: selection.learned_applied,
            implicit_requirements_detected: analysis.implicit_requirements.len(),
            intelligence_score: intelligence,
            readiness_score: readiness,
            confidence_score: analysis.confidence_score,
        };

        Ok(CreateAgentResult {
            agent,
            enhancements,
        })
    }

    pub async fn get_agent(&self, agent_id: &str) -> GeneratorResult<AgentDetails> {
        let agent = self
            .store
            .get(agent_id)
            .await?
            .ok_or_else(|| GeneratorError::AgentNotFound(agent_id.to_string()))?;

        let stats = AgentStats {
            total_components: agent.components.len(),
            auto_configured_components: agent.auto_configured_count(),
            workflow_nodes: agent.workflow.nodes.len(),
            intelligence_level: if agent.metrics.intelligence_score > 80 {
                "Advanced".to_string()
            } else {
                "Standard".to_string()
            },
        };

        Ok(AgentDetails { agent, stats })
    }

    pub async fn list_agents(&self, filter: AgentFilter) -> GeneratorResult<AgentListing> {
        let agents = self.store.list(filter).await?;
        let total_count = agents.len();
        let average_intelligence_score = if total_count == 0 {
            0.0
        } else {
            agents
                .iter()
                .map(|a| a.intelligence_score as f64)
                .sum::<f64>()
                / total_count as f64
        };

        Ok(AgentListing {
            agents,
            total_count,
            average_intelligence_score,
        })
    }

    pub async fn delete_agent(&self, agent_id: &str) -> GeneratorResult<()> {
        if self.store.delete(agent_id).await? {
            info!(agent_id, "agent deleted");
            Ok(())
        } else {
            Err(GeneratorError::AgentNotFound(agent_id.to_string()))
        }
    }

    /// Runs one simulated test against a stored agent.
    ///
    /// A run grading above the success threshold bumps the readiness score by
    /// a fixed bonus (never past 100) and feeds the suggestion memory; scores
    /// never decrease from testing alone.
    pub async fn test_agent(
        &self,
        agent_id: &str,
        test_input: Value,
        scenario: &str,
    ) -> GeneratorResult<TestReport> {
        let mut agent = self
            .store
            .get(agent_id)
            .await?
            .ok_or_else(|| GeneratorError::AgentNotFound(agent_id.to_string()))?;

        let outcome = self.simulator.simulate(&agent, &test_input);

        agent.metrics.test_runs += 1;
        agent.metrics.last_tested = Some(Utc::now());
        agent.updated_at = Utc::now();

        let successful = outcome.success_rate > TEST_SUCCESS_THRESHOLD;
        if successful {
            agent.metrics.readiness_score =
                agent.metrics.readiness_score.saturating_add(TEST_SUCCESS_BONUS).min(100);
            self.memory.record_success(&agent).await?;
            debug!(agent_id, success_rate = outcome.success_rate, "successful test recorded");
        }

        let report = TestReport {
            scenario: scenario.to_string(),
            input: test_input,
            output: outcome.output,
            performance: PerformanceMetrics {
                execution_time_ms: outcome.execution_time_ms,
                success_rate: outcome.success_rate,
                components_executed: outcome.steps.len(),
                auto_optimizations: outcome.auto_optimizations,
                error_count: outcome.error_count,
            },
            learning_contribution: successful,
            intelligence_score: agent.metrics.intelligence_score,
            readiness_score: agent.metrics.readiness_score,
            test_runs: agent.metrics.test_runs,
        };

        self.store.put(agent).await?;
        Ok(report)
    }

    /// Appends a catalog component to an existing agent and recomputes the
    /// workflow and both scores.
    pub async fn add_component(
        &self,
        agent_id: &str,
        component_id: &str,
    ) -> GeneratorResult<AgentDetails> {
        let mut agent = self
            .store
            .get(agent_id)
            .await?
            .ok_or_else(|| GeneratorError::AgentNotFound(agent_id.to_string()))?;

        let descriptor = self
            .catalog
            .get_component(component_id)
            .await?
            .ok_or_else(|| GeneratorError::ComponentNotFound(component_id.to_string()))?;

        if agent
            .components
            .iter()
            .any(|c| c.component_id == component_id)
        {
            return Err(GeneratorError::Validation(format!(
                "Component already present: {}",
                component_id
            )));
        }

        let mut component = SelectedComponent {
            id: Uuid::new_v4().to_string(),
            component_id: descriptor.component_id.clone(),
            name: descriptor.name.clone(),
            kind: descriptor.kind,
            reason: "Dodany ręcznie".to_string(),
            confidence: 100,
            auto_added: false,
            position: 0.0,
            configuration: None,
            auto_configured: false,
        };

        let analysis = self.analyzer.analyze(&agent.description);
        self.configurator
            .configure_all(
                std::slice::from_mut(&mut component),
                agent.domain,
                &agent.description,
                &analysis,
            )
            .await?;

        selector::insert_before_output(&mut agent.components, component);
        for (i, c) in agent.components.iter_mut().enumerate() {
            c.position = i as f64;
        }

        agent.workflow = assembler::assemble(&agent.components, &analysis);
        agent.metrics.intelligence_score = assembler::intelligence_score_parts(
            agent.ai_analysis.confidence_score,
            agent.ai_analysis.implicit_requirements.len(),
            agent.ai_analysis.smart_suggestions.len(),
            agent.ai_analysis.workflow_patterns.len(),
        );
        agent.metrics.readiness_score =
            assembler::readiness_score(&agent.components, &agent.workflow);
        agent.updated_at = Utc::now();

        self.store.put(agent.clone()).await?;
        self.get_agent(agent_id).await
    }

    /// Catalog queries: search wins over category listing when both are given.
    pub async fn get_components(
        &self,
        category: Option<ComponentCategory>,
        search: Option<&str>,
    ) -> GeneratorResult<Vec<ComponentDescriptor>> {
        match (search, category) {
            (Some(query), category) => self.catalog.search(query, category).await,
            (None, Some(category)) => self.catalog.list_by_category(category).await,
            (None, None) => self.catalog.search("", None).await,
        }
    }

    pub async fn domain_insights(&self, domain: Domain) -> GeneratorResult<DomainInsights> {
        self.memory.domain_insights(domain).await
    }

    pub async fn catalog_stats(&self) -> GeneratorResult<crate::domain::CatalogStats> {
        self.catalog.stats().await
    }
}

fn response_style(domain: Domain) -> &'static str {
    match domain {
        Domain::CustomerService => "helpful_professional",
        Domain::Sales => "persuasive_consultative",
        Domain::Hr => "formal_empathetic",
        Domain::Finance => "precise_analytical",
        Domain::Marketing => "creative_engaging",
        Domain::Ecommerce => "helpful_sales_oriented",
        _ => "neutral_helpful",
    }
}
