//! In-memory agent store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Agent, AgentFilter, AgentStore, AgentSummary, GeneratorResult};

/// Agent store backed by a process-local map.
///
/// Last writer wins per agent id; contents are lost on restart.
pub struct InMemoryAgentStore {
    agents: Arc<RwLock<HashMap<String, Agent>>>,
}

impl InMemoryAgentStore {
    pub fn new() -> Self {
        Self {
            agents: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryAgentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentStore for InMemoryAgentStore {
    async fn put(&self, agent: Agent) -> GeneratorResult<()> {
        let mut agents = self.agents.write().await;
        agents.insert(agent.id.clone(), agent);
        Ok(())
    }

    async fn get(&self, agent_id: &str) -> GeneratorResult<Option<Agent>> {
        let agents = self.agents.read().await;
        Ok(agents.get(agent_id).cloned())
    }

    async fn delete(&self, agent_id: &str) -> GeneratorResult<bool> {
        let mut agents = self.agents.write().await;
        Ok(agents.remove(agent_id).is_some())
    }

    async fn list(&self, filter: AgentFilter) -> GeneratorResult<Vec<AgentSummary>> {
        let agents = self.agents.read().await;

        let mut summaries: Vec<AgentSummary> = agents
            .values()
            .filter(|a| filter.domain.map_or(true, |d| a.domain == d))
            .filter(|a| filter.status.map_or(true, |s| a.status == s))
            .map(|a| a.to_summary())
            .collect();

        // Highest intelligence first, confidence breaks ties
        summaries.sort_by(|a, b| {
            (b.intelligence_score, b.confidence_score)
                .cmp(&(a.intelligence_score, a.confidence_score))
        });

        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AgentConfiguration, AgentMetrics, AgentStatus, AiAnalysis, ComplexityLevel, Domain,
        ExecutionStrategy, Workflow,
    };
    use chrono::Utc;

    fn agent(id: &str, domain: Domain, intelligence: u8) -> Agent {
        let now = Utc::now();
        Agent {
            id: id.to_string(),
            name: format!("agent-{}", id),
            description: "test agent".to_string(),
            domain,
            complexity: ComplexityLevel::Medium,
            status: AgentStatus::Draft,
            created_at: now,
            updated_at: now,
            components: vec![],
            workflow: Workflow {
                nodes: vec![],
                connections: vec![],
                error_handling: vec![],
                triggers: vec![],
                execution_strategy: ExecutionStrategy {
                    strategy: "sequential".to_string(),
                    parallel_capable: false,
                    error_recovery: "auto".to_string(),
                },
            },
            configuration: AgentConfiguration {
                inputs: vec!["user_message".to_string()],
                outputs: vec!["response".to_string()],
                triggers: vec!["user_message".to_string()],
                response_style: "neutral_helpful".to_string(),
            },
            ai_analysis: AiAnalysis {
                confidence_score: 60,
                implicit_requirements: vec![],
                smart_suggestions: vec![],
                workflow_patterns: vec![],
                auto_detected_domain: false,
                auto_detected_complexity: false,
            },
            metrics: AgentMetrics {
                test_runs: 0,
                deployments: 0,
                last_tested: None,
                intelligence_score: intelligence,
                readiness_score: 50,
            },
        }
    }

    #[tokio::test]
    async fn put_then_get_roundtrip() {
        let store = InMemoryAgentStore::new();
        store.put(agent("a1", Domain::General, 70)).await.unwrap();

        let loaded = store.get("a1").await.unwrap().unwrap();
        assert_eq!(loaded.name, "agent-a1");
    }

    #[tokio::test]
    async fn delete_reports_existence() {
        let store = InMemoryAgentStore::new();
        store.put(agent("a1", Domain::General, 70)).await.unwrap();

        assert!(store.delete("a1").await.unwrap());
        assert!(!store.delete("a1").await.unwrap());
    }

    #[tokio::test]
    async fn list_filters_and_sorts_by_intelligence() {
        let store = InMemoryAgentStore::new();
        store.put(agent("a1", Domain::Finance, 60)).await.unwrap();
        store.put(agent("a2", Domain::Finance, 90)).await.unwrap();
        store.put(agent("a3", Domain::Sales, 95)).await.unwrap();

        let summaries = store
            .list(AgentFilter {
                domain: Some(Domain::Finance),
                status: None,
            })
            .await
            .unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "a2");
        assert_eq!(summaries[1].id, "a1");
    }

    #[tokio::test]
    async fn long_descriptions_are_truncated_in_summaries() {
        let store = InMemoryAgentStore::new();
        let mut a = agent("a1", Domain::General, 70);
        a.description = "x".repeat(150);
        store.put(a).await.unwrap();

        let summaries = store.list(AgentFilter::default()).await.unwrap();
        assert_eq!(summaries[0].description.len(), 103);
        assert!(summaries[0].description.ends_with("..."));
    }
}
