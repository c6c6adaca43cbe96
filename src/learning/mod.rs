//! Frequency-counter suggestion memory
//!
//! "Learning" here is an explicit append-only counter table: component usage
//! counts incremented by successful test runs. No statistical model is
//! involved; suggestion confidence grows linearly with observed usage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    Agent, ComponentSuggestion, Domain, DomainInsights, GeneratorResult, SuccessPattern,
    SuggestionMemory,
};

const MAX_SUGGESTIONS: usize = 10;
const BASE_CONFIDENCE: u8 = 75;

/// Keyword rows: exact word match against the description, mapped to
/// component ids with a shared reason.
const KEYWORD_SUGGESTIONS: &[(&[&str], &[&str], &str)] = &[
    (
        &["chat", "conversation", "talk", "rozmowa", "czat"],
        &["openai_api_integration", "chat_interface", "conversation_memory"],
        "Opis wskazuje na agenta konwersacyjnego",
    ),
    (
        &["email", "mail", "wiadomość", "newsletter"],
        &["gmail_integration", "sendgrid_integration", "email_template_manager"],
        "Opis wskazuje na obsługę poczty",
    ),
    (
        &["calendar", "schedule", "kalendarz", "terminarz"],
        &["google_calendar_integration", "scheduling_system"],
        "Opis wskazuje na zarządzanie terminami",
    ),
    (
        &["file", "document", "plik", "dokument"],
        &["file_manager", "google_drive_integration", "pdf_processor"],
        "Opis wskazuje na pracę z plikami",
    ),
    (
        &["database", "data", "baza", "dane"],
        &["database_connector", "data_processor", "csv_handler"],
        "Opis wskazuje na pracę z danymi",
    ),
    (
        &["web", "website", "scraping", "internet"],
        &["web_scraper", "url_processor"],
        "Opis wskazuje na pobieranie danych z sieci",
    ),
];

fn domain_suggestions(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::CustomerService => &["ticket_system", "knowledge_base", "chat_support"],
        Domain::Ecommerce => &["payment_processor", "inventory_manager", "order_tracker"],
        Domain::Marketing => &["social_media_integration", "analytics_tracker", "campaign_manager"],
        Domain::Finance => &["expense_tracker", "invoice_generator", "accounting_integration"],
        _ => &[],
    }
}

#[derive(Debug, Clone, Default)]
struct ComponentUsage {
    usage_count: u32,
    domains: Vec<Domain>,
}

#[derive(Debug, Clone, Default)]
struct LearnedPattern {
    count: u32,
    component_counts: HashMap<String, u32>,
    descriptions: Vec<String>,
}

#[derive(Default)]
struct State {
    component_usage: HashMap<String, ComponentUsage>,
    learned_patterns: HashMap<String, LearnedPattern>,
}

/// Suggestion memory shared across requests.
pub struct SmartContext {
    state: Arc<RwLock<State>>,
}

impl SmartContext {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
        }
    }
}

impl Default for SmartContext {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SuggestionMemory for SmartContext {
    async fn suggest(
        &self,
        description: &str,
        domain: Domain,
        existing_ids: &[String],
    ) -> GeneratorResult<Vec<ComponentSuggestion>> {
        let text = description.to_lowercase();
        let words: Vec<&str> = text.split_whitespace().collect();
        let state = self.state.read().await;

        let usage = |id: &str| {
            state
                .component_usage
                .get(id)
                .map(|u| u.usage_count)
                .unwrap_or(0)
        };

        let mut suggestions: Vec<ComponentSuggestion> = Vec::new();
        let mut push = |id: &str, reason: &str| {
            if existing_ids.iter().any(|e| e == id)
                || suggestions.iter().any(|s| s.component_id == id)
            {
                return;
            }
            let confidence =
                (BASE_CONFIDENCE as u32 + 4 * usage(id)).min(95) as u8;
            suggestions.push(ComponentSuggestion {
                component_id: id.to_string(),
                reason: reason.to_string(),
                confidence,
            });
        };

        for (keywords, ids, reason) in KEYWORD_SUGGESTIONS {
            if keywords.iter().any(|kw| words.contains(kw)) {
                for id in *ids {
                    push(id, reason);
                }
            }
        }

        for id in domain_suggestions(domain) {
            push(id, &format!("Popularny komponent w domenie {}", domain));
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        Ok(suggestions)
    }

    async fn record_success(&self, agent: &Agent) -> GeneratorResult<()> {
        let mut state = self.state.write().await;

        let pattern_key = format!("{}_{}_components", agent.domain, agent.components.len());
        let pattern = state.learned_patterns.entry(pattern_key).or_default();
        pattern.count += 1;
        pattern.descriptions.push(agent.description.clone());
        for component in &agent.components {
            *pattern
                .component_counts
                .entry(component.component_id.clone())
                .or_default() += 1;
        }

        for component in &agent.components {
            let usage = state
                .component_usage
                .entry(component.component_id.clone())
                .or_default();
            usage.usage_count += 1;
            if !usage.domains.contains(&agent.domain) {
                usage.domains.push(agent.domain);
            }
        }

        Ok(())
    }

    async fn domain_insights(&self, domain: Domain) -> GeneratorResult<DomainInsights> {
        let state = self.state.read().await;

        let mut popular: Vec<(&String, u32)> = state
            .component_usage
            .iter()
            .filter(|(_, usage)| usage.domains.contains(&domain))
            .map(|(id, usage)| (id, usage.usage_count))
            .collect();
        popular.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let domain_prefix = domain.to_string();
        let mut success_patterns: Vec<SuccessPattern> = state
            .learned_patterns
            .iter()
            .filter(|(key, _)| key.starts_with(&domain_prefix))
            .map(|(key, pattern)| {
                let mut top: Vec<(String, u32)> = pattern
                    .component_counts
                    .iter()
                    .map(|(id, count)| (id.clone(), *count))
                    .collect();
                top.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
                top.truncate(3);
                SuccessPattern {
                    pattern: key.clone(),
                    count: pattern.count,
                    top_components: top,
                }
            })
            .collect();
        success_patterns.sort_by(|a, b| b.count.cmp(&a.count));

        Ok(DomainInsights {
            popular_components: popular
                .into_iter()
                .take(5)
                .map(|(id, _)| id.clone())
                .collect(),
            success_patterns,
            recommendations: vec![
                "Używaj sprawdzonych komponentów z wysokim wskaźnikiem sukcesu".to_string(),
                "Rozważ komponenty popularne w tej domenie".to_string(),
                "Testuj nowe kombinacje na podstawie udanych wzorców".to_string(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AgentConfiguration, AgentMetrics, AgentStatus, AiAnalysis, ComplexityLevel, ComponentKind,
        ExecutionStrategy, SelectedComponent, Workflow,
    };
    use chrono::Utc;

    fn agent_with_components(domain: Domain, ids: &[&str]) -> Agent {
        let now = Utc::now();
        Agent {
            id: "a1".to_string(),
            name: "test".to_string(),
            description: "agent testowy".to_string(),
            domain,
            complexity: ComplexityLevel::Simple,
            status: AgentStatus::Draft,
            created_at: now,
            updated_at: now,
            components: ids
                .iter()
                .enumerate()
                .map(|(i, id)| SelectedComponent {
                    id: format!("c{}", i),
                    component_id: id.to_string(),
                    name: id.to_string(),
                    kind: ComponentKind::Generic,
                    reason: "test".to_string(),
                    confidence: 80,
                    auto_added: true,
                    position: i as f64,
                    configuration: None,
                    auto_configured: false,
                })
                .collect(),
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
                inputs: vec![],
                outputs: vec![],
                triggers: vec![],
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
                test_runs: 1,
                deployments: 0,
                last_tested: Some(now),
                intelligence_score: 70,
                readiness_score: 60,
            },
        }
    }

    #[tokio::test]
    async fn keyword_suggestions_match_whole_words() {
        let memory = SmartContext::new();
        let suggestions = memory
            .suggest("obsługa email i kalendarz", Domain::General, &[])
            .await
            .unwrap();

        let ids: Vec<&str> = suggestions.iter().map(|s| s.component_id.as_str()).collect();
        assert!(ids.contains(&"gmail_integration"));
        assert!(ids.contains(&"google_calendar_integration"));
        // "maili" is not the word "mail", so no match from that alone
        let none = memory
            .suggest("wysyłanie maili", Domain::General, &[])
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn existing_ids_are_filtered() {
        let memory = SmartContext::new();
        let suggestions = memory
            .suggest(
                "obsługa email",
                Domain::General,
                &["gmail_integration".to_string()],
            )
            .await
            .unwrap();
        assert!(suggestions.iter().all(|s| s.component_id != "gmail_integration"));
    }

    #[tokio::test]
    async fn usage_raises_confidence() {
        let memory = SmartContext::new();
        let before = memory
            .suggest("obsługa email", Domain::General, &[])
            .await
            .unwrap();
        let base = before
            .iter()
            .find(|s| s.component_id == "gmail_integration")
            .unwrap()
            .confidence;

        let agent = agent_with_components(Domain::Communication, &["gmail_integration"]);
        memory.record_success(&agent).await.unwrap();
        memory.record_success(&agent).await.unwrap();

        let after = memory
            .suggest("obsługa email", Domain::General, &[])
            .await
            .unwrap();
        let raised = after
            .iter()
            .find(|s| s.component_id == "gmail_integration")
            .unwrap()
            .confidence;
        assert_eq!(raised, base + 8);
    }

    #[tokio::test]
    async fn domain_insights_report_popular_components() {
        let memory = SmartContext::new();
        let agent =
            agent_with_components(Domain::Finance, &["invoice_generator", "expense_tracker"]);
        memory.record_success(&agent).await.unwrap();

        let insights = memory.domain_insights(Domain::Finance).await.unwrap();
        assert!(insights
            .popular_components
            .contains(&"invoice_generator".to_string()));
        assert_eq!(insights.success_patterns.len(), 1);
        assert_eq!(insights.success_patterns[0].count, 1);
        assert_eq!(insights.recommendations.len(), 3);
    }
}
