//! End-to-end tests over the full generation pipeline with the real static
//! catalog, a fresh store and a fresh suggestion memory per test.

use std::sync::Arc;

use serde_json::json;

use agentforge::catalog::StaticCatalog;
use agentforge::domain::{
    AgentFilter, ComplexityLevel, ComponentKind, Domain, GeneratorError,
};
use agentforge::learning::SmartContext;
use agentforge::pipeline::simulator::AgentSimulator;
use agentforge::pipeline::{AgentGenerator, CreateAgentRequest};
use agentforge::store::InMemoryAgentStore;

fn generator() -> AgentGenerator {
    AgentGenerator::new(
        Arc::new(StaticCatalog::new()),
        Arc::new(InMemoryAgentStore::new()),
        Arc::new(SmartContext::new()),
        50,
    )
}

fn generator_with_seed(seed: u64) -> AgentGenerator {
    generator().with_simulator(AgentSimulator::with_seed(seed))
}

fn request(name: &str, description: &str, domain: Domain, complexity: ComplexityLevel) -> CreateAgentRequest {
    CreateAgentRequest {
        name: name.to_string(),
        description: description.to_string(),
        domain,
        complexity,
    }
}

#[tokio::test]
async fn create_agent_is_semantically_deterministic() {
    let description = "Obsługa klientów przez email i chat, krok po kroku, raport na koniec";
    let first = generator()
        .create_agent(request("A", description, Domain::General, ComplexityLevel::Medium))
        .await
        .unwrap();
    let second = generator()
        .create_agent(request("A", description, Domain::General, ComplexityLevel::Medium))
        .await
        .unwrap();

    assert_eq!(first.agent.domain, second.agent.domain);
    assert_eq!(first.agent.complexity, second.agent.complexity);
    assert_eq!(
        first.agent.ai_analysis.confidence_score,
        second.agent.ai_analysis.confidence_score
    );
    assert_eq!(
        first.enhancements.intelligence_score,
        second.enhancements.intelligence_score
    );

    // generated ids differ, but the semantic component id set matches exactly
    let ids = |result: &agentforge::pipeline::CreateAgentResult| -> Vec<String> {
        result
            .agent
            .components
            .iter()
            .map(|c| c.component_id.clone())
            .collect()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_ne!(first.agent.id, second.agent.id);
}

#[tokio::test]
async fn email_keyword_beats_shop_keyword() {
    let result = generator()
        .create_agent(request(
            "Tiebreak",
            "wysyłaj email z ofertami sklep internetowy",
            Domain::General,
            ComplexityLevel::Medium,
        ))
        .await
        .unwrap();

    assert_eq!(result.agent.domain, Domain::Communication);
    assert_eq!(result.enhancements.detected_domain, Domain::Communication);
}

#[tokio::test]
async fn confidence_is_always_within_bounds() {
    for description in [
        "",
        "x",
        "zrób coś dziwnego",
        "email api workflow automation integration process chat dane raport faktura",
    ] {
        let result = generator()
            .create_agent(request("B", description, Domain::General, ComplexityLevel::Medium))
            .await
            .unwrap();
        let confidence = result.agent.ai_analysis.confidence_score;
        assert!((60..=95).contains(&confidence), "confidence {} out of bounds", confidence);
    }
}

#[tokio::test]
async fn every_agent_has_input_and_error_handling() {
    for description in ["", "wyślij maile", "złożony proces analizy danych z wielu źródeł"] {
        let result = generator()
            .create_agent(request("C", description, Domain::General, ComplexityLevel::Medium))
            .await
            .unwrap();

        let ids: Vec<&str> = result
            .agent
            .components
            .iter()
            .map(|c| c.component_id.as_str())
            .collect();
        assert!(
            ids.iter().any(|id| id.contains("input")),
            "no input component for {:?}",
            description
        );
        assert!(
            ids.iter().any(|id| id.contains("error")),
            "no error component for {:?}",
            description
        );
    }
}

#[tokio::test]
async fn scores_stay_within_bounds() {
    for description in ["", "proste zadanie", "złożony zaawansowany niestandardowy proces email api dane raport chat pliki"] {
        let result = generator()
            .create_agent(request("D", description, Domain::General, ComplexityLevel::Medium))
            .await
            .unwrap();
        assert!(result.agent.metrics.intelligence_score <= 100);
        assert!(result.agent.metrics.readiness_score <= 100);
    }
}

#[tokio::test]
async fn workflow_is_a_simple_chain_with_llm_error_handlers() {
    let result = generator()
        .create_agent(request(
            "Chain",
            "obsługa maili krok po kroku",
            Domain::General,
            ComplexityLevel::Medium,
        ))
        .await
        .unwrap();

    let workflow = &result.agent.workflow;
    assert_eq!(workflow.connections.len(), workflow.nodes.len() - 1);
    for (i, node) in workflow.nodes.iter().enumerate() {
        assert_eq!(node.execution_order, i);
    }

    let llm_nodes: Vec<&str> = result
        .agent
        .components
        .iter()
        .filter(|c| c.kind == ComponentKind::Llm)
        .map(|c| c.id.as_str())
        .collect();
    assert!(!llm_nodes.is_empty());
    assert_eq!(workflow.error_handling.len(), llm_nodes.len());
    for handler in &workflow.error_handling {
        assert!(llm_nodes.contains(&handler.node_id.as_str()));
    }
}

// Polish mail-tracking description pulls in the full email stack
#[tokio::test]
async fn mail_tracking_agent_gets_email_stack() {
    let result = generator()
        .create_agent(request(
            "Mailbot",
            "stwórz agenta do śledzenia poczty i wysyłania maili",
            Domain::General,
            ComplexityLevel::Medium,
        ))
        .await
        .unwrap();

    assert_eq!(result.agent.domain, Domain::Communication);

    let ids: Vec<&str> = result
        .agent
        .components
        .iter()
        .map(|c| c.component_id.as_str())
        .collect();
    assert!(
        ids.contains(&"gmail_integration") || ids.contains(&"sendgrid_integration"),
        "no email integration in {:?}",
        ids
    );
    assert!(result
        .agent
        .configuration
        .inputs
        .iter()
        .any(|f| f == "email_content"));
}

// Precision wording plus the finance pin keeps the LLM factual
#[tokio::test]
async fn finance_analyst_gets_low_temperature() {
    let result = generator()
        .create_agent(request(
            "Analityk",
            "Jesteś precyzyjnym analitykiem finansowym",
            Domain::Finance,
            ComplexityLevel::Medium,
        ))
        .await
        .unwrap();

    let llm = result
        .agent
        .components
        .iter()
        .find(|c| c.kind == ComponentKind::Llm)
        .expect("agent should carry an LLM component");
    let configuration = llm.configuration.as_ref().unwrap();
    let temperature = configuration["temperature"].as_f64().unwrap();
    assert!(temperature <= 0.3, "temperature {} too high", temperature);
    assert!(configuration["system_prompt"]
        .as_str()
        .unwrap()
        .contains("analitykiem finansowym"));
}

// Reading an agent back immediately after creation does not drift
#[tokio::test]
async fn get_agent_matches_creation_result() {
    let generator = generator();
    let created = generator
        .create_agent(request(
            "Stable",
            "obsługa klienta przez chat",
            Domain::General,
            ComplexityLevel::Medium,
        ))
        .await
        .unwrap();

    let details = generator.get_agent(&created.agent.id).await.unwrap();
    assert_eq!(details.agent.components.len(), created.agent.components.len());
    assert_eq!(
        details.agent.metrics.intelligence_score,
        created.enhancements.intelligence_score
    );
    assert_eq!(details.stats.total_components, created.agent.components.len());
}

// A successful test run bumps readiness by exactly the fixed bonus
#[tokio::test]
async fn successful_test_raises_readiness_by_ten() {
    let mut asserted = false;

    for seed in 0..20u64 {
        let generator = generator_with_seed(seed);
        let created = generator
            .create_agent(request(
                "Tested",
                "prosty agent",
                Domain::General,
                ComplexityLevel::Medium,
            ))
            .await
            .unwrap();
        let readiness_before = created.agent.metrics.readiness_score;

        let report = generator
            .test_agent(&created.agent.id, json!({"user_message": "test"}), "default")
            .await
            .unwrap();

        assert_eq!(report.test_runs, 1);
        if report.performance.success_rate > 80.0 {
            assert!(report.learning_contribution);
            assert_eq!(
                report.readiness_score,
                (readiness_before + 10).min(100),
                "seed {}",
                seed
            );
            asserted = true;
            break;
        } else {
            assert_eq!(report.readiness_score, readiness_before);
        }
    }

    assert!(asserted, "no seed in 0..20 produced a successful run");
}

#[tokio::test]
async fn repeated_successful_tests_cap_readiness_at_100() {
    let generator = generator_with_seed(3);
    let created = generator
        .create_agent(request(
            "Capped",
            "prosty agent",
            Domain::General,
            ComplexityLevel::Medium,
        ))
        .await
        .unwrap();

    let mut previous = created.agent.metrics.readiness_score;
    for _ in 0..12 {
        let report = generator
            .test_agent(&created.agent.id, json!({}), "default")
            .await
            .unwrap();
        assert!(report.readiness_score >= previous);
        assert!(report.readiness_score <= 100);
        previous = report.readiness_score;
    }
}

// Deleting an unknown id is a structured failure, not a crash
#[tokio::test]
async fn deleting_unknown_agent_is_not_found() {
    let error = generator().delete_agent("no-such-agent").await.unwrap_err();
    assert!(matches!(error, GeneratorError::AgentNotFound(_)));
}

#[tokio::test]
async fn empty_name_is_rejected_before_any_write() {
    let generator = generator();
    let error = generator
        .create_agent(request("  ", "opis", Domain::General, ComplexityLevel::Medium))
        .await
        .unwrap_err();
    assert!(matches!(error, GeneratorError::Validation(_)));

    let listing = generator.list_agents(AgentFilter::default()).await.unwrap();
    assert_eq!(listing.total_count, 0);
}

#[tokio::test]
async fn explicit_domain_wins_over_detection() {
    let result = generator()
        .create_agent(request(
            "Explicit",
            "wysyłanie maili",
            Domain::Sales,
            ComplexityLevel::Medium,
        ))
        .await
        .unwrap();

    assert_eq!(result.agent.domain, Domain::Sales);
    // the mismatch is recorded for later inspection
    assert!(result.agent.ai_analysis.auto_detected_domain);
    assert_eq!(result.enhancements.detected_domain, Domain::Communication);
}

#[tokio::test]
async fn add_component_recomputes_scores_and_workflow() {
    let generator = generator();
    let created = generator
        .create_agent(request(
            "Growing",
            "prosty agent",
            Domain::General,
            ComplexityLevel::Medium,
        ))
        .await
        .unwrap();
    let components_before = created.agent.components.len();
    let readiness_before = created.agent.metrics.readiness_score;

    let details = generator
        .add_component(&created.agent.id, "web_scraper")
        .await
        .unwrap();

    assert_eq!(details.agent.components.len(), components_before + 1);
    assert_eq!(details.agent.workflow.nodes.len(), components_before + 1);
    assert!(details.agent.metrics.readiness_score >= readiness_before);
    assert!(details.agent.updated_at >= details.agent.created_at);

    // unknown component ids surface as ComponentNotFound
    let error = generator
        .add_component(&created.agent.id, "bogus_component")
        .await
        .unwrap_err();
    assert!(matches!(error, GeneratorError::ComponentNotFound(_)));
}

#[tokio::test]
async fn listing_filters_by_domain() {
    let generator = generator();
    generator
        .create_agent(request("M", "wysyłanie maili", Domain::General, ComplexityLevel::Medium))
        .await
        .unwrap();
    generator
        .create_agent(request("S", "kwalifikacja leadów crm", Domain::General, ComplexityLevel::Medium))
        .await
        .unwrap();

    let all = generator.list_agents(AgentFilter::default()).await.unwrap();
    assert_eq!(all.total_count, 2);
    assert!(all.average_intelligence_score > 0.0);

    let communication = generator
        .list_agents(AgentFilter {
            domain: Some(Domain::Communication),
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(communication.total_count, 1);
    assert_eq!(communication.agents[0].name, "M");
}

#[tokio::test]
async fn successful_tests_feed_the_suggestion_memory() {
    let memory = Arc::new(SmartContext::new());
    let generator = AgentGenerator::new(
        Arc::new(StaticCatalog::new()),
        Arc::new(InMemoryAgentStore::new()),
        memory.clone(),
        50,
    )
    .with_simulator(AgentSimulator::with_seed(3));

    let created = generator
        .create_agent(request(
            "Learner",
            "wysyłanie maili",
            Domain::General,
            ComplexityLevel::Medium,
        ))
        .await
        .unwrap();

    let mut learned = false;
    for _ in 0..10 {
        let report = generator
            .test_agent(&created.agent.id, json!({}), "default")
            .await
            .unwrap();
        if report.learning_contribution {
            learned = true;
            break;
        }
    }
    assert!(learned, "no successful run in 10 attempts");

    let insights = generator
        .domain_insights(Domain::Communication)
        .await
        .unwrap();
    assert!(!insights.popular_components.is_empty());
}
