//! Per-component auto-configuration
//!
//! Derives a configuration object for every selected component, dispatched on
//! the component kind. Configuration is a pure function of the component,
//! domain, description and analysis.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::domain::{
    ComplexityLevel, ComponentCatalog, ComponentKind, DescriptionAnalysis, Domain,
    GeneratorResult, SelectedComponent, WorkflowPattern,
};

/// Keywords pulling the temperature toward precision
const PRECISION_KEYWORDS: &[&str] = &[
    "precyzyjny", "dokładny", "faktyczny", "exact", "specific", "accurate",
];

/// Keywords pulling the temperature toward creativity
const CREATIVITY_KEYWORDS: &[&str] = &[
    "kreatywny", "pomysłowy", "różnorodny", "creative", "innovative", "varied",
];

pub struct AutoConfigurator {
    catalog: Arc<dyn ComponentCatalog>,
}

impl AutoConfigurator {
    pub fn new(catalog: Arc<dyn ComponentCatalog>) -> Self {
        Self { catalog }
    }

    /// Attaches a configuration to every component in place.
    pub async fn configure_all(
        &self,
        components: &mut [SelectedComponent],
        domain: Domain,
        description: &str,
        analysis: &DescriptionAnalysis,
    ) -> GeneratorResult<()> {
        for component in components.iter_mut() {
            let configuration = match component.kind {
                ComponentKind::Llm => llm_configuration(domain, description, analysis),
                ComponentKind::Integration => json!({
                    "timeout_seconds": 30,
                    "retry_attempts": 3,
                    "rate_limit_per_minute": 60,
                }),
                ComponentKind::Classifier => json!({
                    "confidence_threshold": 0.8,
                    "max_categories": 10,
                }),
                ComponentKind::WorkflowControl => json!({
                    "timeout_seconds": 30,
                    "retry_attempts": 3,
                }),
                ComponentKind::Generic => self
                    .catalog
                    .get_component(&component.component_id)
                    .await?
                    .and_then(|descriptor| descriptor.default_config)
                    .unwrap_or_else(|| json!({})),
            };

            component.configuration = Some(configuration);
            component.auto_configured = true;
        }
        Ok(())
    }
}

/// Builds the adaptive LLM configuration.
pub fn llm_configuration(
    domain: Domain,
    description: &str,
    analysis: &DescriptionAnalysis,
) -> Value {
    let text = description.to_lowercase();
    json!({
        "api_endpoint": "https://text.pollinations.ai/openai",
        "provider": "pollinations",
        "model": "openai",
        "temperature": derive_temperature(&text, domain),
        "max_tokens": derive_max_tokens(description, analysis),
        "system_prompt": synthesize_system_prompt(domain, description, analysis),
    })
}

/// Temperature from the precision/creativity keyword balance.
///
/// The domain pin is applied last and wins over the keyword-derived value:
/// finance/legal agents stay factual, marketing/creative agents stay varied.
fn derive_temperature(text: &str, domain: Domain) -> f64 {
    let precision = PRECISION_KEYWORDS.iter().filter(|kw| text.contains(*kw)).count();
    let creativity = CREATIVITY_KEYWORDS.iter().filter(|kw| text.contains(*kw)).count();

    let mut temperature = 0.7;
    if precision > creativity {
        temperature = (0.2 + creativity as f64 * 0.1).min(0.5);
    } else if creativity > precision {
        temperature = (0.8 + precision as f64 * 0.05).min(0.95);
    }

    temperature = match domain {
        Domain::Finance | Domain::Legal => 0.3,
        Domain::Marketing | Domain::Creative => 0.9,
        _ => temperature,
    };

    (temperature * 100.0).round() / 100.0
}

/// Token budget from description length and I/O complexity, clamped to [1, 4000].
fn derive_max_tokens(description: &str, analysis: &DescriptionAnalysis) -> u32 {
    let word_count = description.split_whitespace().count();
    let io_fields = analysis.io_requirements.field_count();

    let mut tokens = 500.0 + word_count as f64 * 3.0 + io_fields as f64 * 100.0;
    if analysis.complexity_level == ComplexityLevel::Complex {
        tokens *= 1.5;
    }

    (tokens as u32).clamp(1, 4000)
}

fn base_prompt(domain: Domain) -> &'static str {
    match domain {
        Domain::Communication => {
            "Jesteś ekspertem od komunikacji i zarządzania pocztą elektroniczną. \
             Koncentrujesz się na efektywnej i profesjonalnej wymianie wiadomości."
        }
        Domain::CustomerService => {
            "Jesteś profesjonalnym i empatycznym asystentem obsługi klienta. \
             Twoja misja to rozwiązywanie problemów klientów z najwyższą starannością."
        }
        Domain::Sales => {
            "Jesteś ekspertem sprzedaży skoncentrowanym na budowaniu wartości dla klienta. \
             Pomagasz znaleźć najlepsze rozwiązania dopasowane do potrzeb."
        }
        Domain::Hr => {
            "Jesteś profesjonalnym asystentem HR z głęboką wiedzą o procesach kadrowych \
             i regulacjach prawnych."
        }
        Domain::Finance | Domain::Legal => {
            "Jesteś precyzyjnym analitykiem finansowym z doświadczeniem w analizie danych \
             i doradztwie inwestycyjnym."
        }
        Domain::Marketing | Domain::Creative => {
            "Jesteś kreatywnym specjalistą od marketingu z wiedzą o najnowszych trendach \
             i skutecznych strategiach."
        }
        Domain::Ecommerce => {
            "Jesteś ekspertem e-commerce z doświadczeniem w optymalizacji sprzedaży online \
             i user experience."
        }
        Domain::Development => {
            "Jesteś ekspertem programowania z głęboką wiedzą o architekturze, \
             najlepszych praktykach i nowoczesnych technologiach."
        }
        Domain::Analytics => {
            "Jesteś analitykiem danych specjalizującym się w wydobywaniu insights \
             i tworzeniu actionable recommendations."
        }
        Domain::General => {
            "Jesteś wszechstronnym asystentem AI o szerokich kompetencjach. \
             Dostosujesz swoje odpowiedzi do kontekstu."
        }
    }
}

/// Synthesizes the system prompt: domain base sentence, enhancement clauses
/// drawn from the analysis, then a literal echo of the task context.
fn synthesize_system_prompt(
    domain: Domain,
    description: &str,
    analysis: &DescriptionAnalysis,
) -> String {
    let mut enhancements: Vec<&str> = Vec::new();

    for requirement in &analysis.implicit_requirements {
        let reasoning = requirement.reasoning.to_lowercase();
        if reasoning.contains("klient") {
            enhancements.push("Priorytetowo traktuj potrzeby i satysfakcję klientów.");
        } else if reasoning.contains("decyzja") {
            enhancements.push("Prezentuj opcje w sposób strukturalny z jasnym uzasadnieniem.");
        } else if reasoning.contains("dane") {
            enhancements.push("Zachowuj szczególną ostrożność przy przetwarzaniu danych osobowych.");
        } else if reasoning.contains("czas") {
            enhancements.push("Uwzględniaj czynniki czasowe i terminy w swoich rekomendacjach.");
        }
    }

    for pattern in &analysis.workflow_patterns {
        match pattern {
            WorkflowPattern::Conditional => {
                enhancements.push("Zadawaj pytania uściślające gdy potrzebujesz więcej kontekstu.")
            }
            WorkflowPattern::Sequential => {
                enhancements.push("Prowadź użytkownika krok po kroku przez złożone procesy.")
            }
            WorkflowPattern::Parallel => {
                enhancements.push("Rozważaj równoległe rozwiązania dla większej efektywności.")
            }
            WorkflowPattern::Iterative => {}
        }
    }

    match analysis.complexity_level {
        ComplexityLevel::Complex => {
            enhancements.push("Analizuj zadania wieloaspektowo i przedstawiaj kompleksowe rozwiązania.")
        }
        ComplexityLevel::Simple => {
            enhancements.push("Udzielaj prostych, bezpośrednich odpowiedzi bez nadmiernych szczegółów.")
        }
        ComplexityLevel::Medium => {}
    }

    enhancements.dedup();

    let mut prompt = base_prompt(domain).to_string();
    if !enhancements.is_empty() {
        prompt.push_str("\n\nSpecjalne instrukcje:");
        for enhancement in &enhancements {
            prompt.push_str("\n- ");
            prompt.push_str(enhancement);
        }
    }

    let echoed: String = if description.chars().count() > 200 {
        let truncated: String = description.chars().take(200).collect();
        format!("{}...", truncated)
    } else {
        description.to_string()
    };
    prompt.push_str(&format!(
        "\n\nKontekst agenta:\nOpis zadania: {}\nDomena: {}\nPoziom złożoności: {}",
        echoed, domain, analysis.complexity_level
    ));

    prompt
}
