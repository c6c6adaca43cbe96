//! Implicit requirement synthesis
//!
//! Turns detected topic tags into requirement statements with confidence
//! values and suggested component ids, and derives the expected input/output
//! fields. All mappings are fixed tables; a tag with no mapped requirement
//! contributes nothing.

use crate::domain::{ComponentSuggestion, ImplicitRequirement, IoRequirements, PatternTag};

/// Baseline confidence for tag-derived requirements
const BASE_CONFIDENCE: u8 = 75;

/// Substring keywords marking email-centric descriptions
const EMAIL_KEYWORDS: &[&str] = &["email", "mail", "poczta"];

/// Synthesizes implicit requirements from detected tags and raw text.
pub fn synthesize(tags: &[PatternTag], text: &str) -> Vec<ImplicitRequirement> {
    let mut requirements = Vec::new();

    for statement in statements_for_tags(tags, text) {
        requirements.push(ImplicitRequirement {
            suggested_components: components_for_requirement(&statement),
            reasoning: statement,
            confidence: BASE_CONFIDENCE,
        });
    }

    // Email-centric descriptions get stronger, more specific requirements.
    if tags.contains(&PatternTag::Communication) || contains_any(text, EMAIL_KEYWORDS) {
        requirements.push(ImplicitRequirement {
            reasoning: "Agent do obsługi poczty wymaga integracji SMTP/IMAP".to_string(),
            confidence: 95,
            suggested_components: vec![
                "gmail_integration".to_string(),
                "outlook_integration".to_string(),
                "sendgrid_integration".to_string(),
            ],
        });
        requirements.push(ImplicitRequirement {
            reasoning: "Konieczne jest śledzenie statusu dostarczenia emaili".to_string(),
            confidence: 85,
            suggested_components: vec![
                "email_tracker".to_string(),
                "delivery_monitor".to_string(),
            ],
        });
        requirements.push(ImplicitRequirement {
            reasoning: "Potrzeba automatycznego przetwarzania przychodzących wiadomości"
                .to_string(),
            confidence: 90,
            suggested_components: vec![
                "email_parser".to_string(),
                "auto_responder".to_string(),
                "priority_classifier".to_string(),
            ],
        });
    }

    requirements
}

fn statements_for_tags(tags: &[PatternTag], text: &str) -> Vec<String> {
    let mut statements = Vec::new();

    if tags.contains(&PatternTag::UserInteraction) {
        statements.push("System powinien być intuicyjny i user-friendly".to_string());
        if text.contains("chat") || text.contains("rozmowa") {
            statements.push("Implementacja natural language processing".to_string());
        }
    }
    if tags.contains(&PatternTag::DataProcessing) {
        statements.push("Zabezpieczenie i walidacja danych wejściowych".to_string());
        statements.push("System backup i recovery danych".to_string());
    }
    if tags.contains(&PatternTag::Integration) {
        statements.push("Obsługa rate limiting i error handling".to_string());
        statements.push("Monitoring i logging integracji".to_string());
    }
    if tags.contains(&PatternTag::FileHandling) {
        statements.push("Kontrola rozmiaru i typu plików".to_string());
        statements.push("Skanowanie antywirusowe przesyłanych plików".to_string());
    }
    if tags.contains(&PatternTag::Communication) {
        statements.push("System templates i personalizacji".to_string());
        statements.push("Tracking delivery i engagement".to_string());
    }
    if tags.contains(&PatternTag::Automation) {
        statements.push("Graceful failure handling".to_string());
        statements.push("Manual override capabilities".to_string());
    }

    statements
}

/// Resolves suggested components for a requirement statement by substring.
fn components_for_requirement(statement: &str) -> Vec<String> {
    let lower = statement.to_lowercase();

    let ids: &[&str] = if lower.contains("template") || lower.contains("personaliz") {
        &["email_template_manager", "personalization_engine"]
    } else if lower.contains("tracking") || lower.contains("delivery") {
        &["email_tracker", "delivery_monitor"]
    } else if lower.contains("backup") || lower.contains("recovery") {
        &["data_backup", "recovery_manager"]
    } else if lower.contains("validation") || lower.contains("security") {
        &["data_validator", "security_scanner"]
    } else if lower.contains("monitor") || lower.contains("logging") {
        &["monitoring_agent", "log_analyzer"]
    } else {
        &["utility_helper"]
    };

    ids.iter().map(|s| s.to_string()).collect()
}

/// Components suggested directly from tags, kept on the analysis snapshot.
pub fn suggest_components(tags: &[PatternTag], text: &str) -> Vec<ComponentSuggestion> {
    let mut suggestions = Vec::new();
    let mut push = |id: &str, reason: &str, confidence: u8| {
        suggestions.push(ComponentSuggestion {
            component_id: id.to_string(),
            reason: reason.to_string(),
            confidence,
        });
    };

    if tags.contains(&PatternTag::Communication)
        || contains_any(text, &["email", "mail", "poczta", "śledzenie", "tracking"])
    {
        push("gmail_integration", "Wykryto potrzebę obsługi poczty Gmail", 90);
        push("outlook_integration", "Wykryto potrzebę obsługi poczty Outlook", 85);
        push("sendgrid_integration", "Wykryto potrzebę masowego wysyłania emaili", 80);
        push("email_template_manager", "Wykryto potrzebę zarządzania szablonami emaili", 85);
    }
    if tags.contains(&PatternTag::UserInteraction) {
        push("llm_text_generator", "Wykryto potrzebę generowania odpowiedzi", 95);
        push("intent_classifier", "Wykryto potrzebę klasyfikacji intencji użytkownika", 85);
    }
    if tags.contains(&PatternTag::Automation) {
        push("scheduler", "Wykryto potrzebę automatyzacji procesów", 90);
        push("workflow_engine", "Wykryto potrzebę zarządzania przepływem pracy", 85);
    }
    if tags.contains(&PatternTag::DataProcessing) {
        push("data_validator", "Wykryto potrzebę walidacji danych", 80);
        push("data_transformer", "Wykryto potrzebę przetwarzania danych", 75);
    }

    suggestions
}

/// Derives the expected input and output fields.
///
/// Always includes `user_message` -> `response`; detected tags extend the
/// sets with domain-specific fields. Order is stable, entries unique.
pub fn io_requirements(tags: &[PatternTag], text: &str) -> IoRequirements {
    let mut inputs = vec!["user_message".to_string()];
    let mut outputs = vec!["response".to_string()];

    if tags.contains(&PatternTag::Communication) || contains_any(text, EMAIL_KEYWORDS) {
        extend_unique(&mut inputs, &["email_content", "recipient_list", "subject"]);
        extend_unique(
            &mut outputs,
            &["sent_confirmation", "delivery_status", "email_response"],
        );
    }
    if tags.contains(&PatternTag::DataProcessing) {
        extend_unique(&mut inputs, &["data_file", "parameters"]);
        extend_unique(&mut outputs, &["processed_data", "report"]);
    }
    if tags.contains(&PatternTag::Automation) {
        extend_unique(&mut inputs, &["trigger_event", "schedule"]);
        extend_unique(&mut outputs, &["execution_log", "status_update"]);
    }

    IoRequirements { inputs, outputs }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

fn extend_unique(target: &mut Vec<String>, fields: &[&str]) {
    for field in fields {
        if !target.iter().any(|existing| existing == field) {
            target.push(field.to_string());
        }
    }
}
