//! Component selection
//!
//! Builds the ordered component list for a new agent. The step order is part
//! of the contract: it decides which confidence wins on duplicates and where
//! synthetic components end up in the workflow. The output processor is
//! pinned last; everything selected later is spliced in before it.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    ComplexityLevel, ComponentCatalog, ComponentKind, DescriptionAnalysis, Domain,
    GeneratorResult, SelectedComponent, SuggestionMemory, WorkflowPattern,
};

/// Learned suggestions below this confidence are ignored
const LEARNED_CONFIDENCE_FLOOR: u8 = 70;

/// Result of the selection phase
pub struct SelectionOutcome {
    pub components: Vec<SelectedComponent>,
    /// How many learned suggestions were merged in
    pub learned_applied: usize,
}

pub struct ComponentSelector {
    catalog: Arc<dyn ComponentCatalog>,
    memory: Arc<dyn SuggestionMemory>,
    max_components: usize,
}

impl ComponentSelector {
    pub fn new(
        catalog: Arc<dyn ComponentCatalog>,
        memory: Arc<dyn SuggestionMemory>,
        max_components: usize,
    ) -> Self {
        Self {
            catalog,
            memory,
            max_components,
        }
    }

    /// Selects and orders the components for one agent.
    pub async fn select(
        &self,
        description: &str,
        domain: Domain,
        complexity: ComplexityLevel,
        analysis: &DescriptionAnalysis,
    ) -> GeneratorResult<SelectionOutcome> {
        let mut components: Vec<SelectedComponent> = Vec::new();

        // 1. Domain-essential components; output processor stays last.
        components.push(entry(
            "input_processor",
            "Procesor Wejścia",
            "Obsługa i walidacja danych wejściowych",
            95,
            ComponentKind::Generic,
        ));
        components.push(entry(
            "llm_text_generator",
            "Główny Generator Odpowiedzi",
            "Podstawowy komponent AI - generowanie odpowiedzi",
            100,
            ComponentKind::Llm,
        ));
        for (id, name, reason) in domain_essentials(domain) {
            components.push(entry(id, name, reason, 90, kind_hint(id)));
        }
        components.push(entry(
            "output_processor",
            "Procesor Wyjścia",
            "Formatowanie i optymalizacja odpowiedzi",
            95,
            ComponentKind::Generic,
        ));

        // 2. Components derived from implicit requirements.
        for requirement in &analysis.implicit_requirements {
            for component_id in &requirement.suggested_components {
                if contains_id(&components, component_id) {
                    continue;
                }
                self.push_from_catalog(
                    &mut components,
                    component_id,
                    format!("Wykryte wymaganie: {}", requirement.reasoning),
                    requirement.confidence,
                )
                .await?;
            }
        }

        // 3. Components mapped from detected workflow patterns.
        for pattern in &analysis.workflow_patterns {
            let (component_id, reason, confidence) = pattern_component(*pattern);
            if contains_id(&components, component_id) {
                continue;
            }
            self.push_from_catalog(&mut components, component_id, reason.to_string(), confidence)
                .await?;
        }

        // 4. Extras for highly complex agents.
        if complexity == ComplexityLevel::Complex
            && !contains_id(&components, "performance_monitor")
        {
            self.push_from_catalog(
                &mut components,
                "performance_monitor",
                "Złożony agent wymaga monitoringu wydajności".to_string(),
                75,
            )
            .await?;
        }

        // 5. High-confidence learned suggestions.
        let existing_ids: Vec<String> =
            components.iter().map(|c| c.component_id.clone()).collect();
        let learned = self
            .memory
            .suggest(description, domain, &existing_ids)
            .await?;
        let mut learned_applied = 0;
        for suggestion in learned {
            if suggestion.confidence <= LEARNED_CONFIDENCE_FLOOR {
                continue;
            }
            // An id that is already present still competes on confidence;
            // the dedup pass below keeps whichever entry scored higher.
            let is_new = !contains_id(&components, &suggestion.component_id);
            let before = components.len();
            self.push_from_catalog(
                &mut components,
                &suggestion.component_id,
                suggestion.reason.clone(),
                suggestion.confidence,
            )
            .await?;
            if is_new && components.len() > before {
                learned_applied += 1;
            }
        }

        // 6. Deduplicate by component id, keeping the higher confidence.
        //    First-seen order is preserved; ties keep the first entry.
        let mut components = dedupe(components);

        // 7. Workflow-completeness pass.
        self.ensure_completeness(&mut components, analysis);

        if components.len() > self.max_components {
            warn!(
                limit = self.max_components,
                selected = components.len(),
                "component limit exceeded, truncating"
            );
            components.truncate(self.max_components);
        }

        // Materialize positions from the final splice order.
        for (i, component) in components.iter_mut().enumerate() {
            component.position = i as f64;
        }

        Ok(SelectionOutcome {
            components,
            learned_applied,
        })
    }

    /// Appends a catalog component before the output processor.
    ///
    /// Unknown ids are skipped: the pipeline must never fail just because the
    /// catalog lacks an entry.
    async fn push_from_catalog(
        &self,
        components: &mut Vec<SelectedComponent>,
        component_id: &str,
        reason: String,
        confidence: u8,
    ) -> GeneratorResult<()> {
        let Some(descriptor) = self.catalog.get_component(component_id).await? else {
            debug!(component_id, "suggested component not in catalog, skipping");
            return Ok(());
        };

        let component = SelectedComponent {
            id: Uuid::new_v4().to_string(),
            component_id: descriptor.component_id,
            name: descriptor.name,
            kind: descriptor.kind,
            reason,
            confidence,
            auto_added: true,
            position: 0.0,
            configuration: None,
            auto_configured: false,
        };
        insert_before_output(components, component);
        Ok(())
    }

    fn ensure_completeness(
        &self,
        components: &mut Vec<SelectedComponent>,
        analysis: &DescriptionAnalysis,
    ) {
        let has_input = components.iter().any(|c| c.component_id.contains("input"));
        let has_validation = components
            .iter()
            .any(|c| c.component_id.contains("validat"));
        let has_error = components.iter().any(|c| c.component_id.contains("error"));

        if !has_input {
            components.insert(
                0,
                entry(
                    "advanced_input_processor",
                    "Auto: Advanced Input Handler",
                    "Dodany automatycznie - kompleksowa obsługa wejścia",
                    95,
                    ComponentKind::Generic,
                ),
            );
        }

        // Validation is only injected for agents whose requirements touch
        // client or sensitive data.
        let handles_sensitive_data = analysis.implicit_requirements.iter().any(|r| {
            let reasoning = r.reasoning.to_lowercase();
            reasoning.contains("klient") || reasoning.contains("dane")
        });
        if !has_validation && handles_sensitive_data {
            let index = 1.min(components.len());
            components.insert(
                index,
                entry(
                    "advanced_input_validator",
                    "Auto: Security Validator",
                    "Dodany automatycznie - agent przetwarza dane wrażliwe",
                    90,
                    ComponentKind::Generic,
                ),
            );
        }

        if !has_error {
            insert_before_output(
                components,
                entry(
                    "smart_error_handler",
                    "Auto: Smart Error Handler",
                    "Dodany automatycznie - obsługa błędów",
                    85,
                    ComponentKind::WorkflowControl,
                ),
            );
        }
    }
}

fn entry(
    component_id: &str,
    name: &str,
    reason: &str,
    confidence: u8,
    kind: ComponentKind,
) -> SelectedComponent {
    SelectedComponent {
        id: Uuid::new_v4().to_string(),
        component_id: component_id.to_string(),
        name: name.to_string(),
        kind,
        reason: reason.to_string(),
        confidence,
        auto_added: true,
        position: 0.0,
        configuration: None,
        auto_configured: false,
    }
}

fn contains_id(components: &[SelectedComponent], component_id: &str) -> bool {
    components.iter().any(|c| c.component_id == component_id)
}

/// Inserts before the output processor, or appends when it is absent.
pub(crate) fn insert_before_output(
    components: &mut Vec<SelectedComponent>,
    component: SelectedComponent,
) {
    match components
        .iter()
        .position(|c| c.component_id.contains("output"))
    {
        Some(index) => components.insert(index, component),
        None => components.push(component),
    }
}

fn dedupe(components: Vec<SelectedComponent>) -> Vec<SelectedComponent> {
    let mut unique: Vec<SelectedComponent> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for component in components {
        match seen.get(&component.component_id) {
            Some(&index) => {
                if component.confidence > unique[index].confidence {
                    unique[index] = component;
                }
            }
            None => {
                seen.insert(component.component_id.clone(), unique.len());
                unique.push(component);
            }
        }
    }

    unique
}

fn kind_hint(component_id: &str) -> ComponentKind {
    match component_id {
        "intent_classifier" | "sentiment_analyzer" | "lead_qualifier" => ComponentKind::Classifier,
        _ => ComponentKind::Generic,
    }
}

fn domain_essentials(domain: Domain) -> &'static [(&'static str, &'static str, &'static str)] {
    match domain {
        Domain::CustomerService => &[
            (
                "intent_classifier",
                "Klasyfikator Intencji",
                "Niezbędny dla obsługi klienta - rozpoznaje potrzeby",
            ),
            (
                "sentiment_analyzer",
                "Analizator Sentymentu",
                "Wykrywa frustrację klientów dla lepszej obsługi",
            ),
        ],
        Domain::Sales => &[
            (
                "lead_qualifier",
                "Kwalifikator Leadów",
                "Podstawa procesu sprzedaży - ocenia potencjał",
            ),
            (
                "data_enricher",
                "Wzbogacacz Danych",
                "Wzbogaca informacje o leadach z zewnętrznych źródeł",
            ),
        ],
        Domain::Ecommerce => &[
            (
                "product_recommender",
                "Rekomendator Produktów",
                "Kluczowy dla sprzedaży online - personalizowane rekomendacje",
            ),
            (
                "inventory_manager",
                "Menedżer Magazynu",
                "Sprawdza dostępność produktów w czasie rzeczywistym",
            ),
        ],
        Domain::Marketing => &[
            (
                "content_generator",
                "Generator Treści",
                "Tworzy spersonalizowane treści marketingowe",
            ),
            (
                "seo_optimizer",
                "Optymalizator SEO",
                "Optymalizuje treści pod kątem wyszukiwarek",
            ),
        ],
        _ => &[],
    }
}

fn pattern_component(pattern: WorkflowPattern) -> (&'static str, &'static str, u8) {
    match pattern {
        WorkflowPattern::Sequential => (
            "sequential_processor",
            "Wykryto wzorzec sekwencyjny - potrzebna synchronizacja",
            85,
        ),
        WorkflowPattern::Conditional => (
            "decision_engine",
            "Wykryto wzorce warunkowe - potrzebna logika decyzyjna",
            90,
        ),
        WorkflowPattern::Parallel => (
            "parallel_executor",
            "Wykryto możliwość przetwarzania równoległego",
            80,
        ),
        WorkflowPattern::Iterative => (
            "loop_controller",
            "Wykryto wzorce iteracyjne - potrzebna kontrola pętli",
            85,
        ),
    }
}
