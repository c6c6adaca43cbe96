//! Workflow assembly and composite scoring
//!
//! Builds one node per component, chains them sequentially and attaches
//! error handlers to LLM-class nodes. Detected workflow patterns never alter
//! the connection topology; they only influenced which components were
//! selected earlier.

use serde_json::json;
use uuid::Uuid;

use crate::domain::{
    ComponentKind, DescriptionAnalysis, ErrorHandler, ExecutionStrategy, SelectedComponent,
    TriggerConfig, Workflow, WorkflowConnection, WorkflowNode, WorkflowPattern,
};

/// Assembles the workflow for an ordered component list.
pub fn assemble(components: &[SelectedComponent], analysis: &DescriptionAnalysis) -> Workflow {
    // Stable sort by position; equal positions preserve insertion order.
    let mut ordered: Vec<&SelectedComponent> = components.iter().collect();
    ordered.sort_by(|a, b| {
        a.position
            .partial_cmp(&b.position)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let nodes: Vec<WorkflowNode> = ordered
        .iter()
        .enumerate()
        .map(|(i, component)| WorkflowNode {
            id: component.id.clone(),
            node_type: component.component_id.clone(),
            name: component.name.clone(),
            position: component.position,
            configuration: component.configuration.clone().unwrap_or_else(|| json!({})),
            auto_configured: component.auto_configured,
            execution_order: i,
        })
        .collect();

    let connections: Vec<WorkflowConnection> = nodes
        .windows(2)
        .map(|pair| WorkflowConnection {
            id: Uuid::new_v4().to_string(),
            from_node: pair[0].id.clone(),
            to_node: pair[1].id.clone(),
            connection_type: "sequential".to_string(),
            auto_generated: true,
        })
        .collect();

    let error_handling: Vec<ErrorHandler> = ordered
        .iter()
        .filter(|component| component.kind == ComponentKind::Llm)
        .map(|component| ErrorHandler {
            id: Uuid::new_v4().to_string(),
            node_id: component.id.clone(),
            handler_type: "llm_error_handler".to_string(),
            configuration: json!({
                "retry_attempts": 3,
                "backoff_seconds": 2,
                "timeout_seconds": 30,
                "fallback_response": "Przepraszam, wystąpił problem z AI. Spróbuj ponownie.",
            }),
        })
        .collect();

    let triggers = vec![TriggerConfig {
        trigger_type: "user_input".to_string(),
        accepted_inputs: analysis.io_requirements.inputs.clone(),
        validation_enabled: true,
        auto_retry: true,
    }];

    let execution_strategy = ExecutionStrategy {
        strategy: "sequential".to_string(),
        parallel_capable: analysis
            .workflow_patterns
            .contains(&WorkflowPattern::Parallel),
        error_recovery: "auto".to_string(),
    };

    Workflow {
        nodes,
        connections,
        error_handling,
        triggers,
        execution_strategy,
    }
}

/// Composite score summarizing analysis confidence and richness.
pub fn intelligence_score(analysis: &DescriptionAnalysis) -> u8 {
    intelligence_score_parts(
        analysis.confidence_score,
        analysis.implicit_requirements.len(),
        analysis.suggested_components.len(),
        analysis.workflow_patterns.len(),
    )
}

/// Same score computed from a stored analysis snapshot.
pub fn intelligence_score_parts(
    confidence: u8,
    implicit_requirements: usize,
    smart_suggestions: usize,
    workflow_patterns: usize,
) -> u8 {
    let score = 50.0
        + confidence as f64 * 0.3
        + implicit_requirements as f64 * 8.0
        + smart_suggestions as f64 * 5.0
        + workflow_patterns as f64 * 6.0;
    score.clamp(0.0, 100.0) as u8
}

/// Composite score summarizing deployment readiness.
pub fn readiness_score(components: &[SelectedComponent], workflow: &Workflow) -> u8 {
    let mut score = 30usize;
    score += (components.len() * 5).min(40);
    score += components.iter().filter(|c| c.auto_configured).count() * 3;
    if !workflow.error_handling.is_empty() {
        score += 10;
    }
    if !workflow.connections.is_empty() {
        score += 10;
    }
    score.min(100) as u8
}
