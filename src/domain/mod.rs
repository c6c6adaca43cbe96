//! Core domain model: agents, analysis results, components, errors, ports

pub mod agent;
pub mod analysis;
pub mod component;
pub mod error;
pub mod ports;

pub use agent::{
    Agent, AgentConfiguration, AgentMetrics, AgentStatus, AgentSummary, AiAnalysis, ErrorHandler,
    ExecutionStrategy, SelectedComponent, TriggerConfig, Workflow, WorkflowConnection,
    WorkflowNode,
};
pub use analysis::{
    ComplexityLevel, ComponentSuggestion, DescriptionAnalysis, Domain, ImplicitRequirement,
    IoRequirements, PatternTag, WorkflowPattern,
};
pub use component::{CatalogStats, ComponentCategory, ComponentDescriptor, ComponentKind};
pub use error::{GeneratorError, GeneratorResult};
pub use ports::{
    AgentFilter, AgentStore, ComponentCatalog, DomainInsights, SuccessPattern, SuggestionMemory,
};
