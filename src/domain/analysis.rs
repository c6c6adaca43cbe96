//! Description analysis types
//!
//! A [`DescriptionAnalysis`] is the result of running one free-text agent
//! description through the pattern detector, domain classifier and
//! requirement synthesizer. All fields are pure functions of the input text
//! and the requested domain, so repeated analysis of the same text yields
//! identical results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GeneratorError;

/// Coarse topic tags detected from description text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternTag {
    DataProcessing,
    UserInteraction,
    Automation,
    Integration,
    FileHandling,
    Communication,
    Security,
    Analytics,
}

impl fmt::Display for PatternTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatternTag::DataProcessing => "data_processing",
            PatternTag::UserInteraction => "user_interaction",
            PatternTag::Automation => "automation",
            PatternTag::Integration => "integration",
            PatternTag::FileHandling => "file_handling",
            PatternTag::Communication => "communication",
            PatternTag::Security => "security",
            PatternTag::Analytics => "analytics",
        };
        write!(f, "{}", s)
    }
}

/// Business-context domain of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Auto-detect sentinel; also the fallback when no domain matches
    #[default]
    General,
    Communication,
    Ecommerce,
    CustomerService,
    Sales,
    Marketing,
    Finance,
    Hr,
    Development,
    Analytics,
    Legal,
    Creative,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Domain::General => "general",
            Domain::Communication => "communication",
            Domain::Ecommerce => "ecommerce",
            Domain::CustomerService => "customer_service",
            Domain::Sales => "sales",
            Domain::Marketing => "marketing",
            Domain::Finance => "finance",
            Domain::Hr => "hr",
            Domain::Development => "development",
            Domain::Analytics => "analytics",
            Domain::Legal => "legal",
            Domain::Creative => "creative",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Domain {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Domain::General),
            "communication" => Ok(Domain::Communication),
            "ecommerce" => Ok(Domain::Ecommerce),
            "customer_service" => Ok(Domain::CustomerService),
            "sales" => Ok(Domain::Sales),
            "marketing" => Ok(Domain::Marketing),
            "finance" => Ok(Domain::Finance),
            "hr" => Ok(Domain::Hr),
            "development" => Ok(Domain::Development),
            "analytics" => Ok(Domain::Analytics),
            "legal" => Ok(Domain::Legal),
            "creative" => Ok(Domain::Creative),
            other => Err(GeneratorError::Validation(format!(
                "Unknown domain: {}",
                other
            ))),
        }
    }
}

/// Ordinal complexity class derived from the complexity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Simple,
    /// Auto-detect sentinel on input; an ordinary level on output
    #[default]
    Medium,
    Complex,
}

impl ComplexityLevel {
    /// Maps a complexity score to a level using fixed thresholds.
    pub fn from_score(score: u8) -> Self {
        if score >= 7 {
            ComplexityLevel::Complex
        } else if score >= 4 {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::Simple
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComplexityLevel::Simple => "simple",
            ComplexityLevel::Medium => "medium",
            ComplexityLevel::Complex => "complex",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ComplexityLevel {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(ComplexityLevel::Simple),
            "medium" => Ok(ComplexityLevel::Medium),
            "complex" => Ok(ComplexityLevel::Complex),
            other => Err(GeneratorError::Validation(format!(
                "Unknown complexity level: {}",
                other
            ))),
        }
    }
}

/// Workflow shapes detected from description phrasing.
///
/// Patterns only influence which components are selected; they never alter
/// the connection topology of the assembled workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPattern {
    Sequential,
    Conditional,
    Parallel,
    Iterative,
}

/// A requirement inferred from text patterns without being explicitly stated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplicitRequirement {
    /// Human-readable reasoning behind the requirement
    pub reasoning: String,
    /// Confidence in percent
    pub confidence: u8,
    /// Catalog component ids that would satisfy the requirement
    pub suggested_components: Vec<String>,
}

/// A component suggestion with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSuggestion {
    pub component_id: String,
    pub reason: String,
    pub confidence: u8,
}

/// Input/output fields an agent is expected to handle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IoRequirements {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl IoRequirements {
    /// Total number of distinct I/O fields.
    pub fn field_count(&self) -> usize {
        self.inputs.len() + self.outputs.len()
    }
}

/// Full result of analyzing one agent description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionAnalysis {
    /// Detected topic tags (unique, insertion order)
    pub detected_patterns: Vec<PatternTag>,
    /// Complexity score in [0, 10]
    pub complexity_score: u8,
    /// Urgency score in [0, 10]
    pub urgency_score: u8,
    /// Requirements inferred from the detected tags
    pub implicit_requirements: Vec<ImplicitRequirement>,
    /// Detected workflow shapes
    pub workflow_patterns: Vec<WorkflowPattern>,
    /// Matched technical vocabulary
    pub technical_keywords: Vec<String>,
    /// Matched business vocabulary
    pub business_keywords: Vec<String>,
    /// Domain inferred from the text (first-match-wins order)
    pub detected_domain: Domain,
    /// Complexity level derived from `complexity_score`
    pub complexity_level: ComplexityLevel,
    /// Analysis confidence in [60, 95]
    pub confidence_score: u8,
    /// Components suggested directly from the detected tags
    pub suggested_components: Vec<ComponentSuggestion>,
    /// Expected input/output fields
    pub io_requirements: IoRequirements,
}
