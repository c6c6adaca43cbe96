//! Description analysis: pattern detection, classification, requirement synthesis

pub mod classifier;
pub mod keywords;
pub mod patterns;
pub mod requirements;

use crate::domain::{ComplexityLevel, DescriptionAnalysis};

pub use patterns::{PatternDetector, PatternScan};

/// Analyzes free-text agent descriptions.
///
/// Stateless apart from the compiled pattern tables; the same text always
/// produces the same analysis.
pub struct DescriptionAnalyzer {
    detector: PatternDetector,
}

impl DescriptionAnalyzer {
    pub fn new() -> Self {
        Self {
            detector: PatternDetector::new(),
        }
    }

    /// Runs the full analysis over one description.
    pub fn analyze(&self, description: &str) -> DescriptionAnalysis {
        let text = description.to_lowercase();

        let scan = self.detector.detect(&text);
        let workflow_patterns = patterns::detect_workflow_patterns(&text);
        let implicit_requirements = requirements::synthesize(&scan.tags, &text);
        let suggested_components = requirements::suggest_components(&scan.tags, &text);
        let io_requirements = requirements::io_requirements(&scan.tags, &text);

        let detected_domain = classifier::detect_domain(&text);
        let complexity_level = ComplexityLevel::from_score(scan.complexity_score);
        let confidence_score = classifier::confidence_score(scan.tags.len(), &text);

        DescriptionAnalysis {
            detected_patterns: scan.tags,
            complexity_score: scan.complexity_score,
            urgency_score: scan.urgency_score,
            implicit_requirements,
            workflow_patterns,
            technical_keywords: keywords::technical_keywords(&text),
            business_keywords: keywords::business_keywords(&text),
            detected_domain,
            complexity_level,
            confidence_score,
            suggested_components,
            io_requirements,
        }
    }
}

impl Default for DescriptionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;

    #[test]
    fn analysis_is_deterministic() {
        let analyzer = DescriptionAnalyzer::new();
        let first = analyzer.analyze("Obsługa klientów przez chat i email, krok po kroku");
        let second = analyzer.analyze("Obsługa klientów przez chat i email, krok po kroku");

        assert_eq!(first.detected_patterns, second.detected_patterns);
        assert_eq!(first.detected_domain, second.detected_domain);
        assert_eq!(first.complexity_score, second.complexity_score);
        assert_eq!(first.confidence_score, second.confidence_score);
        assert_eq!(
            first.implicit_requirements.len(),
            second.implicit_requirements.len()
        );
    }

    #[test]
    fn mail_tracking_description_is_communication() {
        let analyzer = DescriptionAnalyzer::new();
        let analysis = analyzer.analyze("stwórz agenta do śledzenia poczty i wysyłania maili");

        assert_eq!(analysis.detected_domain, Domain::Communication);
        assert!(analysis
            .io_requirements
            .inputs
            .iter()
            .any(|f| f == "email_content"));
        assert!(analysis.implicit_requirements.iter().any(|r| r
            .suggested_components
            .contains(&"gmail_integration".to_string())));
    }

    #[test]
    fn confidence_stays_within_bounds() {
        let analyzer = DescriptionAnalyzer::new();
        for text in [
            "",
            "x",
            "email api workflow automation integration process mail chat dane raport",
        ] {
            let analysis = analyzer.analyze(text);
            assert!((60..=95).contains(&analysis.confidence_score));
        }
    }

    #[test]
    fn complexity_level_follows_thresholds() {
        assert_eq!(ComplexityLevel::from_score(0), ComplexityLevel::Simple);
        assert_eq!(ComplexityLevel::from_score(4), ComplexityLevel::Medium);
        assert_eq!(ComplexityLevel::from_score(7), ComplexityLevel::Complex);
        assert_eq!(ComplexityLevel::from_score(10), ComplexityLevel::Complex);
    }
}
