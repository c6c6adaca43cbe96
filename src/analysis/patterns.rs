//! Keyword and regex pattern detection over description text

use regex::Regex;

use crate::domain::{PatternTag, WorkflowPattern};

/// Raw detection result before classification
#[derive(Debug, Clone)]
pub struct PatternScan {
    /// Detected topic tags, unique, in detection order
    pub tags: Vec<PatternTag>,
    /// `min(10, 2 * complexity_matches + tag_count)`
    pub complexity_score: u8,
    /// `min(10, 3 * urgency_matches)`
    pub urgency_score: u8,
}

/// Detects coarse topic tags and complexity/urgency signals in free text.
///
/// Each tag owns one or more word-boundary expressions mixing Polish and
/// English vocabulary; a tag is present if any expression matches anywhere in
/// the lowercased text. Membership only, no ordering semantics.
pub struct PatternDetector {
    patterns: Vec<(PatternTag, Vec<Regex>)>,
    complexity_indicators: Vec<Regex>,
    urgency_indicators: Vec<Regex>,
}

fn compile(expressions: &[&str]) -> Vec<Regex> {
    expressions
        .iter()
        .map(|e| Regex::new(&format!("(?i){}", e)).expect("static pattern must compile"))
        .collect()
}

impl PatternDetector {
    pub fn new() -> Self {
        let patterns = vec![
            (
                PatternTag::DataProcessing,
                compile(&[
                    r"\b(proces|przetwarzanie|analiza|dane|database|baza|csv|excel|json)\b",
                    r"\b(import|export|konwersja|transformacja|parsing)\b",
                ]),
            ),
            (
                PatternTag::UserInteraction,
                compile(&[
                    r"\b(chat|rozmowa|conversation|interface|ui|użytkownik|user)\b",
                    r"\b(input|wejście|pytanie|question|odpowiedź|response)\b",
                ]),
            ),
            (
                PatternTag::Automation,
                compile(&[
                    r"\b(automatyz|automation|trigger|scheduled|cron|workflow)\b",
                    r"\b(task|zadanie|proces|process|wykonanie|execution)\b",
                ]),
            ),
            (
                PatternTag::Integration,
                compile(&[
                    r"\b(api|integration|connect|połączenie|webhook|sync)\b",
                    r"\b(slack|discord|gmail|google|facebook|twitter|salesforce)\b",
                ]),
            ),
            (
                PatternTag::FileHandling,
                compile(&[
                    r"\b(file|plik|document|dokument|upload|download|storage)\b",
                    r"\b(pdf|doc|txt|image|photo|zdjęcie|obrazek)\b",
                ]),
            ),
            (
                PatternTag::Communication,
                compile(&[
                    r"\b(email|mail|wiadomość|message|notification|powiadomienie)\b",
                    r"\b(send|wyślij|receive|odbierz|sms|newsletter)\b",
                ]),
            ),
            (
                PatternTag::Security,
                compile(&[
                    r"\b(security|bezpieczeństwo|auth|login|password|hasło)\b",
                    r"\b(permission|uprawnienie|role|rola|access|dostęp)\b",
                ]),
            ),
            (
                PatternTag::Analytics,
                compile(&[
                    r"\b(analityka|analytics|report|raport|statystyki|metrics)\b",
                    r"\b(dashboard|wykres|chart|visualization|monitoring)\b",
                ]),
            ),
        ];

        let complexity_indicators = compile(&[
            r"\b(complex|złożony|advanced|zaawansowany|sophisticated)\b",
            r"\b(multiple|wiele|different|różne|various|różnorodne)\b",
            r"\b(custom|niestandardowy|specific|specyficzny|unique)\b",
        ]);

        let urgency_indicators = compile(&[
            r"\b(urgent|pilne|asap|natychmiast|quickly|szybko)\b",
            r"\b(deadline|termin|time|czas|today|dzisiaj|immediately)\b",
        ]);

        Self {
            patterns,
            complexity_indicators,
            urgency_indicators,
        }
    }

    /// Runs all matchers over the (already lowercased) text.
    ///
    /// Empty text yields an empty tag set and zero scores.
    pub fn detect(&self, text: &str) -> PatternScan {
        let mut tags = Vec::new();
        for (tag, expressions) in &self.patterns {
            if expressions.iter().any(|re| re.is_match(text)) {
                tags.push(*tag);
            }
        }

        let complexity_matches = self
            .complexity_indicators
            .iter()
            .filter(|re| re.is_match(text))
            .count();
        let urgency_matches = self
            .urgency_indicators
            .iter()
            .filter(|re| re.is_match(text))
            .count();

        let complexity_score = (2 * complexity_matches + tags.len()).min(10) as u8;
        let urgency_score = (3 * urgency_matches).min(10) as u8;

        PatternScan {
            tags,
            complexity_score,
            urgency_score,
        }
    }
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Detects workflow shapes from phrasing.
///
/// Patterns select extra components later in the pipeline; they never change
/// the linear connection topology of the assembled workflow.
pub fn detect_workflow_patterns(text: &str) -> Vec<WorkflowPattern> {
    let mut patterns = Vec::new();
    let contains_any =
        |words: &[&str]| words.iter().any(|w| text.contains(w));

    if contains_any(&["step", "krok", "kolejno", "następnie", "then", "after"]) {
        patterns.push(WorkflowPattern::Sequential);
    }
    if contains_any(&["if", "jeśli", "when", "kiedy", "condition", "warunek"]) {
        patterns.push(WorkflowPattern::Conditional);
    }
    if contains_any(&["parallel", "równolegle", "simultaneously", "jednocześnie"]) {
        patterns.push(WorkflowPattern::Parallel);
    }
    if contains_any(&["repeat", "powtarzaj", "loop", "cycle", "cykl"]) {
        patterns.push(WorkflowPattern::Iterative);
    }

    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_nothing() {
        let scan = PatternDetector::new().detect("");
        assert!(scan.tags.is_empty());
        assert_eq!(scan.complexity_score, 0);
        assert_eq!(scan.urgency_score, 0);
    }

    #[test]
    fn detects_tags_in_both_languages() {
        let detector = PatternDetector::new();
        let scan = detector.detect("wyślij email i raport przez api");
        assert!(scan.tags.contains(&PatternTag::Communication));
        assert!(scan.tags.contains(&PatternTag::Analytics));
        assert!(scan.tags.contains(&PatternTag::Integration));
    }

    #[test]
    fn tag_membership_is_unique() {
        let detector = PatternDetector::new();
        let scan = detector.detect("email mail wiadomość newsletter");
        let communication = scan
            .tags
            .iter()
            .filter(|t| **t == PatternTag::Communication)
            .count();
        assert_eq!(communication, 1);
    }

    #[test]
    fn complexity_score_counts_indicators_and_tags() {
        let detector = PatternDetector::new();
        // one complexity indicator, one tag
        let scan = detector.detect("advanced chat");
        assert_eq!(scan.complexity_score, 3);
    }

    #[test]
    fn complexity_monotonic_in_indicator_matches() {
        let detector = PatternDetector::new();
        let base = detector.detect("chat").complexity_score;
        let one = detector.detect("advanced chat").complexity_score;
        let two = detector.detect("advanced custom chat").complexity_score;
        assert!(base <= one && one <= two);
    }

    #[test]
    fn scores_are_capped_at_ten() {
        let detector = PatternDetector::new();
        let scan = detector.detect(
            "complex multiple custom urgent deadline quickly today chat email api file dane raport auth",
        );
        assert!(scan.complexity_score <= 10);
        assert!(scan.urgency_score <= 10);
    }
}
