//! Technical and business vocabulary extraction

const TECHNICAL_TERMS: &[&str] = &[
    "api", "rest", "graphql", "webhook", "json", "xml", "csv",
    "database", "sql", "nosql", "redis", "mongodb", "postgresql",
    "authentication", "oauth", "jwt", "ssl", "https",
    "cloud", "aws", "azure", "gcp", "docker", "kubernetes",
    "microservices", "serverless", "lambda", "function",
];

const BUSINESS_TERMS: &[&str] = &[
    "customer", "klient", "user", "użytkownik",
    "sale", "sprzedaż", "revenue", "przychód",
    "marketing", "campaign", "kampania",
    "support", "wsparcie", "help", "pomoc",
    "analytics", "analityka", "report", "raport",
    "efficiency", "efektywność", "productivity", "produktywność",
    "cost", "koszt", "budget", "budżet",
    "roi", "return", "zwrot", "profit", "zysk",
];

fn matched_terms(text: &str, terms: &[&str]) -> Vec<String> {
    terms
        .iter()
        .filter(|term| text.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

/// Technical vocabulary matched in lowercased text.
pub fn technical_keywords(text: &str) -> Vec<String> {
    matched_terms(text, TECHNICAL_TERMS)
}

/// Business vocabulary matched in lowercased text.
pub fn business_keywords(text: &str) -> Vec<String> {
    matched_terms(text, BUSINESS_TERMS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_substring_based() {
        let technical = technical_keywords("połączenie z postgresql przez api");
        assert_eq!(technical, vec!["api", "sql", "postgresql"]);
    }

    #[test]
    fn business_terms_cover_both_languages() {
        let business = business_keywords("wsparcie klienta i raport roi");
        assert!(business.contains(&"klient".to_string()));
        assert!(business.contains(&"raport".to_string()));
        assert!(business.contains(&"roi".to_string()));
    }
}
