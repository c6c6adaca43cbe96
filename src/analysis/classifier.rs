//! Domain and confidence classification
//!
//! Domain inference is first-match-wins over an ordered list of keyword
//! groups. The order is part of the contract: text containing both an email
//! keyword and a shop keyword classifies as communication because the
//! communication group is checked first.

use crate::domain::Domain;

/// Keyword groups in evaluation order. Do not reorder.
const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::Communication,
        &["email", "mail", "poczta", "wiadomość", "newsletter", "smtp", "imap"],
    ),
    (
        Domain::Ecommerce,
        &["shop", "sklep", "product", "produkt", "order", "zamówienie", "payment", "płatność"],
    ),
    (
        Domain::CustomerService,
        &["support", "wsparcie", "help", "pomoc", "ticket", "chat", "customer", "klient"],
    ),
    (
        Domain::Sales,
        &["sales", "sprzedaż", "lead", "crm", "deal", "kontrakt", "offer", "oferta"],
    ),
    (
        Domain::Marketing,
        &["marketing", "campaign", "kampania", "social", "analytics", "tracking"],
    ),
    (
        Domain::Finance,
        &["finance", "finanse", "invoice", "faktura", "payment", "accounting", "księgowość"],
    ),
];

/// Substring keywords that raise the analysis confidence
const CONFIDENCE_KEYWORDS: &[&str] = &[
    "email", "mail", "automation", "integration", "api", "workflow", "process",
];

/// Infers the business domain from lowercased description text.
pub fn detect_domain(text: &str) -> Domain {
    for (domain, keywords) in DOMAIN_KEYWORDS {
        if keywords.iter().any(|kw| text.contains(kw)) {
            return *domain;
        }
    }
    Domain::General
}

/// Confidence in percent: floor 60, ceiling 95, regardless of input.
pub fn confidence_score(tag_count: usize, text: &str) -> u8 {
    let keyword_matches = CONFIDENCE_KEYWORDS
        .iter()
        .filter(|kw| text.contains(*kw))
        .count();
    let total = 50 + 10 * tag_count + 5 * keyword_matches;
    total.clamp(60, 95) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_wins_over_shop() {
        // communication is checked before ecommerce
        let domain = detect_domain("wyślij email do klientów sklepu sklep");
        assert_eq!(domain, Domain::Communication);
    }

    #[test]
    fn falls_back_to_general() {
        assert_eq!(detect_domain("zrób coś pożytecznego"), Domain::General);
    }

    #[test]
    fn payment_without_shop_terms_is_ecommerce_first() {
        // "payment" appears in both the ecommerce and finance groups;
        // ecommerce is evaluated earlier
        assert_eq!(detect_domain("process payment"), Domain::Ecommerce);
    }

    #[test]
    fn confidence_has_floor_and_ceiling() {
        assert_eq!(confidence_score(0, ""), 60);
        assert_eq!(confidence_score(10, "email mail automation integration api workflow process"), 95);
    }

    #[test]
    fn confidence_grows_with_tags_and_keywords() {
        let low = confidence_score(1, "");
        let high = confidence_score(2, "api workflow");
        assert!(low < high);
        assert_eq!(low, 60);
        assert_eq!(high, 80);
    }
}
