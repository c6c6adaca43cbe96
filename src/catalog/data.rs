//! Static component records
//!
//! Purely descriptive capability units grouped by category. The pipeline
//! selects and configures these records; it never executes them.

use serde_json::json;

use crate::domain::{ComponentCategory, ComponentDescriptor, ComponentKind};

fn component(
    id: &str,
    name: &str,
    kind: ComponentKind,
    category: ComponentCategory,
    description: &str,
    capabilities: &[&str],
) -> ComponentDescriptor {
    ComponentDescriptor {
        component_id: id.to_string(),
        name: name.to_string(),
        kind,
        category,
        description: description.to_string(),
        capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
        default_config: None,
    }
}

pub fn ai_components() -> Vec<ComponentDescriptor> {
    use ComponentCategory::AiProcessing as AI;
    use ComponentKind::*;

    let mut llm_text_generator = component(
        "llm_text_generator",
        "Główny Generator Odpowiedzi",
        Llm,
        AI,
        "Uniwersalny model językowy do generowania odpowiedzi tekstowych",
        &["text_generation", "conversation", "analysis", "reasoning"],
    );
    llm_text_generator.default_config = Some(json!({
        "api_endpoint": "https://text.pollinations.ai/openai",
        "model": "openai",
        "temperature": 0.7,
        "max_tokens": 1000,
        "system_prompt": "Jesteś pomocnym asystentem AI."
    }));

    vec![
        llm_text_generator,
        component(
            "openai_gpt4",
            "OpenAI GPT-4",
            Llm,
            AI,
            "Najnowszy model GPT-4 OpenAI",
            &["text_generation", "conversation", "code_generation", "analysis"],
        ),
        component(
            "anthropic_claude",
            "Anthropic Claude",
            Llm,
            AI,
            "Model Claude - doskonały w analizie i reasoning",
            &["analysis", "reasoning", "safety", "long_context"],
        ),
        component(
            "google_gemini",
            "Google Gemini",
            Llm,
            AI,
            "Model multimodalny Google",
            &["text_generation", "image_analysis", "multimodal_processing"],
        ),
        component(
            "mistral_ai",
            "Mistral AI",
            Llm,
            AI,
            "Europejski model Mistral",
            &["text_generation", "multilingual", "code_generation"],
        ),
        component(
            "intent_classifier",
            "Klasyfikator Intencji",
            Classifier,
            AI,
            "Rozpoznaje intencje użytkownika w wiadomościach",
            &["intent_detection", "classification", "multilingual"],
        ),
        component(
            "sentiment_analyzer",
            "Analizator Sentymentu",
            Classifier,
            AI,
            "Wykrywa nastawienie i emocje w tekście",
            &["sentiment_analysis", "emotion_detection"],
        ),
        component(
            "priority_classifier",
            "Klasyfikator Priorytetów",
            Classifier,
            AI,
            "Nadaje priorytety przychodzącym wiadomościom",
            &["classification", "prioritization"],
        ),
        component(
            "lead_qualifier",
            "Kwalifikator Leadów",
            Classifier,
            AI,
            "Ocenia potencjał sprzedażowy leadów",
            &["lead_scoring", "classification"],
        ),
        component(
            "content_generator",
            "Generator Treści",
            Generic,
            AI,
            "Tworzy spersonalizowane treści marketingowe",
            &["content_creation", "personalization"],
        ),
        component(
            "product_recommender",
            "Rekomendator Produktów",
            Generic,
            AI,
            "Personalizowane rekomendacje produktów",
            &["recommendation", "personalization"],
        ),
        component(
            "personalization_engine",
            "Silnik Personalizacji",
            Generic,
            AI,
            "Dostosowuje treści do profilu odbiorcy",
            &["personalization", "profiling"],
        ),
        component(
            "vision_analyzer",
            "Analizator Obrazów",
            Generic,
            AI,
            "Kompleksowa analiza obrazów",
            &["image_description", "ocr", "object_detection"],
        ),
        component(
            "speech_to_text",
            "Mowa na Tekst",
            Generic,
            AI,
            "Transkrypcja audio na tekst",
            &["transcription", "language_detection"],
        ),
        component(
            "conversation_memory",
            "Pamięć Konwersacji",
            Generic,
            AI,
            "Przechowuje kontekst rozmowy między interakcjami",
            &["context_retention", "history"],
        ),
        component(
            "chat_interface",
            "Interfejs Czatu",
            Generic,
            AI,
            "Warstwa konwersacyjna dla użytkownika końcowego",
            &["conversation", "ui"],
        ),
        component(
            "seo_optimizer",
            "Optymalizator SEO",
            Generic,
            AI,
            "Optymalizuje treści pod kątem wyszukiwarek",
            &["seo", "content_optimization"],
        ),
    ]
}

pub fn integration_components() -> Vec<ComponentDescriptor> {
    use ComponentCategory::Integrations as INT;
    use ComponentKind::Integration;

    let records: &[(&str, &str, &str, &[&str])] = &[
        (
            "gmail_integration",
            "Gmail",
            "Integracja z Gmail - wysyłanie, odbieranie, filtrowanie",
            &["send_email", "read_email", "search_email", "manage_labels"],
        ),
        (
            "outlook_integration",
            "Microsoft Outlook",
            "Integracja z Outlook - poczta i kalendarz",
            &["send_email", "read_email", "calendar_access"],
        ),
        (
            "sendgrid_integration",
            "SendGrid",
            "Masowa wysyłka emaili i newsletterów",
            &["bulk_email", "templates", "delivery_tracking"],
        ),
        (
            "slack_integration",
            "Slack",
            "Integracja z Slack - wiadomości, kanały, powiadomienia",
            &["send_message", "create_channel", "get_messages"],
        ),
        (
            "discord_integration",
            "Discord",
            "Integracja z Discord - boty i serwery",
            &["send_message", "create_channel", "manage_roles"],
        ),
        (
            "telegram_integration",
            "Telegram",
            "Telegram Bot API - wiadomości, grupy, pliki",
            &["send_message", "handle_commands", "file_upload"],
        ),
        (
            "whatsapp_integration",
            "WhatsApp Business",
            "WhatsApp Business API",
            &["send_message", "send_media", "message_templates"],
        ),
        (
            "teams_integration",
            "Microsoft Teams",
            "Microsoft Teams - czat, spotkania, aplikacje",
            &["send_message", "create_meeting", "manage_channels"],
        ),
        (
            "hubspot_integration",
            "HubSpot",
            "CRM HubSpot - kontakty, deale, pipeline",
            &["manage_contacts", "manage_deals", "pipeline_access"],
        ),
        (
            "salesforce_integration",
            "Salesforce",
            "CRM Salesforce - leady i konta",
            &["manage_leads", "manage_accounts", "reporting"],
        ),
        (
            "shopify_integration",
            "Shopify",
            "Sklep Shopify - produkty i zamówienia",
            &["manage_products", "manage_orders", "inventory_sync"],
        ),
        (
            "stripe_integration",
            "Stripe",
            "Płatności Stripe - transakcje i subskrypcje",
            &["process_payments", "manage_subscriptions", "refunds"],
        ),
        (
            "payment_processor",
            "Procesor Płatności",
            "Uniwersalna obsługa płatności online",
            &["process_payments", "fraud_detection"],
        ),
        (
            "google_calendar_integration",
            "Google Calendar",
            "Kalendarz Google - wydarzenia i dostępność",
            &["create_event", "check_availability", "reminders"],
        ),
        (
            "google_drive_integration",
            "Google Drive",
            "Pliki Google Drive - przechowywanie i udostępnianie",
            &["upload_file", "download_file", "share_file"],
        ),
        (
            "openai_api_integration",
            "OpenAI API",
            "Bezpośredni dostęp do API OpenAI",
            &["completions", "embeddings", "moderation"],
        ),
        (
            "social_media_integration",
            "Social Media",
            "Publikacja i monitoring w mediach społecznościowych",
            &["post_content", "monitor_mentions", "engagement_stats"],
        ),
        (
            "accounting_integration",
            "Księgowość",
            "Integracja z systemami księgowymi",
            &["sync_invoices", "expense_import", "reporting"],
        ),
    ];

    records
        .iter()
        .map(|(id, name, description, capabilities)| {
            component(id, name, Integration, INT, description, capabilities)
        })
        .collect()
}

pub fn data_components() -> Vec<ComponentDescriptor> {
    use ComponentCategory::DataTools as DT;
    use ComponentKind::Generic;

    let records: &[(&str, &str, &str, &[&str])] = &[
        (
            "input_processor",
            "Procesor Wejścia",
            "Obsługa i walidacja danych wejściowych",
            &["input_validation", "normalization"],
        ),
        (
            "output_processor",
            "Procesor Wyjścia",
            "Formatowanie i optymalizacja odpowiedzi",
            &["formatting", "output_optimization"],
        ),
        (
            "data_validator",
            "Walidator Danych",
            "Walidacja struktury i zawartości danych",
            &["schema_validation", "sanitization"],
        ),
        (
            "data_transformer",
            "Transformator Danych",
            "Konwersja i transformacja formatów danych",
            &["conversion", "mapping", "enrichment"],
        ),
        (
            "data_enricher",
            "Wzbogacacz Danych",
            "Wzbogaca rekordy o dane z zewnętrznych źródeł",
            &["enrichment", "lookup"],
        ),
        (
            "data_processor",
            "Procesor Danych",
            "Ogólne przetwarzanie zbiorów danych",
            &["aggregation", "filtering"],
        ),
        (
            "data_backup",
            "Backup Danych",
            "Kopie zapasowe przetwarzanych danych",
            &["backup", "versioning"],
        ),
        (
            "recovery_manager",
            "Menedżer Odzyskiwania",
            "Przywracanie danych po awarii",
            &["restore", "integrity_check"],
        ),
        (
            "csv_handler",
            "Obsługa CSV",
            "Import i eksport plików CSV",
            &["csv_import", "csv_export"],
        ),
        (
            "database_connector",
            "Łącznik Bazy Danych",
            "Dostęp do relacyjnych baz danych",
            &["query", "transactions"],
        ),
        (
            "pdf_processor",
            "Procesor PDF",
            "Ekstrakcja i generowanie dokumentów PDF",
            &["pdf_extraction", "pdf_generation"],
        ),
        (
            "file_manager",
            "Menedżer Plików",
            "Zarządzanie plikami i załącznikami",
            &["upload", "download", "storage"],
        ),
        (
            "web_scraper",
            "Web Scraper",
            "Pobieranie danych ze stron internetowych",
            &["scraping", "parsing"],
        ),
        (
            "url_processor",
            "Procesor URL",
            "Analiza i normalizacja adresów URL",
            &["url_parsing", "link_expansion"],
        ),
        (
            "email_parser",
            "Parser Emaili",
            "Parsowanie przychodzących wiadomości email",
            &["email_parsing", "attachment_extraction"],
        ),
        (
            "email_tracker",
            "Tracker Emaili",
            "Śledzenie otwarć i kliknięć wiadomości",
            &["open_tracking", "click_tracking"],
        ),
        (
            "delivery_monitor",
            "Monitor Dostarczenia",
            "Monitorowanie statusu dostarczenia wiadomości",
            &["delivery_status", "bounce_handling"],
        ),
        (
            "email_template_manager",
            "Menedżer Szablonów Email",
            "Zarządzanie szablonami wiadomości",
            &["templates", "personalization"],
        ),
        (
            "log_analyzer",
            "Analizator Logów",
            "Analiza logów operacyjnych",
            &["log_parsing", "anomaly_detection"],
        ),
        (
            "monitoring_agent",
            "Agent Monitoringu",
            "Monitoring stanu integracji i usług",
            &["health_checks", "alerting"],
        ),
        (
            "security_scanner",
            "Skaner Bezpieczeństwa",
            "Skanowanie danych pod kątem zagrożeń",
            &["threat_scanning", "content_filtering"],
        ),
        (
            "knowledge_base",
            "Baza Wiedzy",
            "Wyszukiwanie w bazie wiedzy",
            &["search", "article_retrieval"],
        ),
        (
            "ticket_system",
            "System Ticketów",
            "Obsługa zgłoszeń klientów",
            &["ticket_creation", "status_tracking"],
        ),
        (
            "chat_support",
            "Wsparcie Czatowe",
            "Kanał wsparcia przez czat",
            &["live_chat", "handoff"],
        ),
        (
            "order_tracker",
            "Tracker Zamówień",
            "Śledzenie statusu zamówień",
            &["order_status", "notifications"],
        ),
        (
            "inventory_manager",
            "Menedżer Magazynu",
            "Sprawdza dostępność produktów w czasie rzeczywistym",
            &["stock_check", "availability"],
        ),
        (
            "analytics_tracker",
            "Tracker Analityki",
            "Zbieranie zdarzeń analitycznych",
            &["event_tracking", "reporting"],
        ),
        (
            "expense_tracker",
            "Tracker Wydatków",
            "Rejestrowanie i kategoryzacja wydatków",
            &["expense_logging", "categorization"],
        ),
        (
            "invoice_generator",
            "Generator Faktur",
            "Automatyczne wystawianie faktur",
            &["invoice_creation", "tax_calculation"],
        ),
        (
            "utility_helper",
            "Pomocnik Uniwersalny",
            "Drobne operacje pomocnicze",
            &["utilities"],
        ),
    ];

    records
        .iter()
        .map(|(id, name, description, capabilities)| {
            component(id, name, Generic, DT, description, capabilities)
        })
        .collect()
}

pub fn workflow_components() -> Vec<ComponentDescriptor> {
    use ComponentCategory::WorkflowControl as WC;
    use ComponentKind::WorkflowControl;

    let records: &[(&str, &str, &str, &[&str])] = &[
        (
            "sequential_processor",
            "Procesor Sekwencyjny",
            "Synchronizuje kroki wykonywane po kolei",
            &["sequencing", "checkpointing"],
        ),
        (
            "decision_engine",
            "Silnik Decyzyjny",
            "Logika warunkowa i routing odpowiedzi",
            &["branching", "rule_evaluation"],
        ),
        (
            "parallel_executor",
            "Wykonawca Równoległy",
            "Równoległe przetwarzanie niezależnych zadań",
            &["fan_out", "result_merging"],
        ),
        (
            "loop_controller",
            "Kontroler Pętli",
            "Iteracyjne przetwarzanie z warunkiem stopu",
            &["iteration", "termination_check"],
        ),
        (
            "scheduler",
            "Harmonogram",
            "Planowanie zadań cyklicznych",
            &["scheduling", "cron"],
        ),
        (
            "scheduling_system",
            "System Terminarzy",
            "Rezerwacje terminów i przypomnienia",
            &["booking", "reminders"],
        ),
        (
            "workflow_engine",
            "Silnik Workflow",
            "Zarządzanie przepływem pracy agenta",
            &["orchestration", "state_tracking"],
        ),
        (
            "auto_responder",
            "Auto-Responder",
            "Automatyczne odpowiedzi na przychodzące wiadomości",
            &["auto_reply", "routing"],
        ),
        (
            "campaign_manager",
            "Menedżer Kampanii",
            "Sterowanie kampaniami marketingowymi",
            &["campaign_control", "audience_segmentation"],
        ),
        (
            "performance_monitor",
            "Monitor Wydajności",
            "Monitoring wydajności złożonych agentów",
            &["latency_tracking", "throughput_metrics"],
        ),
    ];

    records
        .iter()
        .map(|(id, name, description, capabilities)| {
            component(id, name, WorkflowControl, WC, description, capabilities)
        })
        .collect()
}

/// All catalog records in category order.
pub fn all_components() -> Vec<ComponentDescriptor> {
    let mut all = ai_components();
    all.extend(integration_components());
    all.extend(data_components());
    all.extend(workflow_components());
    all
}
