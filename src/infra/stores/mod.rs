pub mod memory_booker_store;
pub mod memory_time_preferences;
pub mod session_registry;

#[cfg(test)]
pub fn test_context(current_timezone: &str) -> crate::domain::services::booker_context::BookerContext {
    use std::sync::Arc;
    use crate::domain::services::booker_context::BookerContext;
    use crate::infra::{i18n::json_translator::JsonTranslator, markdown::safe_markdown::SafeMarkdown};

    BookerContext {
        booker: Arc::new(memory_booker_store::MemoryBookerStore::default()),
        time_preferences: Arc::new(memory_time_preferences::MemoryTimePreferences::default()),
        translator: Arc::new(JsonTranslator::embedded()),
        markdown: Arc::new(SafeMarkdown::new()),
        current_timezone: current_timezone.to_string(),
        default_locale: "en".to_string(),
    }
}
