use crate::domain::models::event::{FieldTranslation, TranslatedField};

/// Primary language subtag, e.g. `pt` for `pt-BR`.
pub fn primary_subtag(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

/// Finds the translated text for `field` matching `user_locale` exactly or by primary subtag.
/// Entries whose target locale is not in `supported_locales` are ignored.
pub fn get_translated_field<'a>(
    translations: &'a [FieldTranslation],
    field: TranslatedField,
    user_locale: &str,
    supported_locales: &[String],
) -> Option<&'a str> {
    let primary = primary_subtag(user_locale);

    translations
        .iter()
        .find(|t| {
            t.field == field
                && supported_locales.iter().any(|l| l == &t.target_locale)
                && (user_locale == t.target_locale || primary == t.target_locale)
        })
        .map(|t| t.translated_text.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(field: TranslatedField, locale: &str, text: &str) -> FieldTranslation {
        FieldTranslation {
            field,
            target_locale: locale.to_string(),
            translated_text: text.to_string(),
        }
    }

    fn supported() -> Vec<String> {
        ["en", "de", "fr", "pt-BR"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_locale_match() {
        let translations = vec![
            entry(TranslatedField::Title, "de", "Beratung"),
            entry(TranslatedField::Title, "pt-BR", "Consulta"),
        ];
        assert_eq!(
            get_translated_field(&translations, TranslatedField::Title, "pt-BR", &supported()),
            Some("Consulta")
        );
    }

    #[test]
    fn test_primary_subtag_fallback() {
        let translations = vec![entry(TranslatedField::Description, "de", "Hallo")];
        assert_eq!(
            get_translated_field(&translations, TranslatedField::Description, "de-AT", &supported()),
            Some("Hallo")
        );
    }

    #[test]
    fn test_field_kind_must_match() {
        let translations = vec![entry(TranslatedField::Description, "de", "Hallo")];
        assert_eq!(get_translated_field(&translations, TranslatedField::Title, "de", &supported()), None);
    }

    #[test]
    fn test_unsupported_locale_is_ignored() {
        let translations = vec![entry(TranslatedField::Title, "xx", "???")];
        assert_eq!(get_translated_field(&translations, TranslatedField::Title, "xx", &supported()), None);
    }

    #[test]
    fn test_regional_entry_does_not_match_bare_user_locale() {
        let translations = vec![entry(TranslatedField::Title, "pt-BR", "Consulta")];
        assert_eq!(get_translated_field(&translations, TranslatedField::Title, "pt", &supported()), None);
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let translations = vec![
            entry(TranslatedField::Title, "de", "Erste"),
            entry(TranslatedField::Title, "de", "Zweite"),
        ];
        assert_eq!(
            get_translated_field(&translations, TranslatedField::Title, "de-DE", &supported()),
            Some("Erste")
        );
    }
}
