use std::collections::HashMap;
use std::sync::LazyLock;
use crate::domain::ports::Translator;
use crate::domain::services::translation::primary_subtag;
use crate::error::AppError;
use regex::{Captures, Regex};
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct I18nConfig {
    locale: LocaleConfig,
}

#[derive(Deserialize)]
struct LocaleConfig {
    source: String,
    targets: Vec<String>,
}

type Catalogue = HashMap<String, String>;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("valid placeholder pattern"));

/// Key/value catalogues per locale with fallback to the source locale, then to the key itself.
pub struct JsonTranslator {
    source: String,
    targets: Vec<String>,
    catalogues: HashMap<String, Catalogue>,
}

impl JsonTranslator {
    pub fn from_json(config_json: &str, catalogues: &[(&str, &str)]) -> Result<Self, AppError> {
        let config: I18nConfig = serde_json::from_str(config_json)
            .map_err(|e| AppError::InternalWithMsg(format!("Invalid i18n config: {}", e)))?;

        let mut parsed = HashMap::new();
        for (locale, json) in catalogues {
            let catalogue: Catalogue = serde_json::from_str(json)
                .map_err(|e| AppError::InternalWithMsg(format!("Invalid catalogue {}: {}", locale, e)))?;
            parsed.insert(locale.to_string(), catalogue);
        }

        Ok(Self {
            source: config.locale.source,
            targets: config.locale.targets,
            catalogues: parsed,
        })
    }

    /// Catalogues compiled into the binary.
    pub fn embedded() -> Self {
        Self::from_json(
            include_str!("../../../i18n.json"),
            &[
                ("en", include_str!("../../../locales/en.json")),
                ("de", include_str!("../../../locales/de.json")),
            ],
        )
        .expect("Embedded i18n catalogues must be valid")
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.catalogues
            .get(locale)
            .or_else(|| self.catalogues.get(primary_subtag(locale)))
            .and_then(|c| c.get(key))
            .or_else(|| self.catalogues.get(&self.source).and_then(|c| c.get(key)))
            .map(String::as_str)
    }
}

impl Translator for JsonTranslator {
    fn translate(&self, locale: &str, key: &str, args: &[(&str, String)]) -> String {
        let Some(template) = self.lookup(locale, key) else {
            debug!("Missing translation for key {} ({})", key, locale);
            return key.to_string();
        };

        // Single pass: substituted values are never scanned for placeholders again.
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                args.iter()
                    .find(|(name, _)| *name == &caps[1])
                    .map(|(_, value)| value.clone())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    fn supported_locales(&self) -> Vec<String> {
        let mut locales = self.targets.clone();
        locales.push(self.source.clone());
        locales
    }
}
