use std::collections::BTreeMap;
use std::env;
use crate::infra::stores::session_registry::{DEFAULT_SESSION_IDLE_TIMEOUT_SECONDS, DEFAULT_SESSION_MAX_CAPACITY};

#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub secure: bool,
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub email_from: String,
    pub email_headers: BTreeMap<String, String>,
    pub smtp: SmtpConfig,
    pub integration_test_mode: bool,
    pub is_e2e: bool,
    pub synthetic_email_domain: String,
    pub default_locale: String,
    pub default_timezone: String,
    pub session_idle_timeout_secs: u64,
    pub session_max_capacity: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://booker-meta.db".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            resend_api_key: env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty()),
            resend_api_url: env::var("RESEND_API_URL").unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
            email_from: env::var("EMAIL_FROM").unwrap_or_else(|_| "Booking <notifications@booking.local>".to_string()),
            email_headers: env::var("EMAIL_HEADERS")
                .ok()
                .map(|raw| parse_headers(&raw))
                .unwrap_or_default(),
            smtp: SmtpConfig {
                host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: env::var("SMTP_PORT").unwrap_or_else(|_| "587".to_string()).parse().expect("SMTP_PORT must be a number"),
                username: env::var("SMTP_USER").ok().filter(|u| !u.is_empty()),
                password: env::var("SMTP_PASSWORD").ok().filter(|p| !p.is_empty()),
                secure: flag("SMTP_SECURE"),
            },
            integration_test_mode: flag("INTEGRATION_TEST_MODE"),
            is_e2e: flag("IS_E2E"),
            synthetic_email_domain: env::var("SYNTHETIC_EMAIL_DOMAIN").unwrap_or_else(|_| "sms.booking.local".to_string()),
            default_locale: env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string()),
            default_timezone: env::var("DEFAULT_TIMEZONE").unwrap_or_else(|_| "UTC".to_string()),
            session_idle_timeout_secs: env::var("SESSION_IDLE_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SESSION_IDLE_TIMEOUT_SECONDS),
            session_max_capacity: env::var("SESSION_MAX_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SESSION_MAX_CAPACITY),
        }
    }
}

fn flag(name: &str) -> bool {
    is_true(env::var(name).ok().as_deref())
}

/// Only the literal `true` switches a flag on.
fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Parses `Name: value; Other: value` into a header map. Malformed entries are skipped.
pub fn parse_headers(raw: &str) -> BTreeMap<String, String> {
    raw.split(';')
        .filter_map(|entry| {
            let (name, value) = entry.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), value.trim().to_string()))
        })
        .collect()
}
