use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{FeatureFlagRepository, MarkdownSanitizer, TestEmailSink, Translator};
use crate::domain::services::{booker_context::BookerContext, email_dispatch::EmailDispatcher};
use crate::infra::stores::session_registry::{BookerSession, SessionRegistry};
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub feature_repo: Arc<dyn FeatureFlagRepository>,
    pub sessions: Arc<SessionRegistry>,
    pub translator: Arc<dyn Translator>,
    pub markdown: Arc<dyn MarkdownSanitizer>,
    pub test_outbox: Arc<dyn TestEmailSink>,
    pub email_dispatcher: Arc<EmailDispatcher>,
    pub templates: Arc<Tera>,
}

impl AppState {
    /// Wires a session's stores into a view context. `current_timezone` is the caller's
    /// system zone when known.
    pub fn booker_context(&self, session: &BookerSession, current_timezone: Option<String>) -> BookerContext {
        BookerContext {
            booker: session.booker.clone(),
            time_preferences: session.time_preferences.clone(),
            translator: self.translator.clone(),
            markdown: self.markdown.clone(),
            current_timezone: current_timezone
                .filter(|tz| !tz.is_empty())
                .unwrap_or_else(|| self.config.default_timezone.clone()),
            default_locale: self.config.default_locale.clone(),
        }
    }
}
