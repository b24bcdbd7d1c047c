use std::collections::BTreeMap;
use std::sync::Arc;
use crate::domain::emails::{renderer::EmailRenderer, EmailTemplate};
use crate::domain::models::{
    email::{EmailPayload, SendStatus},
    feature::EMAILS_KILL_SWITCH,
};
use crate::domain::ports::{FeatureFlagRepository, MailTransport, TestEmailSink};
use crate::domain::services::display_name::{decode_subject, is_synthetic_address, sanitize_display_name};
use crate::error::AppError;
use tracing::{error, info, warn};

/// Defaults merged into payloads sent through the fallback transport.
#[derive(Clone, Debug, Default)]
pub struct MailerDefaults {
    pub from: String,
    pub headers: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default)]
pub struct DispatchSettings {
    pub integration_test_mode: bool,
    /// Keeps fallback transport failures out of the logs during E2E runs.
    pub quiet_transport_errors: bool,
    pub synthetic_email_domain: String,
}

pub struct EmailDispatcher {
    features: Arc<dyn FeatureFlagRepository>,
    test_sink: Arc<dyn TestEmailSink>,
    primary: Option<Arc<dyn MailTransport>>,
    fallback: Arc<dyn MailTransport>,
    renderer: Arc<EmailRenderer>,
    defaults: MailerDefaults,
    settings: DispatchSettings,
}

impl EmailDispatcher {
    pub fn new(
        features: Arc<dyn FeatureFlagRepository>,
        test_sink: Arc<dyn TestEmailSink>,
        primary: Option<Arc<dyn MailTransport>>,
        fallback: Arc<dyn MailTransport>,
        renderer: Arc<EmailRenderer>,
        defaults: MailerDefaults,
        settings: DispatchSettings,
    ) -> Self {
        Self { features, test_sink, primary, fallback, renderer, defaults, settings }
    }

    pub fn renderer(&self) -> &EmailRenderer {
        &self.renderer
    }

    /// Runs the send pipeline for one email. Each gate short-circuits.
    /// Failures of the primary transport are returned; fallback failures are only logged.
    pub async fn send(&self, email: &dyn EmailTemplate) -> Result<SendStatus, AppError> {
        if self.features.is_enabled_globally(EMAILS_KILL_SWITCH).await? {
            warn!("Skipped Sending Email due to active Kill Switch");
            return Ok(SendStatus::SkippedKillSwitch);
        }

        if self.settings.integration_test_mode {
            let payload = email.build_payload(&self.renderer)?;
            self.test_sink.capture(payload);
            info!("Skipped sending {} in integration test mode, payload captured", email.name());
            return Ok(SendStatus::SkippedTestMode);
        }

        let payload = email.build_payload(&self.renderer)?;

        if is_synthetic_address(&payload.to, &self.settings.synthetic_email_domain) {
            info!("Skipped Sending Email to faux email: {}", payload.to);
            return Ok(SendStatus::SkippedSyntheticRecipient { to: payload.to });
        }

        let sanitized_from = sanitize_display_name(&payload.from);
        let sanitized_to = sanitize_display_name(&payload.to);
        let subject = payload.subject.as_deref().map(decode_subject);

        if let Some(primary) = &self.primary {
            let outgoing = EmailPayload {
                from: sanitized_from.clone(),
                to: sanitized_to.clone(),
                subject: Some(subject.clone().unwrap_or_default()),
                html: Some(payload.html.clone().unwrap_or_default()),
                text: payload.text.clone(),
                reply_to: payload.reply_to.clone(),
                headers: payload.headers.clone(),
                attachments: payload.attachments.clone(),
            };

            return match primary.send(&outgoing).await {
                Ok(()) => {
                    info!("Email sent via {} to: {}", primary.name(), sanitized_to);
                    Ok(SendStatus::SentViaHttpApi)
                }
                Err(e) => {
                    error!(
                        "sendEmail via {} failed. from: {}, subject: {}, error: {}",
                        primary.name(),
                        sanitized_from,
                        subject.unwrap_or_default(),
                        e
                    );
                    Err(e)
                }
            };
        }

        let merged = self.merge_with_defaults(payload, sanitized_from, sanitized_to, subject);
        if let Err(e) = self.fallback.send(&merged).await {
            if !self.settings.quiet_transport_errors {
                error!("{}_ERROR: {}", email.name(), e);
            }
            error!(
                "sendEmail via {} failed. from: {}, subject: {}",
                self.fallback.name(),
                merged.from,
                merged.subject.as_deref().unwrap_or_default()
            );
        }

        Ok(SendStatus::QueuedViaSmtp)
    }

    /// Payload headers replace the default headers wholesale; an empty sender takes the default.
    fn merge_with_defaults(
        &self,
        payload: EmailPayload,
        from: String,
        to: String,
        subject: Option<String>,
    ) -> EmailPayload {
        let headers = payload
            .headers
            .or_else(|| (!self.defaults.headers.is_empty()).then(|| self.defaults.headers.clone()));
        let from = if from.is_empty() { self.defaults.from.clone() } else { from };

        EmailPayload {
            from,
            to,
            subject: subject.or(payload.subject),
            headers,
            ..payload
        }
    }
}
