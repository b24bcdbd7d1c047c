use crate::domain::models::{
    booker::{BookerSnapshot, BookerState, BookingData, SeatedEventData, TimeFormat, TimePreferencesSnapshot},
    email::EmailPayload,
    feature::FeatureFlag,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait FeatureFlagRepository: Send + Sync {
    async fn find(&self, slug: &str) -> Result<Option<FeatureFlag>, AppError>;
    async fn upsert(&self, flag: &FeatureFlag) -> Result<FeatureFlag, AppError>;
    async fn list(&self) -> Result<Vec<FeatureFlag>, AppError>;

    async fn is_enabled_globally(&self, slug: &str) -> Result<bool, AppError> {
        Ok(self.find(slug).await?.is_some_and(|f| f.enabled))
    }
}

/// A way of putting a finished payload on the wire.
#[async_trait]
pub trait MailTransport: Send + Sync {
    fn name(&self) -> &'static str;
    async fn send(&self, payload: &EmailPayload) -> Result<(), AppError>;
}

/// Capture target for payloads while integration test mode is on.
pub trait TestEmailSink: Send + Sync {
    fn capture(&self, payload: EmailPayload);
    fn list(&self) -> Vec<EmailPayload>;
    fn clear(&self);
}

/// Booking flow state. Mutations are synchronous and last write wins.
pub trait BookerStore: Send + Sync {
    fn snapshot(&self) -> BookerSnapshot;
    fn set_state(&self, state: BookerState);
    fn set_selected_duration(&self, duration: Option<u32>);
    fn set_booking_data(&self, data: Option<BookingData>);
    fn set_reschedule_uid(&self, uid: Option<String>);
    fn set_seated_event_data(&self, data: SeatedEventData);
    fn set_timezone(&self, timezone: &str);
}

pub trait TimePreferencesStore: Send + Sync {
    fn snapshot(&self) -> TimePreferencesSnapshot;
    fn set_timezone(&self, timezone: &str);
    fn set_time_format(&self, format: TimeFormat);
}

pub trait Translator: Send + Sync {
    /// Looks up `key` for `locale`, substituting `{{name}}` placeholders from `args`.
    fn translate(&self, locale: &str, key: &str, args: &[(&str, String)]) -> String;

    /// Locales translated content may be shown in: the targets plus the source locale.
    fn supported_locales(&self) -> Vec<String>;
}

pub trait MarkdownSanitizer: Send + Sync {
    fn to_safe_html(&self, markdown: &str) -> String;
}
