use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmailAttachment {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// Transport fields of a single email. Lives only for one send attempt.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct EmailPayload {
    pub from: String,
    pub to: String,
    pub subject: Option<String>,
    pub html: Option<String>,
    pub text: Option<String>,
    pub reply_to: Option<String>,
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub attachments: Vec<EmailAttachment>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Person {
    pub name: String,
    pub email: String,
    #[serde(default = "default_timezone")]
    pub time_zone: String,
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

/// Booking facts the email builders render from.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CalendarEvent {
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub organizer: Person,
    #[serde(default)]
    pub attendees: Vec<Person>,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
}

/// Outcome of a send call that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendStatus {
    SkippedKillSwitch,
    SkippedTestMode,
    SkippedSyntheticRecipient { to: String },
    SentViaHttpApi,
    QueuedViaSmtp,
}

impl SendStatus {
    pub fn message(&self) -> String {
        let message = match self {
            SendStatus::SkippedKillSwitch => "Skipped Sending Email due to active Kill Switch",
            SendStatus::SkippedTestMode => "Skipped sendEmail for Unit Tests",
            SendStatus::SkippedSyntheticRecipient { to } => {
                return format!("Skipped Sending Email to faux email: {}", to);
            }
            SendStatus::SentViaHttpApi => "send mail via http api",
            SendStatus::QueuedViaSmtp => "send mail async",
        };
        message.to_string()
    }

    pub fn transport_invoked(&self) -> bool {
        matches!(self, SendStatus::SentViaHttpApi | SendStatus::QueuedViaSmtp)
    }
}

impl std::fmt::Display for SendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
