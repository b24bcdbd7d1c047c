//! Payload builders, one per transactional email type.

pub mod attendee_cancelled;
pub mod attendee_rescheduled;
pub mod attendee_scheduled;
pub mod renderer;

use crate::domain::models::email::{CalendarEvent, EmailAttachment, EmailPayload, Person};
use crate::domain::services::calendar::generate_ics;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use renderer::{EmailRenderer, ATTENDEE_EVENT_TEMPLATE};
use serde_json::json;

pub use attendee_cancelled::AttendeeCancelledEmail;
pub use attendee_rescheduled::AttendeeRescheduledEmail;
pub use attendee_scheduled::AttendeeScheduledEmail;

pub const RECIPIENT_TIME_FORMAT: &str = "%-I:%M%P %A, %B %-d, %Y";

/// Capability every sendable email provides to the dispatcher.
pub trait EmailTemplate: Send + Sync {
    /// Used to tag log lines.
    fn name(&self) -> &str;

    fn timezone(&self) -> &str {
        "UTC"
    }

    fn locale(&self) -> &str {
        "en"
    }

    /// `time` in the recipient's timezone.
    fn formatted_recipient_time(&self, time: DateTime<Utc>, format: &str) -> String {
        let tz: Tz = self.timezone().parse().unwrap_or(chrono_tz::UTC);
        time.with_timezone(&tz).format(format).to_string()
    }

    fn build_payload(&self, renderer: &EmailRenderer) -> Result<EmailPayload, AppError>;
}

pub(crate) struct AttendeeEmailParts<'a> {
    pub subject_key: &'a str,
    pub heading_key: &'a str,
    pub former_time: Option<String>,
    pub reason: Option<&'a str>,
    pub attach_invite: bool,
}

pub(crate) fn build_attendee_payload<T: EmailTemplate + ?Sized>(
    email: &T,
    renderer: &EmailRenderer,
    event: &CalendarEvent,
    attendee: &Person,
    parts: AttendeeEmailParts<'_>,
) -> Result<EmailPayload, AppError> {
    let locale = email.locale();
    let when = format!(
        "{} - {}",
        email.formatted_recipient_time(event.start_time, RECIPIENT_TIME_FORMAT),
        email.formatted_recipient_time(event.end_time, "%-I:%M%P")
    );
    let subject = renderer.t(
        locale,
        parts.subject_key,
        &[
            ("title", event.title.clone()),
            ("organizer", event.organizer.name.clone()),
            ("time", email.formatted_recipient_time(event.start_time, RECIPIENT_TIME_FORMAT)),
        ],
    );
    let heading = renderer.t(locale, parts.heading_key, &[]);

    let context = tera::Context::from_value(json!({
        "subject": subject,
        "heading": heading,
        "title": event.title,
        "when": when,
        "former_time": parts.former_time,
        "timezone": email.timezone(),
        "location": event.location,
        "organizer": event.organizer.name,
        "attendees": event.attendees.iter().map(|a| a.name.clone()).collect::<Vec<_>>(),
        "description": event.description,
        "reason": parts.reason,
        "labels": {
            "what": renderer.t(locale, "email_what", &[]),
            "when": renderer.t(locale, "email_when", &[]),
            "place": renderer.t(locale, "email_where", &[]),
            "who": renderer.t(locale, "email_who", &[]),
            "reason": renderer.t(locale, "email_reason", &[]),
            "organizer": renderer.t(locale, "email_organizer", &[]),
        }
    }))?;

    let html = renderer.render_mjml(ATTENDEE_EVENT_TEMPLATE, &context)?;

    let mut text = format!("{}\n\n{}\n{}\n", heading, event.title, when);
    if let Some(location) = &event.location {
        text.push_str(&format!("{}\n", location));
    }
    if let Some(reason) = parts.reason {
        text.push_str(&format!("\n{}: {}\n", renderer.t(locale, "email_reason", &[]), reason));
    }

    let attachments = if parts.attach_invite {
        vec![EmailAttachment {
            filename: "invite.ics".to_string(),
            content_type: "text/calendar; charset=utf-8; method=REQUEST".to_string(),
            content: generate_ics(event).into_bytes(),
        }]
    } else {
        Vec::new()
    };

    Ok(EmailPayload {
        from: format!("{} <{}>", event.organizer.name, renderer.from_address),
        to: format!("{} <{}>", attendee.name, attendee.email),
        subject: Some(subject),
        html: Some(html),
        text: Some(text),
        reply_to: Some(event.organizer.email.clone()),
        headers: None,
        attachments,
    })
}
