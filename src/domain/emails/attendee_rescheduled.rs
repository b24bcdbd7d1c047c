use chrono::{DateTime, Utc};
use crate::domain::models::email::{CalendarEvent, EmailPayload, Person};
use crate::error::AppError;
use super::{build_attendee_payload, renderer::EmailRenderer, AttendeeEmailParts, EmailTemplate, RECIPIENT_TIME_FORMAT};

pub struct AttendeeRescheduledEmail {
    pub calendar_event: CalendarEvent,
    pub attendee: Person,
    pub former_start_time: DateTime<Utc>,
}

impl AttendeeRescheduledEmail {
    pub fn new(calendar_event: CalendarEvent, attendee: Person, former_start_time: DateTime<Utc>) -> Self {
        Self { calendar_event, attendee, former_start_time }
    }
}

impl EmailTemplate for AttendeeRescheduledEmail {
    fn name(&self) -> &str {
        "SEND_RESCHEDULED_EMAILS"
    }

    fn timezone(&self) -> &str {
        &self.attendee.time_zone
    }

    fn locale(&self) -> &str {
        &self.attendee.locale
    }

    fn build_payload(&self, renderer: &EmailRenderer) -> Result<EmailPayload, AppError> {
        build_attendee_payload(
            self,
            renderer,
            &self.calendar_event,
            &self.attendee,
            AttendeeEmailParts {
                subject_key: "email_rescheduled_subject",
                heading_key: "email_rescheduled_heading",
                former_time: Some(self.formatted_recipient_time(self.former_start_time, RECIPIENT_TIME_FORMAT)),
                reason: None,
                attach_invite: true,
            },
        )
    }
}
