use crate::domain::models::email::{CalendarEvent, EmailPayload, Person};
use crate::error::AppError;
use super::{build_attendee_payload, renderer::EmailRenderer, AttendeeEmailParts, EmailTemplate};

/// Confirmation sent to an attendee, with the calendar invite attached.
pub struct AttendeeScheduledEmail {
    pub calendar_event: CalendarEvent,
    pub attendee: Person,
}

impl AttendeeScheduledEmail {
    pub fn new(calendar_event: CalendarEvent, attendee: Person) -> Self {
        Self { calendar_event, attendee }
    }
}

impl EmailTemplate for AttendeeScheduledEmail {
    fn name(&self) -> &str {
        "SEND_BOOKING_CONFIRMATION"
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
                subject_key: "email_scheduled_subject",
                heading_key: "email_scheduled_heading",
                former_time: None,
                reason: None,
                attach_invite: true,
            },
        )
    }
}
