use crate::domain::models::email::{CalendarEvent, EmailPayload, Person};
use crate::error::AppError;
use super::{build_attendee_payload, renderer::EmailRenderer, AttendeeEmailParts, EmailTemplate};

pub struct AttendeeCancelledEmail {
    pub calendar_event: CalendarEvent,
    pub attendee: Person,
}

impl AttendeeCancelledEmail {
    pub fn new(calendar_event: CalendarEvent, attendee: Person) -> Self {
        Self { calendar_event, attendee }
    }
}

impl EmailTemplate for AttendeeCancelledEmail {
    fn name(&self) -> &str {
        "SEND_CANCELLED_EMAILS"
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
                subject_key: "email_cancelled_subject",
                heading_key: "email_cancelled_heading",
                former_time: None,
                reason: self.calendar_event.cancellation_reason.as_deref(),
                attach_invite: false,
            },
        )
    }
}
