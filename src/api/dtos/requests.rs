use crate::domain::models::booker::{BookerSnapshot, BookerState, BookingData, SeatedEventData, TimeFormat, TimePreferencesSnapshot};
use crate::domain::models::email::{CalendarEvent, Person};
use crate::domain::models::event::BookerEvent;
use crate::domain::services::{event_meta::EventMetaProps, timezone_select::TimezoneSelectProps};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateSessionRequest {
    pub booker: BookerSnapshot,
    pub time_preferences: TimePreferencesSnapshot,
}

/// Store actions. Present fields are applied, absent ones are left untouched.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateSessionRequest {
    pub state: Option<BookerState>,
    pub selected_duration: Option<u32>,
    pub booking_data: Option<BookingData>,
    pub reschedule_uid: Option<String>,
    pub seated_event_data: Option<SeatedEventData>,
    pub timezone: Option<String>,
    pub time_format: Option<TimeFormat>,
    /// Drops booking data and reschedule uid.
    pub clear_reschedule: bool,
}

#[derive(Deserialize, Default)]
pub struct EventMetaQuery {
    pub format: Option<String>,
}

#[derive(Deserialize)]
pub struct EventMetaRequest {
    #[serde(flatten)]
    pub props: EventMetaProps,
    #[serde(default)]
    pub current_timezone: Option<String>,
}

#[derive(Deserialize)]
pub struct TimezoneSelectRequest {
    #[serde(default)]
    pub event: Option<BookerEvent>,
    #[serde(flatten)]
    pub props: TimezoneSelectProps,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub current_timezone: Option<String>,
}

#[derive(Deserialize)]
pub struct ChangeTimezoneRequest {
    pub timezone: String,
    #[serde(default)]
    pub event: Option<BookerEvent>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SendEmailRequest {
    AttendeeScheduled {
        calendar_event: CalendarEvent,
        attendee: Person,
    },
    AttendeeCancelled {
        calendar_event: CalendarEvent,
        attendee: Person,
    },
    AttendeeRescheduled {
        calendar_event: CalendarEvent,
        attendee: Person,
        former_start_time: DateTime<Utc>,
    },
}

#[derive(Deserialize)]
pub struct UpdateFeatureRequest {
    pub enabled: bool,
    pub description: Option<String>,
}
