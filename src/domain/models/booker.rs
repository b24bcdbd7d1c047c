use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Phase of the booking flow.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookerState {
    #[default]
    Loading,
    SelectingDate,
    SelectingTime,
    Booking,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl TimeFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            TimeFormat::TwelveHour => "%-I:%M%P",
            TimeFormat::TwentyFourHour => "%H:%M",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingAttendee {
    pub name: String,
    pub email: String,
}

/// Existing booking loaded when the page is opened for a reschedule.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingData {
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub attendees: Vec<BookingAttendee>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SeatedEventData {
    pub seats_per_time_slot: Option<u32>,
    pub attendees: Option<u32>,
    pub booking_uid: Option<String>,
    pub show_available_seats_count: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct BookerSnapshot {
    pub state: BookerState,
    pub selected_duration: Option<u32>,
    pub booking_data: Option<BookingData>,
    pub reschedule_uid: Option<String>,
    pub seated_event_data: SeatedEventData,
    pub timezone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TimePreferencesSnapshot {
    pub timezone: Option<String>,
    pub time_format: TimeFormat,
}
