use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchedulingType {
    RoundRobin,
    Collective,
    Managed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TranslatedField {
    Title,
    Description,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FieldTranslation {
    pub field: TranslatedField,
    pub target_locale: String,
    pub translated_text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EventUser {
    pub name: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EventProfile {
    pub name: Option<String>,
    pub image: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EventEntity {
    pub team_slug: Option<String>,
    pub name: Option<String>,
    pub org_slug: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EventLocation {
    #[serde(rename = "type")]
    pub kind: String,
    pub address: Option<String>,
    pub link: Option<String>,
    pub display_location_publicly: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecurringEvent {
    pub freq: RecurringFrequency,
    pub count: u32,
    pub interval: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct EventMetadata {
    pub multiple_duration: Option<Vec<u32>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EventSchedule {
    pub time_zone: Option<String>,
}

/// Read-only slice of an event type as the booking page sees it.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct BookerEvent {
    pub title: String,
    pub description: Option<String>,
    pub length: u32,
    pub price: i64,
    pub currency: String,
    pub locations: Vec<EventLocation>,
    pub scheduling_type: Option<SchedulingType>,
    pub subset_of_users: Vec<EventUser>,
    pub profile: EventProfile,
    pub entity: EventEntity,
    pub metadata: EventMetadata,
    pub requires_confirmation: bool,
    pub recurring_event: Option<RecurringEvent>,
    pub is_dynamic: bool,
    pub seats_per_time_slot: Option<u32>,
    pub lock_time_zone_toggle_on_booking_page: bool,
    pub locked_time_zone: Option<String>,
    pub schedule: Option<EventSchedule>,
    pub field_translations: Vec<FieldTranslation>,
    pub auto_translate_description_enabled: bool,
}

impl BookerEvent {
    pub fn is_timezone_locked(&self) -> bool {
        self.lock_time_zone_toggle_on_booking_page
    }

    /// The timezone the event pins the page to: explicit lock first, then the schedule's zone.
    pub fn locked_timezone(&self) -> Option<&str> {
        self.locked_time_zone
            .as_deref()
            .filter(|tz| !tz.is_empty())
            .or_else(|| {
                self.schedule
                    .as_ref()
                    .and_then(|s| s.time_zone.as_deref())
                    .filter(|tz| !tz.is_empty())
            })
    }
}

/// Entry of a caller supplied timezone list.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Timezone {
    pub time_zone: String,
    pub city: Option<String>,
}
