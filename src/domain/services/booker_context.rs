use std::sync::Arc;
use crate::domain::models::booker::{BookerSnapshot, TimeFormat};
use crate::domain::ports::{BookerStore, MarkdownSanitizer, TimePreferencesStore, Translator};

/// Everything a booking page view reads from or writes to, passed in explicitly.
#[derive(Clone)]
pub struct BookerContext {
    pub booker: Arc<dyn BookerStore>,
    pub time_preferences: Arc<dyn TimePreferencesStore>,
    pub translator: Arc<dyn Translator>,
    pub markdown: Arc<dyn MarkdownSanitizer>,
    /// Timezone of the caller's system, used when nothing else is set.
    pub current_timezone: String,
    /// Locale used when the view gets none.
    pub default_locale: String,
}

/// Resolved timezone and time format for the page.
pub struct BookerTime {
    pub timezone: Option<String>,
    pub time_format: TimeFormat,
}

impl BookerContext {
    /// Booker store timezone first, then the time preferences.
    pub fn booker_time(&self) -> BookerTime {
        let prefs = self.time_preferences.snapshot();
        let timezone = self
            .booker
            .snapshot()
            .timezone
            .filter(|tz| !tz.is_empty())
            .or(prefs.timezone.filter(|tz| !tz.is_empty()));

        BookerTime {
            timezone,
            time_format: prefs.time_format,
        }
    }

    pub fn booker_snapshot(&self) -> BookerSnapshot {
        self.booker.snapshot()
    }

    /// Writes `timezone` into both state containers.
    pub fn sync_timezone(&self, timezone: &str) {
        self.time_preferences.set_timezone(timezone);
        self.booker.set_timezone(timezone);
    }

    pub fn t(&self, locale: &str, key: &str) -> String {
        self.translator.translate(locale, key, &[])
    }
}
