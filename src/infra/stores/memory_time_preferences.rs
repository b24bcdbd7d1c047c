use std::sync::Mutex;
use crate::domain::models::booker::{TimeFormat, TimePreferencesSnapshot};
use crate::domain::ports::TimePreferencesStore;

#[derive(Default)]
pub struct MemoryTimePreferences {
    inner: Mutex<TimePreferencesSnapshot>,
}

impl MemoryTimePreferences {
    pub fn new(initial: TimePreferencesSnapshot) -> Self {
        Self { inner: Mutex::new(initial) }
    }
}

impl TimePreferencesStore for MemoryTimePreferences {
    fn snapshot(&self) -> TimePreferencesSnapshot {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    fn set_timezone(&self, timezone: &str) {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).timezone = Some(timezone.to_string());
    }

    fn set_time_format(&self, format: TimeFormat) {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).time_format = format;
    }
}
