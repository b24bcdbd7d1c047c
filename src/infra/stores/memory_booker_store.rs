use std::sync::Mutex;
use crate::domain::models::booker::{BookerSnapshot, BookerState, BookingData, SeatedEventData};
use crate::domain::ports::BookerStore;

#[derive(Default)]
pub struct MemoryBookerStore {
    inner: Mutex<BookerSnapshot>,
}

impl MemoryBookerStore {
    pub fn new(initial: BookerSnapshot) -> Self {
        Self { inner: Mutex::new(initial) }
    }

    fn update(&self, f: impl FnOnce(&mut BookerSnapshot)) {
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard);
    }
}

impl BookerStore for MemoryBookerStore {
    fn snapshot(&self) -> BookerSnapshot {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    fn set_state(&self, state: BookerState) {
        self.update(|s| s.state = state);
    }

    fn set_selected_duration(&self, duration: Option<u32>) {
        self.update(|s| s.selected_duration = duration);
    }

    fn set_booking_data(&self, data: Option<BookingData>) {
        self.update(|s| s.booking_data = data);
    }

    fn set_reschedule_uid(&self, uid: Option<String>) {
        self.update(|s| s.reschedule_uid = uid);
    }

    fn set_seated_event_data(&self, data: SeatedEventData) {
        self.update(|s| s.seated_event_data = data);
    }

    fn set_timezone(&self, timezone: &str) {
        self.update(|s| s.timezone = Some(timezone.to_string()));
    }
}
