use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Utc};
use moka::sync::Cache;
use uuid::Uuid;
use crate::domain::models::booker::{BookerSnapshot, TimePreferencesSnapshot};
use crate::domain::ports::{BookerStore, TimePreferencesStore};
use super::{memory_booker_store::MemoryBookerStore, memory_time_preferences::MemoryTimePreferences};

pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECONDS: u64 = 1800;
pub const DEFAULT_SESSION_MAX_CAPACITY: u64 = 100_000;

/// The two state containers of one booking page visitor.
pub struct BookerSession {
    pub id: String,
    pub booker: Arc<dyn BookerStore>,
    pub time_preferences: Arc<dyn TimePreferencesStore>,
    pub created_at: DateTime<Utc>,
}

/// Live booker sessions. A session not read for `idle_timeout` is evicted.
pub struct SessionRegistry {
    sessions: Cache<String, Arc<BookerSession>>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(DEFAULT_SESSION_IDLE_TIMEOUT_SECONDS),
            DEFAULT_SESSION_MAX_CAPACITY,
        )
    }
}

impl SessionRegistry {
    pub fn new(idle_timeout: Duration, max_capacity: u64) -> Self {
        Self {
            sessions: Cache::builder()
                .time_to_idle(idle_timeout)
                .max_capacity(max_capacity)
                .build(),
        }
    }

    pub fn create(&self, booker: BookerSnapshot, time_preferences: TimePreferencesSnapshot) -> Arc<BookerSession> {
        let session = Arc::new(BookerSession {
            id: Uuid::new_v4().to_string(),
            booker: Arc::new(MemoryBookerStore::new(booker)),
            time_preferences: Arc::new(MemoryTimePreferences::new(time_preferences)),
            created_at: Utc::now(),
        });
        self.sessions.insert(session.id.clone(), session.clone());
        session
    }

    pub fn get(&self, id: &str) -> Option<Arc<BookerSession>> {
        self.sessions.get(id)
    }

    pub fn remove(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn len(&self) -> u64 {
        self.sessions.run_pending_tasks();
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
