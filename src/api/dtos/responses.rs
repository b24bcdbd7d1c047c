use crate::domain::models::booker::{BookerSnapshot, TimePreferencesSnapshot};
use crate::domain::models::email::EmailPayload;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub booker: BookerSnapshot,
    pub time_preferences: TimePreferencesSnapshot,
}

#[derive(Serialize)]
pub struct SendEmailResponse {
    pub status: String,
    pub transport_invoked: bool,
}

#[derive(Serialize)]
pub struct TestOutboxResponse {
    pub count: usize,
    pub emails: Vec<EmailPayload>,
}
