use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Global kill switch for outgoing email.
pub const EMAILS_KILL_SWITCH: &str = "emails";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct FeatureFlag {
    pub slug: String,
    pub enabled: bool,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl FeatureFlag {
    pub fn new(slug: String, enabled: bool, description: Option<String>) -> Self {
        Self {
            slug,
            enabled,
            description,
            updated_at: Utc::now(),
        }
    }
}
