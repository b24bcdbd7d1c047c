use std::sync::Mutex;
use crate::domain::models::email::EmailPayload;
use crate::domain::ports::TestEmailSink;

/// Payloads captured while integration test mode is on, oldest first.
#[derive(Default)]
pub struct TestOutbox {
    emails: Mutex<Vec<EmailPayload>>,
}

impl TestEmailSink for TestOutbox {
    fn capture(&self, payload: EmailPayload) {
        self.emails.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).push(payload);
    }

    fn list(&self) -> Vec<EmailPayload> {
        self.emails.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    fn clear(&self) {
        self.emails.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clear();
    }
}
