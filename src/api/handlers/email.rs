use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::SendEmailRequest;
use crate::api::dtos::responses::{SendEmailResponse, TestOutboxResponse};
use crate::domain::emails::{AttendeeCancelledEmail, AttendeeRescheduledEmail, AttendeeScheduledEmail, EmailTemplate};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

impl SendEmailRequest {
    fn into_template(self) -> Box<dyn EmailTemplate> {
        match self {
            SendEmailRequest::AttendeeScheduled { calendar_event, attendee } => {
                Box::new(AttendeeScheduledEmail::new(calendar_event, attendee))
            }
            SendEmailRequest::AttendeeCancelled { calendar_event, attendee } => {
                Box::new(AttendeeCancelledEmail::new(calendar_event, attendee))
            }
            SendEmailRequest::AttendeeRescheduled { calendar_event, attendee, former_start_time } => {
                Box::new(AttendeeRescheduledEmail::new(calendar_event, attendee, former_start_time))
            }
        }
    }
}

pub async fn send_email(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SendEmailRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.into_template();
    let status = state.email_dispatcher.send(email.as_ref()).await?;
    info!("{} dispatch finished: {}", email.name(), status);

    Ok(Json(SendEmailResponse {
        status: status.message(),
        transport_invoked: status.transport_invoked(),
    }))
}

pub async fn list_test_outbox(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let emails = state.test_outbox.list();
    Ok(Json(TestOutboxResponse { count: emails.len(), emails }))
}

pub async fn clear_test_outbox(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    state.test_outbox.clear();
    Ok(Json(serde_json::json!({"status": "cleared"})))
}
