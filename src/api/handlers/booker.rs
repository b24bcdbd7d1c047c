use axum::{extract::{Path, Query, State}, http::StatusCode, response::{Html, IntoResponse, Response}, Json};
use crate::api::dtos::requests::{
    ChangeTimezoneRequest, CreateSessionRequest, EventMetaQuery, EventMetaRequest, TimezoneSelectRequest, UpdateSessionRequest,
};
use crate::api::dtos::responses::SessionResponse;
use crate::domain::services::{
    event_meta::render_event_meta,
    timezone_select::{on_change, on_mount, render_timezone_select},
};
use crate::error::AppError;
use crate::infra::stores::session_registry::BookerSession;
use crate::infra::views::render_event_meta_html;
use crate::state::AppState;
use std::sync::Arc;
use tracing::{debug, info};

fn find_session(state: &AppState, id: &str) -> Result<Arc<BookerSession>, AppError> {
    state.sessions.get(id).ok_or(AppError::NotFound(format!("Booker session {} not found", id)))
}

fn session_response(session: &BookerSession) -> SessionResponse {
    SessionResponse {
        id: session.id.clone(),
        created_at: session.created_at,
        booker: session.booker.snapshot(),
        time_preferences: session.time_preferences.snapshot(),
    }
}

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.sessions.create(payload.booker, payload.time_preferences);
    info!("Created booker session {}", session.id);
    Ok((StatusCode::CREATED, Json(session_response(&session))))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = find_session(&state, &id)?;
    Ok(Json(session_response(&session)))
}

pub async fn update_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = find_session(&state, &id)?;
    let ctx = state.booker_context(&session, None);

    if let Some(tz) = &payload.timezone {
        on_change(tz, None, &ctx)?;
    }
    if let Some(booker_state) = payload.state {
        session.booker.set_state(booker_state);
    }
    if payload.selected_duration.is_some() {
        session.booker.set_selected_duration(payload.selected_duration);
    }
    if payload.clear_reschedule {
        session.booker.set_booking_data(None);
        session.booker.set_reschedule_uid(None);
    }
    if payload.booking_data.is_some() {
        session.booker.set_booking_data(payload.booking_data);
    }
    if payload.reschedule_uid.is_some() {
        session.booker.set_reschedule_uid(payload.reschedule_uid);
    }
    if let Some(seated) = payload.seated_event_data {
        session.booker.set_seated_event_data(seated);
    }
    if let Some(format) = payload.time_format {
        session.time_preferences.set_time_format(format);
    }

    debug!("Updated booker session {}", id);
    Ok(Json(session_response(&session)))
}

pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.sessions.remove(&id) {
        return Err(AppError::NotFound(format!("Booker session {} not found", id)));
    }
    info!("Deleted booker session {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

/// Renders the event meta view. The embedded timezone selector mounts first, so a locked
/// event timezone is synced into the stores before rendering.
pub async fn event_meta(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<EventMetaQuery>,
    Json(payload): Json<EventMetaRequest>,
) -> Result<Response, AppError> {
    let session = find_session(&state, &id)?;
    let ctx = state.booker_context(&session, payload.current_timezone);
    let props = payload.props;

    let selector_mounted =
        props.show_timezone_select && !props.hide_event_type_details && !props.is_pending && props.event.is_some();
    if selector_mounted {
        on_mount(props.event.as_ref(), &ctx);
    }

    let view = render_event_meta(&props, &ctx);

    match query.format.as_deref() {
        Some("html") => Ok(Html(render_event_meta_html(&state.templates, &view)?).into_response()),
        Some("json") | None => Ok(Json(view).into_response()),
        Some(other) => Err(AppError::Validation(format!("Unsupported format: {}", other))),
    }
}

pub async fn timezone_select(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<TimezoneSelectRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = find_session(&state, &id)?;
    let ctx = state.booker_context(&session, payload.current_timezone);
    let locale = payload.locale.unwrap_or_else(|| ctx.default_locale.clone());

    on_mount(payload.event.as_ref(), &ctx);
    Ok(Json(render_timezone_select(payload.event.as_ref(), &payload.props, &locale, &ctx)))
}

pub async fn change_timezone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<ChangeTimezoneRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = find_session(&state, &id)?;
    let ctx = state.booker_context(&session, None);

    on_change(&payload.timezone, payload.event.as_ref(), &ctx)?;
    info!("Booker session {} switched timezone to {}", id, payload.timezone);
    Ok(Json(session_response(&session)))
}
