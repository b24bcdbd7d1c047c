use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{booker, email, feature, health};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Booker sessions
        .route("/api/v1/booker/sessions", post(booker::create_session))
        .route("/api/v1/booker/sessions/{id}", get(booker::get_session).patch(booker::update_session).delete(booker::delete_session))

        // Views
        .route("/api/v1/booker/sessions/{id}/event-meta", post(booker::event_meta))
        .route("/api/v1/booker/sessions/{id}/timezone-select", post(booker::timezone_select))
        .route("/api/v1/booker/sessions/{id}/timezone", put(booker::change_timezone))

        // Email
        .route("/api/v1/emails/send", post(email::send_email))
        .route("/api/v1/emails/test-outbox", get(email::list_test_outbox).delete(email::clear_test_outbox))

        // Kill switches
        .route("/api/v1/features", get(feature::list_features))
        .route("/api/v1/features/{slug}", get(feature::get_feature).put(feature::update_feature))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
