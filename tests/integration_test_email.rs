mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use common::{parse_body, RecordingTransport, TestApp, TestOptions};
use serde_json::{json, Value};

fn scheduled_request(attendee_email: &str) -> Value {
    json!({
        "kind": "attendee_scheduled",
        "calendar_event": {
            "uid": "evt-42",
            "title": "Intro Call",
            "location": "Zoom",
            "start_time": "2025-03-10T14:00:00Z",
            "end_time": "2025-03-10T14:30:00Z",
            "organizer": {"name": "Ada \"Host\"", "email": "ada@example.com"},
            "attendees": [{"name": "Grace", "email": attendee_email}]
        },
        "attendee": {"name": "Grace", "email": attendee_email, "time_zone": "Europe/Berlin", "locale": "en"}
    })
}

async fn set_kill_switch(app: &TestApp, enabled: bool) {
    let res = app.request("PUT", "/api/v1/features/emails", Some(json!({"enabled": enabled}))).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_fallback_transport_receives_merged_payload() {
    let app = TestApp::new().await;

    let res = app.request("POST", "/api/v1/emails/send", Some(scheduled_request("grace@example.com"))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "send mail async");
    assert_eq!(body["transport_invoked"], true);

    let sent = app.fallback.sent();
    assert_eq!(sent.len(), 1);
    let mail = &sent[0];
    assert_eq!(mail.from, "Ada Host <notifications@booking.local>");
    assert_eq!(mail.to, "Grace <grace@example.com>");
    assert_eq!(mail.subject.as_deref(), Some("Confirmed: Intro Call with Ada \"Host\" at 3:00pm Monday, March 10, 2025"));
    assert_eq!(mail.headers.as_ref().unwrap()["X-Mailer"], "booker-meta");
    assert_eq!(mail.attachments[0].filename, "invite.ics");
    assert!(mail.html.as_deref().unwrap().contains("Intro Call"));
}

#[tokio::test]
async fn test_kill_switch_blocks_all_transports() {
    let primary = RecordingTransport::new("resend");
    let app = TestApp::with_options(TestOptions { primary: Some(primary.clone()), ..Default::default() }).await;

    set_kill_switch(&app, true).await;

    let res = app.request("POST", "/api/v1/emails/send", Some(scheduled_request("grace@example.com"))).await;
    let body = parse_body(res).await;
    assert_eq!(body["status"], "Skipped Sending Email due to active Kill Switch");
    assert_eq!(body["transport_invoked"], false);
    assert!(primary.sent().is_empty());
    assert!(app.fallback.sent().is_empty());

    set_kill_switch(&app, false).await;
    let res = app.request("POST", "/api/v1/emails/send", Some(scheduled_request("grace@example.com"))).await;
    assert_eq!(parse_body(res).await["status"], "send mail via http api");
    assert_eq!(primary.sent().len(), 1);
}

#[tokio::test]
async fn test_synthetic_recipient_is_skipped() {
    let app = TestApp::new().await;

    let res = app.request("POST", "/api/v1/emails/send", Some(scheduled_request("4915112345@sms.booking.local"))).await;
    let body = parse_body(res).await;
    assert_eq!(body["status"], "Skipped Sending Email to faux email: Grace <4915112345@sms.booking.local>");
    assert!(app.fallback.sent().is_empty());
}

#[tokio::test]
async fn test_primary_failure_is_reported_and_fallback_unused() {
    let primary = RecordingTransport::failing("resend");
    let app = TestApp::with_options(TestOptions { primary: Some(primary.clone()), ..Default::default() }).await;

    let res = app.request("POST", "/api/v1/emails/send", Some(scheduled_request("grace@example.com"))).await;
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(parse_body(res).await["error"], "Email provider rejected the message");
    assert_eq!(primary.sent().len(), 1);
    assert!(app.fallback.sent().is_empty());
}

#[tokio::test]
async fn test_fallback_failure_is_swallowed() {
    let app = TestApp::with_options(TestOptions {
        fallback: Some(RecordingTransport::failing("smtp")),
        ..Default::default()
    }).await;

    let res = app.request("POST", "/api/v1/emails/send", Some(json!({
        "kind": "attendee_cancelled",
        "calendar_event": {
            "uid": "evt-7",
            "title": "Standup",
            "start_time": "2025-06-01T08:00:00Z",
            "end_time": "2025-06-01T08:15:00Z",
            "organizer": {"name": "Lin", "email": "lin@example.com"},
            "cancellation_reason": "Holiday"
        },
        "attendee": {"name": "Sam", "email": "sam@example.com"}
    }))).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "send mail async");
    assert_eq!(app.fallback.sent().len(), 1);
}

#[tokio::test]
async fn test_integration_mode_captures_into_outbox() {
    let app = TestApp::with_options(TestOptions { integration_test_mode: true, ..Default::default() }).await;

    let res = app.request("POST", "/api/v1/emails/send", Some(json!({
        "kind": "attendee_rescheduled",
        "calendar_event": {
            "uid": "evt-9",
            "title": "Review",
            "start_time": "2025-04-02T10:00:00Z",
            "end_time": "2025-04-02T11:00:00Z",
            "organizer": {"name": "Kim", "email": "kim@example.com"}
        },
        "attendee": {"name": "Lee", "email": "lee@example.com", "locale": "de"},
        "former_start_time": "2025-04-01T10:00:00Z"
    }))).await;
    assert_eq!(parse_body(res).await["status"], "Skipped sendEmail for Unit Tests");
    assert!(app.fallback.sent().is_empty());

    let outbox = parse_body(app.request("GET", "/api/v1/emails/test-outbox", None).await).await;
    assert_eq!(outbox["count"], 1);
    assert!(outbox["emails"][0]["subject"].as_str().unwrap().starts_with("Verschoben: Review mit Kim"));

    app.request("DELETE", "/api/v1/emails/test-outbox", None).await;
    let outbox = parse_body(app.request("GET", "/api/v1/emails/test-outbox", None).await).await;
    assert_eq!(outbox["count"], 0);
}

#[tokio::test]
async fn test_feature_endpoints() {
    let app = TestApp::new().await;

    let res = app.request("GET", "/api/v1/features/emails", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["enabled"], false);

    let res = app.request("GET", "/api/v1/features/unknown", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.request("PUT", "/api/v1/features/emails", Some(json!({"enabled": true, "description": "Incident"}))).await;
    let flag = parse_body(res).await;
    assert_eq!(flag["enabled"], true);
    assert_eq!(flag["description"], "Incident");

    let list = parse_body(app.request("GET", "/api/v1/features", None).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}
