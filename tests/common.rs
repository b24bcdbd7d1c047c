use booker_meta::{
    api::router::create_router,
    state::AppState,
    config::{Config, SmtpConfig},
    infra::{factory::{assemble_state, run_sqlite_migrations}, repositories::sqlite_feature_repo::SqliteFeatureRepo},
    domain::models::email::EmailPayload,
    domain::ports::MailTransport,
    error::AppError,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header},
    response::Response,
    Router,
};
use async_trait::async_trait;
use serde_json::Value;
use tower::ServiceExt;

/// Transport that records payloads instead of delivering them.
pub struct RecordingTransport {
    name: &'static str,
    fail: bool,
    pub sent: Mutex<Vec<EmailPayload>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self { name, fail: false, sent: Mutex::new(Vec::new()) })
    }

    pub fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self { name, fail: true, sent: Mutex::new(Vec::new()) })
    }

    pub fn sent(&self) -> Vec<EmailPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn send(&self, payload: &EmailPayload) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(payload.clone());
        if self.fail {
            return Err(AppError::Transport(format!("{} unavailable", self.name)));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct TestOptions {
    pub primary: Option<Arc<RecordingTransport>>,
    pub fallback: Option<Arc<RecordingTransport>>,
    pub integration_test_mode: bool,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub primary: Option<Arc<RecordingTransport>>,
    pub fallback: Arc<RecordingTransport>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::with_options(TestOptions::default()).await
    }

    pub async fn with_options(options: TestOptions) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool).await;

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            resend_api_key: None,
            resend_api_url: "http://localhost/emails".to_string(),
            email_from: "Booking <notifications@booking.local>".to_string(),
            email_headers: BTreeMap::from([("X-Mailer".to_string(), "booker-meta".to_string())]),
            smtp: SmtpConfig {
                host: "localhost".to_string(),
                port: 2525,
                username: None,
                password: None,
                secure: false,
            },
            integration_test_mode: options.integration_test_mode,
            is_e2e: false,
            synthetic_email_domain: "sms.booking.local".to_string(),
            default_locale: "en".to_string(),
            default_timezone: "UTC".to_string(),
            session_idle_timeout_secs: 600,
            session_max_capacity: 1_000,
        };

        let fallback = options.fallback.unwrap_or_else(|| RecordingTransport::new("smtp"));
        let primary = options.primary;

        let state = Arc::new(
            assemble_state(
                &config,
                Arc::new(SqliteFeatureRepo::new(pool.clone())),
                primary.clone().map(|p| p as Arc<dyn MailTransport>),
                fallback.clone(),
            )
            .expect("Failed to assemble state"),
        );

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            primary,
            fallback,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Creates a booker session and returns its id.
    pub async fn create_session(&self, body: Value) -> String {
        let response = self.request("POST", "/api/v1/booker/sessions", Some(body)).await;
        assert!(response.status().is_success(), "session creation failed: {}", response.status());
        parse_body(response).await["id"].as_str().unwrap().to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
