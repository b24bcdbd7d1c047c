use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::{info, warn};
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::emails::renderer::EmailRenderer;
use crate::domain::ports::{FeatureFlagRepository, MailTransport, TestEmailSink, Translator};
use crate::domain::services::email_dispatch::{DispatchSettings, EmailDispatcher, MailerDefaults};
use crate::error::AppError;
use crate::infra::email::{resend_transport::ResendTransport, smtp_transport::SmtpTransport, test_outbox::TestOutbox};
use crate::infra::i18n::json_translator::JsonTranslator;
use crate::infra::markdown::safe_markdown::SafeMarkdown;
use crate::infra::repositories::{postgres_feature_repo::PostgresFeatureRepo, sqlite_feature_repo::SqliteFeatureRepo};
use crate::infra::stores::session_registry::SessionRegistry;
use crate::infra::views::build_view_templates;
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let feature_repo: Arc<dyn FeatureFlagRepository> =
        if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
            info!("Initializing PostgreSQL connection...");

            let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
            opts = opts.log_statements(LevelFilter::Debug)
                .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect_with(opts)
                .await
                .expect("Failed to connect to Postgres");

            run_postgres_migrations(&pool).await;
            Arc::new(PostgresFeatureRepo::new(pool))
        } else {
            info!("Initializing SQLite connection with WAL Mode...");

            let opts = SqliteConnectOptions::from_str(database_url)
                .expect("Invalid SQLite connection string")
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(5))
                .log_statements(LevelFilter::Debug)
                .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

            let pool = SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(opts)
                .await
                .expect("Failed to connect to SQLite");

            run_sqlite_migrations(&pool).await;
            Arc::new(SqliteFeatureRepo::new(pool))
        };

    let primary: Option<Arc<dyn MailTransport>> = match &config.resend_api_key {
        Some(key) => {
            info!("HTTP email API configured at {}", config.resend_api_url);
            Some(Arc::new(ResendTransport::new(config.resend_api_url.clone(), key.clone())))
        }
        None => {
            warn!("RESEND_API_KEY not set, emails go through SMTP only");
            None
        }
    };
    let fallback: Arc<dyn MailTransport> =
        Arc::new(SmtpTransport::new(&config.smtp).expect("Failed to configure SMTP transport"));

    assemble_state(config, feature_repo, primary, fallback).expect("Failed to load templates")
}

/// Builds the in-process collaborators around the given persistence and transports.
pub fn assemble_state(
    config: &Config,
    feature_repo: Arc<dyn FeatureFlagRepository>,
    primary: Option<Arc<dyn MailTransport>>,
    fallback: Arc<dyn MailTransport>,
) -> Result<AppState, AppError> {
    let translator: Arc<dyn Translator> = Arc::new(JsonTranslator::embedded());
    let test_outbox: Arc<dyn TestEmailSink> = Arc::new(TestOutbox::default());
    let renderer = Arc::new(EmailRenderer::new(translator.clone(), &config.email_from)?);

    let email_dispatcher = EmailDispatcher::new(
        feature_repo.clone(),
        test_outbox.clone(),
        primary,
        fallback,
        renderer,
        MailerDefaults {
            from: config.email_from.clone(),
            headers: config.email_headers.clone(),
        },
        DispatchSettings {
            integration_test_mode: config.integration_test_mode,
            quiet_transport_errors: config.is_e2e,
            synthetic_email_domain: config.synthetic_email_domain.clone(),
        },
    );

    Ok(AppState {
        config: config.clone(),
        feature_repo,
        sessions: Arc::new(SessionRegistry::new(
            Duration::from_secs(config.session_idle_timeout_secs),
            config.session_max_capacity,
        )),
        translator,
        markdown: Arc::new(SafeMarkdown::new()),
        test_outbox,
        email_dispatcher: Arc::new(email_dispatcher),
        templates: Arc::new(build_view_templates()?),
    })
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
