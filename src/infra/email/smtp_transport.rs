use crate::config::SmtpConfig;
use crate::domain::models::email::EmailPayload;
use crate::domain::ports::MailTransport;
use crate::error::AppError;
use async_trait::async_trait;
use lettre::message::header::{ContentType, HeaderName, HeaderValue};
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

pub struct SmtpTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
    pub fn new(config: &SmtpConfig) -> Result<Self, AppError> {
        let mut builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| AppError::InternalWithMsg(format!("Invalid SMTP relay {}: {}", config.host, e)))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };
        builder = builder.port(config.port);

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self { mailer: builder.build() })
    }
}

fn mailbox(raw: &str, field: &str) -> Result<Mailbox, AppError> {
    raw.parse::<Mailbox>()
        .map_err(|e| AppError::Validation(format!("Invalid {} address '{}': {}", field, raw, e)))
}

/// Converts a payload into a MIME message: text and html alternatives plus attachments.
pub fn build_message(payload: &EmailPayload) -> Result<Message, AppError> {
    let mut builder = Message::builder()
        .from(mailbox(&payload.from, "from")?)
        .to(mailbox(&payload.to, "to")?);

    if let Some(subject) = &payload.subject {
        builder = builder.subject(subject);
    }
    if let Some(reply_to) = &payload.reply_to {
        builder = builder.reply_to(mailbox(reply_to, "reply-to")?);
    }
    for (name, value) in payload.headers.iter().flatten() {
        let header_name = HeaderName::new_from_ascii(name.clone())
            .map_err(|e| AppError::Validation(format!("Invalid header name {}: {}", name, e)))?;
        builder = builder.raw_header(HeaderValue::new(header_name, value.clone()));
    }

    let text = payload.text.clone().unwrap_or_default();
    let body = match &payload.html {
        Some(html) => MultiPart::alternative_plain_html(text, html.clone()),
        None => MultiPart::mixed().singlepart(SinglePart::plain(text)),
    };

    let body = payload.attachments.iter().try_fold(MultiPart::mixed().multipart(body), |parts, a| {
        let content_type = ContentType::parse(&a.content_type)
            .map_err(|e| AppError::Validation(format!("Invalid content type {}: {}", a.content_type, e)))?;
        Ok::<_, AppError>(parts.singlepart(Attachment::new(a.filename.clone()).body(a.content.clone(), content_type)))
    })?;

    builder
        .multipart(body)
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to build message: {}", e)))
}

#[async_trait]
impl MailTransport for SmtpTransport {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn send(&self, payload: &EmailPayload) -> Result<(), AppError> {
        let message = build_message(payload)?;
        let response = self.mailer
            .send(message)
            .await
            .map_err(|e| AppError::Transport(format!("SMTP send failed: {}", e)))?;
        debug!("SMTP accepted message: {:?}", response.code());
        Ok(())
    }
}
