use crate::domain::models::email::EmailPayload;
use crate::domain::ports::MailTransport;
use crate::error::AppError;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::error;

/// HTTP email API client (Resend compatible).
pub struct ResendTransport {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ResendTransport {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_url,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct AttachmentPayload<'a> {
    filename: &'a str,
    content: String,
    content_type: &'a str,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<&'a BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<AttachmentPayload<'a>>,
}

#[async_trait]
impl MailTransport for ResendTransport {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn send(&self, payload: &EmailPayload) -> Result<(), AppError> {
        let attachments = payload
            .attachments
            .iter()
            .map(|a| AttachmentPayload {
                filename: &a.filename,
                content: general_purpose::STANDARD.encode(&a.content),
                content_type: &a.content_type,
            })
            .collect();

        let body = SendEmailRequest {
            from: &payload.from,
            to: vec![payload.to.as_str()],
            subject: payload.subject.as_deref().unwrap_or_default(),
            html: payload.html.as_deref().unwrap_or_default(),
            text: payload.text.as_deref(),
            reply_to: payload.reply_to.as_deref(),
            headers: payload.headers.as_ref(),
            attachments,
        };

        let res = self.client.post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Email API connection error: {}", e);
                error!("{}", msg);
                AppError::Transport(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Email API failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::Transport(msg));
        }

        Ok(())
    }
}
