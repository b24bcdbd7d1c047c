use std::sync::Arc;
use crate::domain::ports::Translator;
use crate::domain::services::display_name::extract_address;
use crate::error::AppError;
use tera::{Context, Tera};
use tracing::error;

pub const ATTENDEE_EVENT_TEMPLATE: &str = "attendee_event.mjml";

/// Shared rendering collaborators for the email payload builders.
pub struct EmailRenderer {
    tera: Tera,
    pub translator: Arc<dyn Translator>,
    /// Address emails are sent from; the display name is set per email.
    pub from_address: String,
}

impl EmailRenderer {
    pub fn new(translator: Arc<dyn Translator>, default_from: &str) -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".mjml", ".html"]);
        tera.add_raw_template(ATTENDEE_EVENT_TEMPLATE, include_str!("../../../templates/emails/attendee_event.mjml"))?;

        Ok(Self {
            tera,
            translator,
            from_address: extract_address(default_from).to_string(),
        })
    }

    pub fn t(&self, locale: &str, key: &str, args: &[(&str, String)]) -> String {
        self.translator.translate(locale, key, args)
    }

    /// Fills an MJML template and renders it to HTML.
    pub fn render_mjml(&self, template: &str, context: &Context) -> Result<String, AppError> {
        let mjml = self.tera.render(template, context)?;
        render_email_body(&mjml)
    }
}

fn render_email_body(body_content: &str) -> Result<String, AppError> {
    match mrml::parse(body_content) {
        Ok(root) => {
            let opts = mrml::prelude::render::RenderOptions::default();
            match root.element.render(&opts) {
                Ok(html) => Ok(html),
                Err(e) => {
                    error!("MJML Render Error: {:?}", e);
                    Err(AppError::Template(format!("MJML Render Error: {:?}", e)))
                }
            }
        }
        Err(e) => {
            error!("MJML Parse Error: {:?}", e);
            Err(AppError::Template(format!("MJML Parse Error: {:?}", e)))
        }
    }
}
