use crate::domain::services::event_meta::EventMetaView;
use crate::error::AppError;
use tera::{Context, Tera};

pub const EVENT_META_TEMPLATE: &str = "event_meta.html";

pub fn build_view_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(EVENT_META_TEMPLATE, include_str!("../../../templates/event_meta.html"))?;
    Ok(tera)
}

/// Renders the event meta view to an HTML fragment. The description is already sanitized.
pub fn render_event_meta_html(tera: &Tera, view: &EventMetaView) -> Result<String, AppError> {
    let mut context = Context::new();
    context.insert("view", view);
    Ok(tera.render(EVENT_META_TEMPLATE, &context)?.trim().to_string())
}
