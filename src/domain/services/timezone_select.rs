use crate::domain::models::{
    booker::BookerState,
    event::{BookerEvent, Timezone},
};
use crate::domain::services::booker_context::BookerContext;
use crate::domain::services::dates::{parse_timezone, utc_offset_label};
use crate::error::AppError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TimezoneSelectProps {
    pub time_zones: Option<Vec<Timezone>>,
    pub show_label: bool,
    pub label_text: Option<String>,
    pub show_helper_text: bool,
    pub helper_text: Option<String>,
    pub show_icon: Option<bool>,
    pub is_prominent: bool,
    pub timezone_select_class_name: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TimezoneOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimezoneControl {
    Static {
        value: String,
    },
    Select {
        value: String,
        options: Vec<TimezoneOption>,
        disabled: bool,
        placeholder: String,
        size: &'static str,
        menu_position: &'static str,
        class_name: Option<String>,
    },
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TimezoneSelectView {
    pub label: Option<String>,
    pub helper: Option<String>,
    pub icon: Option<&'static str>,
    pub control: TimezoneControl,
}

/// Mount effects: a locked event timezone always wins, otherwise an unset timezone
/// is seeded with the caller's current one.
pub fn on_mount(event: Option<&BookerEvent>, ctx: &BookerContext) {
    let locked = event.is_some_and(|e| e.is_timezone_locked());

    if locked && let Some(tz) = event.and_then(|e| e.locked_timezone()) {
        debug!("Applying locked timezone {}", tz);
        ctx.sync_timezone(tz);
    }

    if !locked && ctx.booker_time().timezone.is_none() {
        debug!("No timezone set, defaulting to {}", ctx.current_timezone);
        ctx.sync_timezone(&ctx.current_timezone);
    }
}

/// User picked `value` from the select.
pub fn on_change(value: &str, event: Option<&BookerEvent>, ctx: &BookerContext) -> Result<(), AppError> {
    if event.is_some_and(|e| e.is_timezone_locked()) {
        return Err(AppError::Conflict("Timezone is locked for this event".to_string()));
    }
    if parse_timezone(value).is_none() {
        return Err(AppError::Validation(format!("Unknown timezone: {}", value)));
    }
    ctx.sync_timezone(value);
    Ok(())
}

fn timezone_options(time_zones: Option<&[Timezone]>) -> Vec<TimezoneOption> {
    let now = Utc::now();
    match time_zones {
        Some(list) => list
            .iter()
            .map(|z| {
                let offset = parse_timezone(&z.time_zone)
                    .map(|tz| format!(" {}", utc_offset_label(&tz, now)))
                    .unwrap_or_default();
                let name = z.city.clone().unwrap_or_else(|| z.time_zone.replace('_', " "));
                TimezoneOption { value: z.time_zone.clone(), label: format!("{}{}", name, offset) }
            })
            .collect(),
        None => chrono_tz::TZ_VARIANTS
            .iter()
            .map(|tz| TimezoneOption {
                value: tz.name().to_string(),
                label: format!("{} {}", tz.name().replace('_', " "), utc_offset_label(tz, now)),
            })
            .collect(),
    }
}

pub fn render_timezone_select(
    event: Option<&BookerEvent>,
    props: &TimezoneSelectProps,
    locale: &str,
    ctx: &BookerContext,
) -> TimezoneSelectView {
    let booker_state = ctx.booker_snapshot().state;
    let resolved = ctx.booker_time().timezone.unwrap_or_else(|| ctx.current_timezone.clone());
    let locked = event.is_some_and(|e| e.is_timezone_locked());

    let label = props
        .show_label
        .then(|| props.label_text.clone().unwrap_or_else(|| ctx.t(locale, "timezone_change_hint")));
    let helper = props
        .show_helper_text
        .then(|| props.helper_text.clone().unwrap_or_else(|| ctx.t(locale, "timezone_search_hint")));

    let control = if booker_state == BookerState::Booking {
        TimezoneControl::Static { value: resolved }
    } else {
        let value = if locked {
            event
                .and_then(|e| e.locked_time_zone.clone())
                .filter(|tz| !tz.is_empty())
                .unwrap_or_else(|| ctx.current_timezone.clone())
        } else {
            resolved
        };
        TimezoneControl::Select {
            value,
            options: timezone_options(props.time_zones.as_deref()),
            disabled: locked,
            placeholder: ctx.t(locale, "timezone_search_hint"),
            size: if props.is_prominent { "md" } else { "sm" },
            menu_position: if props.is_prominent { "fixed" } else { "absolute" },
            class_name: props.timezone_select_class_name.clone(),
        }
    };

    TimezoneSelectView {
        label,
        helper,
        icon: props.show_icon.unwrap_or(true).then_some("globe"),
        control,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::event::EventSchedule;
    use crate::infra::stores::test_context;

    fn locked_event(locked: Option<&str>, schedule: Option<&str>) -> BookerEvent {
        BookerEvent {
            lock_time_zone_toggle_on_booking_page: true,
            locked_time_zone: locked.map(str::to_string),
            schedule: Some(EventSchedule { time_zone: schedule.map(str::to_string) }),
            ..Default::default()
        }
    }

    #[test]
    fn test_locked_timezone_overrides_prior_selection() {
        let ctx = test_context("America/New_York");
        ctx.sync_timezone("Asia/Tokyo");

        on_mount(Some(&locked_event(Some("Europe/Berlin"), None)), &ctx);

        assert_eq!(ctx.booker.snapshot().timezone.as_deref(), Some("Europe/Berlin"));
        assert_eq!(ctx.time_preferences.snapshot().timezone.as_deref(), Some("Europe/Berlin"));
    }

    #[test]
    fn test_locked_falls_back_to_schedule_timezone() {
        let ctx = test_context("UTC");
        on_mount(Some(&locked_event(None, Some("Australia/Sydney"))), &ctx);
        assert_eq!(ctx.booker.snapshot().timezone.as_deref(), Some("Australia/Sydney"));
    }

    #[test]
    fn test_locked_without_any_zone_leaves_state_alone() {
        let ctx = test_context("UTC");
        on_mount(Some(&locked_event(None, None)), &ctx);
        assert_eq!(ctx.booker.snapshot().timezone, None);
        assert_eq!(ctx.time_preferences.snapshot().timezone, None);
    }

    #[test]
    fn test_free_mode_defaults_to_current_timezone() {
        let ctx = test_context("America/Sao_Paulo");
        on_mount(Some(&BookerEvent::default()), &ctx);
        assert_eq!(ctx.booker.snapshot().timezone.as_deref(), Some("America/Sao_Paulo"));
        assert_eq!(ctx.time_preferences.snapshot().timezone.as_deref(), Some("America/Sao_Paulo"));
    }

    #[test]
    fn test_free_mode_keeps_existing_choice() {
        let ctx = test_context("America/Sao_Paulo");
        ctx.time_preferences.set_timezone("Europe/Lisbon");
        on_mount(None, &ctx);
        assert_eq!(ctx.time_preferences.snapshot().timezone.as_deref(), Some("Europe/Lisbon"));
        assert_eq!(ctx.booker.snapshot().timezone, None);
    }

    #[test]
    fn test_change_updates_both_stores() {
        let ctx = test_context("UTC");
        on_change("Europe/Paris", None, &ctx).unwrap();
        assert_eq!(ctx.booker.snapshot().timezone.as_deref(), Some("Europe/Paris"));
        assert_eq!(ctx.time_preferences.snapshot().timezone.as_deref(), Some("Europe/Paris"));
    }

    #[test]
    fn test_change_rejected_when_locked_or_unknown() {
        let ctx = test_context("UTC");
        assert!(matches!(
            on_change("Europe/Paris", Some(&locked_event(Some("UTC"), None)), &ctx),
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(on_change("Nowhere/Town", None, &ctx), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_render_static_in_booking_state() {
        let ctx = test_context("UTC");
        ctx.booker.set_state(BookerState::Booking);
        ctx.sync_timezone("Europe/Rome");
        let view = render_timezone_select(None, &TimezoneSelectProps::default(), "en", &ctx);
        assert_eq!(view.control, TimezoneControl::Static { value: "Europe/Rome".into() });
        assert_eq!(view.icon, Some("globe"));
    }

    #[test]
    fn test_render_locked_select_is_disabled() {
        let ctx = test_context("Asia/Dubai");
        ctx.booker.set_state(BookerState::SelectingTime);
        let props = TimezoneSelectProps {
            time_zones: Some(vec![Timezone { time_zone: "Europe/Berlin".into(), city: Some("Berlin".into()) }]),
            show_label: true,
            ..Default::default()
        };
        let view = render_timezone_select(Some(&locked_event(None, Some("Europe/Berlin"))), &props, "en", &ctx);
        match view.control {
            TimezoneControl::Select { value, disabled, options, .. } => {
                // Without an explicit lock the select shows the caller's zone.
                assert_eq!(value, "Asia/Dubai");
                assert!(disabled);
                assert_eq!(options.len(), 1);
                assert!(options[0].label.starts_with("Berlin GMT"));
            }
            other => panic!("expected select, got {:?}", other),
        }
        assert_eq!(view.label.as_deref(), Some("Want to change your timezone?"));
    }
}
