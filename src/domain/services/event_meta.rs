use crate::domain::models::{
    booker::BookerState,
    event::{BookerEvent, Timezone, TranslatedField},
};
use crate::domain::services::{
    booker_context::BookerContext,
    dates::{format_from_to_time, FromToTimeView},
    event_details::{build_details, build_members, DetailBlock, MembersView},
    seats::{build_seats_view, seat_counts, SeatsView},
    timezone_select::{render_timezone_select, TimezoneSelectProps, TimezoneSelectView},
    translation::get_translated_field,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct EventMetaClassNames {
    pub event_meta_container: Option<String>,
    pub event_meta_title: Option<String>,
    pub event_meta_timezone_select: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EventMetaProps {
    pub event: Option<BookerEvent>,
    #[serde(default)]
    pub is_pending: bool,
    #[serde(default)]
    pub is_private_link: bool,
    #[serde(default)]
    pub class_names: EventMetaClassNames,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub time_zones: Option<Vec<Timezone>>,
    #[serde(default)]
    pub selected_timeslot: Option<DateTime<Utc>>,
    #[serde(default)]
    pub round_robin_hide_org_and_team: bool,
    #[serde(default)]
    pub hide_event_type_details: bool,
    #[serde(default = "default_true")]
    pub show_timezone_select: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TimeBlock {
    pub icon: &'static str,
    pub heading: Option<String>,
    pub struck_through: bool,
    pub time: FromToTimeView,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimezoneBlock {
    Select(TimezoneSelectView),
    Label { icon: &'static str, timezone: String },
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EventMetaContent {
    pub container_class: String,
    pub members: Option<MembersView>,
    pub title: String,
    pub title_class: String,
    pub former_time: Option<TimeBlock>,
    pub selected_time: Option<TimeBlock>,
    pub details: Vec<DetailBlock>,
    pub timezone: Option<TimezoneBlock>,
    pub seats: Option<SeatsView>,
    pub description_html: Option<String>,
    pub description_label: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "status", content = "content", rename_all = "snake_case")]
pub enum EventMetaView {
    Hidden,
    Loading { container_class: String },
    Empty { container_class: String },
    Ready(Box<EventMetaContent>),
}

fn container_class(props: &EventMetaProps) -> String {
    format!("{} relative z-10 p-6", props.class_names.event_meta_container.as_deref().unwrap_or("")).trim().to_string()
}

pub fn render_event_meta(props: &EventMetaProps, ctx: &BookerContext) -> EventMetaView {
    if props.hide_event_type_details {
        return EventMetaView::Hidden;
    }
    if props.is_pending {
        return EventMetaView::Loading { container_class: container_class(props) };
    }
    let Some(event) = props.event.as_ref() else {
        return EventMetaView::Empty { container_class: container_class(props) };
    };

    let booker = ctx.booker_snapshot();
    let booker_time = ctx.booker_time();
    let timezone = booker_time.timezone.clone().unwrap_or_else(|| ctx.current_timezone.clone());
    let user_locale = props.locale.clone().unwrap_or_else(|| ctx.default_locale.clone());
    let supported = ctx.translator.supported_locales();

    let translated_title = get_translated_field(&event.field_translations, TranslatedField::Title, &user_locale, &supported);
    let translated_description =
        get_translated_field(&event.field_translations, TranslatedField::Description, &user_locale, &supported);

    let former_time = match (&booker.reschedule_uid, &booker.booking_data) {
        (Some(_), Some(data)) => Some(TimeBlock {
            icon: "calendar",
            heading: Some(ctx.t(&user_locale, "former_time")),
            struck_through: true,
            time: format_from_to_time(data.start_time, None, booker_time.time_format, &timezone),
        }),
        _ => None,
    };

    let selected_time = props.selected_timeslot.map(|slot| TimeBlock {
        icon: "calendar",
        heading: None,
        struck_through: false,
        time: format_from_to_time(
            slot,
            Some(booker.selected_duration.unwrap_or(event.length)),
            booker_time.time_format,
            &timezone,
        ),
    });

    let timezone_block = if props.show_timezone_select {
        let select_props = TimezoneSelectProps {
            time_zones: props.time_zones.clone(),
            timezone_select_class_name: props.class_names.event_meta_timezone_select.clone(),
            ..Default::default()
        };
        Some(TimezoneBlock::Select(render_timezone_select(Some(event), &select_props, &user_locale, ctx)))
    } else if booker.state == BookerState::Booking {
        Some(TimezoneBlock::Label { icon: "globe", timezone: timezone.clone() })
    } else {
        None
    };

    let seats = match (booker.state, seat_counts(event, &booker)) {
        (BookerState::Booking, (Some(booked), Some(total))) => Some(build_seats_view(
            ctx.translator.as_ref(),
            &user_locale,
            booked,
            total,
            booker.seated_event_data.show_available_seats_count,
        )),
        _ => None,
    };

    let description_html = if booker.state != BookerState::Booking {
        translated_description
            .or(event.description.as_deref())
            .filter(|d| !d.is_empty())
            .map(|d| ctx.markdown.to_safe_html(d))
    } else {
        None
    };

    EventMetaView::Ready(Box::new(EventMetaContent {
        container_class: container_class(props),
        members: build_members(event, props.is_private_link, props.round_robin_hide_org_and_team),
        title: translated_title.map(str::to_string).unwrap_or_else(|| event.title.clone()),
        title_class: format!("{} my-2", props.class_names.event_meta_title.as_deref().unwrap_or("")).trim().to_string(),
        former_time,
        selected_time,
        details: build_details(event, ctx.translator.as_ref(), &user_locale),
        timezone: timezone_block,
        seats,
        description_html,
        description_label: ctx.t(&user_locale, "description"),
    }))
}
