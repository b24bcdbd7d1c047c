use crate::domain::models::event::{BookerEvent, EventLocation, RecurringFrequency, SchedulingType};
use crate::domain::ports::Translator;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MembersView {
    pub profile_name: Option<String>,
    pub show_only_profile_name: bool,
    pub names: Vec<String>,
    pub avatars: Vec<String>,
    pub entity_link: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailBlock {
    Duration { icon: &'static str, options: Vec<String>, selectable: bool },
    Locations { icon: &'static str, entries: Vec<String> },
    RequiresConfirmation { icon: &'static str, label: String },
    Recurring { icon: &'static str, label: String },
    Price { icon: &'static str, label: String },
}

/// Organizer block. `None` when round robin events hide their org and team.
pub fn build_members(event: &BookerEvent, is_private_link: bool, round_robin_hide_org_and_team: bool) -> Option<MembersView> {
    let round_robin = event.scheduling_type == Some(SchedulingType::RoundRobin);
    if round_robin && round_robin_hide_org_and_team {
        return None;
    }

    let users: Vec<_> = if round_robin { Vec::new() } else { event.subset_of_users.clone() };
    let first_user_name = event.subset_of_users.first().and_then(|u| u.name.clone());

    let show_only_profile_name = (event.profile.name.is_some() && round_robin)
        || users.is_empty()
        || (event.scheduling_type == Some(SchedulingType::Collective) && event.profile.name != first_user_name);

    let entity_link = if is_private_link {
        None
    } else {
        match (&event.entity.org_slug, &event.entity.team_slug) {
            (Some(org), Some(team)) => Some(format!("/{}/team/{}", org, team)),
            (None, Some(team)) => Some(format!("/team/{}", team)),
            (Some(org), None) => Some(format!("/{}", org)),
            (None, None) => None,
        }
    };

    Some(MembersView {
        profile_name: event.profile.name.clone().or_else(|| event.entity.name.clone()),
        show_only_profile_name,
        names: users.iter().filter_map(|u| u.name.clone()).collect(),
        avatars: users.iter().filter_map(|u| u.avatar_url.clone()).collect(),
        entity_link,
    })
}

pub fn format_duration(translator: &dyn Translator, locale: &str, minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => translator.translate(locale, "minutes_short", &[("count", m.to_string())]),
        (h, 0) => translator.translate(locale, "hours_short", &[("count", h.to_string())]),
        (h, m) => format!(
            "{} {}",
            translator.translate(locale, "hours_short", &[("count", h.to_string())]),
            translator.translate(locale, "minutes_short", &[("count", m.to_string())])
        ),
    }
}

fn location_label(translator: &dyn Translator, locale: &str, location: &EventLocation) -> String {
    if location.display_location_publicly.unwrap_or(true)
        && let Some(address) = location.address.as_deref().filter(|a| !a.is_empty())
    {
        return address.to_string();
    }
    if let Some(link) = location.link.as_deref().filter(|l| !l.is_empty()) {
        return link.to_string();
    }

    match location.kind.as_str() {
        "inPerson" => translator.translate(locale, "in_person_meeting", &[]),
        "attendeeInPerson" => translator.translate(locale, "in_person_attendee_address", &[]),
        "phone" | "userPhone" => translator.translate(locale, "phone_call", &[]),
        "link" => translator.translate(locale, "link_meeting", &[]),
        other => {
            let name = other.strip_prefix("integrations:").unwrap_or(other);
            let name = name.split(['_', '-']).next().unwrap_or(name);
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => other.to_string(),
            }
        }
    }
}

fn format_price(price: i64, currency: &str) -> String {
    let major = price / 100;
    let minor = (price % 100).abs();
    format!("{}.{:02} {}", major, minor, currency.to_uppercase())
}

pub fn build_details(event: &BookerEvent, translator: &dyn Translator, locale: &str) -> Vec<DetailBlock> {
    let mut blocks = Vec::new();

    let durations = event
        .metadata
        .multiple_duration
        .clone()
        .filter(|d| d.len() > 1)
        .unwrap_or_else(|| vec![event.length]);
    if durations.iter().any(|d| *d > 0) {
        blocks.push(DetailBlock::Duration {
            icon: "clock",
            selectable: durations.len() > 1,
            options: durations.iter().map(|d| format_duration(translator, locale, *d)).collect(),
        });
    }

    if !event.locations.is_empty() {
        blocks.push(DetailBlock::Locations {
            icon: "map-pin",
            entries: event.locations.iter().map(|l| location_label(translator, locale, l)).collect(),
        });
    }

    if event.requires_confirmation {
        blocks.push(DetailBlock::RequiresConfirmation {
            icon: "square-check",
            label: translator.translate(locale, "requires_confirmation", &[]),
        });
    }

    if let Some(recurring) = &event.recurring_event
        && recurring.count > 0
    {
        let unit = match recurring.freq {
            RecurringFrequency::Daily => "day",
            RecurringFrequency::Weekly => "week",
            RecurringFrequency::Monthly => "month",
            RecurringFrequency::Yearly => "year",
        };
        blocks.push(DetailBlock::Recurring {
            icon: "refresh-ccw",
            label: translator.translate(
                locale,
                "recurring_every",
                &[
                    ("interval", recurring.interval.max(1).to_string()),
                    ("unit", translator.translate(locale, unit, &[])),
                    ("count", recurring.count.to_string()),
                ],
            ),
        });
    }

    if event.price > 0 && !event.currency.is_empty() {
        blocks.push(DetailBlock::Price {
            icon: "credit-card",
            label: format_price(event.price, &event.currency),
        });
    }

    blocks
}
