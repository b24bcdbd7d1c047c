use crate::domain::models::email::CalendarEvent;
use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

/// Generates an iCalendar (.ics) invite for a booked event
pub fn generate_ics(event: &CalendarEvent) -> String {
    let mut calendar = Calendar::new();

    let mut ical_event = IcalEvent::new();
    ical_event
        .summary(&event.title)
        .description(event.description.as_deref().unwrap_or_default())
        .starts(event.start_time)
        .ends(event.end_time)
        .uid(&event.uid)
        .add_property("ORGANIZER", format!("mailto:{}", event.organizer.email));

    if let Some(location) = &event.location {
        ical_event.location(location);
    }
    for attendee in &event.attendees {
        ical_event.add_multi_property("ATTENDEE", &format!("mailto:{}", attendee.email));
    }

    calendar.push(ical_event.done());
    calendar.to_string()
}
