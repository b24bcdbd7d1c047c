use crate::domain::models::{booker::BookerSnapshot, event::BookerEvent};
use crate::domain::ports::Translator;
use serde::Serialize;

pub const HALF_FULL_RATIO: f64 = 0.5;
pub const NEARLY_FULL_RATIO: f64 = 0.83;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeatOccupancy {
    Available,
    HalfFull,
    NearlyFull,
}

impl SeatOccupancy {
    pub fn from_counts(booked: u32, total: u32) -> Self {
        if total == 0 {
            return SeatOccupancy::Available;
        }
        let ratio = booked as f64 / total as f64;
        if ratio >= NEARLY_FULL_RATIO {
            SeatOccupancy::NearlyFull
        } else if ratio >= HALF_FULL_RATIO {
            SeatOccupancy::HalfFull
        } else {
            SeatOccupancy::Available
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            SeatOccupancy::NearlyFull => "text-rose-600",
            SeatOccupancy::HalfFull => "text-yellow-500",
            SeatOccupancy::Available => "text-bookinghighlight",
        }
    }

    fn translation_key(&self) -> &'static str {
        match self {
            SeatOccupancy::NearlyFull => "seats_nearly_full",
            SeatOccupancy::HalfFull => "seats_half_full",
            SeatOccupancy::Available => "seats_available",
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SeatsView {
    pub booked: u32,
    pub total: u32,
    pub occupancy: SeatOccupancy,
    pub color_class: &'static str,
    pub text: String,
}

/// Seat counts for the current slot. Seated data from the store wins over the SSR booking data
/// and the event default; zero counts fall through like missing ones.
pub fn seat_counts(event: &BookerEvent, booker: &BookerSnapshot) -> (Option<u32>, Option<u32>) {
    let booked = booker
        .seated_event_data
        .attendees
        .filter(|n| *n > 0)
        .or_else(|| booker.booking_data.as_ref().map(|b| b.attendees.len() as u32))
        .filter(|n| *n > 0);

    let total = booker
        .seated_event_data
        .seats_per_time_slot
        .filter(|n| *n > 0)
        .or(event.seats_per_time_slot)
        .filter(|n| *n > 0);

    (booked, total)
}

pub fn seats_availability_text(
    translator: &dyn Translator,
    locale: &str,
    booked: u32,
    total: u32,
    show_exact: bool,
) -> String {
    if show_exact {
        let remaining = total.saturating_sub(booked);
        return format!(
            "{} / {} {}",
            remaining,
            total,
            translator.translate(locale, "seats_available", &[])
        );
    }
    let occupancy = SeatOccupancy::from_counts(booked, total);
    translator.translate(locale, occupancy.translation_key(), &[])
}

pub fn build_seats_view(
    translator: &dyn Translator,
    locale: &str,
    booked: u32,
    total: u32,
    show_exact: bool,
) -> SeatsView {
    let occupancy = SeatOccupancy::from_counts(booked, total);
    SeatsView {
        booked,
        total,
        occupancy,
        color_class: occupancy.color_class(),
        text: seats_availability_text(translator, locale, booked, total, show_exact),
    }
}
