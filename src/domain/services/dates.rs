use crate::domain::models::booker::TimeFormat;
use chrono::{DateTime, Duration, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FromToTimeView {
    pub date: String,
    pub time: String,
}

pub fn parse_timezone(tz: &str) -> Option<Tz> {
    tz.parse::<Tz>().ok()
}

/// Formats a start (and optional end) for display in `timezone`. Unknown zones fall back to UTC.
pub fn format_from_to_time(
    start: DateTime<Utc>,
    duration_min: Option<u32>,
    time_format: TimeFormat,
    timezone: &str,
) -> FromToTimeView {
    let tz: Tz = parse_timezone(timezone).unwrap_or(chrono_tz::UTC);
    let local_start = start.with_timezone(&tz);
    let pattern = time_format.pattern();

    let time = match duration_min {
        Some(minutes) if minutes > 0 => {
            let local_end = (start + Duration::minutes(minutes as i64)).with_timezone(&tz);
            format!("{} - {}", local_start.format(pattern), local_end.format(pattern))
        }
        _ => local_start.format(pattern).to_string(),
    };

    FromToTimeView {
        date: local_start.format("%A, %B %-d, %Y").to_string(),
        time,
    }
}

/// `GMT +5:30` style label for the zone's current offset.
pub fn utc_offset_label(tz: &Tz, at: DateTime<Utc>) -> String {
    let seconds = tz.offset_from_utc_datetime(&at.naive_utc()).fix().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.abs();
    format!("GMT {}{}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_to_time_twelve_hour() {
        let start = Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap();
        let view = format_from_to_time(start, Some(30), TimeFormat::TwelveHour, "Europe/Berlin");
        assert_eq!(view.date, "Monday, March 10, 2025");
        assert_eq!(view.time, "3:00pm - 3:30pm");
    }

    #[test]
    fn test_from_to_time_without_duration() {
        let start = Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap();
        let view = format_from_to_time(start, None, TimeFormat::TwentyFourHour, "UTC");
        assert_eq!(view.time, "14:00");
    }

    #[test]
    fn test_unknown_zone_falls_back_to_utc() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 5, 0).unwrap();
        let view = format_from_to_time(start, Some(60), TimeFormat::TwentyFourHour, "Mars/Olympus");
        assert_eq!(view.time, "09:05 - 10:05");
    }

    #[test]
    fn test_offset_label() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(utc_offset_label(&chrono_tz::Asia::Kolkata, at), "GMT +5:30");
        assert_eq!(utc_offset_label(&chrono_tz::America::New_York, at), "GMT -5:00");
        assert_eq!(utc_offset_label(&chrono_tz::UTC, at), "GMT +0:00");
    }
}
