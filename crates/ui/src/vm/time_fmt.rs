use chrono::{DateTime, Local, TimeZone, Utc};

const SCOREBOARD_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Scoreboard timestamp in the local time zone, e.g. `2024-03-01 14:05`.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    format_datetime_in(value, &Local)
}

#[must_use]
pub fn format_datetime_in<Tz: TimeZone>(value: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value.with_timezone(tz).format(SCOREBOARD_FORMAT).to_string()
}
