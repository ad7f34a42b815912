//! Calendar date helpers.
//!
//! Goals work on whole calendar days. Anything that arrives as a datetime
//! string is reduced to its date portion, as written, before it is compared.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::error::ValidationError;

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO date (`2026-01-03`) or datetime (`2026-01-03T08:15:00Z`)
/// into its calendar date.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        // The offset's own date, which is the date portion of the string.
        return Ok(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt.date());
        }
    }
    Err(ValidationError::InvalidDate {
        input: input.to_string(),
    })
}

/// Format a date the way it is persisted.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Serde adapter for a single calendar date that also accepts datetimes.
pub mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_calendar_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for a set of calendar dates stored as ISO strings.
pub mod date_set {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dates: &BTreeSet<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(dates.iter().map(|d| super::format_date(*d)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeSet<NaiveDate>, D::Error> {
        let raw = Vec::<String>::deserialize(d)?;
        raw.iter()
            .map(|s| super::parse_calendar_date(s).map_err(serde::de::Error::custom))
            .collect()
    }
}
