//! Lenient parsing for the date and timestamp fields the task API returns.
//!
//! The API is not consistent about formats: `updatedAt` may be a full RFC 3339
//! timestamp, a `YYYY-MM-DD HH:MM:SS` string, or a bare date. A value that
//! cannot be parsed is treated as absent rather than failing the whole payload.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::warn;
use serde::{Deserialize, Deserializer};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a server timestamp. Bare dates resolve to midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT) {
        return Some(parsed.and_utc());
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Parse a calendar date, accepting a datetime whose first ten characters are a date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let prefix = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok()
}

pub(crate) fn deserialize_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let parsed = parse_timestamp(&value);
        if parsed.is_none() && !value.trim().is_empty() {
            warn!("Ignoring unparseable timestamp {value:?}");
        }
        parsed
    }))
}

pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let parsed = parse_date(&value);
        if parsed.is_none() && !value.trim().is_empty() {
            warn!("Ignoring unparseable date {value:?}");
        }
        parsed
    }))
}
