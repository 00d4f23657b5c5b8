use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp as it arrives from the backend. The upstream schema is not
/// stable: depending on which path wrote the record, the same field shows up
/// as an epoch-seconds object (`{"seconds": ...}` or `{"_seconds": ...}`) or
/// as an ISO-8601 string. Anything else is kept opaque and treated as absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum WireTimestamp {
    Seconds { seconds: i64 },
    LegacySeconds {
        #[serde(rename = "_seconds")]
        seconds: i64,
    },
    Iso(String),
    Unrecognized(serde_json::Value),
}

impl WireTimestamp {
    /// Normalize to the local calendar day, discarding time-of-day.
    /// Unrecognized or unparseable values yield `None` ("never happened") —
    /// malformed input is never an error.
    pub fn care_day(&self) -> Option<NaiveDate> {
        match self {
            WireTimestamp::Seconds { seconds } | WireTimestamp::LegacySeconds { seconds } => {
                let utc = Utc.timestamp_opt(*seconds, 0).single()?;
                Some(utc.with_timezone(&Local).date_naive())
            }
            WireTimestamp::Iso(s) => parse_iso_day(s),
            WireTimestamp::Unrecognized(_) => None,
        }
    }
}

fn parse_iso_day(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    // Offset-less datetimes are taken as local wall-clock time.
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(d);
    }
    None
}

/// Normalize an optional wire timestamp. `None` and malformed values both
/// collapse to `None`.
pub fn normalize_care_day(value: &Option<WireTimestamp>) -> Option<NaiveDate> {
    value.as_ref().and_then(|ts| ts.care_day())
}
