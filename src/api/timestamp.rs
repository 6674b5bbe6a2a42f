//! Timestamp handling for API payloads.
//!
//! All layout and display code works on the viewer's local wall clock.
//! Values carrying an explicit offset are converted into local time;
//! values without one are taken as local wall-clock time unchanged.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Format used by the job card form and the POST body.
pub const FORM_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Serde adapter: missing, null or unparseable strings become `None`.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// Human-readable local time, or a dash when the value is unknown.
pub fn display(ts: Option<NaiveDateTime>) -> String {
    match ts {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => "—".to_string(),
    }
}

pub fn display_time(ts: Option<NaiveDateTime>) -> String {
    match ts {
        Some(ts) => ts.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
