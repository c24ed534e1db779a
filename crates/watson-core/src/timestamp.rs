//! Serde helpers for service timestamps.
//!
//! Watson services mostly emit RFC 3339, but some write the offset without a
//! colon (`2018-11-16T22:57:14+0000`) or omit it. Use with
//! `#[serde(with = "watson_core::timestamp::option")]` on
//! `Option<DateTime<Utc>>` fields.

use chrono::{DateTime, NaiveDateTime, Utc};

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M:%S%z"];
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

/// Parse a timestamp in any of the layouts the services use. Values without
/// an offset are taken as UTC.
#[must_use]
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// `Option<DateTime<Utc>>` written as RFC 3339 and read leniently.
#[allow(clippy::ref_option)]
pub mod option {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => s.serialize_some(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(value) => super::parse(&value)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {value}"))),
            None => Ok(None),
        }
    }
}
