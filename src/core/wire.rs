use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de};

/// Parses a provider publication timestamp.
///
/// The provider sends a bare date-time with no zone suffix, sometimes with a
/// fractional part (`2017-03-23T21:05:30.0000000`); it is UTC. A full RFC 3339 string
/// with an explicit offset is accepted as well and converted to UTC.
pub(crate) fn parse_published(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc())
}

pub(crate) fn de_published<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) => parse_published(&s)
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid datePublished {s:?}: {e}"))),
    }
}
