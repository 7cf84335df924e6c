//! Persisted note timestamps.
//!
//! # Invariants
//! - A timestamp read from storage is written back with its exact original
//!   text, whatever precision or offset it was stored with.
//! - Ordering and display use the parsed UTC instant.
//! - Timestamps minted in-process use millisecond precision and a `Z` suffix
//!   (`2024-05-01T10:00:00.000Z`).

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// RFC 3339 timestamp that remembers its stored text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    instant: DateTime<Utc>,
    raw: String,
}

impl Timestamp {
    /// Stamps `instant`, truncated to milliseconds, in canonical form.
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        let instant = instant.trunc_subsecs(3);
        Self {
            raw: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            instant,
        }
    }

    /// Parses an RFC 3339 value, keeping `raw` verbatim.
    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        let instant = DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc);
        Ok(Self {
            instant,
            raw: raw.to_string(),
        })
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Text as persisted.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant
            .cmp(&other.instant)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::Timestamp;
    use chrono::{TimeZone, Utc};

    #[test]
    fn minted_timestamps_use_millisecond_zulu_form() {
        let instant = Utc.timestamp_nanos(1_714_557_600_123_456_789);
        let stamp = Timestamp::from_instant(instant);
        assert_eq!(stamp.as_str(), "2024-05-01T10:00:00.123Z");
    }

    #[test]
    fn parsed_timestamps_keep_their_text_and_compare_by_instant() {
        let offset = Timestamp::parse("2024-05-01T12:00:00.000+02:00").unwrap();
        let micros = Timestamp::parse("2024-05-01T10:00:00.123456Z").unwrap();
        assert_eq!(offset.as_str(), "2024-05-01T12:00:00.000+02:00");
        assert_eq!(
            offset.instant(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        );
        assert!(offset < micros);
        assert_eq!(
            serde_json::to_string(&micros).unwrap(),
            r#""2024-05-01T10:00:00.123456Z""#
        );
    }

    #[test]
    fn rejects_non_rfc3339_text() {
        assert!(Timestamp::parse("yesterday").is_err());
    }
}
