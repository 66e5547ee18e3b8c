//! Public data types for the hitbox.tv API.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ParseTimestampError;
use super::wire::{
    TIMESTAMP_FORMAT, TIMESTAMP_FORMAT_FRACTIONAL, TIMESTAMP_LEN, nullable_string,
    parse_fraction, string_int,
};

// ── Games ───────────────────────────────────────────────────────────────────

/// Response of the `games` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamesResponse {
    /// The request as the API received it.
    #[serde(default)]
    pub request: RequestInfo,
    /// Categories in server order, most viewers first.
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Echo of the original request, as received by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInfo {
    #[serde(default, deserialize_with = "nullable_string")]
    pub this: String,
}

/// A game category.
///
/// Every field is optional on the wire; missing fields keep their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(with = "string_int")]
    pub category_id: i64,
    #[serde(deserialize_with = "nullable_string")]
    pub category_name: String,
    #[serde(deserialize_with = "nullable_string")]
    pub category_name_short: String,
    #[serde(deserialize_with = "nullable_string")]
    pub category_seo_key: String,
    #[serde(with = "string_int")]
    pub category_viewers: i64,
    #[serde(deserialize_with = "nullable_string")]
    pub category_logo_small: String,
    #[serde(deserialize_with = "nullable_string")]
    pub category_logo_large: String,
    pub category_updated: Timestamp,
}

// ── Timestamp ───────────────────────────────────────────────────────────────

/// A hitbox.tv time, sent as `yyyy-mm-dd hh:mm:ss` without a timezone.
///
/// The API reports times in UTC. Every field must be zero padded and
/// separated by exactly one character; a fraction of a second may follow the
/// seconds (`12:00:00.5`). Defaults to the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.and_utc())
    }
}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimestampError(s.to_string());

        let (head, fraction) = s.split_at_checked(TIMESTAMP_LEN).ok_or_else(invalid)?;
        let parsed =
            NaiveDateTime::parse_from_str(head, TIMESTAMP_FORMAT).map_err(|_| invalid())?;
        // chrono takes single digits and runs of whitespace; the wire layout does not
        if parsed.format(TIMESTAMP_FORMAT).to_string() != head {
            return Err(invalid());
        }

        let nanos = parse_fraction(fraction).ok_or_else(invalid)?;
        let parsed = parsed.with_nanosecond(nanos).ok_or_else(invalid)?;
        Ok(Self::from(parsed))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT_FRACTIONAL))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
