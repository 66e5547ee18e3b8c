//! Wire-format helpers for serde.
//!
//! hitbox.tv sends numbers as JSON strings and timestamps without a timezone.
//! These helpers do the per-field coercion for the public types.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer};

/// Layout of every timestamp the API returns, e.g. `2015-03-01 12:00:00`.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Length of a timestamp in [`TIMESTAMP_FORMAT`].
pub(crate) const TIMESTAMP_LEN: usize = 19;

/// [`TIMESTAMP_FORMAT`] plus a fraction of a second when one is set.
pub(crate) const TIMESTAMP_FORMAT_FRACTIONAL: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Nanoseconds from an optional `.ddddddddd` suffix after the seconds.
pub(crate) fn parse_fraction(fraction: &str) -> Option<u32> {
    if fraction.is_empty() {
        return Some(0);
    }
    let digits = fraction.strip_prefix('.')?;
    if digits.is_empty() || digits.len() > 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = digits.parse().ok()?;
    Some(value * 10u32.pow(9 - digits.len() as u32))
}

/// Integers encoded as JSON strings (`"42"`). `null` decodes to the default.
pub(crate) mod string_int {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr + Default,
        T::Err: Display,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => s.parse().map_err(serde::de::Error::custom),
            None => Ok(T::default()),
        }
    }

    pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Display,
    {
        serializer.collect_str(value)
    }
}

/// Strings where `null` means empty.
pub(crate) fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
