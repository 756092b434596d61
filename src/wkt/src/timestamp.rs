// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use time::format_description::well_known::Rfc3339;

/// A point in time, independent of any time zone or calendar.
///
/// The value is stored as seconds and nanoseconds since the Unix epoch. The
/// range is from `0001-01-01T00:00:00Z` to `9999-12-31T23:59:59.999999999Z`,
/// which guarantees the value can be formatted as an [RFC 3339] string. That
/// is also the JSON encoding, for example `"2017-01-15T01:30:15.01Z"`.
///
/// # Example
/// ```
/// # use google_cloud_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2025-05-16T09:46:12.500Z")?;
/// assert_eq!(ts.seconds(), 1747388772);
/// assert_eq!(ts.nanos(), 500_000_000);
/// # Ok::<(), TimestampError>(())
/// ```
///
/// [RFC 3339]: https://www.ietf.org/rfc/rfc3339.txt
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[non_exhaustive]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

/// Represent failures in converting or creating [Timestamp] instances.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// There was a problem parsing a timestamp.
    #[error("cannot deserialize timestamp, source={0}")]
    Deserialize(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = TimestampError;

const NS: i128 = 1_000_000_000;

impl Timestamp {
    const NS: i32 = 1_000_000_000;

    /// The minimum value for the `seconds` component. Corresponds to `0001-01-01T00:00:00Z`.
    pub const MIN_SECONDS: i64 = -62135596800;

    /// The maximum value for the `seconds` component. Corresponds to `9999-12-31T23:59:59Z`.
    pub const MAX_SECONDS: i64 = 253402300799;

    /// The minimum value for the `nanos` component.
    pub const MIN_NANOS: i32 = 0;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = Self::NS - 1;

    /// Creates a [Timestamp], validating both components.
    ///
    /// The nanoseconds are always non-negative, even for timestamps before
    /// the epoch.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { seconds, nanos })
    }

    /// Returns the seconds since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second part of the timestamp.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        time::OffsetDateTime::from_unix_timestamp_nanos(
            timestamp.seconds as i128 * NS + timestamp.nanos as i128,
        )
        .ok()
        .and_then(|ts| ts.format(&Rfc3339).ok())
        // Unreachable for values created via `Timestamp::new()`.
        .unwrap_or_else(|| format!("{}.{:09}s", timestamp.seconds, timestamp.nanos))
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let odt = time::OffsetDateTime::parse(value, &Rfc3339)
            .map_err(|e| TimestampError::Deserialize(e.into()))?;
        Timestamp::try_from(odt)
    }
}

impl TryFrom<time::OffsetDateTime> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: time::OffsetDateTime) -> Result<Self, Self::Error> {
        let since_epoch = value.unix_timestamp_nanos();
        let seconds = since_epoch.div_euclid(NS) as i64;
        let nanos = since_epoch.rem_euclid(NS) as i32;
        Timestamp::new(seconds, nanos)
    }
}

impl TryFrom<Timestamp> for time::OffsetDateTime {
    type Error = time::error::ComponentRange;
    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        time::OffsetDateTime::from_unix_timestamp_nanos(
            value.seconds as i128 * NS + value.nanos as i128,
        )
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        String::from(*self).serialize(serializer)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a timestamp in RFC 3339 format")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Timestamp::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    use time::macros::datetime;
    type Result = anyhow::Result<()>;

    #[test_case(0, 0, "1970-01-01T00:00:00Z")]
    #[test_case(1747388772, 0, "2025-05-16T09:46:12Z")]
    #[test_case(1747388772, 500_000_000, "2025-05-16T09:46:12.5Z")]
    #[test_case(-1, 500_000_000, "1969-12-31T23:59:59.5Z")]
    fn roundtrip(seconds: i64, nanos: i32, want: &str) -> Result {
        let ts = Timestamp::new(seconds, nanos)?;
        assert_eq!(String::from(ts), want);
        let json = serde_json::to_value(ts)?;
        assert_eq!(json, json!(want));
        let got = serde_json::from_value::<Timestamp>(json)?;
        assert_eq!(got, ts);
        Ok(())
    }

    #[test_case(Timestamp::MAX_SECONDS + 1, 0)]
    #[test_case(Timestamp::MIN_SECONDS - 1, 0)]
    #[test_case(0, -1)]
    #[test_case(0, 1_000_000_000)]
    fn out_of_range(seconds: i64, nanos: i32) {
        let got = Timestamp::new(seconds, nanos);
        assert!(matches!(got, Err(TimestampError::OutOfRange)), "{got:?}");
    }

    #[test]
    fn parse_error() {
        let got = Timestamp::try_from("not a timestamp");
        assert!(matches!(got, Err(TimestampError::Deserialize(_))), "{got:?}");
    }

    #[test]
    fn time_conversions() -> Result {
        let dt = datetime!(2025-05-16 09:46:12.25 UTC);
        let ts = Timestamp::try_from(dt)?;
        assert_eq!((ts.seconds(), ts.nanos()), (1747388772, 250_000_000));
        let back = time::OffsetDateTime::try_from(ts)?;
        assert_eq!(back, dt);
        Ok(())
    }
}
