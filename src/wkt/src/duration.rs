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

/// A signed, fixed-length span of time at nanosecond resolution.
///
/// The range is approximately +-10,000 years. The JSON encoding is a string
/// with the number of seconds, an optional fractional part, and an `s`
/// suffix: `"3s"`, `"3.000000001s"`, `"-1.5s"`.
///
/// # Example
/// ```
/// # use google_cloud_wkt::{Duration, DurationError};
/// let d = Duration::new(12, 340_000_000)?;
/// assert_eq!(String::from(d), "12.34s");
/// # Ok::<(), DurationError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[non_exhaustive]
pub struct Duration {
    seconds: i64,
    nanos: i32,
}

/// Represent failures in converting or creating [Duration] instances.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DurationError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// The seconds and nanoseconds components have different signs.
    #[error("if seconds and nanoseconds are not zero, they must have the same sign")]
    MismatchedSigns,

    /// Cannot parse the string representation.
    #[error("cannot deserialize the duration: {0}")]
    Deserialize(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = DurationError;

impl Duration {
    const NS: i32 = 1_000_000_000;

    /// The maximum value for the `seconds` component, approximately 10,000 years.
    pub const MAX_SECONDS: i64 = 315_576_000_000;

    /// The minimum value for the `seconds` component, approximately -10,000 years.
    pub const MIN_SECONDS: i64 = -Self::MAX_SECONDS;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = Self::NS - 1;

    /// The minimum value for the `nanos` component.
    pub const MIN_NANOS: i32 = -Self::MAX_NANOS;

    /// Creates a [Duration], validating the range and signs of both components.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_wkt::{Duration, DurationError};
    /// let d = Duration::new(-12, 340_000_000);
    /// assert!(matches!(d, Err(DurationError::MismatchedSigns)));
    /// ```
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        if seconds != 0 && nanos != 0 && ((seconds < 0) != (nanos < 0)) {
            return Err(Error::MismatchedSigns);
        }
        Ok(Self { seconds, nanos })
    }

    /// Creates a normalized [Duration], saturating at the range limits.
    ///
    /// The nanoseconds are added to the seconds with carry.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_wkt::Duration;
    /// let d = Duration::clamp(10, 2_500_000_000);
    /// assert_eq!(String::from(d), "12.5s");
    /// ```
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let mut seconds = seconds.saturating_add((nanos / Self::NS) as i64);
        let mut nanos = nanos % Self::NS;
        if seconds > 0 && nanos < 0 {
            seconds = seconds.saturating_sub(1);
            nanos += Self::NS;
        } else if seconds < 0 && nanos > 0 {
            seconds = seconds.saturating_add(1);
            nanos -= Self::NS;
        }
        if seconds > Self::MAX_SECONDS {
            return Self {
                seconds: Self::MAX_SECONDS,
                nanos: 0,
            };
        }
        if seconds < Self::MIN_SECONDS {
            return Self {
                seconds: Self::MIN_SECONDS,
                nanos: 0,
            };
        }
        Self { seconds, nanos }
    }

    /// Returns the seconds part of the duration.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second part of the duration.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl From<Duration> for String {
    fn from(duration: Duration) -> String {
        let sign = if duration.seconds < 0 || duration.nanos < 0 {
            "-"
        } else {
            ""
        };
        if duration.nanos == 0 {
            return format!("{sign}{}s", duration.seconds.abs());
        }
        let ns = format!("{:09}", duration.nanos.abs());
        format!(
            "{sign}{}.{}s",
            duration.seconds.abs(),
            ns.trim_end_matches('0')
        )
    }
}

impl TryFrom<&str> for Duration {
    type Error = DurationError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let digits = value
            .strip_suffix('s')
            .ok_or_else(|| DurationError::Deserialize("missing trailing 's'".into()))?;
        let (sign, digits) = match digits.strip_prefix('-') {
            Some(stripped) => (-1_i64, stripped),
            None => (1_i64, digits),
        };
        let (seconds, fraction) = match digits.split_once('.') {
            Some((s, f)) => (s, Some(f)),
            None => (digits, None),
        };
        let seconds = seconds
            .parse::<i64>()
            .map_err(|e| DurationError::Deserialize(e.into()))?;
        let nanos = match fraction {
            None => 0,
            Some(f) if f.is_empty() || f.len() > 9 || !f.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(DurationError::Deserialize(
                    format!("invalid fractional seconds in {value}").into(),
                ));
            }
            Some(f) => format!("{f:0<9}")
                .parse::<i32>()
                .map_err(|e| DurationError::Deserialize(e.into()))?,
        };
        Duration::new(sign * seconds, sign as i32 * nanos)
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = DurationError;
    fn try_from(value: std::time::Duration) -> Result<Self, Self::Error> {
        let seconds = i64::try_from(value.as_secs()).map_err(|_| DurationError::OutOfRange)?;
        Duration::new(seconds, value.subsec_nanos() as i32)
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = DurationError;
    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        if value.seconds < 0 || value.nanos < 0 {
            return Err(DurationError::OutOfRange);
        }
        Ok(std::time::Duration::new(
            value.seconds as u64,
            value.nanos as u32,
        ))
    }
}

impl serde::ser::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        String::from(*self).serialize(serializer)
    }
}

struct DurationVisitor;

impl serde::de::Visitor<'_> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a duration in Google format ([sign]{seconds}.{nanos}s)")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Duration::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(DurationVisitor)
    }
}
