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

//! Helpers for the enums in the generated message types.
//!
//! Services may add enum values before the client libraries learn about
//! them. The generated enums keep those values in an `UnknownValue` variant,
//! so they survive a round trip through the client. These types are
//! implementation details of the generated code.

use std::marker::PhantomData;

/// An enum value not known to the client library.
///
/// The JSON encoding uses the value name, but services may also send the
/// numeric value.
#[derive(Clone, Debug, PartialEq)]
pub enum UnknownEnumValue {
    Integer(i32),
    String(String),
}

impl UnknownEnumValue {
    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::String(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::String(s) => Some(s.as_str()),
        }
    }
}

impl serde::ser::Serialize for UnknownEnumValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Integer(v) => serializer.serialize_i32(*v),
            Self::String(s) => serializer.serialize_str(s),
        }
    }
}

/// Deserializes an enum from its name or its numeric value.
pub struct EnumVisitor<T> {
    name: &'static str,
    _enum: PhantomData<T>,
}

impl<T> EnumVisitor<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            _enum: PhantomData,
        }
    }

    fn out_of_range<E: serde::de::Error, V: std::fmt::Display>(&self, value: V) -> E {
        E::custom(format!("enum value {value} is out of range for {}", self.name))
    }
}

impl<T> serde::de::Visitor<'_> for EnumVisitor<T>
where
    T: From<i32> + for<'a> From<&'a str>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a {} value, as a string or an integer", self.name)
    }

    fn visit_str<E>(self, value: &str) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value)
            .map(T::from)
            .map_err(|_| self.out_of_range(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value)
            .map(T::from)
            .map_err(|_| self.out_of_range(value))
    }
}

/// Formats an enum using its name if available, its value otherwise.
pub fn display_enum(
    f: &mut std::fmt::Formatter<'_>,
    name: Option<&str>,
    value: Option<i32>,
) -> std::fmt::Result {
    match (name, value) {
        (Some(n), _) => f.write_str(n),
        (None, Some(v)) => write!(f, "{v}"),
        (None, None) => f.write_str("UNKNOWN"),
    }
}

/// Serializes an optional `u64` as a decimal string.
///
/// In ProtoJSON 64-bit integers are strings, but services may send either
/// strings or numbers. Use with `#[serde(default, with = "...")]`.
pub mod optional_u64 {
    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(Visitor)
    }

    struct Visitor;

    impl serde::de::Visitor<'_> for Visitor {
        type Value = Option<u64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a 64-bit unsigned integer, as a string or a number")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            value.parse::<u64>().map(Some).map_err(E::custom)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            u64::try_from(value)
                .map(Some)
                .map_err(|_| E::custom(format!("{value} is out of range for u64")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[derive(Debug, PartialEq)]
    enum Color {
        Red,
        Other(UnknownEnumValue),
    }

    impl From<i32> for Color {
        fn from(value: i32) -> Self {
            match value {
                1 => Self::Red,
                v => Self::Other(UnknownEnumValue::Integer(v)),
            }
        }
    }

    impl From<&str> for Color {
        fn from(value: &str) -> Self {
            match value {
                "RED" => Self::Red,
                v => Self::Other(UnknownEnumValue::String(v.to_string())),
            }
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Color {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(EnumVisitor::<Color>::new("test.Color"))
        }
    }

    #[test_case(json!("RED"), Color::Red)]
    #[test_case(json!(1), Color::Red)]
    #[test_case(json!("GREEN"), Color::Other(UnknownEnumValue::String("GREEN".into())))]
    #[test_case(json!(7), Color::Other(UnknownEnumValue::Integer(7)))]
    fn deserialize(input: serde_json::Value, want: Color) -> anyhow::Result<()> {
        let got = serde_json::from_value::<Color>(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!(i64::MAX))]
    #[test_case(json!(i64::MIN))]
    #[test_case(json!(true))]
    fn deserialize_error(input: serde_json::Value) {
        let got = serde_json::from_value::<Color>(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn unknown_value() -> anyhow::Result<()> {
        let u = UnknownEnumValue::Integer(123);
        assert_eq!((u.value(), u.name()), (Some(123), None));
        assert_eq!(serde_json::to_value(&u)?, json!(123));
        let u = UnknownEnumValue::String("RED".into());
        assert_eq!((u.value(), u.name()), (None, Some("RED")));
        assert_eq!(serde_json::to_value(&u)?, json!("RED"));
        Ok(())
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default)]
    struct WithU64 {
        #[serde(with = "super::optional_u64", skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
    }

    #[test_case(json!({"id": "123"}), Some(123); "string")]
    #[test_case(json!({"id": 123}), Some(123); "number")]
    #[test_case(json!({"id": null}), None; "null")]
    #[test_case(json!({}), None; "absent")]
    fn optional_u64_deserialize(input: serde_json::Value, want: Option<u64>) -> anyhow::Result<()> {
        let got = serde_json::from_value::<WithU64>(input)?;
        assert_eq!(got.id, want);
        Ok(())
    }

    #[test]
    fn optional_u64_serialize() -> anyhow::Result<()> {
        let got = serde_json::to_value(WithU64 { id: Some(u64::MAX) })?;
        assert_eq!(got, json!({"id": u64::MAX.to_string()}));
        let got = serde_json::to_value(WithU64 { id: None })?;
        assert_eq!(got, json!({}));
        Ok(())
    }

    #[test_case(json!({"id": -1}); "negative")]
    #[test_case(json!({"id": "abc"}); "not a number")]
    fn optional_u64_errors(input: serde_json::Value) {
        let got = serde_json::from_value::<WithU64>(input);
        assert!(got.is_err(), "{got:?}");
    }
}
