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

//! Traits and helpers to serialize query parameters.
//!
//! Query parameters in the Google APIs can be strings, integers, enums, or
//! messages with a custom JSON encoding such as `FieldMask`. The generated
//! transports treat all of them uniformly: scalars are added directly, and
//! everything else is converted to a [serde_json::Value] first.
//!
//! Fields with the default value (empty strings, zero, `None`) are not sent,
//! matching the JSON encoding of the request messages.

/// A type that can be used as a query parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl QueryParameter for serde_json::Value {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            Self::Object(object) => object.into_iter().fold(builder, |builder, (k, v)| {
                v.add(builder, format!("{name}.{k}").as_str())
            }),
            Self::Array(array) => array
                .into_iter()
                .fold(builder, |builder, v| v.add(builder, name)),
            Self::Null => builder,
            Self::String(s) => builder.query(&[(name, s)]),
            Self::Number(n) => builder.query(&[(name, format!("{n}"))]),
            Self::Bool(b) => builder.query(&[(name, b)]),
        }
    }
}

impl QueryParameter for &str {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        if self.is_empty() {
            return builder;
        }
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for i32 {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        if self == 0 {
            return builder;
        }
        builder.query(&[(name, self)])
    }
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            None => builder,
            Some(v) => v.add(builder, name),
        }
    }
}

/// Adds a parameter using its JSON representation.
///
/// Used for enums and for messages like `FieldMask`.
pub fn add_serialized<T: serde::Serialize>(
    builder: reqwest::RequestBuilder,
    name: &str,
    value: &T,
) -> gax::Result<reqwest::RequestBuilder> {
    let value = serde_json::to_value(value).map_err(gax::error::Error::ser)?;
    Ok(value.add(builder, name))
}
