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

//! Build typed requests from loosely-typed field mappings.
//!
//! Every client method accepts the request as a typed message, or as a JSON
//! object mapping field names to values. The mapping is converted to the
//! typed message before the request is sent. Field names can be written in
//! `snake_case`, as in the Rust field names, or `lowerCamelCase`, as in the
//! JSON encoding.
//!
//! # Example
//! ```
//! # use google_cloud_gax::request::RequestMessage;
//! #[derive(Debug, Default, serde::Deserialize)]
//! #[serde(default, rename_all = "camelCase", deny_unknown_fields)]
//! struct GetThingRequest {
//!     #[serde(alias = "thing_id")]
//!     thing_id: String,
//!     #[serde(alias = "page_size")]
//!     page_size: i32,
//! }
//!
//! impl RequestMessage for GetThingRequest {
//!     const REQUIRED_FIELDS: &'static [&'static str] = &["thing_id"];
//! }
//!
//! let request = GetThingRequest::from_fields(serde_json::json!({"thing_id": "abc"}))?;
//! assert_eq!(request.thing_id, "abc");
//!
//! let err = GetThingRequest::from_fields(serde_json::json!({"pageSize": 10})).unwrap_err();
//! assert!(err.is_binding(), "{err:?}");
//! # Ok::<(), google_cloud_gax::error::Error>(())
//! ```

use crate::Result;
use crate::error::Error;
use serde_json::{Map, Value};

/// The reasons a field mapping cannot be converted to a request.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CoercionError {
    /// The mapping is not a JSON object.
    #[error("expected a JSON object mapping field names to values, got {0}")]
    NotAnObject(&'static str),

    /// A required field is absent, or is `null`.
    #[error("missing required field `{0}`")]
    MissingRequiredField(String),

    /// A field is unknown, or its value has the wrong type.
    #[error("invalid field in request mapping: {0}")]
    InvalidField(#[source] serde_json::Error),
}

/// Implemented by every request message.
///
/// The generated code lists the fields that must be present in a mapping.
/// Path parameters are the typical required fields.
pub trait RequestMessage: serde::de::DeserializeOwned {
    /// The required fields, using their `snake_case` names.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Converts a mapping of field names to values into the request.
    ///
    /// Fields set to `null` are treated as absent, including the fields of
    /// nested messages.
    fn from_fields(fields: Value) -> Result<Self> {
        let map = match fields {
            Value::Object(map) => map,
            other => {
                return Err(Error::binding(CoercionError::NotAnObject(kind(&other))));
            }
        };
        let map = drop_nulls(map);
        if let Some(missing) = Self::REQUIRED_FIELDS
            .iter()
            .find(|name| !map.contains_key(**name) && !map.contains_key(&lower_camel(name)))
        {
            return Err(Error::binding(CoercionError::MissingRequiredField(
                missing.to_string(),
            )));
        }
        serde_json::from_value::<Self>(Value::Object(map))
            .map_err(|e| Error::binding(CoercionError::InvalidField(e)))
    }
}

fn drop_nulls(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k, drop_nested_nulls(v)))
        .collect()
}

fn drop_nested_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(drop_nulls(map)),
        Value::Array(values) => Value::Array(values.into_iter().map(drop_nested_nulls).collect()),
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn lower_camel(name: &str) -> String {
    let mut upper = false;
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match (c, upper) {
            ('_', _) => upper = true,
            (c, true) => {
                out.extend(c.to_uppercase());
                upper = false;
            }
            (c, false) => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error as _;
    use test_case::test_case;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase", deny_unknown_fields)]
    struct FakeRequest {
        #[serde(alias = "license_code")]
        license_code: String,
        project: String,
        #[serde(alias = "page_size")]
        page_size: Option<i32>,
    }

    impl RequestMessage for FakeRequest {
        const REQUIRED_FIELDS: &'static [&'static str] = &["license_code", "project"];
    }

    fn source(err: &Error) -> Option<&CoercionError> {
        err.source().and_then(|e| e.downcast_ref::<CoercionError>())
    }

    #[test_case(json!({"license_code": "lc", "project": "p"}))]
    #[test_case(json!({"licenseCode": "lc", "project": "p"}))]
    #[test_case(json!({"licenseCode": "lc", "project": "p", "pageSize": null}))]
    fn success(input: Value) -> anyhow::Result<()> {
        let got = FakeRequest::from_fields(input)?;
        let want = FakeRequest {
            license_code: "lc".into(),
            project: "p".into(),
            page_size: None,
        };
        assert_eq!(got, want);
        Ok(())
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase", deny_unknown_fields)]
    struct FakeParent {
        name: String,
        child: Option<FakeChild>,
        children: Vec<FakeChild>,
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase", deny_unknown_fields)]
    struct FakeChild {
        display_name: String,
        size: i32,
    }

    impl RequestMessage for FakeParent {
        const REQUIRED_FIELDS: &'static [&'static str] = &["name"];
    }

    #[test]
    fn nested_nulls() -> anyhow::Result<()> {
        let got = FakeParent::from_fields(json!({
            "name": "p",
            "child": {"displayName": null, "size": 3},
            "children": [{"displayName": "a", "size": null}],
        }))?;
        let want = FakeParent {
            name: "p".into(),
            child: Some(FakeChild {
                display_name: String::new(),
                size: 3,
            }),
            children: vec![FakeChild {
                display_name: "a".into(),
                size: 0,
            }],
        };
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn optional_fields() -> anyhow::Result<()> {
        let got = FakeRequest::from_fields(
            json!({"license_code": "lc", "project": "p", "page_size": 42}),
        )?;
        assert_eq!(got.page_size, Some(42));
        Ok(())
    }

    #[test_case(json!({"project": "p"}), "license_code")]
    #[test_case(json!({"license_code": "lc"}), "project")]
    #[test_case(json!({"license_code": "lc", "project": null}), "project")]
    fn missing(input: Value, want: &str) {
        let err = FakeRequest::from_fields(input).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(
            matches!(source(&err), Some(CoercionError::MissingRequiredField(f)) if f == want),
            "{err:?}"
        );
    }

    #[test_case(json!({"license_code": 123, "project": "p"}))]
    #[test_case(json!({"license_code": "lc", "project": "p", "page_size": "ten"}))]
    #[test_case(json!({"license_code": "lc", "project": "p", "unknown_field": 1}))]
    fn invalid(input: Value) {
        let err = FakeRequest::from_fields(input).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(
            matches!(source(&err), Some(CoercionError::InvalidField(_))),
            "{err:?}"
        );
    }

    #[test_case(json!(null))]
    #[test_case(json!("license_code"))]
    #[test_case(json!(["license_code", "project"]))]
    fn not_an_object(input: Value) {
        let err = FakeRequest::from_fields(input).unwrap_err();
        assert!(
            matches!(source(&err), Some(CoercionError::NotAnObject(_))),
            "{err:?}"
        );
    }

    #[test_case("name", "name")]
    #[test_case("license_code", "licenseCode")]
    #[test_case("service_level_objective_id", "serviceLevelObjectiveId")]
    fn camel(input: &str, want: &str) {
        assert_eq!(lower_camel(input), want);
    }
}
