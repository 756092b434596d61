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

/// A message of arbitrary type, tagged with a URL describing its type.
///
/// Long-running operations use `Any` for their metadata and responses. The
/// JSON representation is the embedded message plus an `@type` field:
///
/// ```norust
/// {
///   "@type": "type.googleapis.com/google.api.Service",
///   "name": "my-service.example.com"
/// }
/// ```
///
/// Messages with a custom JSON encoding that is not an object (for example
/// [Duration][crate::Duration]) are stored in a `value` field.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Any(serde_json::Map<String, serde_json::Value>);

/// Indicates a problem trying to use an [Any].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AnyError {
    /// Problem serializing an object into an [Any].
    #[error("cannot serialize object into an Any, source={0}")]
    Serialization(#[source] BoxedError),

    /// Problem deserializing an object from an [Any].
    #[error("cannot deserialize from an Any, source={0}")]
    Deserialization(#[source] BoxedError),

    /// The [Any] does not contain the desired type.
    #[error("expected type {want} in Any, found {got}")]
    TypeMismatch { want: String, got: String },
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = AnyError;

const TYPE: &str = "@type";

impl Any {
    /// Creates a new [Any] holding `message`, tagged with `type_url`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_wkt::{Any, AnyError};
    /// let any = Any::from_msg(
    ///     "type.googleapis.com/test.Payload",
    ///     &serde_json::json!({"name": "abc"}))?;
    /// assert_eq!(any.type_url(), Some("type.googleapis.com/test.Payload"));
    /// # Ok::<(), AnyError>(())
    /// ```
    pub fn from_msg<T>(type_url: &str, message: &T) -> Result<Self, Error>
    where
        T: serde::ser::Serialize,
    {
        use serde_json::Value;
        let value = serde_json::to_value(message).map_err(|e| Error::Serialization(e.into()))?;
        let mut map = match value {
            Value::Object(map) => map,
            v @ (Value::String(_) | Value::Number(_) | Value::Bool(_)) => {
                let mut map = serde_json::Map::new();
                map.insert("value".to_string(), v);
                map
            }
            _ => {
                return Err(Error::Serialization(
                    "only objects and scalar values can be stored in an Any".into(),
                ));
            }
        };
        map.insert(TYPE.to_string(), Value::String(type_url.to_string()));
        Ok(Self(map))
    }

    /// Returns the type URL, if present.
    pub fn type_url(&self) -> Option<&str> {
        self.0.get(TYPE).and_then(|v| v.as_str())
    }

    /// Extracts a `T` from the [Any], verifying the type URL matches.
    pub fn try_into_message<T>(&self, type_url: &str) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let got = self.type_url().unwrap_or_default();
        if got != type_url {
            return Err(Error::TypeMismatch {
                want: type_url.to_string(),
                got: got.to_string(),
            });
        }
        let mut map = self.0.clone();
        map.remove(TYPE);
        let value = match (map.len(), map.remove("value")) {
            (1, Some(v)) if !v.is_object() => v,
            (_, Some(v)) => {
                map.insert("value".to_string(), v);
                serde_json::Value::Object(map)
            }
            (_, None) => serde_json::Value::Object(map),
        };
        serde_json::from_value::<T>(value).map_err(|e| Error::Deserialization(e.into()))
    }
}

impl serde::ser::Serialize for Any {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for Any {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(Any(value))
    }
}
