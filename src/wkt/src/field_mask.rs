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

/// A set of field paths, used to select the fields modified by an update.
///
/// Update RPCs, such as `UpdateService` in Cloud Monitoring, use a field mask
/// to name the fields the service should change. Fields not named in the mask
/// are left untouched, even if the resource in the request has a different
/// value for them.
///
/// Paths are dot-separated: `"user.display_name"` names the `display_name`
/// field inside `user`.
///
/// # JSON Encoding
///
/// In JSON, a field mask is encoded as a single string with the paths
/// separated by commas. A mask with `paths = ["a.b", "c"]` becomes `"a.b,c"`.
///
/// # Example
/// ```
/// # use google_cloud_wkt::FieldMask;
/// let mask = FieldMask::default().set_paths(["display_name", "telemetry"]);
/// assert_eq!(mask.paths, vec!["display_name", "telemetry"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct FieldMask {
    /// The set of field mask paths.
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Sets the paths.
    pub fn set_paths<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = v.into_iter().map(|p| p.into()).collect();
        self
    }
}

impl serde::ser::Serialize for FieldMask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        self.paths.join(",").serialize(serializer)
    }
}

struct PathVisitor;

impl serde::de::Visitor<'_> for PathVisitor {
    type Value = FieldMask;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with comma-separated field mask paths")
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if value.is_empty() {
            return Ok(FieldMask::default());
        }
        Ok(FieldMask::default().set_paths(value.split(',')))
    }
}

impl<'de> serde::de::Deserialize<'de> for FieldMask {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(PathVisitor)
    }
}
