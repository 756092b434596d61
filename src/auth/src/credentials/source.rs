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

use super::{Credentials, build_from_json, read_json};
use crate::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Where a client obtains its credentials.
///
/// Clients accept a path to a credentials file, the contents of such a file,
/// or credentials created by the application.
///
/// # Example
/// ```
/// # use google_cloud_auth::credentials::CredentialsSource;
/// # use google_cloud_auth::credentials::anonymous;
/// let source = CredentialsSource::from("/path/to/key.json");
/// let source = CredentialsSource::from(serde_json::json!({"type": "api_key", "api_key": "k"}));
/// let source = CredentialsSource::from(anonymous::Builder::new().build());
/// ```
#[derive(Clone)]
#[non_exhaustive]
pub enum CredentialsSource {
    /// A path to a credentials file.
    Path(PathBuf),
    /// The contents of a credentials file.
    Json(Value),
    /// Credentials created by the application.
    Credentials(Credentials),
}

impl CredentialsSource {
    /// Resolves the source into [Credentials].
    ///
    /// The scopes and audience are applied to credentials loaded from a file
    /// or JSON object. Credentials created by the application are returned
    /// unchanged.
    pub fn into_credentials(
        self,
        scopes: Option<Vec<String>>,
        audience: Option<String>,
    ) -> Result<Credentials> {
        match self {
            Self::Path(path) => build_from_json(read_json(&path)?, scopes, audience, None),
            Self::Json(json) => build_from_json(json, scopes, audience, None),
            Self::Credentials(credentials) => Ok(credentials),
        }
    }
}

impl std::fmt::Debug for CredentialsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Json(_) => f.debug_tuple("Json").field(&"[censored]").finish(),
            Self::Credentials(c) => f.debug_tuple("Credentials").field(c).finish(),
        }
    }
}

impl From<PathBuf> for CredentialsSource {
    fn from(value: PathBuf) -> Self {
        Self::Path(value)
    }
}

impl From<&Path> for CredentialsSource {
    fn from(value: &Path) -> Self {
        Self::Path(value.to_path_buf())
    }
}

impl From<&str> for CredentialsSource {
    fn from(value: &str) -> Self {
        Self::Path(PathBuf::from(value))
    }
}

impl From<String> for CredentialsSource {
    fn from(value: String) -> Self {
        Self::Path(PathBuf::from(value))
    }
}

impl From<Value> for CredentialsSource {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<Credentials> for CredentialsSource {
    fn from(value: Credentials) -> Self {
        Self::Credentials(value)
    }
}
