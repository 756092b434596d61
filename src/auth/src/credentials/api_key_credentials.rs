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

//! [API Key] Credentials type.
//!
//! An API key is a simple encrypted string that you can use when calling
//! Google Cloud APIs. When you use API keys in your applications, ensure that
//! they are kept secure during both storage and transmission.
//!
//! [API Key]: https://cloud.google.com/api-keys/docs/overview

use crate::Result;
use crate::credentials::Credentials;
use crate::credentials::dynamic::CredentialsProvider;
use crate::errors;
use crate::headers_util::build_api_key_headers;
use http::HeaderMap;

struct ApiKeyCredentials {
    api_key: String,
    quota_project_id: Option<String>,
}

impl std::fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("api_key", &"[censored]")
            .field("quota_project_id", &self.quota_project_id)
            .finish()
    }
}

/// The contents of a credentials file with `"type": "api_key"`.
#[derive(serde::Deserialize)]
pub(crate) struct ApiKeyFile {
    pub api_key: String,
    #[serde(default)]
    pub quota_project_id: Option<String>,
}

impl ApiKeyFile {
    pub(crate) fn from_json(json: serde_json::Value) -> Result<Self> {
        serde_json::from_value(json).map_err(errors::non_transient)
    }
}

/// A builder for creating credentials that authenticate using an [API key].
///
/// API keys are convenient because no [principal] is needed. The API key
/// associates the request with a Google Cloud project for billing and quota
/// purposes.
///
/// Note that only some Cloud APIs support API keys. The rest require full
/// credentials.
///
/// [API key]: https://cloud.google.com/docs/authentication/api-keys-use
/// [principal]: https://cloud.google.com/docs/authentication#principal
#[derive(Debug)]
pub struct Builder {
    api_key: String,
    quota_project_id: Option<String>,
}

impl Builder {
    /// Creates a new builder with given API key.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_auth::credentials::api_key_credentials::Builder;
    /// let credentials = Builder::new("my-api-key").build();
    /// ```
    pub fn new<T: Into<String>>(api_key: T) -> Self {
        Self {
            api_key: api_key.into(),
            quota_project_id: None,
        }
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_auth::credentials::api_key_credentials::Builder;
    /// let credentials = Builder::new("my-api-key")
    ///     .with_quota_project_id("my-project")
    ///     .build();
    /// ```
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<T: Into<String>>(mut self, quota_project_id: T) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        Credentials::from(ApiKeyCredentials {
            api_key: self.api_key,
            quota_project_id: self.quota_project_id,
        })
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for ApiKeyCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        build_api_key_headers(&self.api_key, &self.quota_project_id)
    }
}
