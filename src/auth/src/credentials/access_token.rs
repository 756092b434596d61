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

//! Credentials wrapping an access token obtained elsewhere.
//!
//! Applications that already have an OAuth2 access token, for example from
//! `gcloud auth print-access-token`, can use these credentials to send it as
//! a bearer token. The token is never refreshed.

use crate::Result;
use crate::credentials::Credentials;
use crate::credentials::dynamic::CredentialsProvider;
use crate::headers_util::build_bearer_headers;
use http::HeaderMap;

struct AccessTokenCredentials {
    token: String,
    quota_project_id: Option<String>,
}

impl std::fmt::Debug for AccessTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenCredentials")
            .field("token", &"[censored]")
            .field("quota_project_id", &self.quota_project_id)
            .finish()
    }
}

/// A builder for credentials using a fixed access token.
#[derive(Debug)]
pub struct Builder {
    token: String,
    quota_project_id: Option<String>,
}

impl Builder {
    /// Creates a new builder with the given access token.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_auth::credentials::access_token::Builder;
    /// let credentials = Builder::new("ya29.my-token").build();
    /// ```
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
            quota_project_id: None,
        }
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<T: Into<String>>(mut self, quota_project_id: T) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        Credentials::from(AccessTokenCredentials {
            token: self.token,
            quota_project_id: self.quota_project_id,
        })
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for AccessTokenCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        build_bearer_headers(&self.token, &self.quota_project_id)
    }
}
