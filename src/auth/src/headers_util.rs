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

use crate::Result;
use crate::errors;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};

/// The header used to charge quota to a different project.
pub(crate) const QUOTA_PROJECT_KEY: &str = "x-goog-user-project";

const API_KEY_HEADER_KEY: &str = "x-goog-api-key";

/// Creates the headers for a bearer token.
pub(crate) fn build_bearer_headers(
    token: &str,
    quota_project_id: &Option<String>,
) -> Result<HeaderMap> {
    build_headers(
        AUTHORIZATION,
        &format!("Bearer {token}"),
        quota_project_id,
    )
}

/// Creates the headers for an API key.
pub(crate) fn build_api_key_headers(
    api_key: &str,
    quota_project_id: &Option<String>,
) -> Result<HeaderMap> {
    build_headers(
        HeaderName::from_static(API_KEY_HEADER_KEY),
        api_key,
        quota_project_id,
    )
}

fn build_headers(
    name: HeaderName,
    secret: &str,
    quota_project_id: &Option<String>,
) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(secret).map_err(errors::non_transient)?;
    value.set_sensitive(true);
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(name, value);
    if let Some(project) = quota_project_id {
        headers.insert(
            HeaderName::from_static(QUOTA_PROJECT_KEY),
            HeaderValue::from_str(project).map_err(errors::non_transient)?,
        );
    }
    Ok(headers)
}
