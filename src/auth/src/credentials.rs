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
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod access_token;
pub mod anonymous;
pub mod api_key_credentials;
pub mod service_account;

mod source;
pub use source::CredentialsSource;

pub(crate) const GOOGLE_APPLICATION_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";
const WINDOWS_APPDATA: &str = "APPDATA";
const UNIX_HOME: &str = "HOME";
const ADC_FILE: &str = "application_default_credentials.json";

/// Computes the authentication headers for each request.
///
/// The clients hold one of these and call [Credentials::headers] before
/// sending each request. The headers depend on the kind of
/// [credentials][credentials-link]: an `authorization` header with a bearer
/// token, an `x-goog-api-key` header, or nothing at all for anonymous
/// access.
///
/// This struct is cheap to clone, all clones share the same provider.
///
/// [credentials-link]: https://cloud.google.com/docs/authentication#credentials
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> From<T> for Credentials
where
    T: dynamic::CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers used to authenticate a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

pub mod dynamic {
    use super::Result;
    use http::HeaderMap;

    /// The interface implemented by each kind of credentials.
    ///
    /// Applications can implement this trait to provide custom credentials,
    /// and then convert them to [Credentials][super::Credentials].
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the auth headers.
        ///
        /// Different auth tokens are sent via different headers. The
        /// [Credentials] constructs the headers (and header values) that
        /// should be sent with a request.
        ///
        /// [Credentials]: super::Credentials
        async fn headers(&self) -> Result<HeaderMap>;
    }
}

/// A builder for [Application Default Credentials].
///
/// The builder looks for a credentials file in the following locations:
///
/// 1. The file named by the `GOOGLE_APPLICATION_CREDENTIALS` environment
///    variable.
/// 2. The file created by `gcloud auth application-default login`. That is
///    `$HOME/.config/gcloud/application_default_credentials.json` on Unix
///    and `%APPDATA%\gcloud\application_default_credentials.json` on Windows.
///
/// The file's `type` field selects the kind of credentials.
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
#[derive(Debug, Default)]
pub struct Builder {
    scopes: Option<Vec<String>>,
    audience: Option<String>,
    quota_project_id: Option<String>,
}

impl Builder {
    /// Sets the [scopes] for these credentials.
    ///
    /// [scopes]: https://developers.google.com/identity/protocols/oauth2/scopes
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Sets the audience for self-signed JWTs.
    ///
    /// The transport sets this to `https://{service host}/`.
    pub fn with_audience<S: Into<String>>(mut self, audience: S) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<S: Into<String>>(mut self, quota_project_id: S) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Returns a [Credentials] instance for the application default
    /// credentials.
    pub fn build(self) -> Result<Credentials> {
        let json = load_adc()?;
        build_from_json(json, self.scopes, self.audience, self.quota_project_id)
    }
}

fn load_adc() -> Result<Value> {
    if let Ok(path) = std::env::var(GOOGLE_APPLICATION_CREDENTIALS) {
        tracing::debug!(%path, "loading credentials from {GOOGLE_APPLICATION_CREDENTIALS}");
        return read_json(Path::new(&path)).map_err(|e| {
            errors::non_transient_from_msg(format!(
                "cannot load the file named by {GOOGLE_APPLICATION_CREDENTIALS} ({path}): {e}"
            ))
        });
    }
    match adc_well_known_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "loading credentials from gcloud");
            read_json(&path)
        }
        _ => Err(errors::non_transient_from_msg(format!(
            "cannot find the application default credentials. Set {GOOGLE_APPLICATION_CREDENTIALS} \
             or run `gcloud auth application-default login`"
        ))),
    }
}

fn adc_well_known_path() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        let appdata = std::env::var(WINDOWS_APPDATA).ok()?;
        Some(PathBuf::from(appdata).join("gcloud").join(ADC_FILE))
    } else {
        let home = std::env::var(UNIX_HOME).ok()?;
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("gcloud")
                .join(ADC_FILE),
        )
    }
}

pub(crate) fn read_json(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path).map_err(errors::non_transient)?;
    serde_json::from_str(&contents).map_err(errors::non_transient)
}

/// Creates credentials from the contents of a credentials file.
pub(crate) fn build_from_json(
    json: Value,
    scopes: Option<Vec<String>>,
    audience: Option<String>,
    quota_project_id: Option<String>,
) -> Result<Credentials> {
    let cred_type = json
        .get("type")
        .ok_or_else(|| errors::non_transient_from_msg("missing `type` field in credentials"))?
        .as_str()
        .ok_or_else(|| errors::non_transient_from_msg("the `type` field is not a string"))?
        .to_string();
    match cred_type.as_str() {
        "service_account" => {
            let builder = service_account::Builder::new(json);
            let builder = match scopes {
                Some(s) => builder.with_scopes(s),
                None => builder,
            };
            let builder = match audience {
                Some(a) => builder.with_audience(a),
                None => builder,
            };
            let builder = match quota_project_id {
                Some(q) => builder.with_quota_project_id(q),
                None => builder,
            };
            builder.build()
        }
        "api_key" => {
            let key = api_key_credentials::ApiKeyFile::from_json(json)?;
            let builder = api_key_credentials::Builder::new(key.api_key);
            let builder = match quota_project_id.or(key.quota_project_id) {
                Some(q) => builder.with_quota_project_id(q),
                None => builder,
            };
            Ok(builder.build())
        }
        other => Err(errors::non_transient_from_msg(format!(
            "unsupported credentials type `{other}`, expected `service_account` or `api_key`"
        ))),
    }
}
