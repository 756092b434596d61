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

use crate::api_header::{X_GOOG_API_CLIENT, XGoogApiClient};
use gax::options::RequestOptions;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

pub use auth::credentials::CredentialsSource;

/// The client configuration for [crate::http::ReqwestClient] and the
/// generated clients.
pub type Configuration = gax::configuration::Configuration<CredentialsSource>;

/// A configuration shared with derived configurations.
pub type SharedConfiguration = gax::configuration::SharedConfiguration<CredentialsSource>;

pub(crate) const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

/// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &Configuration) -> bool {
    if config.tracing() {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// The per-call defaults computed from a client configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallDefaults {
    pub timeout: Option<Duration>,
    pub headers: HeaderMap,
}

impl CallDefaults {
    /// Computes the defaults from the current state of `config`.
    ///
    /// The headers always include `x-goog-api-client`.
    pub fn from_config(config: &Configuration, api_client: &XGoogApiClient) -> Self {
        let name = config.lib_name();
        let version = config.lib_version();
        let lib = match (name.as_deref(), version.as_deref()) {
            (Some(n), Some(v)) => Some((n, v)),
            (Some(n), None) => Some((n, "")),
            _ => None,
        };
        // The application controls the library name, fall back to the plain
        // header if it contains characters not allowed in headers.
        let value = HeaderValue::from_str(&api_client.rest_header_value(lib))
            .or_else(|_| HeaderValue::from_str(&api_client.rest_header_value(None)));
        let mut headers = HeaderMap::new();
        if let Ok(value) = value {
            headers.insert(HeaderName::from_static(X_GOOG_API_CLIENT), value);
        }
        Self {
            timeout: config.timeout(),
            headers,
        }
    }
}

/// Merges the caller's options with the configured defaults.
///
/// Values set by the caller take precedence.
pub fn apply(
    mut options: RequestOptions,
    config: &Configuration,
    api_client: &XGoogApiClient,
) -> RequestOptions {
    let defaults = CallDefaults::from_config(config, api_client);
    options.apply_defaults(defaults.timeout, &defaults.headers);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_header::GAPIC;
    use scoped_env::ScopedEnv;

    const API_CLIENT: XGoogApiClient = XGoogApiClient {
        name: "google-cloud-test-v1",
        version: "1.2.3",
        library_type: GAPIC,
    };

    fn api_client_header(options: &RequestOptions) -> Option<&str> {
        options
            .headers()
            .get(X_GOOG_API_CLIENT)
            .and_then(|v| v.to_str().ok())
    }

    // Manipulates the environment, must run serially.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let mut config = Configuration::new();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        config.set_tracing(true);
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = Configuration::new();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = Configuration::new();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }

    #[test]
    fn defaults_without_lib() {
        let config = Configuration::new();
        let defaults = CallDefaults::from_config(&config, &API_CLIENT);
        assert_eq!(defaults.timeout, None);
        let value = defaults
            .headers
            .get(X_GOOG_API_CLIENT)
            .and_then(|v| v.to_str().ok());
        assert!(value.is_some_and(|v| v.starts_with("gl-rust/")), "{value:?}");
    }

    #[test]
    fn defaults_with_lib() {
        let mut config = Configuration::new();
        config
            .set_lib_name("my-app")
            .set_lib_version("0.1.0")
            .set_timeout(Duration::from_secs(20));
        let defaults = CallDefaults::from_config(&config, &API_CLIENT);
        assert_eq!(defaults.timeout, Some(Duration::from_secs(20)));
        let value = defaults
            .headers
            .get(X_GOOG_API_CLIENT)
            .and_then(|v| v.to_str().ok());
        assert!(
            value.is_some_and(|v| v.starts_with("my-app/0.1.0 gl-rust/")),
            "{value:?}"
        );
    }

    #[test]
    fn defaults_with_invalid_lib() {
        let mut config = Configuration::new();
        config.set_lib_name("bad\nname").set_lib_version("1");
        let defaults = CallDefaults::from_config(&config, &API_CLIENT);
        let value = defaults
            .headers
            .get(X_GOOG_API_CLIENT)
            .and_then(|v| v.to_str().ok());
        assert!(value.is_some_and(|v| v.starts_with("gl-rust/")), "{value:?}");
    }

    #[test]
    fn apply_caller_timeout_wins() {
        let mut config = Configuration::new();
        config.set_timeout(Duration::from_secs(60));

        let options = apply(RequestOptions::default(), &config, &API_CLIENT);
        assert_eq!(options.timeout(), &Some(Duration::from_secs(60)));
        assert!(api_client_header(&options).is_some(), "{options:?}");

        let mut caller = RequestOptions::default();
        caller.set_timeout(Duration::from_secs(2));
        let options = apply(caller, &config, &API_CLIENT);
        assert_eq!(options.timeout(), &Some(Duration::from_secs(2)));
        assert!(api_client_header(&options).is_some(), "{options:?}");
    }
}
