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

use gax::client_builder::Error as BuilderError;
use http::Uri;
use std::str::FromStr;

/// Returns the endpoint with a scheme and without a trailing slash.
///
/// Host-only endpoints, such as `compute.googleapis.com`, use `https://`.
pub(crate) fn origin(endpoint: &str) -> String {
    let endpoint = endpoint.trim_end_matches('/');
    if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("https://{endpoint}")
    }
}

/// Calculates the host of the service, based on the configured endpoint and
/// the default endpoint.
///
/// Locational and regional endpoints are used as the host. For VIPs, private
/// networks, and emulators the host is the default endpoint host.
pub(crate) fn host(
    endpoint: Option<&str>,
    default_endpoint: &str,
) -> gax::client_builder::Result<String> {
    let default_host = authority_host(default_endpoint)?;
    let Some(endpoint) = endpoint else {
        return Ok(default_host);
    };
    let custom_host = authority_host(endpoint)?;
    if let (Some(prefix), Some(service)) = (
        custom_host.strip_suffix(".googleapis.com"),
        default_host.strip_suffix(".googleapis.com"),
    ) {
        let parts: Vec<&str> = prefix.split('.').collect();
        // `{service}.{region}.rep.googleapis.com`
        if parts.len() == 3 && parts[0] == service && parts[2] == "rep" {
            return Ok(custom_host);
        }
        // `{region}-{service}.googleapis.com`
        if parts.len() == 1 && parts[0].ends_with(&format!("-{service}")) {
            return Ok(custom_host);
        }
    }
    Ok(default_host)
}

fn authority_host(endpoint: &str) -> gax::client_builder::Result<String> {
    let uri = Uri::from_str(&origin(endpoint)).map_err(BuilderError::transport)?;
    uri.authority()
        .map(|a| a.host().to_string())
        .ok_or_else(|| BuilderError::transport(format!("missing authority in endpoint {endpoint}")))
}
