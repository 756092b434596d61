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

//! Client identification header helpers.

/// The name of the client identification header.
pub const X_GOOG_API_CLIENT: &str = "x-goog-api-client";

/// Generated libraries create one static instance of this struct and use it
/// to compute the `x-goog-api-client` header value for each request.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

pub const GAPIC: &str = "gapic";

mod build_info {
    // Written by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// Formats the value of the `x-goog-api-client` header for REST clients.
    ///
    /// The `lib` parameter is the optional name and version of the library
    /// or application using the client, configured via `with_lib_name()` and
    /// `with_lib_version()`. It becomes the first token in the header.
    pub fn rest_header_value(&self, lib: Option<(&str, &str)>) -> String {
        // `RUSTC_VERSION` starts with "rustc ". Leave it unchanged if not.
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(rustc_version);
        let gax_version = build_info::PKG_VERSION;

        let value = format!(
            "gl-rust/{rustc_version} gax/{gax_version} rest/{gax_version}-reqwest {}/{}",
            self.library_type, self.version
        );
        match lib {
            Some((name, version)) => format!("{name}/{version} {value}"),
            None => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(' ')
            .filter_map(|v| v.split_once('/'))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    const HEADER: XGoogApiClient = XGoogApiClient {
        name: "google-cloud-test-v1",
        version: "1.2.3",
        library_type: GAPIC,
    };

    #[test]
    fn format_rest() {
        let fields = breakdown(HEADER.rest_header_value(None).as_str());
        assert_eq!(fields.get(GAPIC).map(String::as_str), Some("1.2.3"));
        assert_eq!(
            fields.get("gax").map(String::as_str),
            Some(build_info::PKG_VERSION)
        );
        let want = format!("{}-reqwest", build_info::PKG_VERSION);
        assert_eq!(fields.get("rest"), Some(&want));
        assert!(fields.get("grpc").is_none(), "{fields:?}");

        let got = fields.get("gl-rust");
        let want = build_info::RUSTC_VERSION;
        assert!(
            got.is_some_and(|s| want.contains(s.as_str()) && !s.is_empty()),
            "mismatched rustc version {want} and {got:?}"
        );
    }

    #[test]
    fn format_rest_with_lib() {
        let value = HEADER.rest_header_value(Some(("my-lib", "4.5.6")));
        assert!(value.starts_with("my-lib/4.5.6 gl-rust/"), "{value}");
        assert!(value.ends_with(" gapic/1.2.3"), "{value}");
    }

    #[test]
    fn header_value_is_valid() {
        let value = HEADER.rest_header_value(Some(("my-lib", "4.5.6")));
        let got = http::HeaderValue::from_str(&value);
        assert!(got.is_ok(), "{got:?}");
    }
}
