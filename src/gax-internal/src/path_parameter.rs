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

//! Handling of missing path parameters.
//!
//! Parameters used to build the request path are required. An empty value
//! would produce a request for the wrong resource, so the transport returns
//! an error before sending anything.

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Returns the value, or a binding error if it is empty.
///
/// # Example
/// ```
/// # use google_cloud_gax_internal::path_parameter::required;
/// assert_eq!(required("projects/p", "parent").ok(), Some("projects/p"));
/// assert!(required("", "parent").is_err());
/// ```
pub fn required<'a>(value: &'a str, name: &str) -> gax::Result<&'a str> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(value)
}
