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

//! Response types.
//!
//! The stubs return a [Response], which pairs the decoded body with the HTTP
//! metadata from the service. Client methods return the body, applications
//! that need the metadata use the `send_with()` variant of each builder.
//!
//! # Example
//!
//! Creating a response for mocks
//!
//! ```
//! # use google_cloud_gax::Result;
//! # use google_cloud_gax::response::Response;
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents a Google Cloud service response.
///
/// A response from a Google Cloud service consists of a body (potentially the
/// unit type), and some metadata, currently just the status code and headers.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response with empty metadata.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the metadata and body.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// The HTTP status code of the response, if known.
    pub fn status_code(&self) -> Option<u16> {
        self.parts.status_code
    }

    /// The response headers.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// The response body.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response, returning the metadata and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response, returning only the body.
    pub fn into_body(self) -> T {
        self.body
    }
}

/// Component parts of a response.
///
/// Client methods that accept a callback receive a reference to these parts
/// together with the decoded body.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code. Responses created in mocks may not have one.
    pub status_code: Option<u16>,

    /// The HTTP headers or the gRPC metadata converted to HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the status code.
    pub fn set_status_code(mut self, v: u16) -> Self {
        self.status_code = Some(v);
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_headers() -> http::HeaderMap {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        headers
    }

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.status_code(), None);
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.into_body().as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let parts = Parts::new()
            .set_status_code(200)
            .set_headers(json_headers());
        let response = Response::from_parts(parts.clone(), "abc123".to_string());
        assert_eq!(response.status_code(), Some(200));
        assert_eq!(response.headers(), &json_headers());

        let (got, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(got, parts);
    }
}
