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

//! Per request options.
//!
//! The client defaults work for most applications, but sometimes a specific
//! call needs a different timeout, or additional headers. The `*Builder`
//! returned by each client method implements [RequestOptionsBuilder], where
//! applications can override these defaults for a single call.
//!
//! # Example
//! ```
//! # use google_cloud_gax::options::{RequestOptions, RequestOptionsBuilder};
//! # use google_cloud_gax::options::internal::RequestBuilder;
//! # #[derive(Default)]
//! # struct GetThing(RequestOptions);
//! # impl RequestBuilder for GetThing {
//! #     fn request_options(&mut self) -> &mut RequestOptions { &mut self.0 }
//! # }
//! let mut builder = GetThing::default()
//!     .with_timeout(std::time::Duration::from_secs(15))
//!     .with_user_agent("my-app/1.0");
//! let options = builder.request_options();
//! assert_eq!(options.timeout(), &Some(std::time::Duration::from_secs(15)));
//! ```

use http::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// A set of options configuring a single request.
///
/// Unset values inherit the client configuration. The caller's values always
/// take precedence over the configured defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    timeout: Option<Duration>,
    user_agent: Option<String>,
    headers: HeaderMap,
}

impl RequestOptions {
    /// Sets the timeout for the request.
    pub fn set_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.timeout = Some(v.into());
    }

    /// The timeout for the request, if any.
    pub fn timeout(&self) -> &Option<Duration> {
        &self.timeout
    }

    /// Adds a prefix to the user agent header.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// The user agent prefix, if any.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets an additional header, replacing any previous value with the same name.
    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// The additional headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Fills in the configured defaults.
    ///
    /// The timeout is only used if the caller did not set one. Each default
    /// header is only added if the caller did not set a header with the same
    /// name.
    pub fn apply_defaults(&mut self, timeout: Option<Duration>, headers: &HeaderMap) {
        if self.timeout.is_none() {
            self.timeout = timeout;
        }
        for (name, value) in headers {
            if !self.headers.contains_key(name) {
                self.headers.insert(name.clone(), value.clone());
            }
        }
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The Google Cloud Client Libraries for Rust provide a builder for each RPC.
/// These builders can be used to set the request parameters, e.g., the name
/// of the resource targeted by the RPC, as well as any options affecting the
/// request, such as additional headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Sets the timeout for this request.
    fn with_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the user agent prefix for this request.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Adds a header to this request.
    fn with_header(self, name: HeaderName, value: HeaderValue) -> Self;
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_timeout(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.request_options().insert_header(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.timeout(), &None);
        opts.set_timeout(Duration::from_secs(10));
        assert_eq!(opts.timeout(), &Some(Duration::from_secs(10)));

        assert_eq!(opts.user_agent(), &None);
        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));

        assert!(opts.headers().is_empty());
        opts.insert_header(
            HeaderName::from_static("x-test"),
            HeaderValue::from_static("a"),
        );
        opts.insert_header(
            HeaderName::from_static("x-test"),
            HeaderValue::from_static("b"),
        );
        assert_eq!(opts.headers().get("x-test"), Some(&HeaderValue::from_static("b")));
        assert_eq!(opts.headers().len(), 1);
    }

    #[test]
    fn apply_defaults_empty() {
        let mut defaults = HeaderMap::new();
        defaults.insert("x-goog-api-client", HeaderValue::from_static("gl-rust/test"));
        let mut opts = RequestOptions::default();
        opts.apply_defaults(Some(Duration::from_secs(30)), &defaults);
        assert_eq!(opts.timeout(), &Some(Duration::from_secs(30)));
        assert_eq!(opts.headers(), &defaults);
    }

    #[test]
    fn apply_defaults_caller_wins() {
        let mut defaults = HeaderMap::new();
        defaults.insert("x-goog-api-client", HeaderValue::from_static("gl-rust/test"));
        defaults.insert("x-goog-user-project", HeaderValue::from_static("default"));

        let mut opts = RequestOptions::default();
        opts.set_timeout(Duration::from_secs(5));
        opts.insert_header(
            HeaderName::from_static("x-goog-user-project"),
            HeaderValue::from_static("caller"),
        );
        opts.apply_defaults(Some(Duration::from_secs(30)), &defaults);

        assert_eq!(opts.timeout(), &Some(Duration::from_secs(5)));
        assert_eq!(
            opts.headers().get("x-goog-user-project"),
            Some(&HeaderValue::from_static("caller"))
        );
        assert_eq!(
            opts.headers().get("x-goog-api-client"),
            Some(&HeaderValue::from_static("gl-rust/test"))
        );
    }

    #[test]
    fn apply_defaults_no_timeout() {
        let mut opts = RequestOptions::default();
        opts.apply_defaults(None, &HeaderMap::new());
        assert_eq!(opts, RequestOptions::default());
    }

    #[test]
    fn request_options_builder() {
        let mut builder = TestBuilder::default()
            .with_timeout(Duration::from_secs(7))
            .with_user_agent("test-only")
            .with_header(
                HeaderName::from_static("x-test"),
                HeaderValue::from_static("value"),
            );
        let opts = builder.request_options();
        assert_eq!(opts.timeout(), &Some(Duration::from_secs(7)));
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(
            opts.headers().get("x-test"),
            Some(&HeaderValue::from_static("value"))
        );
    }
}
