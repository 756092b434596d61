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

use std::error::Error;
use std::fmt::{Display, Formatter, Result};
use std::sync::Arc;

/// Represents an error creating or using credentials.
///
/// Problems creating credentials include missing or badly formatted key
/// files. Problems using credentials include failures signing a token with
/// the key material. The latter may happen long after the credentials were
/// loaded.
///
/// Applications rarely create instances of this type, except when mocking
/// a credentials provider in tests.
///
/// # Example
/// ```
/// # use google_cloud_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(false, "the key file is missing `private_key`");
/// assert!(!err.is_transient());
/// assert!(err.to_string().contains("`private_key`"));
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsError {
    transient: bool,
    source: Detail,
}

#[derive(Clone, Debug)]
enum Detail {
    Message(String),
    Source(Arc<dyn Error + Send + Sync>),
}

impl CredentialsError {
    /// Creates a new error wrapping `source`.
    ///
    /// Set `transient` when a future attempt to create the headers may
    /// succeed.
    pub fn new<T: Error + Send + Sync + 'static>(transient: bool, source: T) -> Self {
        Self {
            transient,
            source: Detail::Source(Arc::new(source)),
        }
    }

    /// Creates a new error from a message.
    pub fn from_msg<T: Into<String>>(transient: bool, message: T) -> Self {
        Self {
            transient,
            source: Detail::Message(message.into()),
        }
    }

    /// Returns `true` if a future attempt may succeed.
    pub fn is_transient(&self) -> bool {
        self.transient
    }
}

impl Display for Detail {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Detail::Message(m) => write!(f, "{m}"),
            Detail::Source(s) => write!(f, "{s}"),
        }
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Detail::Message(_) => None,
            Detail::Source(s) => Some(s.as_ref()),
        }
    }
}

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let suffix = if self.transient {
            "but future attempts may succeed"
        } else {
            "and future attempts will not succeed"
        };
        write!(
            f,
            "cannot create auth headers {suffix}, source: {}",
            self.source
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true, "may succeed")]
    #[test_case(false, "will not succeed")]
    fn from_msg(transient: bool, want: &str) {
        let err = CredentialsError::from_msg(transient, "test-only-message");
        assert_eq!(err.is_transient(), transient);
        assert!(err.source().is_none(), "{err:?}");
        let fmt = err.to_string();
        assert!(fmt.contains(want), "{fmt}");
        assert!(fmt.contains("test-only-message"), "{fmt}");
    }

    #[test]
    fn with_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = CredentialsError::new(false, io);
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(
            source.is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound),
            "{err:?}"
        );
        assert!(err.to_string().contains("no such file"), "{err}");
    }
}
