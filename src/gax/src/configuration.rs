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

//! Layered client configuration.
//!
//! Each client type has a process-wide default [Configuration], whose parent
//! is the default configuration for all the clients in the same crate. Each
//! client instance has its own configuration, derived from the client type
//! default.
//!
//! Lookups fall back to the parent for any field that is not set locally.
//! The fallback is live: changing the parent after a configuration is
//! derived is visible through the derived configuration.
//!
//! # Example
//! ```
//! # use google_cloud_gax::configuration::Configuration;
//! use std::sync::{Arc, RwLock};
//! use std::time::Duration;
//! let parent = Arc::new(RwLock::new(Configuration::<()>::new()));
//! let child = Configuration::derive(parent.clone());
//! assert_eq!(child.timeout(), None);
//!
//! parent.write().unwrap().set_timeout(Duration::from_secs(30));
//! assert_eq!(child.timeout(), Some(Duration::from_secs(30)));
//! ```

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use std::time::Duration;

/// A shared, mutable configuration used as a parent.
pub type SharedConfiguration<Cr> = Arc<RwLock<Configuration<Cr>>>;

/// The settings for a client, with optional overrides over a parent.
///
/// `Cr` is the type used to configure credentials.
#[derive(Clone, Debug)]
pub struct Configuration<Cr> {
    endpoint: Option<String>,
    credentials: Option<Cr>,
    scopes: Option<Vec<String>>,
    lib_name: Option<String>,
    lib_version: Option<String>,
    timeout: Option<Duration>,
    tracing: Option<bool>,
    parent: Option<SharedConfiguration<Cr>>,
}

impl<Cr> Default for Configuration<Cr> {
    fn default() -> Self {
        Self {
            endpoint: None,
            credentials: None,
            scopes: None,
            lib_name: None,
            lib_version: None,
            timeout: None,
            tracing: None,
            parent: None,
        }
    }
}

impl<Cr> Configuration<Cr> {
    /// Creates a configuration without a parent and with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with no local overrides, inheriting all
    /// fields from `parent`.
    pub fn derive(parent: SharedConfiguration<Cr>) -> Self {
        Self {
            parent: Some(parent),
            ..Self::default()
        }
    }

    /// Clears all the local overrides. The parent is unchanged.
    pub fn reset(&mut self) {
        let parent = self.parent.take();
        *self = Self {
            parent,
            ..Self::default()
        };
    }

    /// The service endpoint.
    pub fn endpoint(&self) -> Option<String> {
        self.lookup(&|c| c.endpoint.clone())
    }

    /// Overrides the service endpoint.
    pub fn set_endpoint<T: Into<String>>(&mut self, v: T) -> &mut Self {
        self.endpoint = Some(v.into());
        self
    }

    /// The credentials configuration.
    pub fn credentials(&self) -> Option<Cr>
    where
        Cr: Clone,
    {
        self.lookup(&|c| c.credentials.clone())
    }

    /// Overrides the credentials.
    pub fn set_credentials<T: Into<Cr>>(&mut self, v: T) -> &mut Self {
        self.credentials = Some(v.into());
        self
    }

    /// The OAuth scopes requested by the credentials.
    pub fn scopes(&self) -> Option<Vec<String>> {
        self.lookup(&|c| c.scopes.clone())
    }

    /// Overrides the OAuth scopes.
    pub fn set_scopes<I, V>(&mut self, v: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.scopes = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    /// The name of the library or application using the client.
    ///
    /// This is included in the `x-goog-api-client` header.
    pub fn lib_name(&self) -> Option<String> {
        self.lookup(&|c| c.lib_name.clone())
    }

    /// Overrides the library name.
    pub fn set_lib_name<T: Into<String>>(&mut self, v: T) -> &mut Self {
        self.lib_name = Some(v.into());
        self
    }

    /// The version of the library or application using the client.
    pub fn lib_version(&self) -> Option<String> {
        self.lookup(&|c| c.lib_version.clone())
    }

    /// Overrides the library version.
    pub fn set_lib_version<T: Into<String>>(&mut self, v: T) -> &mut Self {
        self.lib_version = Some(v.into());
        self
    }

    /// The default timeout for each request.
    pub fn timeout(&self) -> Option<Duration> {
        self.lookup(&|c| c.timeout)
    }

    /// Overrides the default timeout.
    pub fn set_timeout<T: Into<Duration>>(&mut self, v: T) -> &mut Self {
        self.timeout = Some(v.into());
        self
    }

    /// If true, the client instruments each request with [tracing] spans.
    ///
    /// [tracing]: https://docs.rs/tracing
    pub fn tracing(&self) -> bool {
        self.lookup(&|c| c.tracing).unwrap_or(false)
    }

    /// Enables or disables tracing.
    pub fn set_tracing(&mut self, v: bool) -> &mut Self {
        self.tracing = Some(v);
        self
    }

    fn lookup<T>(&self, get: &dyn Fn(&Self) -> Option<T>) -> Option<T> {
        get(self).or_else(|| {
            self.parent
                .as_ref()
                .and_then(|p| read_config(p).lookup(get))
        })
    }
}

/// Acquires a read lock, ignoring poisoning.
///
/// The configuration fields are independent, a panic while holding the write
/// lock cannot leave them in an inconsistent state.
pub fn read_config<Cr>(
    config: &RwLock<Configuration<Cr>>,
) -> RwLockReadGuard<'_, Configuration<Cr>> {
    config.read().unwrap_or_else(PoisonError::into_inner)
}

/// Runs `f` with a write lock, ignoring poisoning.
pub fn update_config<Cr, F>(config: &RwLock<Configuration<Cr>>, f: F)
where
    F: FnOnce(&mut Configuration<Cr>),
{
    let mut guard = config.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}
