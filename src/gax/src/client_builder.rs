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

//! Client construction.
//!
//! Every client type has a `builder()` function returning a [ClientBuilder].
//! The builder starts from the client type defaults (see
//! [configuration][crate::configuration]) and each `with_*()` call overrides
//! one setting for the client being built.
//!
//! ```
//! # use google_cloud_gax::client_builder::examples;
//! # use google_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! use examples::Client;
//! let default = Client::builder().build().await?;
//! let private = Client::builder()
//!     .with_endpoint("https://private.googleapis.com")
//!     .build()
//!     .await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::configuration::Configuration;
use std::time::Duration;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// The client could not be built.
///
/// ```no_run
/// # use google_cloud_gax::client_builder::examples;
/// use google_cloud_gax::client_builder::Error;
/// use examples::Client;
/// # tokio_test::block_on(async {
/// match Client::builder().build().await {
///     Ok(_client) => println!("ready"),
///     Err(e) if e.is_default_credentials() => {
///         println!("set GOOGLE_APPLICATION_CREDENTIALS or run `gcloud auth application-default login`: {e}")
///     }
///     Err(e) => return Err(e),
/// }
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Builds a client of type `C` through the factory `F`.
///
/// `Cr` is the credentials type accepted by [with_credentials][Self::with_credentials].
/// The settings apply to this client only, the defaults are unchanged.
///
/// ```
/// # use google_cloud_gax::client_builder::examples;
/// # use google_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client;
/// let client = Client::builder()
///     .with_timeout(std::time::Duration::from_secs(30))
///     .with_scopes(["https://www.googleapis.com/auth/cloud-platform"])
///     .build()
///     .await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: Configuration<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// Endpoints without a scheme, such as `compute.googleapis.com`, use
    /// `https://`.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.set_endpoint(v);
        self
    }

    /// Sets the credentials.
    ///
    /// Without this call the client uses the default credentials. The
    /// generated clients accept a key file path, the key file contents, or a
    /// credentials object.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.set_credentials(v);
        self
    }

    /// Configure the OAuth scopes requested by the credentials.
    pub fn with_scopes<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.config.set_scopes(v);
        self
    }

    /// Sets the default timeout for each request.
    pub fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.config.set_timeout(v);
        self
    }

    /// Sets the library name reported in the `x-goog-api-client` header.
    pub fn with_lib_name<V: Into<String>>(mut self, v: V) -> Self {
        self.config.set_lib_name(v);
        self
    }

    /// Sets the library version reported in the `x-goog-api-client` header.
    pub fn with_lib_version<V: Into<String>>(mut self, v: V) -> Self {
        self.config.set_lib_version(v);
        self
    }

    /// Wraps the client stub in a decorator that emits a [tracing] span per
    /// RPC.
    ///
    /// [tracing]: https://docs.rs/tracing
    pub fn with_tracing(mut self) -> Self {
        self.config.set_tracing(true);
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::*;
    use crate::configuration::SharedConfiguration;

    /// Creates the client from the final configuration.
    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: Configuration<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    /// Creates a builder with a configuration derived from `parent`.
    pub fn new_builder<F, Cr, C>(
        factory: F,
        parent: SharedConfiguration<Cr>,
    ) -> ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        ClientBuilder {
            factory,
            config: Configuration::derive(parent),
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! Types used by the documentation examples and tests.

    use super::Result;
    use crate::configuration::{Configuration, SharedConfiguration};
    use std::sync::{Arc, LazyLock, RwLock};

    type Config = Configuration<Credentials>;

    static DEFAULTS: LazyLock<SharedConfiguration<Credentials>> =
        LazyLock::new(|| Arc::new(RwLock::new(Config::new())));

    /// A client type used in the examples.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Returns a builder for [Client].
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory, DEFAULTS.clone())
        }

        async fn new(config: Config) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            async fn build(
                self,
                config: super::Config,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// A credentials type used in the examples.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub name: String,
    }

    impl From<&str> for Credentials {
        fn from(value: &str) -> Self {
            Self {
                name: value.to_string(),
            }
        }
    }

    // The examples double as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;
        use std::time::Duration;

        #[tokio::test]
        async fn build_default() -> anyhow::Result<()> {
            let client = Client::builder().build().await?;
            let config = client.0;
            assert_eq!(config.endpoint(), None);
            assert_eq!(config.credentials(), None);
            assert_eq!(config.scopes(), None);
            assert_eq!(config.timeout(), None);
            assert!(!config.tracing());
            Ok(())
        }

        #[tokio::test]
        async fn with_settings() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_endpoint("http://example.com")
                .with_credentials("test-only")
                .with_scopes(["scope"])
                .with_timeout(Duration::from_secs(5))
                .with_lib_name("lib")
                .with_lib_version("1.0")
                .with_tracing()
                .build()
                .await?;
            let config = client.0;
            assert_eq!(config.endpoint().as_deref(), Some("http://example.com"));
            assert_eq!(config.credentials(), Some(Credentials::from("test-only")));
            assert_eq!(config.scopes(), Some(vec!["scope".to_string()]));
            assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
            assert_eq!(config.lib_name().as_deref(), Some("lib"));
            assert_eq!(config.lib_version().as_deref(), Some("1.0"));
            assert!(config.tracing());
            Ok(())
        }

        #[tokio::test]
        async fn builder_does_not_change_defaults() -> anyhow::Result<()> {
            let _client = Client::builder()
                .with_endpoint("http://example.com")
                .build()
                .await?;
            let defaults = crate::configuration::read_config(&DEFAULTS);
            assert_eq!(defaults.endpoint(), None);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn error_credentials() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no key file");
        let error = Error::cred(source);
        assert!(error.is_default_credentials(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("default credentials"), "{error}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(
            got.is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound),
            "{error:?}"
        );
    }

    #[test]
    fn transport() {
        let error = Error::transport("cannot load TLS roots");
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_default_credentials(), "{error:?}");
        assert!(error.to_string().contains("transport client"), "{error}");
        assert!(error.source().is_some(), "{error:?}");
    }
}
