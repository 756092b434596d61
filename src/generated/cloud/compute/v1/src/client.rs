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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use std::sync::{Arc, LazyLock, RwLock};

static LICENSE_CODES_DEFAULTS: LazyLock<gaxi::options::SharedConfiguration> =
    LazyLock::new(|| {
        Arc::new(RwLock::new(gaxi::options::Configuration::derive(
            crate::NAMESPACE_DEFAULTS.clone(),
        )))
    });

/// Implements a client for the Google Compute Engine API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_compute_v1::client::LicenseCodes;
/// let client = LicenseCodes::builder().build().await?;
/// let code = client
///     .get()
///     .set_project("my-project")
///     .set_license_code("1234567890")
///     .send()
///     .await?;
/// println!("{code:?}");
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Service for the `licenseCodes` resource.
///
/// # Configuration
///
/// To configure `LicenseCodes` use the `with_*` methods in the type returned
/// by [builder()][LicenseCodes::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`compute.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// The defaults for all the clients of this type can be changed with
/// [LicenseCodes::configure], and the defaults for all the clients in this crate
/// with [crate::configure].
///
/// [with_endpoint()]: super::builder::license_codes::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::license_codes::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `LicenseCodes` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `LicenseCodes` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct LicenseCodes {
    inner: Arc<dyn super::stub::dynamic::LicenseCodes>,
    config: gaxi::options::SharedConfiguration,
}

impl LicenseCodes {
    /// Returns a builder for [LicenseCodes].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_compute_v1::client::LicenseCodes;
    /// let client = LicenseCodes::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::license_codes::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::license_codes::client::Factory,
            LICENSE_CODES_DEFAULTS.clone(),
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::LicenseCodes + 'static,
    {
        Self {
            inner: Arc::new(stub),
            config: Arc::new(RwLock::new(gaxi::options::Configuration::derive(
                LICENSE_CODES_DEFAULTS.clone(),
            ))),
        }
    }

    /// Changes the defaults for all the clients of this type.
    ///
    /// Clients fall back to these defaults for any setting not configured
    /// in their builder, including clients created before this call.
    pub fn configure<F>(f: F)
    where
        F: FnOnce(&mut gaxi::options::Configuration),
    {
        gax::configuration::update_config(&LICENSE_CODES_DEFAULTS, f)
    }

    pub(crate) async fn new(
        config: gaxi::options::Configuration,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(&config).await?;
        Ok(Self {
            inner,
            config: Arc::new(RwLock::new(config)),
        })
    }

    async fn build_inner(
        conf: &gaxi::options::Configuration,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::LicenseCodes>> {
        if gaxi::options::tracing_enabled(conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: &gaxi::options::Configuration,
    ) -> gax::client_builder::Result<super::transport::LicenseCodes> {
        super::transport::LicenseCodes::new(conf).await
    }

    async fn build_with_tracing(
        conf: &gaxi::options::Configuration,
    ) -> gax::client_builder::Result<
        super::tracing::LicenseCodes<super::transport::LicenseCodes>,
    > {
        Self::build_transport(conf)
            .await
            .map(super::tracing::LicenseCodes::new)
    }

    /// Return a specified license code. License codes are mirrored across
    /// all projects that have permissions to read the License Code.
    /// **Caution** This resource is intended for use only by third-party
    /// partners who are creating Cloud Marketplace images.
    pub fn get(&self) -> super::builder::license_codes::Get {
        super::builder::license_codes::Get::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Returns permissions that a caller has on the specified resource.
    /// **Caution** This resource is intended for use only by third-party
    /// partners who are creating Cloud Marketplace images.
    pub fn test_iam_permissions(&self) -> super::builder::license_codes::TestIamPermissions {
        super::builder::license_codes::TestIamPermissions::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }
}
