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

static REACHABILITY_SERVICE_DEFAULTS: LazyLock<gaxi::options::SharedConfiguration> =
    LazyLock::new(|| {
        Arc::new(RwLock::new(gaxi::options::Configuration::derive(
            crate::NAMESPACE_DEFAULTS.clone(),
        )))
    });

/// Implements a client for the Network Management API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_networkmanagement_v1::client::ReachabilityService;
/// let client = ReachabilityService::builder().build().await?;
/// let mut list = client
///     .list_connectivity_tests()
///     .set_parent("projects/my-project/locations/global")
///     .by_item();
/// while let Some(test) = list.next().await {
///     let test = test?;
///     println!("{test:?}");
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// The Reachability service in the Google Cloud Network Management API provides
/// services that analyze the reachability within a single Google Virtual
/// Private Cloud (VPC) network, between peered VPC networks, between VPC and
/// on-premises networks, or between VPC networks and internet hosts. A
/// reachability analysis is based on Google Cloud network configurations.
///
/// You can use the analysis results to verify these configurations and
/// to troubleshoot connectivity issues.
///
/// # Configuration
///
/// To configure `ReachabilityService` use the `with_*` methods in the type returned
/// by [builder()][ReachabilityService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`networkmanagement.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// The defaults for all the clients of this type can be changed with
/// [ReachabilityService::configure], and the defaults for all the clients in this crate
/// with [crate::configure].
///
/// [with_endpoint()]: super::builder::reachability_service::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::reachability_service::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `ReachabilityService` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `ReachabilityService` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct ReachabilityService {
    inner: Arc<dyn super::stub::dynamic::ReachabilityService>,
    config: gaxi::options::SharedConfiguration,
}

impl ReachabilityService {
    /// Returns a builder for [ReachabilityService].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_networkmanagement_v1::client::ReachabilityService;
    /// let client = ReachabilityService::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::reachability_service::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::reachability_service::client::Factory,
            REACHABILITY_SERVICE_DEFAULTS.clone(),
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ReachabilityService + 'static,
    {
        Self {
            inner: Arc::new(stub),
            config: Arc::new(RwLock::new(gaxi::options::Configuration::derive(
                REACHABILITY_SERVICE_DEFAULTS.clone(),
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
        gax::configuration::update_config(&REACHABILITY_SERVICE_DEFAULTS, f)
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
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::ReachabilityService>> {
        if gaxi::options::tracing_enabled(conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: &gaxi::options::Configuration,
    ) -> gax::client_builder::Result<super::transport::ReachabilityService> {
        super::transport::ReachabilityService::new(conf).await
    }

    async fn build_with_tracing(
        conf: &gaxi::options::Configuration,
    ) -> gax::client_builder::Result<
        super::tracing::ReachabilityService<super::transport::ReachabilityService>,
    > {
        Self::build_transport(conf)
            .await
            .map(super::tracing::ReachabilityService::new)
    }

    /// Lists all Connectivity Tests owned by a project.
    pub fn list_connectivity_tests(
        &self,
    ) -> super::builder::reachability_service::ListConnectivityTests {
        super::builder::reachability_service::ListConnectivityTests::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Gets the details of a specific Connectivity Test.
    pub fn get_connectivity_test(
        &self,
    ) -> super::builder::reachability_service::GetConnectivityTest {
        super::builder::reachability_service::GetConnectivityTest::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Creates a new Connectivity Test.
    /// After you create a test, the reachability analysis is performed as part
    /// of the long running operation, which completes when the analysis completes.
    ///
    /// If the endpoint specifications in `ConnectivityTest` are invalid
    /// (for example, containing non-existent resources in the network, or you
    /// don't have read permissions to the network configurations of listed
    /// projects), then the reachability result returns a value of `UNKNOWN`.
    ///
    /// If the endpoint specifications in `ConnectivityTest` are
    /// incomplete, the reachability result returns a value of
    /// \<code\>AMBIGUOUS\</code\>. For more information,
    /// see the Connectivity Test documentation.
    pub fn create_connectivity_test(
        &self,
    ) -> super::builder::reachability_service::CreateConnectivityTest {
        super::builder::reachability_service::CreateConnectivityTest::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Updates the configuration of an existing `ConnectivityTest`.
    /// After you update a test, the reachability analysis is performed as part
    /// of the long running operation, which completes when the analysis completes.
    /// The Reachability state in the test resource is updated with the new result.
    pub fn update_connectivity_test(
        &self,
    ) -> super::builder::reachability_service::UpdateConnectivityTest {
        super::builder::reachability_service::UpdateConnectivityTest::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Rerun an existing `ConnectivityTest`.
    /// After the user triggers the rerun, the reachability analysis is performed
    /// as part of the long running operation, which completes when the analysis
    /// completes.
    ///
    /// Even though the test configuration remains the same, the reachability
    /// result may change due to underlying network configuration changes.
    ///
    /// If the endpoint specifications in `ConnectivityTest` become invalid (for
    /// example, specified resources are deleted in the network, or you lost
    /// read permissions to the network configurations of listed projects), then
    /// the reachability result returns a value of `UNKNOWN`.
    pub fn rerun_connectivity_test(
        &self,
    ) -> super::builder::reachability_service::RerunConnectivityTest {
        super::builder::reachability_service::RerunConnectivityTest::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Deletes a specific `ConnectivityTest`.
    pub fn delete_connectivity_test(
        &self,
    ) -> super::builder::reachability_service::DeleteConnectivityTest {
        super::builder::reachability_service::DeleteConnectivityTest::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Gets the latest state of a long-running operation.
    ///
    /// Clients can use this method to poll the operation result at intervals.
    pub fn get_operation(&self) -> super::builder::reachability_service::GetOperation {
        super::builder::reachability_service::GetOperation::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }
}
