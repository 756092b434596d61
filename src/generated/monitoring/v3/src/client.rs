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

static SERVICE_MONITORING_SERVICE_DEFAULTS: LazyLock<gaxi::options::SharedConfiguration> =
    LazyLock::new(|| {
        Arc::new(RwLock::new(gaxi::options::Configuration::derive(
            crate::NAMESPACE_DEFAULTS.clone(),
        )))
    });

/// Implements a client for the Cloud Monitoring API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_monitoring_v3::client::ServiceMonitoringService;
/// let client = ServiceMonitoringService::builder().build().await?;
/// let mut list = client
///     .list_services()
///     .set_parent("projects/my-project")
///     .by_item();
/// while let Some(service) = list.next().await {
///     let service = service?;
///     println!("{service:?}");
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// The Cloud Monitoring Service-Oriented Monitoring API has endpoints for
/// managing and querying aspects of a Metrics Scope's services. These include
/// the `Service`'s monitored resources, its Service-Level Objectives, and a
/// taxonomy of categorized Health Metrics.
///
/// # Configuration
///
/// To configure `ServiceMonitoringService` use the `with_*` methods in the type returned
/// by [builder()][ServiceMonitoringService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`monitoring.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// The defaults for all the clients of this type can be changed with
/// [ServiceMonitoringService::configure], and the defaults for all the clients in this crate
/// with [crate::configure].
///
/// [with_endpoint()]: super::builder::service_monitoring_service::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::service_monitoring_service::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `ServiceMonitoringService` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `ServiceMonitoringService` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct ServiceMonitoringService {
    inner: Arc<dyn super::stub::dynamic::ServiceMonitoringService>,
    config: gaxi::options::SharedConfiguration,
}

impl ServiceMonitoringService {
    /// Returns a builder for [ServiceMonitoringService].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_monitoring_v3::client::ServiceMonitoringService;
    /// let client = ServiceMonitoringService::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::service_monitoring_service::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::service_monitoring_service::client::Factory,
            SERVICE_MONITORING_SERVICE_DEFAULTS.clone(),
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ServiceMonitoringService + 'static,
    {
        Self {
            inner: Arc::new(stub),
            config: Arc::new(RwLock::new(gaxi::options::Configuration::derive(
                SERVICE_MONITORING_SERVICE_DEFAULTS.clone(),
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
        gax::configuration::update_config(&SERVICE_MONITORING_SERVICE_DEFAULTS, f)
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
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::ServiceMonitoringService>> {
        if gaxi::options::tracing_enabled(conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: &gaxi::options::Configuration,
    ) -> gax::client_builder::Result<super::transport::ServiceMonitoringService> {
        super::transport::ServiceMonitoringService::new(conf).await
    }

    async fn build_with_tracing(
        conf: &gaxi::options::Configuration,
    ) -> gax::client_builder::Result<
        super::tracing::ServiceMonitoringService<super::transport::ServiceMonitoringService>,
    > {
        Self::build_transport(conf)
            .await
            .map(super::tracing::ServiceMonitoringService::new)
    }

    /// Create a `Service`.
    pub fn create_service(&self) -> super::builder::service_monitoring_service::CreateService {
        super::builder::service_monitoring_service::CreateService::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Get the named `Service`.
    pub fn get_service(&self) -> super::builder::service_monitoring_service::GetService {
        super::builder::service_monitoring_service::GetService::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// List `Service`s for this Metrics Scope.
    pub fn list_services(&self) -> super::builder::service_monitoring_service::ListServices {
        super::builder::service_monitoring_service::ListServices::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Update this `Service`.
    pub fn update_service(&self) -> super::builder::service_monitoring_service::UpdateService {
        super::builder::service_monitoring_service::UpdateService::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Soft delete this `Service`.
    pub fn delete_service(&self) -> super::builder::service_monitoring_service::DeleteService {
        super::builder::service_monitoring_service::DeleteService::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Create a `ServiceLevelObjective` for the given `Service`.
    pub fn create_service_level_objective(
        &self,
    ) -> super::builder::service_monitoring_service::CreateServiceLevelObjective {
        super::builder::service_monitoring_service::CreateServiceLevelObjective::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Get a `ServiceLevelObjective` by name.
    pub fn get_service_level_objective(
        &self,
    ) -> super::builder::service_monitoring_service::GetServiceLevelObjective {
        super::builder::service_monitoring_service::GetServiceLevelObjective::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// List the `ServiceLevelObjective`s for the given `Service`.
    pub fn list_service_level_objectives(
        &self,
    ) -> super::builder::service_monitoring_service::ListServiceLevelObjectives {
        super::builder::service_monitoring_service::ListServiceLevelObjectives::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Update the given `ServiceLevelObjective`.
    pub fn update_service_level_objective(
        &self,
    ) -> super::builder::service_monitoring_service::UpdateServiceLevelObjective {
        super::builder::service_monitoring_service::UpdateServiceLevelObjective::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Delete the given `ServiceLevelObjective`.
    pub fn delete_service_level_objective(
        &self,
    ) -> super::builder::service_monitoring_service::DeleteServiceLevelObjective {
        super::builder::service_monitoring_service::DeleteServiceLevelObjective::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }
}
