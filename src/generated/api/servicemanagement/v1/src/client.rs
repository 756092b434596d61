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

static SERVICE_MANAGER_DEFAULTS: LazyLock<gaxi::options::SharedConfiguration> =
    LazyLock::new(|| {
        Arc::new(RwLock::new(gaxi::options::Configuration::derive(
            crate::NAMESPACE_DEFAULTS.clone(),
        )))
    });

/// Implements a client for the Service Management API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_api_servicemanagement_v1::client::ServiceManager;
/// let client = ServiceManager::builder().build().await?;
/// let mut list = client
///     .list_services()
///     .set_producer_project_id("my-project")
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
/// [Google Service Management
/// API](https://cloud.google.com/service-infrastructure/docs/overview)
///
/// # Configuration
///
/// To configure `ServiceManager` use the `with_*` methods in the type returned
/// by [builder()][ServiceManager::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`servicemanagement.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// The defaults for all the clients of this type can be changed with
/// [ServiceManager::configure], and the defaults for all the clients in this crate
/// with [crate::configure].
///
/// [with_endpoint()]: super::builder::service_manager::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::service_manager::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `ServiceManager` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `ServiceManager` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct ServiceManager {
    inner: Arc<dyn super::stub::dynamic::ServiceManager>,
    config: gaxi::options::SharedConfiguration,
}

impl ServiceManager {
    /// Returns a builder for [ServiceManager].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_api_servicemanagement_v1::client::ServiceManager;
    /// let client = ServiceManager::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::service_manager::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::service_manager::client::Factory,
            SERVICE_MANAGER_DEFAULTS.clone(),
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ServiceManager + 'static,
    {
        Self {
            inner: Arc::new(stub),
            config: Arc::new(RwLock::new(gaxi::options::Configuration::derive(
                SERVICE_MANAGER_DEFAULTS.clone(),
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
        gax::configuration::update_config(&SERVICE_MANAGER_DEFAULTS, f)
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
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::ServiceManager>> {
        if gaxi::options::tracing_enabled(conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: &gaxi::options::Configuration,
    ) -> gax::client_builder::Result<super::transport::ServiceManager> {
        super::transport::ServiceManager::new(conf).await
    }

    async fn build_with_tracing(
        conf: &gaxi::options::Configuration,
    ) -> gax::client_builder::Result<
        super::tracing::ServiceManager<super::transport::ServiceManager>,
    > {
        Self::build_transport(conf)
            .await
            .map(super::tracing::ServiceManager::new)
    }

    /// Lists managed services.
    ///
    /// Returns all public services. For authenticated users, also returns all
    /// services the calling user has "servicemanagement.services.get"
    /// permission for.
    pub fn list_services(&self) -> super::builder::service_manager::ListServices {
        super::builder::service_manager::ListServices::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Gets a managed service. Authentication is required unless the service
    /// is public.
    pub fn get_service(&self) -> super::builder::service_manager::GetService {
        super::builder::service_manager::GetService::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Creates a new managed service.
    ///
    /// A managed service is immutable, and is subject to mandatory 30-day
    /// data retention. You cannot move a service or recreate it within 30 days
    /// after deletion.
    ///
    /// One producer project can own no more than 500 services.
    ///
    /// Operation<response: ManagedService>
    pub fn create_service(&self) -> super::builder::service_manager::CreateService {
        super::builder::service_manager::CreateService::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Deletes a managed service. This method will change the service to the
    /// `Soft-Delete` state for 30 days. Within this period, service producers
    /// may call
    /// [UndeleteService][crate::client::ServiceManager::undelete_service]
    /// to restore the service. After 30 days, the service will be permanently
    /// deleted.
    ///
    /// Operation<response: google.protobuf.Empty>
    pub fn delete_service(&self) -> super::builder::service_manager::DeleteService {
        super::builder::service_manager::DeleteService::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Revives a previously deleted managed service. The method restores the
    /// service using the configuration at the time the service was deleted.
    /// The target service must exist and must have been deleted within the
    /// last 30 days.
    ///
    /// Operation<response: UndeleteServiceResponse>
    pub fn undelete_service(&self) -> super::builder::service_manager::UndeleteService {
        super::builder::service_manager::UndeleteService::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Lists the history of the service configuration for a managed service,
    /// from the newest to the oldest.
    pub fn list_service_configs(&self) -> super::builder::service_manager::ListServiceConfigs {
        super::builder::service_manager::ListServiceConfigs::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Gets a service configuration (version) for a managed service.
    pub fn get_service_config(&self) -> super::builder::service_manager::GetServiceConfig {
        super::builder::service_manager::GetServiceConfig::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Lists the history of the service configuration rollouts for a managed
    /// service, from the newest to the oldest.
    pub fn list_service_rollouts(&self) -> super::builder::service_manager::ListServiceRollouts {
        super::builder::service_manager::ListServiceRollouts::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Gets a service configuration
    /// [rollout][crate::model::Rollout].
    pub fn get_service_rollout(&self) -> super::builder::service_manager::GetServiceRollout {
        super::builder::service_manager::GetServiceRollout::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Gets the latest state of a long-running operation.
    ///
    /// Clients can use this method to poll the operation result at intervals.
    pub fn get_operation(&self) -> super::builder::service_manager::GetOperation {
        super::builder::service_manager::GetOperation::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }
}
