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

use crate::Result;

/// Implements a [ServiceManager](super::stub::ServiceManager) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct ServiceManager<T>
where
    T: super::stub::ServiceManager + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> ServiceManager<T>
where
    T: super::stub::ServiceManager + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::ServiceManager for ServiceManager<T>
where
    T: super::stub::ServiceManager + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn list_services(
        &self,
        req: crate::model::ListServicesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListServicesResponse>> {
        self.inner.list_services(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_service(
        &self,
        req: crate::model::GetServiceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ManagedService>> {
        self.inner.get_service(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_service(
        &self,
        req: crate::model::CreateServiceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        self.inner.create_service(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_service(
        &self,
        req: crate::model::DeleteServiceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        self.inner.delete_service(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn undelete_service(
        &self,
        req: crate::model::UndeleteServiceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        self.inner.undelete_service(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_service_configs(
        &self,
        req: crate::model::ListServiceConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListServiceConfigsResponse>> {
        self.inner.list_service_configs(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_service_config(
        &self,
        req: crate::model::GetServiceConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Service>> {
        self.inner.get_service_config(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_service_rollouts(
        &self,
        req: crate::model::ListServiceRolloutsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListServiceRolloutsResponse>> {
        self.inner.list_service_rollouts(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_service_rollout(
        &self,
        req: crate::model::GetServiceRolloutRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Rollout>> {
        self.inner.get_service_rollout(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        self.inner.get_operation(req, options).await
    }
}
