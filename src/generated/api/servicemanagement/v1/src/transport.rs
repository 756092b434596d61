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
use gax::options::RequestOptions;
use gax::response::Response;
use gaxi::http::NoBody;
use gaxi::http::reqwest::Method;
use gaxi::path_parameter::required;
use gaxi::query_parameter::{QueryParameter, add_serialized};

/// Implements [ServiceManager](super::stub::ServiceManager) using a
/// [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct ServiceManager {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for ServiceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceManager")
            .field("inner", &self.inner)
            .finish()
    }
}

impl ServiceManager {
    pub async fn new(config: &gaxi::options::Configuration) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::ServiceManager for ServiceManager {
    async fn list_services(
        &self,
        req: crate::model::ListServicesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListServicesResponse>> {
        let builder = self
            .inner
            .builder(Method::GET, "/v1/services".to_string());
        let builder = req
            .producer_project_id
            .as_str()
            .add(builder, "producerProjectId");
        let builder = req.page_size.add(builder, "pageSize");
        let builder = req.page_token.as_str().add(builder, "pageToken");
        let builder = req.consumer_id.as_str().add(builder, "consumerId");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_service(
        &self,
        req: crate::model::GetServiceRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ManagedService>> {
        let path = format!(
            "/v1/services/{}",
            required(&req.service_name, "service_name")?
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn create_service(
        &self,
        req: crate::model::CreateServiceRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::Operation>> {
        let builder = self
            .inner
            .builder(Method::POST, "/v1/services".to_string());
        self.inner.execute(builder, req.service, options).await
    }

    async fn delete_service(
        &self,
        req: crate::model::DeleteServiceRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::Operation>> {
        let path = format!(
            "/v1/services/{}",
            required(&req.service_name, "service_name")?
        );
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn undelete_service(
        &self,
        req: crate::model::UndeleteServiceRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::Operation>> {
        let path = format!(
            "/v1/services/{}:undelete",
            required(&req.service_name, "service_name")?
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn list_service_configs(
        &self,
        req: crate::model::ListServiceConfigsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListServiceConfigsResponse>> {
        let path = format!(
            "/v1/services/{}/configs",
            required(&req.service_name, "service_name")?
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.page_token.as_str().add(builder, "pageToken");
        let builder = req.page_size.add(builder, "pageSize");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_service_config(
        &self,
        req: crate::model::GetServiceConfigRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Service>> {
        let path = format!(
            "/v1/services/{}/configs/{}",
            required(&req.service_name, "service_name")?,
            required(&req.config_id, "config_id")?,
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = match req.view {
            crate::model::get_service_config_request::ConfigView::Basic => builder,
            ref view => add_serialized(builder, "view", view)?,
        };
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn list_service_rollouts(
        &self,
        req: crate::model::ListServiceRolloutsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListServiceRolloutsResponse>> {
        let path = format!(
            "/v1/services/{}/rollouts",
            required(&req.service_name, "service_name")?
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.page_token.as_str().add(builder, "pageToken");
        let builder = req.page_size.add(builder, "pageSize");
        let builder = req.filter.as_str().add(builder, "filter");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_service_rollout(
        &self,
        req: crate::model::GetServiceRolloutRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Rollout>> {
        let path = format!(
            "/v1/services/{}/rollouts/{}",
            required(&req.service_name, "service_name")?,
            required(&req.rollout_id, "rollout_id")?,
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::Operation>> {
        let path = format!("/v1/{}", required(&req.name, "name")?);
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }
}
