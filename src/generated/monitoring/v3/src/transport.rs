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

/// Implements [ServiceMonitoringService](super::stub::ServiceMonitoringService)
/// using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct ServiceMonitoringService {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for ServiceMonitoringService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceMonitoringService")
            .field("inner", &self.inner)
            .finish()
    }
}

impl ServiceMonitoringService {
    pub async fn new(config: &gaxi::options::Configuration) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::ServiceMonitoringService for ServiceMonitoringService {
    async fn create_service(
        &self,
        req: crate::model::CreateServiceRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Service>> {
        let path = format!("/v3/{}/services", required(&req.parent, "parent")?);
        let builder = self.inner.builder(Method::POST, path);
        let builder = req.service_id.as_str().add(builder, "serviceId");
        self.inner.execute(builder, req.service, options).await
    }

    async fn get_service(
        &self,
        req: crate::model::GetServiceRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Service>> {
        let path = format!("/v3/{}", required(&req.name, "name")?);
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn list_services(
        &self,
        req: crate::model::ListServicesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListServicesResponse>> {
        let path = format!("/v3/{}/services", required(&req.parent, "parent")?);
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.filter.as_str().add(builder, "filter");
        let builder = req.page_size.add(builder, "pageSize");
        let builder = req.page_token.as_str().add(builder, "pageToken");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn update_service(
        &self,
        req: crate::model::UpdateServiceRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Service>> {
        let name = req.service.as_ref().map(|s| s.name.as_str()).unwrap_or_default();
        let path = format!("/v3/{}", required(name, "service.name")?);
        let builder = self.inner.builder(Method::PATCH, path);
        let builder = match &req.update_mask {
            Some(mask) => add_serialized(builder, "updateMask", mask)?,
            None => builder,
        };
        self.inner.execute(builder, req.service, options).await
    }

    async fn delete_service(
        &self,
        req: crate::model::DeleteServiceRequest,
        options: RequestOptions,
    ) -> Result<Response<wkt::Empty>> {
        let path = format!("/v3/{}", required(&req.name, "name")?);
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn create_service_level_objective(
        &self,
        req: crate::model::CreateServiceLevelObjectiveRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ServiceLevelObjective>> {
        let path = format!(
            "/v3/{}/serviceLevelObjectives",
            required(&req.parent, "parent")?
        );
        let builder = self.inner.builder(Method::POST, path);
        let builder = req
            .service_level_objective_id
            .as_str()
            .add(builder, "serviceLevelObjectiveId");
        self.inner
            .execute(builder, req.service_level_objective, options)
            .await
    }

    async fn get_service_level_objective(
        &self,
        req: crate::model::GetServiceLevelObjectiveRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ServiceLevelObjective>> {
        let path = format!("/v3/{}", required(&req.name, "name")?);
        let builder = self.inner.builder(Method::GET, path);
        let builder = match req.view {
            crate::model::service_level_objective::View::Unspecified => builder,
            ref view => add_serialized(builder, "view", view)?,
        };
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn list_service_level_objectives(
        &self,
        req: crate::model::ListServiceLevelObjectivesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListServiceLevelObjectivesResponse>> {
        let path = format!(
            "/v3/{}/serviceLevelObjectives",
            required(&req.parent, "parent")?
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.filter.as_str().add(builder, "filter");
        let builder = req.page_size.add(builder, "pageSize");
        let builder = req.page_token.as_str().add(builder, "pageToken");
        let builder = match req.view {
            crate::model::service_level_objective::View::Unspecified => builder,
            ref view => add_serialized(builder, "view", view)?,
        };
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn update_service_level_objective(
        &self,
        req: crate::model::UpdateServiceLevelObjectiveRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ServiceLevelObjective>> {
        let name = req
            .service_level_objective
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or_default();
        let path = format!("/v3/{}", required(name, "service_level_objective.name")?);
        let builder = self.inner.builder(Method::PATCH, path);
        let builder = match &req.update_mask {
            Some(mask) => add_serialized(builder, "updateMask", mask)?,
            None => builder,
        };
        self.inner
            .execute(builder, req.service_level_objective, options)
            .await
    }

    async fn delete_service_level_objective(
        &self,
        req: crate::model::DeleteServiceLevelObjectiveRequest,
        options: RequestOptions,
    ) -> Result<Response<wkt::Empty>> {
        let path = format!("/v3/{}", required(&req.name, "name")?);
        let builder = self.inner.builder(Method::DELETE, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }
}
