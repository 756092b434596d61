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

/// Implements [ReachabilityService](super::stub::ReachabilityService) using a
/// [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct ReachabilityService {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for ReachabilityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReachabilityService")
            .field("inner", &self.inner)
            .finish()
    }
}

impl ReachabilityService {
    pub async fn new(config: &gaxi::options::Configuration) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::ReachabilityService for ReachabilityService {
    async fn list_connectivity_tests(
        &self,
        req: crate::model::ListConnectivityTestsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListConnectivityTestsResponse>> {
        let path = format!(
            "/v1/{}/connectivityTests",
            required(&req.parent, "parent")?
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.page_size.add(builder, "pageSize");
        let builder = req.page_token.as_str().add(builder, "pageToken");
        let builder = req.filter.as_str().add(builder, "filter");
        let builder = req.order_by.as_str().add(builder, "orderBy");
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_connectivity_test(
        &self,
        req: crate::model::GetConnectivityTestRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ConnectivityTest>> {
        let path = format!("/v1/{}", required(&req.name, "name")?);
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn create_connectivity_test(
        &self,
        req: crate::model::CreateConnectivityTestRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::Operation>> {
        let path = format!(
            "/v1/{}/connectivityTests",
            required(&req.parent, "parent")?
        );
        let builder = self.inner.builder(Method::POST, path);
        let builder = req.test_id.as_str().add(builder, "testId");
        self.inner.execute(builder, req.resource, options).await
    }

    async fn update_connectivity_test(
        &self,
        req: crate::model::UpdateConnectivityTestRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::Operation>> {
        let name = req
            .resource
            .as_ref()
            .map(|r| r.name.as_str())
            .unwrap_or_default();
        let path = format!("/v1/{}", required(name, "resource.name")?);
        let builder = self.inner.builder(Method::PATCH, path);
        let builder = match &req.update_mask {
            None => builder,
            Some(mask) => add_serialized(builder, "updateMask", mask)?,
        };
        self.inner.execute(builder, req.resource, options).await
    }

    async fn rerun_connectivity_test(
        &self,
        req: crate::model::RerunConnectivityTestRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::Operation>> {
        let path = format!("/v1/{}:rerun", required(&req.name, "name")?);
        let builder = self.inner.builder(Method::POST, path);
        self.inner.execute(builder, Some(req), options).await
    }

    async fn delete_connectivity_test(
        &self,
        req: crate::model::DeleteConnectivityTestRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::Operation>> {
        let path = format!("/v1/{}", required(&req.name, "name")?);
        let builder = self.inner.builder(Method::DELETE, path);
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
