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

/// Implements a [ReachabilityService](super::stub::ReachabilityService) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct ReachabilityService<T>
where
    T: super::stub::ReachabilityService + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> ReachabilityService<T>
where
    T: super::stub::ReachabilityService + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::ReachabilityService for ReachabilityService<T>
where
    T: super::stub::ReachabilityService + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn list_connectivity_tests(
        &self,
        req: crate::model::ListConnectivityTestsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListConnectivityTestsResponse>> {
        self.inner.list_connectivity_tests(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_connectivity_test(
        &self,
        req: crate::model::GetConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConnectivityTest>> {
        self.inner.get_connectivity_test(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_connectivity_test(
        &self,
        req: crate::model::CreateConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        self.inner.create_connectivity_test(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_connectivity_test(
        &self,
        req: crate::model::UpdateConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        self.inner.update_connectivity_test(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn rerun_connectivity_test(
        &self,
        req: crate::model::RerunConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        self.inner.rerun_connectivity_test(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_connectivity_test(
        &self,
        req: crate::model::DeleteConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        self.inner.delete_connectivity_test(req, options).await
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
