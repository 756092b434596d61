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

/// An object-safe version of [super::ReachabilityService], used by the client to hold
/// the transport, the tracing decorator, or a mock.
#[async_trait::async_trait]
pub trait ReachabilityService: std::fmt::Debug + Send + Sync {
    async fn list_connectivity_tests(
        &self,
        req: crate::model::ListConnectivityTestsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListConnectivityTestsResponse>>;

    async fn get_connectivity_test(
        &self,
        req: crate::model::GetConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConnectivityTest>>;

    async fn create_connectivity_test(
        &self,
        req: crate::model::CreateConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;

    async fn update_connectivity_test(
        &self,
        req: crate::model::UpdateConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;

    async fn rerun_connectivity_test(
        &self,
        req: crate::model::RerunConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;

    async fn delete_connectivity_test(
        &self,
        req: crate::model::DeleteConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;
}

/// All implementations of [super::ReachabilityService] also implement [ReachabilityService].
#[async_trait::async_trait]
impl<T: super::ReachabilityService> ReachabilityService for T {
    async fn list_connectivity_tests(
        &self,
        req: crate::model::ListConnectivityTestsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListConnectivityTestsResponse>> {
        T::list_connectivity_tests(self, req, options).await
    }

    async fn get_connectivity_test(
        &self,
        req: crate::model::GetConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConnectivityTest>> {
        T::get_connectivity_test(self, req, options).await
    }

    async fn create_connectivity_test(
        &self,
        req: crate::model::CreateConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::create_connectivity_test(self, req, options).await
    }

    async fn update_connectivity_test(
        &self,
        req: crate::model::UpdateConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::update_connectivity_test(self, req, options).await
    }

    async fn rerun_connectivity_test(
        &self,
        req: crate::model::RerunConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::rerun_connectivity_test(self, req, options).await
    }

    async fn delete_connectivity_test(
        &self,
        req: crate::model::DeleteConnectivityTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::delete_connectivity_test(self, req, options).await
    }

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::get_operation(self, req, options).await
    }
}
