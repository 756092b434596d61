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

/// An object-safe version of [super::LicenseCodes], used by the client to hold
/// the transport, the tracing decorator, or a mock.
#[async_trait::async_trait]
pub trait LicenseCodes: std::fmt::Debug + Send + Sync {
    async fn get(
        &self,
        req: crate::model::GetLicenseCodeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LicenseCode>>;

    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsLicenseCodeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TestPermissionsResponse>>;
}

/// All implementations of [super::LicenseCodes] also implement [LicenseCodes].
#[async_trait::async_trait]
impl<T: super::LicenseCodes> LicenseCodes for T {
    async fn get(
        &self,
        req: crate::model::GetLicenseCodeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LicenseCode>> {
        T::get(self, req, options).await
    }

    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsLicenseCodeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TestPermissionsResponse>> {
        T::test_iam_permissions(self, req, options).await
    }
}
