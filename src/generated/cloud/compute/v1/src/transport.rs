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

/// Implements [LicenseCodes](super::stub::LicenseCodes) using a
/// [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct LicenseCodes {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for LicenseCodes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseCodes")
            .field("inner", &self.inner)
            .finish()
    }
}

impl LicenseCodes {
    pub async fn new(config: &gaxi::options::Configuration) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::LicenseCodes for LicenseCodes {
    async fn get(
        &self,
        req: crate::model::GetLicenseCodeRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::LicenseCode>> {
        let path = format!(
            "/compute/v1/projects/{}/global/licenseCodes/{}",
            required(&req.project, "project")?,
            required(&req.license_code, "license_code")?,
        );
        let builder = self.inner.builder(Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsLicenseCodeRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::TestPermissionsResponse>> {
        let path = format!(
            "/compute/v1/projects/{}/global/licenseCodes/{}/testIamPermissions",
            required(&req.project, "project")?,
            required(&req.resource, "resource")?,
        );
        let builder = self.inner.builder(Method::POST, path);
        self.inner
            .execute(builder, req.test_permissions_request_resource, options)
            .await
    }
}
