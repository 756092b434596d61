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

/// Implements a [LicenseCodes](super::stub::LicenseCodes) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct LicenseCodes<T>
where
    T: super::stub::LicenseCodes + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> LicenseCodes<T>
where
    T: super::stub::LicenseCodes + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::LicenseCodes for LicenseCodes<T>
where
    T: super::stub::LicenseCodes + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn get(
        &self,
        req: crate::model::GetLicenseCodeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LicenseCode>> {
        self.inner.get(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn test_iam_permissions(
        &self,
        req: crate::model::TestIamPermissionsLicenseCodeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TestPermissionsResponse>> {
        self.inner.test_iam_permissions(req, options).await
    }
}
