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

pub mod license_codes {
    use crate::Result;

    /// A builder for [LicenseCodes][crate::client::LicenseCodes].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_compute_v1::*;
    /// # use builder::license_codes::ClientBuilder;
    /// # use client::LicenseCodes;
    /// let builder : ClientBuilder = LicenseCodes::builder();
    /// let client = builder
    ///     .with_endpoint("https://compute.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::CredentialsSource>;

    pub(crate) mod client {
        use super::super::super::client::LicenseCodes;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = LicenseCodes;
            type Credentials = gaxi::options::CredentialsSource;
            async fn build(
                self,
                config: gaxi::options::Configuration,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::LicenseCodes] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseCodes>,
        config: gaxi::options::SharedConfiguration,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseCodes>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self {
                stub,
                config,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }

        /// Merges the request options with the client configuration.
        ///
        /// The configuration lock is released before the request is sent.
        fn merged_options(&self) -> gax::options::RequestOptions {
            let config = gax::configuration::read_config(&self.config);
            gaxi::options::apply(
                self.options.clone(),
                &config,
                &crate::info::X_GOOG_API_CLIENT_HEADER,
            )
        }

        /// Replaces the request with the conversion of a field mapping.
        fn set_fields(&mut self, fields: serde_json::Value) -> Result<()>
        where
            R: gax::request::RequestMessage,
        {
            self.request = R::from_fields(fields)?;
            Ok(())
        }
    }

    /// The request builder for [LicenseCodes::get][crate::client::LicenseCodes::get] calls.
    #[derive(Clone, Debug)]
    pub struct Get(RequestBuilder<crate::model::GetLicenseCodeRequest>);

    impl Get {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseCodes>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLicenseCodeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the full request from a mapping of field names to values,
        /// replacing any prior values.
        ///
        /// Field names may use `snake_case` or `lowerCamelCase`. Fails if a
        /// required field is missing, a field is unknown, or a value has the
        /// wrong type.
        pub fn with_fields(mut self, fields: serde_json::Value) -> Result<Self> {
            self.0.set_fields(fields)?;
            Ok(self)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::LicenseCode> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<crate::model::LicenseCode>
        where
            F: FnOnce(&crate::model::LicenseCode, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .get(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [project][crate::model::GetLicenseCodeRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [license_code][crate::model::GetLicenseCodeRequest::license_code].
        ///
        /// This is a **required** field for requests.
        pub fn set_license_code<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.license_code = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LicenseCodes::test_iam_permissions][crate::client::LicenseCodes::test_iam_permissions] calls.
    #[derive(Clone, Debug)]
    pub struct TestIamPermissions(
        RequestBuilder<crate::model::TestIamPermissionsLicenseCodeRequest>,
    );

    impl TestIamPermissions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LicenseCodes>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::TestIamPermissionsLicenseCodeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the full request from a mapping of field names to values,
        /// replacing any prior values.
        ///
        /// Field names may use `snake_case` or `lowerCamelCase`. Fails if a
        /// required field is missing, a field is unknown, or a value has the
        /// wrong type.
        pub fn with_fields(mut self, fields: serde_json::Value) -> Result<Self> {
            self.0.set_fields(fields)?;
            Ok(self)
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::TestPermissionsResponse> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(
            self,
            callback: F,
        ) -> Result<crate::model::TestPermissionsResponse>
        where
            F: FnOnce(&crate::model::TestPermissionsResponse, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .test_iam_permissions(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [project][crate::model::TestIamPermissionsLicenseCodeRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [resource][crate::model::TestIamPermissionsLicenseCodeRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource = v.into();
            self
        }

        /// Sets the value of [test_permissions_request_resource][crate::model::TestIamPermissionsLicenseCodeRequest::test_permissions_request_resource].
        pub fn set_test_permissions_request_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::TestPermissionsRequest>,
        {
            self.0.request.test_permissions_request_resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [test_permissions_request_resource][crate::model::TestIamPermissionsLicenseCodeRequest::test_permissions_request_resource].
        pub fn set_or_clear_test_permissions_request_resource<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::TestPermissionsRequest>,
        {
            self.0.request.test_permissions_request_resource = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for TestIamPermissions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

}
