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

pub mod reachability_service {
    use crate::Result;

    /// A builder for [ReachabilityService][crate::client::ReachabilityService].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_networkmanagement_v1::*;
    /// # use builder::reachability_service::ClientBuilder;
    /// # use client::ReachabilityService;
    /// let builder : ClientBuilder = ReachabilityService::builder();
    /// let client = builder
    ///     .with_endpoint("https://networkmanagement.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::CredentialsSource>;

    pub(crate) mod client {
        use super::super::super::client::ReachabilityService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ReachabilityService;
            type Credentials = gaxi::options::CredentialsSource;
            async fn build(
                self,
                config: gaxi::options::Configuration,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::ReachabilityService] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::ReachabilityService>,
        config: gaxi::options::SharedConfiguration,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ReachabilityService>,
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

    /// The request builder for [ReachabilityService::list_connectivity_tests][crate::client::ReachabilityService::list_connectivity_tests] calls.
    #[derive(Clone, Debug)]
    pub struct ListConnectivityTests(RequestBuilder<crate::model::ListConnectivityTestsRequest>);

    impl ListConnectivityTests {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ReachabilityService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListConnectivityTestsRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ListConnectivityTestsResponse> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(
            self,
            callback: F,
        ) -> Result<crate::model::ListConnectivityTestsResponse>
        where
            F: FnOnce(&crate::model::ListConnectivityTestsResponse, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .list_connectivity_tests(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::ListConnectivityTestsResponse,
            gax::error::Error,
        > {
            use gax::paginator::internal::PageableRequest;
            let token = self.0.request.page_token().to_string();
            let execute = move |token: String| {
                let mut builder = self.clone();
                PageableRequest::set_page_token(&mut builder.0.request, token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::ListConnectivityTestsResponse,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListConnectivityTestsRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListConnectivityTestsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListConnectivityTestsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [filter][crate::model::ListConnectivityTestsRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [order_by][crate::model::ListConnectivityTestsRequest::order_by].
        pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListConnectivityTests {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ReachabilityService::get_connectivity_test][crate::client::ReachabilityService::get_connectivity_test] calls.
    #[derive(Clone, Debug)]
    pub struct GetConnectivityTest(RequestBuilder<crate::model::GetConnectivityTestRequest>);

    impl GetConnectivityTest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ReachabilityService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetConnectivityTestRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ConnectivityTest> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<crate::model::ConnectivityTest>
        where
            F: FnOnce(&crate::model::ConnectivityTest, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .get_connectivity_test(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [name][crate::model::GetConnectivityTestRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetConnectivityTest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ReachabilityService::create_connectivity_test][crate::client::ReachabilityService::create_connectivity_test] calls.
    #[derive(Clone, Debug)]
    pub struct CreateConnectivityTest(RequestBuilder<crate::model::CreateConnectivityTestRequest>);

    impl CreateConnectivityTest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ReachabilityService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateConnectivityTestRequest>>(
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
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<longrunning::model::Operation>
        where
            F: FnOnce(&longrunning::model::Operation, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .create_connectivity_test(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [parent][crate::model::CreateConnectivityTestRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [test_id][crate::model::CreateConnectivityTestRequest::test_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_test_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.test_id = v.into();
            self
        }

        /// Sets the value of [resource][crate::model::CreateConnectivityTestRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ConnectivityTest>,
        {
            self.0.request.resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [resource][crate::model::CreateConnectivityTestRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ConnectivityTest>,
        {
            self.0.request.resource = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateConnectivityTest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ReachabilityService::update_connectivity_test][crate::client::ReachabilityService::update_connectivity_test] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateConnectivityTest(RequestBuilder<crate::model::UpdateConnectivityTestRequest>);

    impl UpdateConnectivityTest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ReachabilityService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateConnectivityTestRequest>>(
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
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<longrunning::model::Operation>
        where
            F: FnOnce(&longrunning::model::Operation, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .update_connectivity_test(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [update_mask][crate::model::UpdateConnectivityTestRequest::update_mask].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_mask<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::FieldMask>,
        {
            self.0.request.update_mask = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateConnectivityTestRequest::update_mask].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::FieldMask>,
        {
            self.0.request.update_mask = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource][crate::model::UpdateConnectivityTestRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_resource<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ConnectivityTest>,
        {
            self.0.request.resource = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [resource][crate::model::UpdateConnectivityTestRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_resource<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ConnectivityTest>,
        {
            self.0.request.resource = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateConnectivityTest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ReachabilityService::rerun_connectivity_test][crate::client::ReachabilityService::rerun_connectivity_test] calls.
    #[derive(Clone, Debug)]
    pub struct RerunConnectivityTest(RequestBuilder<crate::model::RerunConnectivityTestRequest>);

    impl RerunConnectivityTest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ReachabilityService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RerunConnectivityTestRequest>>(
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
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<longrunning::model::Operation>
        where
            F: FnOnce(&longrunning::model::Operation, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .rerun_connectivity_test(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [name][crate::model::RerunConnectivityTestRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RerunConnectivityTest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ReachabilityService::delete_connectivity_test][crate::client::ReachabilityService::delete_connectivity_test] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteConnectivityTest(RequestBuilder<crate::model::DeleteConnectivityTestRequest>);

    impl DeleteConnectivityTest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ReachabilityService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteConnectivityTestRequest>>(
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
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<longrunning::model::Operation>
        where
            F: FnOnce(&longrunning::model::Operation, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .delete_connectivity_test(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [name][crate::model::DeleteConnectivityTestRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteConnectivityTest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ReachabilityService::get_operation][crate::client::ReachabilityService::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<longrunning::model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ReachabilityService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::GetOperationRequest>>(
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
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<longrunning::model::Operation>
        where
            F: FnOnce(&longrunning::model::Operation, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .get_operation(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [name][longrunning::model::GetOperationRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

}
