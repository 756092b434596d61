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

pub mod service_manager {
    use crate::Result;

    /// A builder for [ServiceManager][crate::client::ServiceManager].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_api_servicemanagement_v1::*;
    /// # use builder::service_manager::ClientBuilder;
    /// # use client::ServiceManager;
    /// let builder : ClientBuilder = ServiceManager::builder();
    /// let client = builder
    ///     .with_endpoint("https://servicemanagement.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::CredentialsSource>;

    pub(crate) mod client {
        use super::super::super::client::ServiceManager;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ServiceManager;
            type Credentials = gaxi::options::CredentialsSource;
            async fn build(
                self,
                config: gaxi::options::Configuration,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::ServiceManager] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceManager>,
        config: gaxi::options::SharedConfiguration,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceManager>,
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

    /// The request builder for [ServiceManager::list_services][crate::client::ServiceManager::list_services] calls.
    #[derive(Clone, Debug)]
    pub struct ListServices(RequestBuilder<crate::model::ListServicesRequest>);

    impl ListServices {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceManager>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListServicesRequest>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<crate::model::ListServicesResponse> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<crate::model::ListServicesResponse>
        where
            F: FnOnce(&crate::model::ListServicesResponse, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .list_services(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListServicesResponse, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::ListServicesResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [producer_project_id][crate::model::ListServicesRequest::producer_project_id].
        pub fn set_producer_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.producer_project_id = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListServicesRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListServicesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [consumer_id][crate::model::ListServicesRequest::consumer_id].
        pub fn set_consumer_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.consumer_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListServices {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceManager::get_service][crate::client::ServiceManager::get_service] calls.
    #[derive(Clone, Debug)]
    pub struct GetService(RequestBuilder<crate::model::GetServiceRequest>);

    impl GetService {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceManager>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetServiceRequest>>(mut self, v: V) -> Self {
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
        pub async fn send(self) -> Result<crate::model::ManagedService> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<crate::model::ManagedService>
        where
            F: FnOnce(&crate::model::ManagedService, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .get_service(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [service_name][crate::model::GetServiceRequest::service_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.service_name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetService {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceManager::create_service][crate::client::ServiceManager::create_service] calls.
    #[derive(Clone, Debug)]
    pub struct CreateService(RequestBuilder<crate::model::CreateServiceRequest>);

    impl CreateService {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceManager>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateServiceRequest>>(mut self, v: V) -> Self {
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
                .create_service(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [service][crate::model::CreateServiceRequest::service].
        ///
        /// This is a **required** field for requests.
        pub fn set_service<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ManagedService>,
        {
            self.0.request.service = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service][crate::model::CreateServiceRequest::service].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_service<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ManagedService>,
        {
            self.0.request.service = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateService {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceManager::delete_service][crate::client::ServiceManager::delete_service] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteService(RequestBuilder<crate::model::DeleteServiceRequest>);

    impl DeleteService {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceManager>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteServiceRequest>>(mut self, v: V) -> Self {
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
                .delete_service(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [service_name][crate::model::DeleteServiceRequest::service_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.service_name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteService {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceManager::undelete_service][crate::client::ServiceManager::undelete_service] calls.
    #[derive(Clone, Debug)]
    pub struct UndeleteService(RequestBuilder<crate::model::UndeleteServiceRequest>);

    impl UndeleteService {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceManager>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UndeleteServiceRequest>>(mut self, v: V) -> Self {
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
                .undelete_service(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [service_name][crate::model::UndeleteServiceRequest::service_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.service_name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UndeleteService {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceManager::list_service_configs][crate::client::ServiceManager::list_service_configs] calls.
    #[derive(Clone, Debug)]
    pub struct ListServiceConfigs(RequestBuilder<crate::model::ListServiceConfigsRequest>);

    impl ListServiceConfigs {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceManager>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListServiceConfigsRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ListServiceConfigsResponse> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(
            self,
            callback: F,
        ) -> Result<crate::model::ListServiceConfigsResponse>
        where
            F: FnOnce(&crate::model::ListServiceConfigsResponse, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .list_service_configs(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::ListServiceConfigsResponse,
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
            crate::model::ListServiceConfigsResponse,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [service_name][crate::model::ListServiceConfigsRequest::service_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.service_name = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListServiceConfigsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListServiceConfigsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListServiceConfigs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceManager::get_service_config][crate::client::ServiceManager::get_service_config] calls.
    #[derive(Clone, Debug)]
    pub struct GetServiceConfig(RequestBuilder<crate::model::GetServiceConfigRequest>);

    impl GetServiceConfig {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceManager>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetServiceConfigRequest>>(
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
        pub async fn send(self) -> Result<crate::model::Service> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<crate::model::Service>
        where
            F: FnOnce(&crate::model::Service, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .get_service_config(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [service_name][crate::model::GetServiceConfigRequest::service_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.service_name = v.into();
            self
        }

        /// Sets the value of [config_id][crate::model::GetServiceConfigRequest::config_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_config_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.config_id = v.into();
            self
        }

        /// Sets the value of [view][crate::model::GetServiceConfigRequest::view].
        pub fn set_view<T: Into<crate::model::get_service_config_request::ConfigView>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.view = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetServiceConfig {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceManager::list_service_rollouts][crate::client::ServiceManager::list_service_rollouts] calls.
    #[derive(Clone, Debug)]
    pub struct ListServiceRollouts(RequestBuilder<crate::model::ListServiceRolloutsRequest>);

    impl ListServiceRollouts {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceManager>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListServiceRolloutsRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ListServiceRolloutsResponse> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(
            self,
            callback: F,
        ) -> Result<crate::model::ListServiceRolloutsResponse>
        where
            F: FnOnce(&crate::model::ListServiceRolloutsResponse, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .list_service_rollouts(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::ListServiceRolloutsResponse,
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
            crate::model::ListServiceRolloutsResponse,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [service_name][crate::model::ListServiceRolloutsRequest::service_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.service_name = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListServiceRolloutsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListServiceRolloutsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [filter][crate::model::ListServiceRolloutsRequest::filter].
        ///
        /// This is a **required** field for requests.
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListServiceRollouts {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceManager::get_service_rollout][crate::client::ServiceManager::get_service_rollout] calls.
    #[derive(Clone, Debug)]
    pub struct GetServiceRollout(RequestBuilder<crate::model::GetServiceRolloutRequest>);

    impl GetServiceRollout {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceManager>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetServiceRolloutRequest>>(
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
        pub async fn send(self) -> Result<crate::model::Rollout> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<crate::model::Rollout>
        where
            F: FnOnce(&crate::model::Rollout, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .get_service_rollout(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [service_name][crate::model::GetServiceRolloutRequest::service_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.service_name = v.into();
            self
        }

        /// Sets the value of [rollout_id][crate::model::GetServiceRolloutRequest::rollout_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_rollout_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.rollout_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetServiceRollout {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceManager::get_operation][crate::client::ServiceManager::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<longrunning::model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceManager>,
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
