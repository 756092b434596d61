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

pub mod service_monitoring_service {
    use crate::Result;

    /// A builder for [ServiceMonitoringService][crate::client::ServiceMonitoringService].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_monitoring_v3::*;
    /// # use builder::service_monitoring_service::ClientBuilder;
    /// # use client::ServiceMonitoringService;
    /// let builder : ClientBuilder = ServiceMonitoringService::builder();
    /// let client = builder
    ///     .with_endpoint("https://monitoring.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::CredentialsSource>;

    pub(crate) mod client {
        use super::super::super::client::ServiceMonitoringService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ServiceMonitoringService;
            type Credentials = gaxi::options::CredentialsSource;
            async fn build(
                self,
                config: gaxi::options::Configuration,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::ServiceMonitoringService] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceMonitoringService>,
        config: gaxi::options::SharedConfiguration,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceMonitoringService>,
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

    /// The request builder for [ServiceMonitoringService::create_service][crate::client::ServiceMonitoringService::create_service] calls.
    #[derive(Clone, Debug)]
    pub struct CreateService(RequestBuilder<crate::model::CreateServiceRequest>);

    impl CreateService {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceMonitoringService>,
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
                .create_service(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [parent][crate::model::CreateServiceRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [service_id][crate::model::CreateServiceRequest::service_id].
        pub fn set_service_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.service_id = v.into();
            self
        }

        /// Sets the value of [service][crate::model::CreateServiceRequest::service].
        ///
        /// This is a **required** field for requests.
        pub fn set_service<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Service>,
        {
            self.0.request.service = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service][crate::model::CreateServiceRequest::service].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_service<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Service>,
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

    /// The request builder for [ServiceMonitoringService::get_service][crate::client::ServiceMonitoringService::get_service] calls.
    #[derive(Clone, Debug)]
    pub struct GetService(RequestBuilder<crate::model::GetServiceRequest>);

    impl GetService {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceMonitoringService>,
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
                .get_service(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [name][crate::model::GetServiceRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetService {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceMonitoringService::list_services][crate::client::ServiceMonitoringService::list_services] calls.
    #[derive(Clone, Debug)]
    pub struct ListServices(RequestBuilder<crate::model::ListServicesRequest>);

    impl ListServices {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceMonitoringService>,
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

        /// Sets the value of [parent][crate::model::ListServicesRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [filter][crate::model::ListServicesRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
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
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListServices {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceMonitoringService::update_service][crate::client::ServiceMonitoringService::update_service] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateService(RequestBuilder<crate::model::UpdateServiceRequest>);

    impl UpdateService {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceMonitoringService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateServiceRequest>>(mut self, v: V) -> Self {
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
                .update_service(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [service][crate::model::UpdateServiceRequest::service].
        ///
        /// This is a **required** field for requests.
        pub fn set_service<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Service>,
        {
            self.0.request.service = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service][crate::model::UpdateServiceRequest::service].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_service<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Service>,
        {
            self.0.request.service = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateServiceRequest::update_mask].
        pub fn set_update_mask<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::FieldMask>,
        {
            self.0.request.update_mask = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateServiceRequest::update_mask].
        pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::FieldMask>,
        {
            self.0.request.update_mask = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateService {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceMonitoringService::delete_service][crate::client::ServiceMonitoringService::delete_service] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteService(RequestBuilder<crate::model::DeleteServiceRequest>);

    impl DeleteService {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceMonitoringService>,
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
        pub async fn send(self) -> Result<wkt::Empty> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<wkt::Empty>
        where
            F: FnOnce(&wkt::Empty, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .delete_service(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [name][crate::model::DeleteServiceRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteService {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceMonitoringService::create_service_level_objective][crate::client::ServiceMonitoringService::create_service_level_objective] calls.
    #[derive(Clone, Debug)]
    pub struct CreateServiceLevelObjective(
        RequestBuilder<crate::model::CreateServiceLevelObjectiveRequest>,
    );

    impl CreateServiceLevelObjective {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceMonitoringService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateServiceLevelObjectiveRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ServiceLevelObjective> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(
            self,
            callback: F,
        ) -> Result<crate::model::ServiceLevelObjective>
        where
            F: FnOnce(&crate::model::ServiceLevelObjective, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .create_service_level_objective(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [parent][crate::model::CreateServiceLevelObjectiveRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [service_level_objective_id][crate::model::CreateServiceLevelObjectiveRequest::service_level_objective_id].
        pub fn set_service_level_objective_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.service_level_objective_id = v.into();
            self
        }

        /// Sets the value of [service_level_objective][crate::model::CreateServiceLevelObjectiveRequest::service_level_objective].
        ///
        /// This is a **required** field for requests.
        pub fn set_service_level_objective<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ServiceLevelObjective>,
        {
            self.0.request.service_level_objective = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_level_objective][crate::model::CreateServiceLevelObjectiveRequest::service_level_objective].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_service_level_objective<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::ServiceLevelObjective>,
        {
            self.0.request.service_level_objective = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateServiceLevelObjective {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceMonitoringService::get_service_level_objective][crate::client::ServiceMonitoringService::get_service_level_objective] calls.
    #[derive(Clone, Debug)]
    pub struct GetServiceLevelObjective(
        RequestBuilder<crate::model::GetServiceLevelObjectiveRequest>,
    );

    impl GetServiceLevelObjective {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceMonitoringService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetServiceLevelObjectiveRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ServiceLevelObjective> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(
            self,
            callback: F,
        ) -> Result<crate::model::ServiceLevelObjective>
        where
            F: FnOnce(&crate::model::ServiceLevelObjective, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .get_service_level_objective(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [name][crate::model::GetServiceLevelObjectiveRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [view][crate::model::GetServiceLevelObjectiveRequest::view].
        pub fn set_view<T: Into<crate::model::service_level_objective::View>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.view = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetServiceLevelObjective {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceMonitoringService::list_service_level_objectives][crate::client::ServiceMonitoringService::list_service_level_objectives] calls.
    #[derive(Clone, Debug)]
    pub struct ListServiceLevelObjectives(
        RequestBuilder<crate::model::ListServiceLevelObjectivesRequest>,
    );

    impl ListServiceLevelObjectives {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceMonitoringService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListServiceLevelObjectivesRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ListServiceLevelObjectivesResponse> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(
            self,
            callback: F,
        ) -> Result<crate::model::ListServiceLevelObjectivesResponse>
        where
            F: FnOnce(&crate::model::ListServiceLevelObjectivesResponse, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .list_service_level_objectives(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::ListServiceLevelObjectivesResponse,
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
            crate::model::ListServiceLevelObjectivesResponse,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListServiceLevelObjectivesRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [filter][crate::model::ListServiceLevelObjectivesRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListServiceLevelObjectivesRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListServiceLevelObjectivesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [view][crate::model::ListServiceLevelObjectivesRequest::view].
        pub fn set_view<T: Into<crate::model::service_level_objective::View>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.view = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListServiceLevelObjectives {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceMonitoringService::update_service_level_objective][crate::client::ServiceMonitoringService::update_service_level_objective] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateServiceLevelObjective(
        RequestBuilder<crate::model::UpdateServiceLevelObjectiveRequest>,
    );

    impl UpdateServiceLevelObjective {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceMonitoringService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateServiceLevelObjectiveRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ServiceLevelObjective> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(
            self,
            callback: F,
        ) -> Result<crate::model::ServiceLevelObjective>
        where
            F: FnOnce(&crate::model::ServiceLevelObjective, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .update_service_level_objective(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [service_level_objective][crate::model::UpdateServiceLevelObjectiveRequest::service_level_objective].
        ///
        /// This is a **required** field for requests.
        pub fn set_service_level_objective<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ServiceLevelObjective>,
        {
            self.0.request.service_level_objective = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [service_level_objective][crate::model::UpdateServiceLevelObjectiveRequest::service_level_objective].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_service_level_objective<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::ServiceLevelObjective>,
        {
            self.0.request.service_level_objective = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateServiceLevelObjectiveRequest::update_mask].
        pub fn set_update_mask<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::FieldMask>,
        {
            self.0.request.update_mask = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateServiceLevelObjectiveRequest::update_mask].
        pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::FieldMask>,
        {
            self.0.request.update_mask = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateServiceLevelObjective {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceMonitoringService::delete_service_level_objective][crate::client::ServiceMonitoringService::delete_service_level_objective] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteServiceLevelObjective(
        RequestBuilder<crate::model::DeleteServiceLevelObjectiveRequest>,
    );

    impl DeleteServiceLevelObjective {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ServiceMonitoringService>,
            config: gaxi::options::SharedConfiguration,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteServiceLevelObjectiveRequest>>(
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
        pub async fn send(self) -> Result<wkt::Empty> {
            self.send_with(|_, _| {}).await
        }

        /// Sends the request, and calls `callback` with the response and its
        /// envelope before returning the response.
        pub async fn send_with<F>(self, callback: F) -> Result<wkt::Empty>
        where
            F: FnOnce(&wkt::Empty, &gax::response::Parts),
        {
            let options = self.0.merged_options();
            let (parts, body) = (*self.0.stub)
                .delete_service_level_objective(self.0.request, options)
                .await?
                .into_parts();
            callback(&body, &parts);
            Ok(body)
        }

        /// Sets the value of [name][crate::model::DeleteServiceLevelObjectiveRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteServiceLevelObjective {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

}
