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

/// The full representation of a Service that is managed by Google Service
/// Management.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ManagedService {
    /// The name of the service. See the
    /// [overview](https://cloud.google.com/service-infrastructure/docs/overview)
    /// for naming requirements.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_name: String,

    /// ID of the project that produces and owns this service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub producer_project_id: String,
}

impl ManagedService {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_name][ManagedService::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = v.into();
        self
    }

    /// Sets the value of [producer_project_id][ManagedService::producer_project_id].
    pub fn set_producer_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.producer_project_id = v.into();
        self
    }
}

/// A service configuration, `google.api.Service`.
///
/// Service configurations are large documents describing the APIs, types,
/// documentation, quota, logging, and monitoring of a service. This library
/// does not interpret them, they are returned as JSON objects.
pub type Service = serde_json::Map<String, serde_json::Value>;

/// A rollout resource that defines how service configuration versions are
/// pushed to control plane systems.
///
/// Exactly one of `traffic_percent_strategy` or `delete_service_strategy` is
/// set. The setters for those fields clear the other strategy.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Rollout {
    /// Optional. Unique identifier of this Rollout. Must be no longer than 63
    /// characters and only lower case letters, digits, '.', '_' and '-' are
    /// allowed.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rollout_id: String,

    /// Creation time of the rollout. Readonly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<wkt::Timestamp>,

    /// The user who created the Rollout. Readonly.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_by: String,

    /// The status of this rollout. Readonly. In case of a failed rollout,
    /// the system will automatically rollback to the current Rollout
    /// version. Readonly.
    #[serde(skip_serializing_if = "rollout::RolloutStatus::is_default")]
    pub status: rollout::RolloutStatus,

    /// Google Service Control selects service configurations based on
    /// traffic percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_percent_strategy: Option<rollout::TrafficPercentStrategy>,

    /// The strategy associated with a rollout to delete a `ManagedService`.
    /// Readonly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_service_strategy: Option<rollout::DeleteServiceStrategy>,

    /// The name of the service associated with this Rollout.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_name: String,
}

impl Rollout {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [rollout_id][Rollout::rollout_id].
    pub fn set_rollout_id<T: Into<String>>(mut self, v: T) -> Self {
        self.rollout_id = v.into();
        self
    }

    /// Sets the value of [create_time][Rollout::create_time].
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [create_time][Rollout::create_time].
    pub fn set_or_clear_create_time<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_by][Rollout::created_by].
    pub fn set_created_by<T: Into<String>>(mut self, v: T) -> Self {
        self.created_by = v.into();
        self
    }

    /// Sets the value of [status][Rollout::status].
    pub fn set_status<T: Into<rollout::RolloutStatus>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [traffic_percent_strategy][Rollout::traffic_percent_strategy].
    ///
    /// This also clears [delete_service_strategy][Rollout::delete_service_strategy].
    pub fn set_traffic_percent_strategy<T: Into<rollout::TrafficPercentStrategy>>(
        mut self,
        v: T,
    ) -> Self {
        self.traffic_percent_strategy = Some(v.into());
        self.delete_service_strategy = None;
        self
    }

    /// Sets the value of [delete_service_strategy][Rollout::delete_service_strategy].
    ///
    /// This also clears [traffic_percent_strategy][Rollout::traffic_percent_strategy].
    pub fn set_delete_service_strategy<T: Into<rollout::DeleteServiceStrategy>>(
        mut self,
        v: T,
    ) -> Self {
        self.delete_service_strategy = Some(v.into());
        self.traffic_percent_strategy = None;
        self
    }

    /// Sets the value of [service_name][Rollout::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = v.into();
        self
    }
}

/// Defines additional types related to [Rollout].
pub mod rollout {
    /// Strategy that specifies how clients of Google Service Controller want
    /// to send traffic to use different config versions.
    ///
    /// The keys are config ids, the values are the percentage of traffic,
    /// which must add up to 100.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct TrafficPercentStrategy {
        #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
        pub percentages: std::collections::HashMap<String, f64>,
    }

    impl TrafficPercentStrategy {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [percentages][TrafficPercentStrategy::percentages].
        pub fn set_percentages<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<f64>,
        {
            self.percentages = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }
    }

    /// Strategy used to delete a service. This strategy is a placeholder only
    /// used by the system generated rollout to delete a service.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct DeleteServiceStrategy {}

    /// Status of a Rollout.
    ///
    /// This enum is defined as `#[non_exhaustive]` because Google Cloud may
    /// add additional enum variants at any time. Values sent by the service
    /// and not known to this version of the library are preserved in the
    /// `UnknownValue` variant, and sent back unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum RolloutStatus {
        /// No status specified.
        Unspecified,
        /// The Rollout is in progress.
        InProgress,
        /// The Rollout has completed successfully.
        Success,
        /// The Rollout has been cancelled. This can happen if you have
        /// overlapping Rollout pushes, and the previous ones will be
        /// cancelled.
        Cancelled,
        /// The Rollout has failed and the rollback attempt has failed too.
        Failed,
        /// The Rollout has not started yet and is pending for execution.
        Pending,
        /// The Rollout has failed and rolled back to the previous successful
        /// Rollout.
        FailedRolledBack,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [RolloutStatus::value] or
        /// [RolloutStatus::name].
        UnknownValue(rollout_status::UnknownValue),
    }

    #[doc(hidden)]
    pub mod rollout_status {
        #[derive(Clone, Debug, PartialEq)]
        pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
    }

    impl RolloutStatus {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the string representation of enums.
        pub fn value(&self) -> Option<i32> {
            match self {
                Self::Unspecified => Some(0),
                Self::InProgress => Some(1),
                Self::Success => Some(2),
                Self::Cancelled => Some(3),
                Self::Failed => Some(4),
                Self::Pending => Some(5),
                Self::FailedRolledBack => Some(6),
                Self::UnknownValue(u) => u.0.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the integer representation of enums.
        pub fn name(&self) -> Option<&str> {
            match self {
                Self::Unspecified => Some("ROLLOUT_STATUS_UNSPECIFIED"),
                Self::InProgress => Some("IN_PROGRESS"),
                Self::Success => Some("SUCCESS"),
                Self::Cancelled => Some("CANCELLED"),
                Self::Failed => Some("FAILED"),
                Self::Pending => Some("PENDING"),
                Self::FailedRolledBack => Some("FAILED_ROLLED_BACK"),
                Self::UnknownValue(u) => u.0.name(),
            }
        }

        pub(crate) fn is_default(&self) -> bool {
            matches!(self, Self::Unspecified)
        }
    }

    impl std::default::Default for RolloutStatus {
        fn default() -> Self {
            Self::from(0)
        }
    }

    impl std::fmt::Display for RolloutStatus {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            wkt::internal::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for RolloutStatus {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Unspecified,
                1 => Self::InProgress,
                2 => Self::Success,
                3 => Self::Cancelled,
                4 => Self::Failed,
                5 => Self::Pending,
                6 => Self::FailedRolledBack,
                _ => Self::UnknownValue(rollout_status::UnknownValue(
                    wkt::internal::UnknownEnumValue::Integer(value),
                )),
            }
        }
    }

    impl std::convert::From<&str> for RolloutStatus {
        fn from(value: &str) -> Self {
            match value {
                "ROLLOUT_STATUS_UNSPECIFIED" => Self::Unspecified,
                "IN_PROGRESS" => Self::InProgress,
                "SUCCESS" => Self::Success,
                "CANCELLED" => Self::Cancelled,
                "FAILED" => Self::Failed,
                "PENDING" => Self::Pending,
                "FAILED_ROLLED_BACK" => Self::FailedRolledBack,
                _ => Self::UnknownValue(rollout_status::UnknownValue(
                    wkt::internal::UnknownEnumValue::String(value.to_string()),
                )),
            }
        }
    }

    impl serde::ser::Serialize for RolloutStatus {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            match self {
                Self::UnknownValue(u) => serde::ser::Serialize::serialize(&u.0, serializer),
                known => serializer.serialize_str(known.name().unwrap_or_default()),
            }
        }
    }

    impl<'de> serde::de::Deserialize<'de> for RolloutStatus {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(wkt::internal::EnumVisitor::<RolloutStatus>::new(
                ".google.api.servicemanagement.v1.Rollout.RolloutStatus",
            ))
        }
    }
}

/// The metadata associated with a long running operation resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationMetadata {
    /// The full name of the resources that this operation is directly
    /// associated with.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource_names: Vec<String>,

    /// Detailed status information for each step. The order is
    /// undetermined.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<operation_metadata::Step>,

    /// Percentage of completion of this operation, ranging from 0 to 100.
    #[serde(skip_serializing_if = "is_zero")]
    pub progress_percentage: i32,

    /// The start time of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<wkt::Timestamp>,
}

fn is_zero(v: &i32) -> bool {
    *v == 0
}

impl OperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_names][OperationMetadata::resource_names].
    pub fn set_resource_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.resource_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [steps][OperationMetadata::steps].
    pub fn set_steps<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<operation_metadata::Step>,
    {
        self.steps = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [progress_percentage][OperationMetadata::progress_percentage].
    pub fn set_progress_percentage<T: Into<i32>>(mut self, v: T) -> Self {
        self.progress_percentage = v.into();
        self
    }

    /// Sets the value of [start_time][OperationMetadata::start_time].
    pub fn set_start_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }
}

/// Defines additional types related to [OperationMetadata].
pub mod operation_metadata {
    /// Represents the status of one operation step.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Step {
        /// The short description of the step.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub description: String,

        /// The status code.
        #[serde(skip_serializing_if = "Status::is_default")]
        pub status: Status,
    }

    impl Step {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [description][Step::description].
        pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
            self.description = v.into();
            self
        }

        /// Sets the value of [status][Step::status].
        pub fn set_status<T: Into<Status>>(mut self, v: T) -> Self {
            self.status = v.into();
            self
        }
    }

    /// Code describes the status of the operation (or one of its steps).
    ///
    /// This enum is defined as `#[non_exhaustive]` because Google Cloud may
    /// add additional enum variants at any time. Values sent by the service
    /// and not known to this version of the library are preserved in the
    /// `UnknownValue` variant, and sent back unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Status {
        /// Unspecifed code.
        Unspecified,
        /// The operation or step has completed without errors.
        Done,
        /// The operation or step has not started yet.
        NotStarted,
        /// The operation or step is in progress.
        InProgress,
        /// The operation or step has completed with errors. If the operation
        /// is rollbackable, the rollback completed with errors too.
        Failed,
        /// The operation or step has completed with cancellation.
        Cancelled,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Status::value] or
        /// [Status::name].
        UnknownValue(status::UnknownValue),
    }

    #[doc(hidden)]
    pub mod status {
        #[derive(Clone, Debug, PartialEq)]
        pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
    }

    impl Status {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the string representation of enums.
        pub fn value(&self) -> Option<i32> {
            match self {
                Self::Unspecified => Some(0),
                Self::Done => Some(1),
                Self::NotStarted => Some(2),
                Self::InProgress => Some(3),
                Self::Failed => Some(4),
                Self::Cancelled => Some(5),
                Self::UnknownValue(u) => u.0.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the integer representation of enums.
        pub fn name(&self) -> Option<&str> {
            match self {
                Self::Unspecified => Some("STATUS_UNSPECIFIED"),
                Self::Done => Some("DONE"),
                Self::NotStarted => Some("NOT_STARTED"),
                Self::InProgress => Some("IN_PROGRESS"),
                Self::Failed => Some("FAILED"),
                Self::Cancelled => Some("CANCELLED"),
                Self::UnknownValue(u) => u.0.name(),
            }
        }

        pub(crate) fn is_default(&self) -> bool {
            matches!(self, Self::Unspecified)
        }
    }

    impl std::default::Default for Status {
        fn default() -> Self {
            Self::from(0)
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            wkt::internal::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for Status {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Unspecified,
                1 => Self::Done,
                2 => Self::NotStarted,
                3 => Self::InProgress,
                4 => Self::Failed,
                5 => Self::Cancelled,
                _ => Self::UnknownValue(status::UnknownValue(
                    wkt::internal::UnknownEnumValue::Integer(value),
                )),
            }
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "STATUS_UNSPECIFIED" => Self::Unspecified,
                "DONE" => Self::Done,
                "NOT_STARTED" => Self::NotStarted,
                "IN_PROGRESS" => Self::InProgress,
                "FAILED" => Self::Failed,
                "CANCELLED" => Self::Cancelled,
                _ => Self::UnknownValue(status::UnknownValue(
                    wkt::internal::UnknownEnumValue::String(value.to_string()),
                )),
            }
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            match self {
                Self::UnknownValue(u) => serde::ser::Serialize::serialize(&u.0, serializer),
                known => serializer.serialize_str(known.name().unwrap_or_default()),
            }
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(wkt::internal::EnumVisitor::<Status>::new(
                ".google.api.servicemanagement.v1.OperationMetadata.Status",
            ))
        }
    }
}

/// Request message for `ListServices` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct ListServicesRequest {
    /// Include services produced by the specified project.
    #[serde(alias = "producer_project_id")]
    pub producer_project_id: String,

    /// The max number of items to include in the response list. Page size is
    /// 50 if not specified. Maximum value is 500.
    #[serde(alias = "page_size")]
    pub page_size: i32,

    /// Token identifying which result to start with; returned by a previous
    /// list call.
    #[serde(alias = "page_token")]
    pub page_token: String,

    /// Include services consumed by the specified consumer.
    ///
    /// The Google Service Management implementation accepts the following
    /// forms:
    /// - project:<project_id>
    ///
    /// This field is deprecated.
    #[serde(alias = "consumer_id")]
    pub consumer_id: String,
}

impl ListServicesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [producer_project_id][ListServicesRequest::producer_project_id].
    pub fn set_producer_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.producer_project_id = v.into();
        self
    }

    /// Sets the value of [page_size][ListServicesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListServicesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [consumer_id][ListServicesRequest::consumer_id].
    pub fn set_consumer_id<T: Into<String>>(mut self, v: T) -> Self {
        self.consumer_id = v.into();
        self
    }
}

impl gax::request::RequestMessage for ListServicesRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &[];
}

impl gax::paginator::internal::PageableRequest for ListServicesRequest {
    fn set_page_token<T: Into<String>>(&mut self, token: T) {
        self.page_token = token.into();
    }
    fn page_token(&self) -> &str {
        &self.page_token
    }
}

/// Response message for `ListServices` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListServicesResponse {
    /// The returned services will only have the name field set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ManagedService>,

    /// Token that can be passed to `ListServices` to resume a paginated
    /// query.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

impl ListServicesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [services][ListServicesResponse::services].
    pub fn set_services<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ManagedService>,
    {
        self.services = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListServicesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListServicesResponse {
    type PageItem = ManagedService;

    fn items(self) -> Vec<Self::PageItem> {
        self.services
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request message for `GetService` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct GetServiceRequest {
    /// Required. The name of the service. See the `ServiceManager` overview
    /// for naming requirements. For example: `example.googleapis.com`.
    #[serde(alias = "service_name")]
    pub service_name: String,
}

impl GetServiceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_name][GetServiceRequest::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = v.into();
        self
    }
}

impl gax::request::RequestMessage for GetServiceRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["service_name"];
}

/// Request message for CreateService method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct CreateServiceRequest {
    /// Required. Initial values for the service resource.
    pub service: Option<ManagedService>,
}

impl CreateServiceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service][CreateServiceRequest::service].
    pub fn set_service<T: Into<ManagedService>>(mut self, v: T) -> Self {
        self.service = Some(v.into());
        self
    }

    /// Sets or clears the value of [service][CreateServiceRequest::service].
    pub fn set_or_clear_service<T: Into<ManagedService>>(mut self, v: Option<T>) -> Self {
        self.service = v.map(|x| x.into());
        self
    }
}

impl gax::request::RequestMessage for CreateServiceRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["service"];
}

/// Request message for DeleteService method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct DeleteServiceRequest {
    /// Required. The name of the service. See the
    /// [overview](https://cloud.google.com/service-management/overview) for
    /// naming requirements.  For example: `example.googleapis.com`.
    #[serde(alias = "service_name")]
    pub service_name: String,
}

impl DeleteServiceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_name][DeleteServiceRequest::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = v.into();
        self
    }
}

impl gax::request::RequestMessage for DeleteServiceRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["service_name"];
}

/// Request message for UndeleteService method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct UndeleteServiceRequest {
    /// Required. The name of the service. See the
    /// [overview](https://cloud.google.com/service-management/overview) for
    /// naming requirements. For example: `example.googleapis.com`.
    #[serde(alias = "service_name")]
    pub service_name: String,
}

impl UndeleteServiceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_name][UndeleteServiceRequest::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = v.into();
        self
    }
}

impl gax::request::RequestMessage for UndeleteServiceRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["service_name"];
}

/// Request message for ListServiceConfigs method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct ListServiceConfigsRequest {
    /// Required. The name of the service.  See the
    /// [overview](https://cloud.google.com/service-management/overview) for
    /// naming requirements.  For example: `example.googleapis.com`.
    #[serde(alias = "service_name")]
    pub service_name: String,

    /// The token of the page to retrieve.
    #[serde(alias = "page_token")]
    pub page_token: String,

    /// The max number of items to include in the response list. Page size is
    /// 50 if not specified. Maximum value is 100.
    #[serde(alias = "page_size")]
    pub page_size: i32,
}

impl ListServiceConfigsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_name][ListServiceConfigsRequest::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = v.into();
        self
    }

    /// Sets the value of [page_token][ListServiceConfigsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [page_size][ListServiceConfigsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }
}

impl gax::request::RequestMessage for ListServiceConfigsRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["service_name"];
}

impl gax::paginator::internal::PageableRequest for ListServiceConfigsRequest {
    fn set_page_token<T: Into<String>>(&mut self, token: T) {
        self.page_token = token.into();
    }
    fn page_token(&self) -> &str {
        &self.page_token
    }
}

/// Response message for ListServiceConfigs method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListServiceConfigsResponse {
    /// The list of service configuration resources.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service_configs: Vec<Service>,

    /// The token of the next page of results.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

impl ListServiceConfigsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_configs][ListServiceConfigsResponse::service_configs].
    pub fn set_service_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Service>,
    {
        self.service_configs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListServiceConfigsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListServiceConfigsResponse {
    type PageItem = Service;

    fn items(self) -> Vec<Self::PageItem> {
        self.service_configs
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request message for GetServiceConfig method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct GetServiceConfigRequest {
    /// Required. The name of the service.  See the
    /// [overview](https://cloud.google.com/service-management/overview) for
    /// naming requirements.  For example: `example.googleapis.com`.
    #[serde(alias = "service_name")]
    pub service_name: String,

    /// Required. The id of the service configuration resource.
    ///
    /// This field must be specified for the server to return all fields,
    /// including `SourceInfo`.
    #[serde(alias = "config_id")]
    pub config_id: String,

    /// Specifies which parts of the Service Config should be returned in the
    /// response.
    pub view: get_service_config_request::ConfigView,
}

impl GetServiceConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_name][GetServiceConfigRequest::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = v.into();
        self
    }

    /// Sets the value of [config_id][GetServiceConfigRequest::config_id].
    pub fn set_config_id<T: Into<String>>(mut self, v: T) -> Self {
        self.config_id = v.into();
        self
    }

    /// Sets the value of [view][GetServiceConfigRequest::view].
    pub fn set_view<T: Into<get_service_config_request::ConfigView>>(mut self, v: T) -> Self {
        self.view = v.into();
        self
    }
}

impl gax::request::RequestMessage for GetServiceConfigRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["service_name", "config_id"];
}

/// Defines additional types related to [GetServiceConfigRequest].
pub mod get_service_config_request {
    /// The views of a service configuration.
    ///
    /// This enum is defined as `#[non_exhaustive]` because Google Cloud may
    /// add additional enum variants at any time. Values sent by the service
    /// and not known to this version of the library are preserved in the
    /// `UnknownValue` variant, and sent back unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum ConfigView {
        /// Server response includes all fields except SourceInfo.
        Basic,
        /// Server response includes all fields including SourceInfo.
        /// SourceFiles are of type 'google.api.servicemanagement.v1.ConfigFile'
        /// and are only available for configs created using the
        /// SubmitConfigSource method.
        Full,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [ConfigView::value] or
        /// [ConfigView::name].
        UnknownValue(config_view::UnknownValue),
    }

    #[doc(hidden)]
    pub mod config_view {
        #[derive(Clone, Debug, PartialEq)]
        pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
    }

    impl ConfigView {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the string representation of enums.
        pub fn value(&self) -> Option<i32> {
            match self {
                Self::Basic => Some(0),
                Self::Full => Some(1),
                Self::UnknownValue(u) => u.0.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the integer representation of enums.
        pub fn name(&self) -> Option<&str> {
            match self {
                Self::Basic => Some("BASIC"),
                Self::Full => Some("FULL"),
                Self::UnknownValue(u) => u.0.name(),
            }
        }
    }

    impl std::default::Default for ConfigView {
        fn default() -> Self {
            Self::from(0)
        }
    }

    impl std::fmt::Display for ConfigView {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            wkt::internal::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for ConfigView {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Basic,
                1 => Self::Full,
                _ => Self::UnknownValue(config_view::UnknownValue(
                    wkt::internal::UnknownEnumValue::Integer(value),
                )),
            }
        }
    }

    impl std::convert::From<&str> for ConfigView {
        fn from(value: &str) -> Self {
            match value {
                "BASIC" => Self::Basic,
                "FULL" => Self::Full,
                _ => Self::UnknownValue(config_view::UnknownValue(
                    wkt::internal::UnknownEnumValue::String(value.to_string()),
                )),
            }
        }
    }

    impl serde::ser::Serialize for ConfigView {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            match self {
                Self::Basic => serializer.serialize_str("BASIC"),
                Self::Full => serializer.serialize_str("FULL"),
                Self::UnknownValue(u) => serde::ser::Serialize::serialize(&u.0, serializer),
            }
        }
    }

    impl<'de> serde::de::Deserialize<'de> for ConfigView {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(wkt::internal::EnumVisitor::<ConfigView>::new(
                ".google.api.servicemanagement.v1.GetServiceConfigRequest.ConfigView",
            ))
        }
    }
}

/// Request message for 'ListServiceRollouts'
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct ListServiceRolloutsRequest {
    /// Required. The name of the service.  See the
    /// [overview](https://cloud.google.com/service-management/overview) for
    /// naming requirements.  For example: `example.googleapis.com`.
    #[serde(alias = "service_name")]
    pub service_name: String,

    /// The token of the page to retrieve.
    #[serde(alias = "page_token")]
    pub page_token: String,

    /// The max number of items to include in the response list. Page size is
    /// 50 if not specified. Maximum value is 100.
    #[serde(alias = "page_size")]
    pub page_size: i32,

    /// Required. Use `filter` to return subset of rollouts. The following
    /// filters are supported:
    ///
    /// -- By [status]
    /// [google.api.servicemanagement.v1.Rollout.RolloutStatus]. For example,
    /// `filter='status=SUCCESS'`
    ///
    /// -- By [strategy]
    /// [google.api.servicemanagement.v1.Rollout.strategy]. For example,
    /// `filter='strategy=TrafficPercentStrategy'`
    pub filter: String,
}

impl ListServiceRolloutsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_name][ListServiceRolloutsRequest::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = v.into();
        self
    }

    /// Sets the value of [page_token][ListServiceRolloutsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [page_size][ListServiceRolloutsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [filter][ListServiceRolloutsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }
}

impl gax::request::RequestMessage for ListServiceRolloutsRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["service_name", "filter"];
}

impl gax::paginator::internal::PageableRequest for ListServiceRolloutsRequest {
    fn set_page_token<T: Into<String>>(&mut self, token: T) {
        self.page_token = token.into();
    }
    fn page_token(&self) -> &str {
        &self.page_token
    }
}

/// Response message for ListServiceRollouts method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListServiceRolloutsResponse {
    /// The list of rollout resources.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rollouts: Vec<Rollout>,

    /// The token of the next page of results.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

impl ListServiceRolloutsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [rollouts][ListServiceRolloutsResponse::rollouts].
    pub fn set_rollouts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Rollout>,
    {
        self.rollouts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListServiceRolloutsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListServiceRolloutsResponse {
    type PageItem = Rollout;

    fn items(self) -> Vec<Self::PageItem> {
        self.rollouts
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request message for GetServiceRollout method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct GetServiceRolloutRequest {
    /// Required. The name of the service.  See the
    /// [overview](https://cloud.google.com/service-management/overview) for
    /// naming requirements.  For example: `example.googleapis.com`.
    #[serde(alias = "service_name")]
    pub service_name: String,

    /// Required. The id of the rollout resource.
    #[serde(alias = "rollout_id")]
    pub rollout_id: String,
}

impl GetServiceRolloutRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_name][GetServiceRolloutRequest::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = v.into();
        self
    }

    /// Sets the value of [rollout_id][GetServiceRolloutRequest::rollout_id].
    pub fn set_rollout_id<T: Into<String>>(mut self, v: T) -> Self {
        self.rollout_id = v.into();
        self
    }
}

impl gax::request::RequestMessage for GetServiceRolloutRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["service_name", "rollout_id"];
}
