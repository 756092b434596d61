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

/// A `Service` is a discrete, autonomous, and network-accessible unit,
/// designed to solve an individual concern.
///
/// In Cloud Monitoring, a `Service` acts as the root resource under which
/// operational aspects of the service are accessible. A service is identified
/// by at most one of `custom`, `app_engine`, `cloud_endpoints`, `cloud_run`,
/// `gke_service`, or `basic_service`. The setters for those fields clear the
/// other identifiers.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Service {
    /// Identifier. Resource name for this Service. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]
    /// ```
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Name used for UI elements listing this Service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    /// Custom service type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<service::Custom>,

    /// Type used for App Engine services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_engine: Option<service::AppEngine>,

    /// Type used for Cloud Endpoints services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_endpoints: Option<service::CloudEndpoints>,

    /// Type used for Cloud Run services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_run: Option<service::CloudRun>,

    /// Type used for GKE Services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gke_service: Option<service::GkeService>,

    /// Message that contains the service type and service labels of this
    /// service if it is a basic service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_service: Option<service::BasicService>,

    /// Configuration for how to query telemetry on a Service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<service::Telemetry>,

    /// Labels which have been used to annotate the service.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub user_labels: std::collections::HashMap<String, String>,
}

impl Service {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Service::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][Service::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    fn clear_identifier(mut self) -> Self {
        self.custom = None;
        self.app_engine = None;
        self.cloud_endpoints = None;
        self.cloud_run = None;
        self.gke_service = None;
        self.basic_service = None;
        self
    }

    /// Sets the value of [custom][Service::custom], clearing the other
    /// identifiers.
    pub fn set_custom<T: Into<service::Custom>>(self, v: T) -> Self {
        let mut s = self.clear_identifier();
        s.custom = Some(v.into());
        s
    }

    /// Sets the value of [app_engine][Service::app_engine], clearing the other
    /// identifiers.
    pub fn set_app_engine<T: Into<service::AppEngine>>(self, v: T) -> Self {
        let mut s = self.clear_identifier();
        s.app_engine = Some(v.into());
        s
    }

    /// Sets the value of [cloud_endpoints][Service::cloud_endpoints], clearing
    /// the other identifiers.
    pub fn set_cloud_endpoints<T: Into<service::CloudEndpoints>>(self, v: T) -> Self {
        let mut s = self.clear_identifier();
        s.cloud_endpoints = Some(v.into());
        s
    }

    /// Sets the value of [cloud_run][Service::cloud_run], clearing the other
    /// identifiers.
    pub fn set_cloud_run<T: Into<service::CloudRun>>(self, v: T) -> Self {
        let mut s = self.clear_identifier();
        s.cloud_run = Some(v.into());
        s
    }

    /// Sets the value of [gke_service][Service::gke_service], clearing the
    /// other identifiers.
    pub fn set_gke_service<T: Into<service::GkeService>>(self, v: T) -> Self {
        let mut s = self.clear_identifier();
        s.gke_service = Some(v.into());
        s
    }

    /// Sets the value of [basic_service][Service::basic_service], clearing the
    /// other identifiers.
    pub fn set_basic_service<T: Into<service::BasicService>>(self, v: T) -> Self {
        let mut s = self.clear_identifier();
        s.basic_service = Some(v.into());
        s
    }

    /// Sets the value of [telemetry][Service::telemetry].
    pub fn set_telemetry<T: Into<service::Telemetry>>(mut self, v: T) -> Self {
        self.telemetry = Some(v.into());
        self
    }

    /// Sets or clears the value of [telemetry][Service::telemetry].
    pub fn set_or_clear_telemetry<T: Into<service::Telemetry>>(mut self, v: Option<T>) -> Self {
        self.telemetry = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_labels][Service::user_labels].
    pub fn set_user_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.user_labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Defines additional types related to [Service].
pub mod service {
    /// Use a custom service to designate a service that you want to monitor
    /// when none of the other service types (like App Engine, Cloud Run, or
    /// a GKE type) matches your intended service.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Custom {}

    impl Custom {
        pub fn new() -> Self {
            std::default::Default::default()
        }
    }

    /// App Engine service.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct AppEngine {
        /// The ID of the App Engine module underlying this service.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub module_id: String,
    }

    impl AppEngine {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [module_id][AppEngine::module_id].
        pub fn set_module_id<T: Into<String>>(mut self, v: T) -> Self {
            self.module_id = v.into();
            self
        }
    }

    /// Cloud Endpoints service.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct CloudEndpoints {
        /// The name of the Cloud Endpoints service underlying this service.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub service: String,
    }

    impl CloudEndpoints {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [service][CloudEndpoints::service].
        pub fn set_service<T: Into<String>>(mut self, v: T) -> Self {
            self.service = v.into();
            self
        }
    }

    /// Cloud Run service.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct CloudRun {
        /// The name of the Cloud Run service.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub service_name: String,

        /// The location the service is run.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub location: String,
    }

    impl CloudRun {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [service_name][CloudRun::service_name].
        pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
            self.service_name = v.into();
            self
        }

        /// Sets the value of [location][CloudRun::location].
        pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
            self.location = v.into();
            self
        }
    }

    /// GKE Service. The "service" here represents a
    /// [Kubernetes service object](https://kubernetes.io/docs/concepts/services-networking/service).
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct GkeService {
        /// The project this resource lives in.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub project_id: String,

        /// The location of the parent cluster.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub location: String,

        /// The name of the parent cluster.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub cluster_name: String,

        /// The name of the parent namespace.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub namespace_name: String,

        /// The name of this service.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub service_name: String,
    }

    impl GkeService {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [project_id][GkeService::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.project_id = v.into();
            self
        }

        /// Sets the value of [location][GkeService::location].
        pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
            self.location = v.into();
            self
        }

        /// Sets the value of [cluster_name][GkeService::cluster_name].
        pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
            self.cluster_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][GkeService::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.namespace_name = v.into();
            self
        }

        /// Sets the value of [service_name][GkeService::service_name].
        pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
            self.service_name = v.into();
            self
        }
    }

    /// A well-known service type, defined by its service type and service
    /// labels.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct BasicService {
        /// The type of service that this basic service defines, e.g.
        /// APP_ENGINE service type.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub service_type: String,

        /// Labels that specify the resource that emits the monitoring data
        /// which is used for SLO reporting of this `Service`.
        #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
        pub service_labels: std::collections::HashMap<String, String>,
    }

    impl BasicService {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [service_type][BasicService::service_type].
        pub fn set_service_type<T: Into<String>>(mut self, v: T) -> Self {
            self.service_type = v.into();
            self
        }

        /// Sets the value of [service_labels][BasicService::service_labels].
        pub fn set_service_labels<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.service_labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }
    }

    /// Configuration for how to query telemetry on a Service.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Telemetry {
        /// The full name of the resource that defines this service.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub resource_name: String,
    }

    impl Telemetry {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [resource_name][Telemetry::resource_name].
        pub fn set_resource_name<T: Into<String>>(mut self, v: T) -> Self {
            self.resource_name = v.into();
            self
        }
    }
}

/// A Service-Level Objective (SLO) describes a level of desired good service.
/// It consists of a service-level indicator (SLI), a performance goal, and a
/// period over which the objective is to be evaluated against that goal.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceLevelObjective {
    /// Identifier. Resource name for this `ServiceLevelObjective`. The format
    /// is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]/serviceLevelObjectives/[SLO_NAME]
    /// ```
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Name used for UI elements listing this SLO.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    /// The definition of good service, used to measure and calculate the
    /// quality of the `Service`'s performance with respect to a single aspect
    /// of service quality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_level_indicator: Option<ServiceLevelIndicator>,

    /// The fraction of service that must be good in order for this objective
    /// to be met. `0 < goal <= 0.9999`.
    pub goal: f64,

    /// A rolling time period, semantically "in the past `<rolling_period>`".
    /// Must be an integer multiple of 1 day no larger than 30 days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling_period: Option<wkt::Duration>,

    /// Labels which have been used to annotate the service-level objective.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub user_labels: std::collections::HashMap<String, String>,
}

impl ServiceLevelObjective {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][ServiceLevelObjective::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][ServiceLevelObjective::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [service_level_indicator][ServiceLevelObjective::service_level_indicator].
    pub fn set_service_level_indicator<T: Into<ServiceLevelIndicator>>(mut self, v: T) -> Self {
        self.service_level_indicator = Some(v.into());
        self
    }

    /// Sets or clears the value of [service_level_indicator][ServiceLevelObjective::service_level_indicator].
    pub fn set_or_clear_service_level_indicator<T: Into<ServiceLevelIndicator>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.service_level_indicator = v.map(|x| x.into());
        self
    }

    /// Sets the value of [goal][ServiceLevelObjective::goal].
    pub fn set_goal<T: Into<f64>>(mut self, v: T) -> Self {
        self.goal = v.into();
        self
    }

    /// Sets the value of [rolling_period][ServiceLevelObjective::rolling_period].
    pub fn set_rolling_period<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.rolling_period = Some(v.into());
        self
    }

    /// Sets or clears the value of [rolling_period][ServiceLevelObjective::rolling_period].
    pub fn set_or_clear_rolling_period<T: Into<wkt::Duration>>(mut self, v: Option<T>) -> Self {
        self.rolling_period = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_labels][ServiceLevelObjective::user_labels].
    pub fn set_user_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.user_labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Defines additional types related to [ServiceLevelObjective].
pub mod service_level_objective {
    /// `ServiceLevelObjective.View` determines what form of
    /// `ServiceLevelObjective` is returned from `GetServiceLevelObjective`,
    /// `ListServiceLevelObjectives`, and `ListServiceLevelObjectiveVersions`
    /// RPCs.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because Google Cloud may
    /// add additional enum variants at any time. Values sent by the service
    /// and not known to this version of the library are preserved in the
    /// `UnknownValue` variant, and sent back unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum View {
        /// Same as FULL.
        Unspecified,
        /// Return the embedded `ServiceLevelIndicator` in the form in which it
        /// was defined. If it was defined using a `BasicSli`, return that
        /// `BasicSli`.
        Full,
        /// For `ServiceLevelIndicator`s using `BasicSli` articulation, instead
        /// return the `ServiceLevelIndicator` with its mode of computation
        /// fully spelled out as a `RequestBasedSli`. For
        /// `ServiceLevelIndicator`s using `RequestBasedSli` or
        /// `WindowsBasedSli`, return the `ServiceLevelIndicator` as it was
        /// provided.
        Explicit,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [View::value] or
        /// [View::name].
        UnknownValue(view::UnknownValue),
    }

    #[doc(hidden)]
    pub mod view {
        #[derive(Clone, Debug, PartialEq)]
        pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
    }

    impl View {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the string representation of enums.
        pub fn value(&self) -> Option<i32> {
            match self {
                Self::Unspecified => Some(0),
                Self::Full => Some(2),
                Self::Explicit => Some(1),
                Self::UnknownValue(u) => u.0.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the integer representation of enums.
        pub fn name(&self) -> Option<&str> {
            match self {
                Self::Unspecified => Some("VIEW_UNSPECIFIED"),
                Self::Full => Some("FULL"),
                Self::Explicit => Some("EXPLICIT"),
                Self::UnknownValue(u) => u.0.name(),
            }
        }

        pub(crate) fn is_default(&self) -> bool {
            matches!(self, Self::Unspecified)
        }
    }

    impl std::default::Default for View {
        fn default() -> Self {
            Self::from(0)
        }
    }

    impl std::fmt::Display for View {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            wkt::internal::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for View {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Unspecified,
                1 => Self::Explicit,
                2 => Self::Full,
                _ => Self::UnknownValue(view::UnknownValue(
                    wkt::internal::UnknownEnumValue::Integer(value),
                )),
            }
        }
    }

    impl std::convert::From<&str> for View {
        fn from(value: &str) -> Self {
            match value {
                "VIEW_UNSPECIFIED" => Self::Unspecified,
                "FULL" => Self::Full,
                "EXPLICIT" => Self::Explicit,
                _ => Self::UnknownValue(view::UnknownValue(
                    wkt::internal::UnknownEnumValue::String(value.to_string()),
                )),
            }
        }
    }

    impl serde::ser::Serialize for View {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            match self {
                Self::Unspecified => serializer.serialize_str("VIEW_UNSPECIFIED"),
                Self::Full => serializer.serialize_str("FULL"),
                Self::Explicit => serializer.serialize_str("EXPLICIT"),
                Self::UnknownValue(u) => serde::ser::Serialize::serialize(&u.0, serializer),
            }
        }
    }

    impl<'de> serde::de::Deserialize<'de> for View {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(wkt::internal::EnumVisitor::<View>::new(
                ".google.monitoring.v3.ServiceLevelObjective.View",
            ))
        }
    }
}

/// A Service-Level Indicator (SLI) describes the "performance" of a service.
///
/// At most one of `basic_sli`, `request_based`, or `windows_based` is set.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceLevelIndicator {
    /// Basic SLI on a well-known service type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_sli: Option<BasicSli>,

    /// Request-based SLIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_based: Option<RequestBasedSli>,

    /// Windows-based SLIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_based: Option<WindowsBasedSli>,
}

impl ServiceLevelIndicator {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [basic_sli][ServiceLevelIndicator::basic_sli],
    /// clearing the other indicator types.
    pub fn set_basic_sli<T: Into<BasicSli>>(mut self, v: T) -> Self {
        self.basic_sli = Some(v.into());
        self.request_based = None;
        self.windows_based = None;
        self
    }

    /// Sets the value of [request_based][ServiceLevelIndicator::request_based],
    /// clearing the other indicator types.
    pub fn set_request_based<T: Into<RequestBasedSli>>(mut self, v: T) -> Self {
        self.request_based = Some(v.into());
        self.basic_sli = None;
        self.windows_based = None;
        self
    }

    /// Sets the value of [windows_based][ServiceLevelIndicator::windows_based],
    /// clearing the other indicator types.
    pub fn set_windows_based<T: Into<WindowsBasedSli>>(mut self, v: T) -> Self {
        self.windows_based = Some(v.into());
        self.basic_sli = None;
        self.request_based = None;
        self
    }
}

/// An SLI measuring performance on a well-known service type.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BasicSli {
    /// OPTIONAL: The set of RPCs to which this SLI is relevant.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub method: Vec<String>,

    /// OPTIONAL: The set of locations to which this SLI is relevant.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<String>,

    /// OPTIONAL: The set of API versions to which this SLI is relevant.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub version: Vec<String>,

    /// Good service is defined to be the count of requests made to this
    /// service that return successfully.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<basic_sli::AvailabilityCriteria>,

    /// Good service is defined to be the count of requests made to this
    /// service that are fast enough with respect to `latency.threshold`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency: Option<basic_sli::LatencyCriteria>,
}

impl BasicSli {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [method][BasicSli::method].
    pub fn set_method<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.method = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [location][BasicSli::location].
    pub fn set_location<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.location = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [version][BasicSli::version].
    pub fn set_version<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.version = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [availability][BasicSli::availability], clearing
    /// [latency][BasicSli::latency].
    pub fn set_availability<T: Into<basic_sli::AvailabilityCriteria>>(mut self, v: T) -> Self {
        self.availability = Some(v.into());
        self.latency = None;
        self
    }

    /// Sets the value of [latency][BasicSli::latency], clearing
    /// [availability][BasicSli::availability].
    pub fn set_latency<T: Into<basic_sli::LatencyCriteria>>(mut self, v: T) -> Self {
        self.latency = Some(v.into());
        self.availability = None;
        self
    }
}

/// Defines additional types related to [BasicSli].
pub mod basic_sli {
    /// Future parameters for the availability SLI.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct AvailabilityCriteria {}

    impl AvailabilityCriteria {
        pub fn new() -> Self {
            std::default::Default::default()
        }
    }

    /// Parameters for a latency threshold SLI.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct LatencyCriteria {
        /// Good service is defined to be the count of requests made to this
        /// service that return in no more than `threshold`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub threshold: Option<wkt::Duration>,
    }

    impl LatencyCriteria {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [threshold][LatencyCriteria::threshold].
        pub fn set_threshold<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
            self.threshold = Some(v.into());
            self
        }
    }
}

/// Service Level Indicators for which atomic units of service are counted
/// directly.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RequestBasedSli {
    /// `good_total_ratio` is used when the ratio of `good_service` to
    /// `total_service` is computed from two `TimeSeries`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_total_ratio: Option<TimeSeriesRatio>,

    /// `distribution_cut` is used when `good_service` is a count of values
    /// aggregated in a `Distribution` that fall into a good range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_cut: Option<DistributionCut>,
}

impl RequestBasedSli {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [good_total_ratio][RequestBasedSli::good_total_ratio],
    /// clearing [distribution_cut][RequestBasedSli::distribution_cut].
    pub fn set_good_total_ratio<T: Into<TimeSeriesRatio>>(mut self, v: T) -> Self {
        self.good_total_ratio = Some(v.into());
        self.distribution_cut = None;
        self
    }

    /// Sets the value of [distribution_cut][RequestBasedSli::distribution_cut],
    /// clearing [good_total_ratio][RequestBasedSli::good_total_ratio].
    pub fn set_distribution_cut<T: Into<DistributionCut>>(mut self, v: T) -> Self {
        self.distribution_cut = Some(v.into());
        self.good_total_ratio = None;
        self
    }
}

/// A `TimeSeriesRatio` specifies two `TimeSeries` to use for computing the
/// `good_service / total_service` ratio.
///
/// The specified `TimeSeries` must have `ValueType = DOUBLE` or
/// `ValueType = INT64` and must have `MetricKind = DELTA` or
/// `MetricKind = CUMULATIVE`. Exactly two of `good`, `bad`, and `total` must
/// be set.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TimeSeriesRatio {
    /// A monitoring filter specifying a `TimeSeries` quantifying good service
    /// provided.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub good_service_filter: String,

    /// A monitoring filter specifying a `TimeSeries` quantifying bad service,
    /// either demanded service that was not provided or demanded service that
    /// was of inadequate quality.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bad_service_filter: String,

    /// A monitoring filter specifying a `TimeSeries` quantifying total
    /// demanded service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub total_service_filter: String,
}

impl TimeSeriesRatio {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [good_service_filter][TimeSeriesRatio::good_service_filter].
    pub fn set_good_service_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.good_service_filter = v.into();
        self
    }

    /// Sets the value of [bad_service_filter][TimeSeriesRatio::bad_service_filter].
    pub fn set_bad_service_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.bad_service_filter = v.into();
        self
    }

    /// Sets the value of [total_service_filter][TimeSeriesRatio::total_service_filter].
    pub fn set_total_service_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.total_service_filter = v.into();
        self
    }
}

/// A `DistributionCut` defines a `TimeSeries` and thresholds used for
/// measuring good service and total service.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DistributionCut {
    /// A monitoring filter specifying a `TimeSeries` aggregating values.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub distribution_filter: String,

    /// Range of values considered "good." For a one-sided range, set one bound
    /// to an infinite value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

impl DistributionCut {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [distribution_filter][DistributionCut::distribution_filter].
    pub fn set_distribution_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.distribution_filter = v.into();
        self
    }

    /// Sets the value of [range][DistributionCut::range].
    pub fn set_range<T: Into<Range>>(mut self, v: T) -> Self {
        self.range = Some(v.into());
        self
    }
}

/// Range of numerical values within `min` and `max`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Range {
    /// Range minimum.
    pub min: f64,

    /// Range maximum.
    pub max: f64,
}

impl Range {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [min][Range::min].
    pub fn set_min<T: Into<f64>>(mut self, v: T) -> Self {
        self.min = v.into();
        self
    }

    /// Sets the value of [max][Range::max].
    pub fn set_max<T: Into<f64>>(mut self, v: T) -> Self {
        self.max = v.into();
        self
    }
}

/// A `WindowsBasedSli` defines `good_service` as the count of time windows
/// for which the provided service was of good quality.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WindowsBasedSli {
    /// A monitoring filter specifying a `TimeSeries` with `ValueType = BOOL`.
    /// The window is good if any `true` values appear in the window.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub good_bad_metric_filter: String,

    /// Duration over which window quality is evaluated. Must be an integer
    /// fraction of a day and at least `60s`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_period: Option<wkt::Duration>,
}

impl WindowsBasedSli {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [good_bad_metric_filter][WindowsBasedSli::good_bad_metric_filter].
    pub fn set_good_bad_metric_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.good_bad_metric_filter = v.into();
        self
    }

    /// Sets the value of [window_period][WindowsBasedSli::window_period].
    pub fn set_window_period<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.window_period = Some(v.into());
        self
    }
}

/// The `CreateService` request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct CreateServiceRequest {
    /// Required. Resource
    /// [name](https://cloud.google.com/monitoring/api/v3#project_name) of the
    /// parent Metrics Scope. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    pub parent: String,

    /// Optional. The Service id to use for this Service. If omitted, an id
    /// will be generated instead.
    #[serde(alias = "service_id")]
    pub service_id: String,

    /// Required. The `Service` to create.
    pub service: Option<Service>,
}

impl CreateServiceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][CreateServiceRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [service_id][CreateServiceRequest::service_id].
    pub fn set_service_id<T: Into<String>>(mut self, v: T) -> Self {
        self.service_id = v.into();
        self
    }

    /// Sets the value of [service][CreateServiceRequest::service].
    pub fn set_service<T: Into<Service>>(mut self, v: T) -> Self {
        self.service = Some(v.into());
        self
    }

    /// Sets or clears the value of [service][CreateServiceRequest::service].
    pub fn set_or_clear_service<T: Into<Service>>(mut self, v: Option<T>) -> Self {
        self.service = v.map(|x| x.into());
        self
    }
}

impl gax::request::RequestMessage for CreateServiceRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["parent", "service"];
}

/// The `GetService` request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct GetServiceRequest {
    /// Required. Resource name of the `Service`. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]
    /// ```
    pub name: String,
}

impl GetServiceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GetServiceRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl gax::request::RequestMessage for GetServiceRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];
}

/// The `ListServices` request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct ListServicesRequest {
    /// Required. Resource name of the parent containing the listed services,
    /// either a [project](https://cloud.google.com/monitoring/api/v3#project_name)
    /// or a Monitoring Metrics Scope.
    pub parent: String,

    /// A filter specifying what `Service`s to return.
    pub filter: String,

    /// A non-negative number that is the maximum number of results to return.
    /// When 0, use default page size.
    #[serde(alias = "page_size")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken`
    /// value returned by a previous call to this method.
    #[serde(alias = "page_token")]
    pub page_token: String,
}

impl ListServicesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][ListServicesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][ListServicesRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
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
}

impl gax::request::RequestMessage for ListServicesRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["parent"];
}

impl gax::paginator::internal::PageableRequest for ListServicesRequest {
    fn set_page_token<T: Into<String>>(&mut self, token: T) {
        self.page_token = token.into();
    }
    fn page_token(&self) -> &str {
        &self.page_token
    }
}

/// The `ListServices` response.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListServicesResponse {
    /// The `Service`s matching the specified filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,

    /// If there are more results than have been returned, then this field is
    /// set to a non-empty value. To see the additional results, use that
    /// value as `page_token` in the next call to this method.
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
        V: Into<Service>,
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
    type PageItem = Service;

    fn items(self) -> Vec<Self::PageItem> {
        self.services
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// The `UpdateService` request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct UpdateServiceRequest {
    /// Required. The `Service` to draw updates from.
    /// The given `name` specifies the resource to update.
    pub service: Option<Service>,

    /// A set of field paths defining which fields to use for the update.
    #[serde(alias = "update_mask")]
    pub update_mask: Option<wkt::FieldMask>,
}

impl UpdateServiceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service][UpdateServiceRequest::service].
    pub fn set_service<T: Into<Service>>(mut self, v: T) -> Self {
        self.service = Some(v.into());
        self
    }

    /// Sets or clears the value of [service][UpdateServiceRequest::service].
    pub fn set_or_clear_service<T: Into<Service>>(mut self, v: Option<T>) -> Self {
        self.service = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][UpdateServiceRequest::update_mask].
    pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][UpdateServiceRequest::update_mask].
    pub fn set_or_clear_update_mask<T: Into<wkt::FieldMask>>(mut self, v: Option<T>) -> Self {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

impl gax::request::RequestMessage for UpdateServiceRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["service"];
}

/// The `DeleteService` request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct DeleteServiceRequest {
    /// Required. Resource name of the `Service` to delete. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]
    /// ```
    pub name: String,
}

impl DeleteServiceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][DeleteServiceRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl gax::request::RequestMessage for DeleteServiceRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];
}

/// The `CreateServiceLevelObjective` request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct CreateServiceLevelObjectiveRequest {
    /// Required. Resource name of the parent `Service`. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]
    /// ```
    pub parent: String,

    /// Optional. The ServiceLevelObjective id to use for this
    /// ServiceLevelObjective. If omitted, an id will be generated instead.
    #[serde(alias = "service_level_objective_id")]
    pub service_level_objective_id: String,

    /// Required. The `ServiceLevelObjective` to create.
    #[serde(alias = "service_level_objective")]
    pub service_level_objective: Option<ServiceLevelObjective>,
}

impl CreateServiceLevelObjectiveRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][CreateServiceLevelObjectiveRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [service_level_objective_id][CreateServiceLevelObjectiveRequest::service_level_objective_id].
    pub fn set_service_level_objective_id<T: Into<String>>(mut self, v: T) -> Self {
        self.service_level_objective_id = v.into();
        self
    }

    /// Sets the value of [service_level_objective][CreateServiceLevelObjectiveRequest::service_level_objective].
    pub fn set_service_level_objective<T: Into<ServiceLevelObjective>>(mut self, v: T) -> Self {
        self.service_level_objective = Some(v.into());
        self
    }

    /// Sets or clears the value of [service_level_objective][CreateServiceLevelObjectiveRequest::service_level_objective].
    pub fn set_or_clear_service_level_objective<T: Into<ServiceLevelObjective>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.service_level_objective = v.map(|x| x.into());
        self
    }
}

impl gax::request::RequestMessage for CreateServiceLevelObjectiveRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["parent", "service_level_objective"];
}

/// The `GetServiceLevelObjective` request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct GetServiceLevelObjectiveRequest {
    /// Required. Resource name of the `ServiceLevelObjective` to get. The
    /// format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]/serviceLevelObjectives/[SLO_NAME]
    /// ```
    pub name: String,

    /// View of the `ServiceLevelObjective` to return. If `DEFAULT`, return the
    /// `ServiceLevelObjective` as originally defined. If `EXPLICIT` and the
    /// `ServiceLevelObjective` is defined in terms of a `BasicSli`, replace
    /// the `BasicSli` with a `RequestBasedSli` spelling out how the SLI is
    /// computed.
    #[serde(skip_serializing_if = "service_level_objective::View::is_default")]
    pub view: service_level_objective::View,
}

impl GetServiceLevelObjectiveRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GetServiceLevelObjectiveRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [view][GetServiceLevelObjectiveRequest::view].
    pub fn set_view<T: Into<service_level_objective::View>>(mut self, v: T) -> Self {
        self.view = v.into();
        self
    }
}

impl gax::request::RequestMessage for GetServiceLevelObjectiveRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];
}

/// The `ListServiceLevelObjectives` request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct ListServiceLevelObjectivesRequest {
    /// Required. Resource name of the parent containing the listed SLOs,
    /// either a project or a Monitoring Metrics Scope.
    pub parent: String,

    /// A filter specifying what `ServiceLevelObjective`s to return.
    pub filter: String,

    /// A non-negative number that is the maximum number of results to return.
    /// When 0, use default page size.
    #[serde(alias = "page_size")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken`
    /// value returned by a previous call to this method.
    #[serde(alias = "page_token")]
    pub page_token: String,

    /// View of the `ServiceLevelObjective`s to return.
    #[serde(skip_serializing_if = "service_level_objective::View::is_default")]
    pub view: service_level_objective::View,
}

impl ListServiceLevelObjectivesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][ListServiceLevelObjectivesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][ListServiceLevelObjectivesRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][ListServiceLevelObjectivesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListServiceLevelObjectivesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [view][ListServiceLevelObjectivesRequest::view].
    pub fn set_view<T: Into<service_level_objective::View>>(mut self, v: T) -> Self {
        self.view = v.into();
        self
    }
}

impl gax::request::RequestMessage for ListServiceLevelObjectivesRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["parent"];
}

impl gax::paginator::internal::PageableRequest for ListServiceLevelObjectivesRequest {
    fn set_page_token<T: Into<String>>(&mut self, token: T) {
        self.page_token = token.into();
    }
    fn page_token(&self) -> &str {
        &self.page_token
    }
}

/// The `ListServiceLevelObjectives` response.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListServiceLevelObjectivesResponse {
    /// The `ServiceLevelObjective`s matching the specified filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service_level_objectives: Vec<ServiceLevelObjective>,

    /// If there are more results than have been returned, then this field is
    /// set to a non-empty value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

impl ListServiceLevelObjectivesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_level_objectives][ListServiceLevelObjectivesResponse::service_level_objectives].
    pub fn set_service_level_objectives<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ServiceLevelObjective>,
    {
        self.service_level_objectives = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListServiceLevelObjectivesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListServiceLevelObjectivesResponse {
    type PageItem = ServiceLevelObjective;

    fn items(self) -> Vec<Self::PageItem> {
        self.service_level_objectives
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// The `UpdateServiceLevelObjective` request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct UpdateServiceLevelObjectiveRequest {
    /// Required. The `ServiceLevelObjective` to draw updates from.
    /// The given `name` specifies the resource to update.
    #[serde(alias = "service_level_objective")]
    pub service_level_objective: Option<ServiceLevelObjective>,

    /// A set of field paths defining which fields to use for the update.
    #[serde(alias = "update_mask")]
    pub update_mask: Option<wkt::FieldMask>,
}

impl UpdateServiceLevelObjectiveRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_level_objective][UpdateServiceLevelObjectiveRequest::service_level_objective].
    pub fn set_service_level_objective<T: Into<ServiceLevelObjective>>(mut self, v: T) -> Self {
        self.service_level_objective = Some(v.into());
        self
    }

    /// Sets or clears the value of [service_level_objective][UpdateServiceLevelObjectiveRequest::service_level_objective].
    pub fn set_or_clear_service_level_objective<T: Into<ServiceLevelObjective>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.service_level_objective = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][UpdateServiceLevelObjectiveRequest::update_mask].
    pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][UpdateServiceLevelObjectiveRequest::update_mask].
    pub fn set_or_clear_update_mask<T: Into<wkt::FieldMask>>(mut self, v: Option<T>) -> Self {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

impl gax::request::RequestMessage for UpdateServiceLevelObjectiveRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["service_level_objective"];
}

/// The `DeleteServiceLevelObjective` request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct DeleteServiceLevelObjectiveRequest {
    /// Required. Resource name of the `ServiceLevelObjective` to delete. The
    /// format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]/serviceLevelObjectives/[SLO_NAME]
    /// ```
    pub name: String,
}

impl DeleteServiceLevelObjectiveRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][DeleteServiceLevelObjectiveRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl gax::request::RequestMessage for DeleteServiceLevelObjectiveRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];
}
