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

/// A Connectivity Test for a network reachability analysis.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConnectivityTest {
    /// Identifier. Unique name of the resource using the form:
    ///   `projects/{project_id}/locations/global/connectivityTests/{test_id}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The user-supplied description of the Connectivity Test.
    /// Maximum of 512 characters.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Required. Source specification of the Connectivity Test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Endpoint>,

    /// Required. Destination specification of the Connectivity Test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Endpoint>,

    /// IP Protocol of the test. When not provided, "TCP" is assumed.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub protocol: String,

    /// Other projects that may be relevant for reachability analysis.
    /// This is applicable to scenarios where a test can cross project
    /// boundaries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_projects: Vec<String>,

    /// Output only. The display name of a Connectivity Test.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    /// Resource labels to represent user-provided metadata.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<String, String>,

    /// Output only. The time the test was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<wkt::Timestamp>,

    /// Output only. The time the test's configuration was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<wkt::Timestamp>,

    /// Output only. The reachability details of this test from the latest
    /// run. The details are updated when creating a new test, updating an
    /// existing test, or triggering a one-time rerun of an existing test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reachability_details: Option<ReachabilityDetails>,

    /// Whether the analysis should skip firewall checking. Default value is
    /// false.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bypass_firewall_checks: bool,

    /// Whether run analysis for the return path from destination to source.
    /// Default value is false.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub round_trip: bool,
}

impl ConnectivityTest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][ConnectivityTest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][ConnectivityTest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [source][ConnectivityTest::source].
    pub fn set_source<T: Into<Endpoint>>(mut self, v: T) -> Self {
        self.source = Some(v.into());
        self
    }

    /// Sets or clears the value of [source][ConnectivityTest::source].
    pub fn set_or_clear_source<T: Into<Endpoint>>(mut self, v: Option<T>) -> Self {
        self.source = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination][ConnectivityTest::destination].
    pub fn set_destination<T: Into<Endpoint>>(mut self, v: T) -> Self {
        self.destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [destination][ConnectivityTest::destination].
    pub fn set_or_clear_destination<T: Into<Endpoint>>(mut self, v: Option<T>) -> Self {
        self.destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of [protocol][ConnectivityTest::protocol].
    pub fn set_protocol<T: Into<String>>(mut self, v: T) -> Self {
        self.protocol = v.into();
        self
    }

    /// Sets the value of [related_projects][ConnectivityTest::related_projects].
    pub fn set_related_projects<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.related_projects = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [display_name][ConnectivityTest::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [labels][ConnectivityTest::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [create_time][ConnectivityTest::create_time].
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [update_time][ConnectivityTest::update_time].
    pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [reachability_details][ConnectivityTest::reachability_details].
    pub fn set_reachability_details<T: Into<ReachabilityDetails>>(mut self, v: T) -> Self {
        self.reachability_details = Some(v.into());
        self
    }

    /// Sets the value of [bypass_firewall_checks][ConnectivityTest::bypass_firewall_checks].
    pub fn set_bypass_firewall_checks<T: Into<bool>>(mut self, v: T) -> Self {
        self.bypass_firewall_checks = v.into();
        self
    }

    /// Sets the value of [round_trip][ConnectivityTest::round_trip].
    pub fn set_round_trip<T: Into<bool>>(mut self, v: T) -> Self {
        self.round_trip = v.into();
        self
    }
}

/// Source or destination of the Connectivity Test.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Endpoint {
    /// The IP address of the endpoint, which can be an external or internal
    /// IP.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip_address: String,

    /// The IP protocol port of the endpoint.
    /// Only applicable when protocol is TCP or UDP.
    #[serde(skip_serializing_if = "is_zero")]
    pub port: i32,

    /// A Compute Engine instance URI.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub instance: String,

    /// A forwarding rule and its corresponding IP address represent the
    /// frontend configuration of a Google Cloud load balancer.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub forwarding_rule: String,

    /// A cluster URI for [Google Kubernetes Engine cluster control
    /// plane](https://cloud.google.com/kubernetes-engine/docs/concepts/cluster-architecture).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gke_master_cluster: String,

    /// A [Cloud SQL](https://cloud.google.com/sql) instance URI.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cloud_sql_instance: String,

    /// A VPC network URI.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub network: String,

    /// Project ID where the endpoint is located.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_id: String,
}

fn is_zero(v: &i32) -> bool {
    *v == 0
}

impl Endpoint {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ip_address][Endpoint::ip_address].
    pub fn set_ip_address<T: Into<String>>(mut self, v: T) -> Self {
        self.ip_address = v.into();
        self
    }

    /// Sets the value of [port][Endpoint::port].
    pub fn set_port<T: Into<i32>>(mut self, v: T) -> Self {
        self.port = v.into();
        self
    }

    /// Sets the value of [instance][Endpoint::instance].
    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = v.into();
        self
    }

    /// Sets the value of [forwarding_rule][Endpoint::forwarding_rule].
    pub fn set_forwarding_rule<T: Into<String>>(mut self, v: T) -> Self {
        self.forwarding_rule = v.into();
        self
    }

    /// Sets the value of [gke_master_cluster][Endpoint::gke_master_cluster].
    pub fn set_gke_master_cluster<T: Into<String>>(mut self, v: T) -> Self {
        self.gke_master_cluster = v.into();
        self
    }

    /// Sets the value of [cloud_sql_instance][Endpoint::cloud_sql_instance].
    pub fn set_cloud_sql_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.cloud_sql_instance = v.into();
        self
    }

    /// Sets the value of [network][Endpoint::network].
    pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
        self.network = v.into();
        self
    }

    /// Sets the value of [project_id][Endpoint::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }
}

/// Results of the configuration analysis from the last run of the test.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReachabilityDetails {
    /// The overall result of the test's configuration analysis.
    #[serde(skip_serializing_if = "reachability_details::Result::is_default")]
    pub result: reachability_details::Result,

    /// The time of the configuration analysis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_time: Option<wkt::Timestamp>,

    /// The details of a failure or a cancellation of reachability analysis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<gax::error::rpc::Status>,
}

impl ReachabilityDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [result][ReachabilityDetails::result].
    pub fn set_result<T: Into<reachability_details::Result>>(mut self, v: T) -> Self {
        self.result = v.into();
        self
    }

    /// Sets the value of [verify_time][ReachabilityDetails::verify_time].
    pub fn set_verify_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.verify_time = Some(v.into());
        self
    }

    /// Sets the value of [error][ReachabilityDetails::error].
    pub fn set_error<T: Into<gax::error::rpc::Status>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self
    }
}

/// Defines additional types related to [ReachabilityDetails].
pub mod reachability_details {
    /// The overall result of the test's configuration analysis.
    ///
    /// This enum is defined as `#[non_exhaustive]` because Google Cloud may
    /// add additional enum variants at any time. Values sent by the service
    /// and not known to this version of the library are preserved in the
    /// `UnknownValue` variant, and sent back unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Result {
        /// No result was specified.
        Unspecified,
        /// Possible scenarios are:
        ///
        /// * The configuration analysis determined that a packet originating
        ///   from the source is expected to reach the destination.
        /// * The analysis didn't complete because the user lacks permission
        ///   for some of the resources in the trace. However, at the time the
        ///   user's permission became insufficient, the trace had been
        ///   successful.
        Reachable,
        /// A packet originating from the source is expected to be dropped
        /// before reaching the destination.
        Unreachable,
        /// The source and destination endpoints do not uniquely identify
        /// the test location in the network, and the reachability result
        /// contains multiple traces. For some traces, a packet could be
        /// delivered, and for others, it would not be.
        Ambiguous,
        /// The configuration analysis did not complete. Possible reasons
        /// are a lack of permissions on some of the resources, or an
        /// unsupported configuration.
        Undetermined,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Result::value] or
        /// [Result::name].
        UnknownValue(result::UnknownValue),
    }

    #[doc(hidden)]
    pub mod result {
        #[derive(Clone, Debug, PartialEq)]
        pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
    }

    impl Result {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the string representation of enums.
        pub fn value(&self) -> Option<i32> {
            match self {
                Self::Unspecified => Some(0),
                Self::Reachable => Some(1),
                Self::Unreachable => Some(2),
                Self::Ambiguous => Some(4),
                Self::Undetermined => Some(5),
                Self::UnknownValue(u) => u.0.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the integer representation of enums.
        pub fn name(&self) -> Option<&str> {
            match self {
                Self::Unspecified => Some("RESULT_UNSPECIFIED"),
                Self::Reachable => Some("REACHABLE"),
                Self::Unreachable => Some("UNREACHABLE"),
                Self::Ambiguous => Some("AMBIGUOUS"),
                Self::Undetermined => Some("UNDETERMINED"),
                Self::UnknownValue(u) => u.0.name(),
            }
        }

        pub(crate) fn is_default(&self) -> bool {
            matches!(self, Self::Unspecified)
        }
    }

    impl std::default::Default for Result {
        fn default() -> Self {
            Self::from(0)
        }
    }

    impl std::fmt::Display for Result {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            wkt::internal::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for Result {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Unspecified,
                1 => Self::Reachable,
                2 => Self::Unreachable,
                4 => Self::Ambiguous,
                5 => Self::Undetermined,
                _ => Self::UnknownValue(result::UnknownValue(
                    wkt::internal::UnknownEnumValue::Integer(value),
                )),
            }
        }
    }

    impl std::convert::From<&str> for Result {
        fn from(value: &str) -> Self {
            match value {
                "RESULT_UNSPECIFIED" => Self::Unspecified,
                "REACHABLE" => Self::Reachable,
                "UNREACHABLE" => Self::Unreachable,
                "AMBIGUOUS" => Self::Ambiguous,
                "UNDETERMINED" => Self::Undetermined,
                _ => Self::UnknownValue(result::UnknownValue(
                    wkt::internal::UnknownEnumValue::String(value.to_string()),
                )),
            }
        }
    }

    impl serde::ser::Serialize for Result {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            match self {
                Self::UnknownValue(u) => serde::ser::Serialize::serialize(&u.0, serializer),
                known => serializer.serialize_str(known.name().unwrap_or_default()),
            }
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Result {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(wkt::internal::EnumVisitor::<Result>::new(
                ".google.cloud.networkmanagement.v1.ReachabilityDetails.Result",
            ))
        }
    }
}

/// Metadata describing an [Operation][longrunning::model::Operation]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationMetadata {
    /// The time the operation was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<wkt::Timestamp>,

    /// The time the operation finished running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<wkt::Timestamp>,

    /// Target of the operation - for example
    /// projects/project-1/locations/global/connectivityTests/test-1
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target: String,

    /// Name of the verb executed by the operation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub verb: String,

    /// Human-readable status of the operation, if any.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status_detail: String,

    /// Specifies if cancellation was requested for the operation.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub cancel_requested: bool,

    /// API version.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_version: String,
}

impl OperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [create_time][OperationMetadata::create_time].
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [end_time][OperationMetadata::end_time].
    pub fn set_end_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets the value of [target][OperationMetadata::target].
    pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
        self.target = v.into();
        self
    }

    /// Sets the value of [verb][OperationMetadata::verb].
    pub fn set_verb<T: Into<String>>(mut self, v: T) -> Self {
        self.verb = v.into();
        self
    }

    /// Sets the value of [status_detail][OperationMetadata::status_detail].
    pub fn set_status_detail<T: Into<String>>(mut self, v: T) -> Self {
        self.status_detail = v.into();
        self
    }

    /// Sets the value of [cancel_requested][OperationMetadata::cancel_requested].
    pub fn set_cancel_requested<T: Into<bool>>(mut self, v: T) -> Self {
        self.cancel_requested = v.into();
        self
    }

    /// Sets the value of [api_version][OperationMetadata::api_version].
    pub fn set_api_version<T: Into<String>>(mut self, v: T) -> Self {
        self.api_version = v.into();
        self
    }
}

/// Request for the `ListConnectivityTests` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct ListConnectivityTestsRequest {
    /// Required. The parent resource of the Connectivity Tests:
    ///   `projects/{project_id}/locations/global`
    pub parent: String,

    /// Number of `ConnectivityTests` to return.
    #[serde(alias = "page_size")]
    pub page_size: i32,

    /// Page token from an earlier query, as returned in `next_page_token`.
    #[serde(alias = "page_token")]
    pub page_token: String,

    /// Lists the `ConnectivityTests` that match the filter expression. A
    /// filter expression filters the resources listed in the response. The
    /// expression must be of the form `<field> <operator> <value>` where
    /// operators: `<`, `>`,
    /// `<=`,
    /// `>=`,
    /// `!=`, `=`, `:` are supported (colon `:` represents a HAS operator which
    /// is roughly synonymous with equality). \<field\> can refer to a proto or
    /// JSON field, or a synthetic field. Field names can be camelCase or
    /// snake_case.
    pub filter: String,

    /// Field to use to sort the list.
    #[serde(alias = "order_by")]
    pub order_by: String,
}

impl ListConnectivityTestsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][ListConnectivityTestsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListConnectivityTestsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListConnectivityTestsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [filter][ListConnectivityTestsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [order_by][ListConnectivityTestsRequest::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }
}

impl gax::request::RequestMessage for ListConnectivityTestsRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["parent"];
}

impl gax::paginator::internal::PageableRequest for ListConnectivityTestsRequest {
    fn set_page_token<T: Into<String>>(&mut self, token: T) {
        self.page_token = token.into();
    }
    fn page_token(&self) -> &str {
        &self.page_token
    }
}

/// Response for the `ListConnectivityTests` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListConnectivityTestsResponse {
    /// List of Connectivity Tests.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ConnectivityTest>,

    /// Page token to fetch the next set of Connectivity Tests.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,

    /// Locations that could not be reached (when querying all locations with
    /// `-`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreachable: Vec<String>,
}

impl ListConnectivityTestsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resources][ListConnectivityTestsResponse::resources].
    pub fn set_resources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ConnectivityTest>,
    {
        self.resources = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListConnectivityTestsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }

    /// Sets the value of [unreachable][ListConnectivityTestsResponse::unreachable].
    pub fn set_unreachable<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unreachable = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl gax::paginator::PageableResponse for ListConnectivityTestsResponse {
    type PageItem = ConnectivityTest;

    fn items(self) -> Vec<Self::PageItem> {
        self.resources
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request for the `GetConnectivityTest` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct GetConnectivityTestRequest {
    /// Required. `ConnectivityTest` resource name using the form:
    ///   `projects/{project_id}/locations/global/connectivityTests/{test_id}`
    pub name: String,
}

impl GetConnectivityTestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GetConnectivityTestRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl gax::request::RequestMessage for GetConnectivityTestRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];
}

/// Request for the `CreateConnectivityTest` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct CreateConnectivityTestRequest {
    /// Required. The parent resource of the Connectivity Test to create:
    ///   `projects/{project_id}/locations/global`
    pub parent: String,

    /// Required. The logical name of the Connectivity Test in your project
    /// with the following restrictions:
    ///
    /// * Must contain only lowercase letters, numbers, and hyphens.
    /// * Must start with a letter.
    /// * Must be between 1-40 characters.
    /// * Must end with a number or a letter.
    /// * Must be unique within the customer project
    #[serde(alias = "test_id")]
    pub test_id: String,

    /// Required. A `ConnectivityTest` resource
    pub resource: Option<ConnectivityTest>,
}

impl CreateConnectivityTestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][CreateConnectivityTestRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [test_id][CreateConnectivityTestRequest::test_id].
    pub fn set_test_id<T: Into<String>>(mut self, v: T) -> Self {
        self.test_id = v.into();
        self
    }

    /// Sets the value of [resource][CreateConnectivityTestRequest::resource].
    pub fn set_resource<T: Into<ConnectivityTest>>(mut self, v: T) -> Self {
        self.resource = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource][CreateConnectivityTestRequest::resource].
    pub fn set_or_clear_resource<T: Into<ConnectivityTest>>(mut self, v: Option<T>) -> Self {
        self.resource = v.map(|x| x.into());
        self
    }
}

impl gax::request::RequestMessage for CreateConnectivityTestRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["parent", "test_id", "resource"];
}

/// Request for the `UpdateConnectivityTest` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct UpdateConnectivityTestRequest {
    /// Required. Mask of fields to update. At least one path must be supplied
    /// in this field.
    #[serde(alias = "update_mask")]
    pub update_mask: Option<wkt::FieldMask>,

    /// Required. Only fields specified in update_mask are updated.
    pub resource: Option<ConnectivityTest>,
}

impl UpdateConnectivityTestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [update_mask][UpdateConnectivityTestRequest::update_mask].
    pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][UpdateConnectivityTestRequest::update_mask].
    pub fn set_or_clear_update_mask<T: Into<wkt::FieldMask>>(mut self, v: Option<T>) -> Self {
        self.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource][UpdateConnectivityTestRequest::resource].
    pub fn set_resource<T: Into<ConnectivityTest>>(mut self, v: T) -> Self {
        self.resource = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource][UpdateConnectivityTestRequest::resource].
    pub fn set_or_clear_resource<T: Into<ConnectivityTest>>(mut self, v: Option<T>) -> Self {
        self.resource = v.map(|x| x.into());
        self
    }
}

impl gax::request::RequestMessage for UpdateConnectivityTestRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["update_mask", "resource"];
}

/// Request for the `RerunConnectivityTest` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct RerunConnectivityTestRequest {
    /// Required. Connectivity Test resource name using the form:
    ///   `projects/{project_id}/locations/global/connectivityTests/{test_id}`
    pub name: String,
}

impl RerunConnectivityTestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][RerunConnectivityTestRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl gax::request::RequestMessage for RerunConnectivityTestRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];
}

/// Request for the `DeleteConnectivityTest` method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct DeleteConnectivityTestRequest {
    /// Required. Connectivity Test resource name using the form:
    ///   `projects/{project_id}/locations/global/connectivityTests/{test_id}`
    pub name: String,
}

impl DeleteConnectivityTestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][DeleteConnectivityTestRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl gax::request::RequestMessage for DeleteConnectivityTestRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::request::RequestMessage;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn connectivity_test_json() -> anyhow::Result<()> {
        let input = json!({
            "name": "projects/p/locations/global/connectivityTests/t1",
            "source": {"ipAddress": "10.0.0.1", "network": "projects/p/global/networks/default"},
            "destination": {"ipAddress": "10.0.0.2", "port": 443},
            "protocol": "TCP",
            "labels": {"team": "net"},
            "reachabilityDetails": {
                "result": "UNREACHABLE",
                "verifyTime": "2024-01-01T00:00:00Z",
            },
            "roundTrip": true,
        });
        let got = serde_json::from_value::<ConnectivityTest>(input.clone())?;
        let want = ConnectivityTest::new()
            .set_name("projects/p/locations/global/connectivityTests/t1")
            .set_source(
                Endpoint::new()
                    .set_ip_address("10.0.0.1")
                    .set_network("projects/p/global/networks/default"),
            )
            .set_destination(Endpoint::new().set_ip_address("10.0.0.2").set_port(443))
            .set_protocol("TCP")
            .set_labels([("team", "net")])
            .set_reachability_details(
                ReachabilityDetails::new()
                    .set_result(reachability_details::Result::Unreachable)
                    .set_verify_time(wkt::Timestamp::new(1704067200, 0)?),
            )
            .set_round_trip(true);
        assert_eq!(got, want);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn result_values() -> anyhow::Result<()> {
        let got = serde_json::from_value::<reachability_details::Result>(json!(4))?;
        assert_eq!(got, reachability_details::Result::Ambiguous);
        assert_eq!(got.to_string(), "AMBIGUOUS");
        let got = serde_json::from_value::<reachability_details::Result>(json!(3))?;
        assert_eq!(got.value(), Some(3));
        assert_eq!(got.name(), None);
        assert_eq!(serde_json::to_value(&got)?, json!(3));
        Ok(())
    }

    #[test]
    fn from_fields() -> anyhow::Result<()> {
        let got = UpdateConnectivityTestRequest::from_fields(json!({
            "updateMask": "description,labels",
            "resource": {"name": "projects/p/locations/global/connectivityTests/t1"},
        }))?;
        let want = UpdateConnectivityTestRequest::new()
            .set_update_mask(wkt::FieldMask::default().set_paths(["description", "labels"]))
            .set_resource(
                ConnectivityTest::new()
                    .set_name("projects/p/locations/global/connectivityTests/t1"),
            );
        assert_eq!(got, want);

        let got = CreateConnectivityTestRequest::from_fields(json!({
            "parent": "projects/p/locations/global",
            "resource": {},
        }));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        Ok(())
    }
}
