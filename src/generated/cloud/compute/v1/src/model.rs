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

/// Represents a License Code resource.
///
/// A License Code is a unique identifier used to represent a license
/// resource. **Caution** This resource is intended for use only by third-party
/// partners who are creating Cloud Marketplace images.
#[cfg(feature = "license-codes")]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LicenseCode {
    /// [Output Only] Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,

    /// [Output Only] Description of this License Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// [Output Only] The unique identifier for the resource. This identifier
    /// is defined by the server.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "wkt::internal::optional_u64"
    )]
    pub id: Option<u64>,

    /// [Output Only] Type of resource. Always compute#licenseCode for
    /// licenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// [Output Only] URL and description aliases of Licenses with the same
    /// License Code.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub license_alias: Vec<LicenseCodeLicenseAlias>,

    /// [Output Only] Name of the resource. The name is 1-20 characters long
    /// and must be a valid 64 bit integer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// [Output Only] Server-defined URL for the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// [Output Only] Current state of this License Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<license_code::State>,

    /// [Output Only] If true, the license will remain attached when creating
    /// images or snapshots from disks. Otherwise, the license is not
    /// transferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transferable: Option<bool>,
}

#[cfg(feature = "license-codes")]
impl LicenseCode {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [creation_timestamp][LicenseCode::creation_timestamp].
    pub fn set_creation_timestamp<T: Into<String>>(mut self, v: T) -> Self {
        self.creation_timestamp = Some(v.into());
        self
    }

    /// Sets the value of [description][LicenseCode::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [id][LicenseCode::id].
    pub fn set_id<T: Into<u64>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [kind][LicenseCode::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [license_alias][LicenseCode::license_alias].
    pub fn set_license_alias<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<LicenseCodeLicenseAlias>,
    {
        self.license_alias = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [name][LicenseCode::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [self_link][LicenseCode::self_link].
    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    /// Sets the value of [state][LicenseCode::state].
    pub fn set_state<T: Into<license_code::State>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [transferable][LicenseCode::transferable].
    pub fn set_transferable<T: Into<bool>>(mut self, v: T) -> Self {
        self.transferable = Some(v.into());
        self
    }
}

/// Defines additional types related to [LicenseCode].
#[cfg(feature = "license-codes")]
pub mod license_code {
    /// [Output Only] Current state of this License Code.
    ///
    /// This enum is defined as `#[non_exhaustive]` because Google Cloud may
    /// add additional enum variants at any time. Values sent by the service
    /// and not known to this version of the library are preserved in the
    /// `UnknownValue` variant, and sent back unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum State {
        /// Machines are not allowed to attach boot disks with this License
        /// Code. Requests to create new resources with this license will be
        /// rejected.
        Disabled,
        /// Use is allowed for anyone with USE_READ_ONLY access to this
        /// License Code.
        Enabled,
        /// Use of this license is limited to a project whitelist.
        Restricted,
        StateUnspecified,
        /// Reserved state.
        Terminated,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [State::value] or
        /// [State::name].
        UnknownValue(state::UnknownValue),
    }

    #[doc(hidden)]
    pub mod state {
        #[derive(Clone, Debug, PartialEq)]
        pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
    }

    impl State {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the string representation of enums.
        pub fn value(&self) -> Option<i32> {
            match self {
                Self::Disabled => Some(0),
                Self::Enabled => Some(1),
                Self::Restricted => Some(2),
                Self::StateUnspecified => Some(3),
                Self::Terminated => Some(4),
                Self::UnknownValue(u) => u.0.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the integer representation of enums.
        pub fn name(&self) -> Option<&str> {
            match self {
                Self::Disabled => Some("DISABLED"),
                Self::Enabled => Some("ENABLED"),
                Self::Restricted => Some("RESTRICTED"),
                Self::StateUnspecified => Some("STATE_UNSPECIFIED"),
                Self::Terminated => Some("TERMINATED"),
                Self::UnknownValue(u) => u.0.name(),
            }
        }
    }

    impl std::default::Default for State {
        fn default() -> Self {
            Self::from(0)
        }
    }

    impl std::fmt::Display for State {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            wkt::internal::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for State {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Disabled,
                1 => Self::Enabled,
                2 => Self::Restricted,
                3 => Self::StateUnspecified,
                4 => Self::Terminated,
                _ => Self::UnknownValue(state::UnknownValue(
                    wkt::internal::UnknownEnumValue::Integer(value),
                )),
            }
        }
    }

    impl std::convert::From<&str> for State {
        fn from(value: &str) -> Self {
            match value {
                "DISABLED" => Self::Disabled,
                "ENABLED" => Self::Enabled,
                "RESTRICTED" => Self::Restricted,
                "STATE_UNSPECIFIED" => Self::StateUnspecified,
                "TERMINATED" => Self::Terminated,
                _ => Self::UnknownValue(state::UnknownValue(
                    wkt::internal::UnknownEnumValue::String(value.to_string()),
                )),
            }
        }
    }

    impl serde::ser::Serialize for State {
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

    impl<'de> serde::de::Deserialize<'de> for State {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(wkt::internal::EnumVisitor::<State>::new(
                ".google.cloud.compute.v1.LicenseCode.State",
            ))
        }
    }
}

/// Aliases of a License with the same License Code.
#[cfg(feature = "license-codes")]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LicenseCodeLicenseAlias {
    /// [Output Only] Description of this License Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// [Output Only] URL of license corresponding to this License Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

#[cfg(feature = "license-codes")]
impl LicenseCodeLicenseAlias {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][LicenseCodeLicenseAlias::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [self_link][LicenseCodeLicenseAlias::self_link].
    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }
}

#[cfg(feature = "license-codes")]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestPermissionsRequest {
    /// The set of permissions to check for the 'resource'. Permissions with
    /// wildcards (such as '*' or 'storage.*') are not allowed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
}

#[cfg(feature = "license-codes")]
impl TestPermissionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [permissions][TestPermissionsRequest::permissions].
    pub fn set_permissions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.permissions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[cfg(feature = "license-codes")]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestPermissionsResponse {
    /// A subset of `TestPermissionsRequest.permissions` that the caller is
    /// allowed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
}

#[cfg(feature = "license-codes")]
impl TestPermissionsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [permissions][TestPermissionsResponse::permissions].
    pub fn set_permissions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.permissions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A request message for LicenseCodes.Get. See the method description for
/// details.
#[cfg(feature = "license-codes")]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct GetLicenseCodeRequest {
    /// Number corresponding to the License code resource to return.
    #[serde(alias = "license_code")]
    pub license_code: String,

    /// Project ID for this request.
    pub project: String,
}

#[cfg(feature = "license-codes")]
impl GetLicenseCodeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [license_code][GetLicenseCodeRequest::license_code].
    pub fn set_license_code<T: Into<String>>(mut self, v: T) -> Self {
        self.license_code = v.into();
        self
    }

    /// Sets the value of [project][GetLicenseCodeRequest::project].
    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }
}

#[cfg(feature = "license-codes")]
impl gax::request::RequestMessage for GetLicenseCodeRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["project", "license_code"];
}

/// A request message for LicenseCodes.TestIamPermissions. See the method
/// description for details.
#[cfg(feature = "license-codes")]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct TestIamPermissionsLicenseCodeRequest {
    /// Project ID for this request.
    pub project: String,

    /// Name or id of the resource for this request.
    pub resource: String,

    /// The body resource for this request.
    ///
    /// Mappings may name this field `body`.
    #[serde(alias = "test_permissions_request_resource", alias = "body")]
    pub test_permissions_request_resource: Option<TestPermissionsRequest>,
}

#[cfg(feature = "license-codes")]
impl TestIamPermissionsLicenseCodeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project][TestIamPermissionsLicenseCodeRequest::project].
    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    /// Sets the value of [resource][TestIamPermissionsLicenseCodeRequest::resource].
    pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
        self.resource = v.into();
        self
    }

    /// Sets the value of [test_permissions_request_resource][TestIamPermissionsLicenseCodeRequest::test_permissions_request_resource].
    pub fn set_test_permissions_request_resource<T: Into<TestPermissionsRequest>>(
        mut self,
        v: T,
    ) -> Self {
        self.test_permissions_request_resource = Some(v.into());
        self
    }

    /// Sets or clears the value of [test_permissions_request_resource][TestIamPermissionsLicenseCodeRequest::test_permissions_request_resource].
    pub fn set_or_clear_test_permissions_request_resource<T: Into<TestPermissionsRequest>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.test_permissions_request_resource = v.map(|x| x.into());
        self
    }
}

#[cfg(feature = "license-codes")]
impl gax::request::RequestMessage for TestIamPermissionsLicenseCodeRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["project", "resource"];
}

#[cfg(all(test, feature = "license-codes"))]
mod tests {
    use super::*;
    use gax::request::RequestMessage;
    use serde_json::json;

    #[test]
    fn license_code_json() -> anyhow::Result<()> {
        let input = json!({
            "id": "5678",
            "name": "1234",
            "kind": "compute#licenseCode",
            "state": "ENABLED",
            "transferable": true,
            "licenseAlias": [{"selfLink": "https://example.com/l", "description": "alias"}],
        });
        let got = serde_json::from_value::<LicenseCode>(input.clone())?;
        let want = LicenseCode::new()
            .set_id(5678_u64)
            .set_name("1234")
            .set_kind("compute#licenseCode")
            .set_state(license_code::State::Enabled)
            .set_transferable(true)
            .set_license_alias([LicenseCodeLicenseAlias::new()
                .set_self_link("https://example.com/l")
                .set_description("alias")]);
        assert_eq!(got, want);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn unknown_state() -> anyhow::Result<()> {
        let got = serde_json::from_value::<license_code::State>(json!("SUSPENDED"))?;
        assert_eq!(got.name(), Some("SUSPENDED"));
        assert_eq!(got.value(), None);
        assert_eq!(serde_json::to_value(&got)?, json!("SUSPENDED"));
        Ok(())
    }

    #[test]
    fn body_aliases() -> anyhow::Result<()> {
        let want = TestIamPermissionsLicenseCodeRequest::new()
            .set_project("p")
            .set_resource("r")
            .set_test_permissions_request_resource(
                TestPermissionsRequest::new().set_permissions(["compute.licenseCodes.get"]),
            );
        for name in [
            "body",
            "test_permissions_request_resource",
            "testPermissionsRequestResource",
        ] {
            let mut fields = json!({"project": "p", "resource": "r"});
            fields[name] = json!({"permissions": ["compute.licenseCodes.get"]});
            let got = TestIamPermissionsLicenseCodeRequest::from_fields(fields)?;
            assert_eq!(got, want, "{name}");
        }
        Ok(())
    }

    #[test]
    fn body_is_optional() -> anyhow::Result<()> {
        let got = TestIamPermissionsLicenseCodeRequest::from_fields(json!({
            "project": "p",
            "resource": "r",
        }))?;
        assert!(got.test_permissions_request_resource.is_none(), "{got:?}");
        Ok(())
    }

    #[test]
    fn required_fields() {
        let got = GetLicenseCodeRequest::from_fields(json!({"project": "p"}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        let got = GetLicenseCodeRequest::from_fields(json!({"project": "p", "licenseCode": null}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
        let got = TestIamPermissionsLicenseCodeRequest::from_fields(json!({"resource": "r"}));
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }
}
