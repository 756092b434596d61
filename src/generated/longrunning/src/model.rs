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

/// This resource represents a long-running operation that is the result of a
/// network API call.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned name, which is only unique within the same service
    /// that originally returns it.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Service-specific metadata associated with the operation. It typically
    /// contains progress information and common metadata such as create time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<wkt::Any>,

    /// If the value is `false`, it means the operation is still in progress.
    /// If `true`, the operation is completed, and either `error` or `response`
    /// is available.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub done: bool,

    /// The error result of the operation in case of failure or cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<gax::error::rpc::Status>,

    /// The normal, successful response of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<wkt::Any>,
}

impl Operation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [metadata][Operation::metadata].
    pub fn set_metadata<T: Into<wkt::Any>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][Operation::metadata].
    pub fn set_or_clear_metadata<T: Into<wkt::Any>>(mut self, v: Option<T>) -> Self {
        self.metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [done][Operation::done].
    pub fn set_done<T: Into<bool>>(mut self, v: T) -> Self {
        self.done = v.into();
        self
    }

    /// Sets the value of [error][Operation::error].
    ///
    /// An operation has either an error or a response, this clears the
    /// response.
    pub fn set_error<T: Into<gax::error::rpc::Status>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self.response = None;
        self
    }

    /// Sets the value of [response][Operation::response].
    ///
    /// An operation has either an error or a response, this clears the
    /// error.
    pub fn set_response<T: Into<wkt::Any>>(mut self, v: T) -> Self {
        self.response = Some(v.into());
        self.error = None;
        self
    }
}

/// The request message for getting the latest state of a long-running
/// operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct GetOperationRequest {
    /// The name of the operation resource.
    pub name: String,
}

impl GetOperationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GetOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl gax::request::RequestMessage for GetOperationRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use gax::request::RequestMessage;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn operation_in_progress() -> anyhow::Result<()> {
        let input = json!({
            "name": "operations/op-123",
            "metadata": {
                "@type": "type.googleapis.com/google.api.servicemanagement.v1.OperationMetadata",
                "progressPercentage": 50,
            },
        });
        let got = serde_json::from_value::<Operation>(input.clone())?;
        assert_eq!(got.name, "operations/op-123");
        assert!(!got.done);
        assert_eq!(
            got.metadata.as_ref().and_then(wkt::Any::type_url),
            Some("type.googleapis.com/google.api.servicemanagement.v1.OperationMetadata")
        );
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn operation_with_error() -> anyhow::Result<()> {
        let input = json!({
            "name": "operations/op-123",
            "done": true,
            "error": {"code": 5, "message": "not found"},
        });
        let got = serde_json::from_value::<Operation>(input)?;
        let want = Operation::new()
            .set_name("operations/op-123")
            .set_done(true)
            .set_error(
                Status::default()
                    .set_code(Code::NotFound)
                    .set_message("not found"),
            );
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn result_setters_are_exclusive() {
        let op = Operation::new()
            .set_error(Status::default())
            .set_response(wkt::Any::default());
        assert!(op.error.is_none(), "{op:?}");
        assert!(op.response.is_some(), "{op:?}");
        let op = op.set_error(Status::default());
        assert!(op.response.is_none(), "{op:?}");
    }

    #[test]
    fn get_operation_request_from_fields() -> anyhow::Result<()> {
        let got = GetOperationRequest::from_fields(json!({"name": "operations/abc"}))?;
        assert_eq!(got, GetOperationRequest::new().set_name("operations/abc"));

        let err = GetOperationRequest::from_fields(json!({})).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let err = GetOperationRequest::from_fields(json!({"name": "a", "extra": 1})).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}
