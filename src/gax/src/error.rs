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

mod core_error;
pub use core_error::*;
mod credentials;
pub use credentials::CredentialsError;

/// The error payload returned by Google Cloud services.
///
/// Over HTTP the services wrap a [Status][rpc::Status] in a JSON object,
/// `{"error": {...}}`. [Error::status] returns the parsed value.
///
/// # Examples
///
/// ```
/// use google_cloud_gax::error::Error;
/// use google_cloud_gax::error::rpc::Code;
/// fn is_not_found(e: &Error) -> bool {
///     e.status().is_some_and(|s| s.code == Code::NotFound)
/// }
/// ```
pub mod rpc;
