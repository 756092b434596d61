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

//! Common errors generated by the components in this crate.

use std::error::Error;

pub use gax::error::CredentialsError;

/// A helper to create a non-transient error.
pub(crate) fn non_transient<T: Error + Send + Sync + 'static>(source: T) -> CredentialsError {
    CredentialsError::new(false, source)
}

pub(crate) fn non_transient_from_msg<T: Into<String>>(message: T) -> CredentialsError {
    CredentialsError::from_msg(false, message)
}
