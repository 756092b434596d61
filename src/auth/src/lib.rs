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

//! Credentials for the Google Cloud clients.
//!
//! A [Credentials][credentials::Credentials] value computes the headers that
//! authenticate each request. The clients accept either a ready-made value
//! or a [CredentialsSource][credentials::CredentialsSource] (a key file path
//! or its JSON contents) and resolve it when the client is built. See
//! [Authentication methods at Google] for background.
//!
//! [Authentication methods at Google]: https://cloud.google.com/docs/authentication

pub mod errors;

/// Credential types, their builders, and credential sources.
pub mod credentials;

pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

pub(crate) mod headers_util;
