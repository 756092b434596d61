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

//! Google Cloud Client Libraries for Rust - Long Running Operations API
//!
//! Services return an [Operation][model::Operation] from RPCs that take a
//! long time to complete. The operation carries the service-specific
//! metadata while it runs, and the response or the error once it is done.
//! This crate contains the message types shared by those services.

/// The messages and enums that are part of this client library.
pub mod model;
