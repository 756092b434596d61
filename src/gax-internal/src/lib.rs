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

//! Shared plumbing for the generated REST clients.
//!
//! The generated crates call into this crate to build requests, send them
//! with [reqwest], and compute per-call defaults from a client
//! configuration. Nothing here is a stable API, the generated crates and this
//! crate are released together.

pub mod api_header;
pub mod http;
pub mod options;
pub mod path_parameter;
pub mod query_parameter;
pub mod unimplemented;

pub(crate) mod host;
