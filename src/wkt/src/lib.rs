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

//! Well-known-types used by the Google Cloud client libraries.
//!
//! Several messages in the Google APIs have a custom JSON encoding: durations
//! are strings like `"1.5s"`, timestamps are RFC 3339 strings, field masks are
//! comma-separated lists of paths. The types in this crate implement those
//! encodings and offer conversions to and from commonly used Rust types.

mod any;
pub use crate::any::*;
mod duration;
pub use crate::duration::*;
mod empty;
pub use crate::empty::*;
mod field_mask;
pub use crate::field_mask::*;
mod timestamp;
pub use crate::timestamp::*;

#[doc(hidden)]
pub mod internal;
