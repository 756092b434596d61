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

//! Google Cloud Client Libraries for Rust - Network Management API
//!
//! This crate contains the client for the Reachability service, which runs
//! [Connectivity Tests][model::ConnectivityTest] and reports whether a packet
//! can travel between two network endpoints.
//!
//! Creating, updating, rerunning and deleting a test start long-running
//! operations. The client returns the initial
//! [Operation][longrunning::model::Operation], use
//! [get_operation][client::ReachabilityService::get_operation] to query its
//! progress.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use google_cloud_networkmanagement_v1::client::ReachabilityService;
//! let client = ReachabilityService::builder().build().await?;
//! let test = client
//!     .get_connectivity_test()
//!     .set_name("projects/my-project/locations/global/connectivityTests/my-test")
//!     .send()
//!     .await?;
//! let result = test.reachability_details.map(|d| d.result).unwrap_or_default();
//! println!("{} is {result}", test.name);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # });
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;

/// Request builders.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

/// Traits to mock the clients in this library.
pub mod stub;

pub(crate) mod tracing;
pub(crate) mod transport;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://networkmanagement.googleapis.com";

pub(crate) mod info {
    pub(crate) static X_GOOG_API_CLIENT_HEADER: gaxi::api_header::XGoogApiClient =
        gaxi::api_header::XGoogApiClient {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            library_type: gaxi::api_header::GAPIC,
        };
}

static NAMESPACE_DEFAULTS: std::sync::LazyLock<gaxi::options::SharedConfiguration> =
    std::sync::LazyLock::new(Default::default);

/// Changes the defaults for every client in this crate.
///
/// Each client type has its own defaults, which fall back to these.
pub fn configure<F>(f: F)
where
    F: FnOnce(&mut gaxi::options::Configuration),
{
    gax::configuration::update_config(&NAMESPACE_DEFAULTS, f)
}
