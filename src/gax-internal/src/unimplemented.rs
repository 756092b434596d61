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

pub async fn unimplemented_stub<T: Send>() -> gax::Result<gax::response::Response<T>> {
    unimplemented!(concat!(
        "the stub traits provide default implementations of each method, ",
        "so services can gain new RPCs without breaking existing stubs. ",
        "The transport and tracing stubs in the client libraries override ",
        "every method. This error is expected only in test code mocking ",
        "the client libraries, verify that the mock implements every method ",
        "used in the test."
    ));
}
