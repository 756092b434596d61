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

//! Verify the client defaults reach the stub.
//!
//! The defaults are process-wide, this test lives in its own test binary.

#[cfg(test)]
mod tests {
    use google_cloud_networkmanagement_v1::{client, model, stub};
    use gax::options::RequestOptionsBuilder;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    type Result = anyhow::Result<()>;

    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(7);
    const CALL_TIMEOUT: Duration = Duration::from_secs(42);

    mockall::mock! {
        #[derive(Debug)]
        ReachabilityService {}
        impl stub::ReachabilityService for ReachabilityService {
            async fn list_connectivity_tests(
                &self,
                req: model::ListConnectivityTestsRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<model::ListConnectivityTestsResponse>>;
        }
    }

    #[tokio::test]
    async fn configured_timeout() -> Result {
        let request = model::ListConnectivityTestsRequest::new()
            .set_parent("projects/p/locations/global")
            .set_page_size(10)
            .set_page_token("abc")
            .set_filter("protocol = TCP")
            .set_order_by("name");
        let response = model::ListConnectivityTestsResponse::new()
            .set_resources([
                model::ConnectivityTest::new()
                    .set_name("projects/p/locations/global/connectivityTests/t1")
                    .set_source(model::Endpoint::new().set_ip_address("10.0.0.1"))
                    .set_destination(
                        model::Endpoint::new()
                            .set_ip_address("10.0.0.2")
                            .set_port(443),
                    ),
            ])
            .set_next_page_token("def");

        let mut seq = mockall::Sequence::new();
        let mut mock = MockReachabilityService::new();
        let reply = response.clone();
        mock.expect_list_connectivity_tests()
            .withf(|_, options| options.timeout() == &Some(DEFAULT_TIMEOUT))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Ok(gax::response::Response::from(reply.clone())));
        let reply = response.clone();
        mock.expect_list_connectivity_tests()
            .withf(|_, options| options.timeout() == &Some(CALL_TIMEOUT))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Ok(gax::response::Response::from(reply.clone())));

        // Created before the defaults change, and still sees the new values.
        let client = client::ReachabilityService::from_stub(mock);
        client::ReachabilityService::configure(|config| {
            config.set_timeout(DEFAULT_TIMEOUT);
        });

        let got = client
            .list_connectivity_tests()
            .with_request(request.clone())
            .send()
            .await?;
        assert_eq!(got, response);

        let got = client
            .list_connectivity_tests()
            .with_request(request.clone())
            .with_timeout(CALL_TIMEOUT)
            .send()
            .await?;
        assert_eq!(got, response);
        Ok(())
    }
}
