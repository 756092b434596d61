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
    use google_cloud_api_servicemanagement_v1::{client, model, stub};
    use gax::options::RequestOptionsBuilder;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    type Result = anyhow::Result<()>;

    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(7);
    const CALL_TIMEOUT: Duration = Duration::from_secs(42);

    mockall::mock! {
        #[derive(Debug)]
        ServiceManager {}
        impl stub::ServiceManager for ServiceManager {
            async fn list_services(
                &self,
                req: model::ListServicesRequest,
                options: gax::options::RequestOptions,
            ) -> gax::Result<gax::response::Response<model::ListServicesResponse>>;
        }
    }

    #[tokio::test]
    async fn configured_timeout() -> Result {
        let request = model::ListServicesRequest::new()
            .set_producer_project_id("my-project")
            .set_page_size(50)
            .set_page_token("abc")
            .set_consumer_id("project:my-project");
        let response = model::ListServicesResponse::new()
            .set_services([model::ManagedService::new().set_service_name("example.googleapis.com")])
            .set_next_page_token("def");

        let mut seq = mockall::Sequence::new();
        let mut mock = MockServiceManager::new();
        let reply = response.clone();
        mock.expect_list_services()
            .withf(|_, options| options.timeout() == &Some(DEFAULT_TIMEOUT))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Ok(gax::response::Response::from(reply.clone())));
        let reply = response.clone();
        mock.expect_list_services()
            .withf(|_, options| options.timeout() == &Some(CALL_TIMEOUT))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Ok(gax::response::Response::from(reply.clone())));

        // Created before the defaults change, and still sees the new values.
        let client = client::ServiceManager::from_stub(mock);
        client::ServiceManager::configure(|config| {
            config.set_timeout(DEFAULT_TIMEOUT);
        });

        let got = client
            .list_services()
            .with_request(request.clone())
            .send()
            .await?;
        assert_eq!(got, response);

        let got = client
            .list_services()
            .with_request(request.clone())
            .with_timeout(CALL_TIMEOUT)
            .send()
            .await?;
        assert_eq!(got, response);
        Ok(())
    }
}
