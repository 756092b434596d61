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

//! Verify the requests sent over HTTP for the License Codes service.

#[cfg(all(test, feature = "license-codes"))]
mod tests {
    use google_cloud_compute_v1::client::LicenseCodes;
    use google_cloud_compute_v1::model;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use serde_json::json;

    type Result = anyhow::Result<()>;

    static_assertions::assert_impl_all!(LicenseCodes: Clone, std::fmt::Debug, Send, Sync);

    async fn client(server: &Server) -> anyhow::Result<LicenseCodes> {
        let client = LicenseCodes::builder()
            .with_endpoint(server.url_str("/"))
            .with_credentials(
                auth::credentials::api_key_credentials::Builder::new("test-key").build(),
            )
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn get() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/compute/v1/projects/my-project/global/licenseCodes/1234"
                ),
                request::headers(contains(("x-goog-api-key", "test-key"))),
                request::headers(contains(key("x-goog-api-client"))),
            ])
            .respond_with(json_encoded(json!({
                "kind": "compute#licenseCode",
                "id": "5678",
                "name": "1234",
                "state": "ENABLED",
                "transferable": true,
            }))),
        );

        let client = client(&server).await?;
        let got = client
            .get()
            .set_project("my-project")
            .set_license_code("1234")
            .send()
            .await?;
        let want = model::LicenseCode::new()
            .set_kind("compute#licenseCode")
            .set_id(5678_u64)
            .set_name("1234")
            .set_state(model::license_code::State::Enabled)
            .set_transferable(true);
        assert_eq!(got, want);
        Ok(())
    }

    #[tokio::test]
    async fn test_iam_permissions() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/compute/v1/projects/my-project/global/licenseCodes/1234/testIamPermissions"
                ),
                request::body(json_decoded(eq(json!({
                    "permissions": ["compute.licenseCodes.get", "compute.licenseCodes.use"]
                })))),
            ])
            .respond_with(json_encoded(json!({
                "permissions": ["compute.licenseCodes.get"]
            }))),
        );

        let client = client(&server).await?;
        let got = client
            .test_iam_permissions()
            .with_fields(json!({
                "project": "my-project",
                "resource": "1234",
                "body": {"permissions": ["compute.licenseCodes.get", "compute.licenseCodes.use"]},
            }))?
            .send()
            .await?;
        assert_eq!(got.permissions, vec!["compute.licenseCodes.get"]);
        Ok(())
    }

    #[tokio::test]
    async fn http_error_without_status() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/compute/v1/projects/my-project/global/licenseCodes/1234",
            ))
            .respond_with(status_code(503).body("try again later")),
        );

        let client = client(&server).await?;
        let err = client
            .get()
            .set_project("my-project")
            .set_license_code("1234")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(
            err.http_payload().map(|b| b.as_ref()),
            Some(b"try again later".as_slice())
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_path_parameter() -> Result {
        let server = Server::run();
        let client = client(&server).await?;
        let err = client
            .get()
            .set_project("my-project")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn request_timeout() -> Result {
        use gax::options::RequestOptionsBuilder;
        use std::time::Duration;

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/compute/v1/projects/my-project/global/licenseCodes/1234",
            ))
            .respond_with(delay_and_then(
                Duration::from_millis(500),
                json_encoded(json!({"name": "1234"})),
            )),
        );

        let client = client(&server).await?;
        let err = client
            .get()
            .set_project("my-project")
            .set_license_code("1234")
            .with_timeout(Duration::from_millis(50))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }
}
