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

//! Verify the requests sent over HTTP for the Service Monitoring service.

#[cfg(test)]
mod tests {
    use gax::error::rpc::Code;
    use google_cloud_monitoring_v3::client::ServiceMonitoringService;
    use google_cloud_monitoring_v3::model;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use serde_json::json;

    type Result = anyhow::Result<()>;

    static_assertions::assert_impl_all!(ServiceMonitoringService: Clone, std::fmt::Debug, Send, Sync);

    async fn client(server: &Server) -> anyhow::Result<ServiceMonitoringService> {
        let client = ServiceMonitoringService::builder()
            .with_endpoint(server.url_str("/"))
            .with_credentials(
                auth::credentials::api_key_credentials::Builder::new("test-key").build(),
            )
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn get_service() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/projects/p/services/s"),
                request::headers(contains(("x-goog-api-key", "test-key"))),
                request::headers(contains(key("x-goog-api-client"))),
            ])
            .respond_with(json_encoded(json!({
                "name": "projects/p/services/s",
                "displayName": "My Service",
                "custom": {},
            }))),
        );

        let client = client(&server).await?;
        let got = client
            .get_service()
            .set_name("projects/p/services/s")
            .send()
            .await?;
        let want = model::Service::new()
            .set_name("projects/p/services/s")
            .set_display_name("My Service")
            .set_custom(model::service::Custom::default());
        assert_eq!(got, want);
        Ok(())
    }

    #[tokio::test]
    async fn list_services_query() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/projects/p/services"),
                request::query(url_decoded(contains(("filter", "identifier_case:\"x\"")))),
                request::query(url_decoded(contains(("pageSize", "2")))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({
                "services": [{"name": "projects/p/services/a"}],
                "nextPageToken": "",
            }))),
        );

        let client = client(&server).await?;
        let got = client
            .list_services()
            .set_parent("projects/p")
            .set_filter("identifier_case:\"x\"")
            .set_page_size(2)
            .send()
            .await?;
        assert_eq!(got.services.len(), 1);
        assert_eq!(got.next_page_token, "");
        Ok(())
    }

    #[tokio::test]
    async fn create_service_body() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v3/projects/p/services"),
                request::query(url_decoded(contains(("serviceId", "s")))),
                request::body(json_decoded(eq(json!({"displayName": "My Service"})))),
            ])
            .respond_with(json_encoded(json!({
                "name": "projects/p/services/s",
                "displayName": "My Service",
            }))),
        );

        let client = client(&server).await?;
        let got = client
            .create_service()
            .set_parent("projects/p")
            .set_service_id("s")
            .set_service(model::Service::new().set_display_name("My Service"))
            .send()
            .await?;
        assert_eq!(got.name, "projects/p/services/s");
        Ok(())
    }

    #[tokio::test]
    async fn update_service_uses_resource_name() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v3/projects/p/services/s"),
                request::query(url_decoded(contains(("updateMask", "displayName")))),
            ])
            .respond_with(json_encoded(json!({
                "name": "projects/p/services/s",
                "displayName": "Renamed",
            }))),
        );

        let client = client(&server).await?;
        let got = client
            .update_service()
            .set_service(
                model::Service::new()
                    .set_name("projects/p/services/s")
                    .set_display_name("Renamed"),
            )
            .set_update_mask(wkt::FieldMask::default().set_paths(["displayName"]))
            .send()
            .await?;
        assert_eq!(got.display_name, "Renamed");
        Ok(())
    }

    #[tokio::test]
    async fn get_service_level_objective_view() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/projects/p/services/s/serviceLevelObjectives/o"),
                request::query(url_decoded(contains(("view", "EXPLICIT")))),
            ])
            .respond_with(json_encoded(json!({
                "name": "projects/p/services/s/serviceLevelObjectives/o",
                "goal": 0.99,
            }))),
        );

        let client = client(&server).await?;
        let got = client
            .get_service_level_objective()
            .set_name("projects/p/services/s/serviceLevelObjectives/o")
            .set_view(model::service_level_objective::View::Explicit)
            .send()
            .await?;
        assert_eq!(got.goal, 0.99);
        Ok(())
    }

    #[tokio::test]
    async fn delete_service_empty_response() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v3/projects/p/services/s"))
                .respond_with(status_code(200)),
        );

        let client = client(&server).await?;
        let got = client
            .delete_service()
            .set_name("projects/p/services/s")
            .send()
            .await?;
        assert_eq!(got, wkt::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/projects/p/services/missing"))
                .respond_with(
                    status_code(404)
                        .insert_header("content-type", "application/json")
                        .body(
                            json!({"error": {
                                "code": 404,
                                "message": "Service not found",
                                "status": "NOT_FOUND",
                            }})
                            .to_string(),
                        ),
                ),
        );

        let client = client(&server).await?;
        let err = client
            .get_service()
            .set_name("projects/p/services/missing")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        let status = err.status().expect("error should carry a status");
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "Service not found");
        Ok(())
    }

    #[tokio::test]
    async fn missing_path_parameter() -> Result {
        // No expectations, the request must not reach the server.
        let server = Server::run();
        let client = client(&server).await?;
        let err = client.get_service().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn send_with_returns_metadata() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/projects/p/services/s"))
                .respond_with(
                    status_code(200)
                        .insert_header("content-type", "application/json")
                        .insert_header("x-test-header", "present")
                        .body(json!({"name": "projects/p/services/s"}).to_string()),
                ),
        );

        let client = client(&server).await?;
        let mut status = None;
        let mut header = None;
        let got = client
            .get_service()
            .set_name("projects/p/services/s")
            .send_with(|_, parts| {
                status = parts.status_code;
                header = parts
                    .headers
                    .get("x-test-header")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
            })
            .await?;
        assert_eq!(got.name, "projects/p/services/s");
        assert_eq!(status, Some(200));
        assert_eq!(header.as_deref(), Some("present"));
        Ok(())
    }
}
