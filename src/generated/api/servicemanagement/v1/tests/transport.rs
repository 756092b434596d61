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

//! Verify the requests sent over HTTP for the Service Manager service.

#[cfg(test)]
mod tests {
    use google_cloud_api_servicemanagement_v1::client::ServiceManager;
    use google_cloud_api_servicemanagement_v1::model;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use serde_json::json;

    type Result = anyhow::Result<()>;

    const METADATA_TYPE: &str =
        "type.googleapis.com/google.api.servicemanagement.v1.OperationMetadata";

    static_assertions::assert_impl_all!(ServiceManager: Clone, std::fmt::Debug, Send, Sync);

    async fn client(server: &Server) -> anyhow::Result<ServiceManager> {
        let client = ServiceManager::builder()
            .with_endpoint(server.url_str("/"))
            .with_credentials(
                auth::credentials::api_key_credentials::Builder::new("test-key").build(),
            )
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn list_services_query() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/services"),
                request::query(url_decoded(contains(("producerProjectId", "my-project")))),
                request::query(url_decoded(contains(("pageToken", "abc")))),
                request::query(url_decoded(not(contains(key("pageSize"))))),
                request::headers(contains(("x-goog-api-key", "test-key"))),
            ])
            .respond_with(json_encoded(json!({
                "services": [
                    {"serviceName": "a.googleapis.com", "producerProjectId": "my-project"},
                    {"serviceName": "b.googleapis.com", "producerProjectId": "my-project"},
                ],
            }))),
        );

        let client = client(&server).await?;
        let got = client
            .list_services()
            .set_producer_project_id("my-project")
            .set_page_token("abc")
            .send()
            .await?;
        let names = got
            .services
            .iter()
            .map(|s| s.service_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a.googleapis.com", "b.googleapis.com"]);
        Ok(())
    }

    #[tokio::test]
    async fn create_service_operation() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/services"),
                request::body(json_decoded(eq(json!({
                    "serviceName": "example.googleapis.com",
                    "producerProjectId": "my-project",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "operations/services.example.googleapis.com-1",
                "metadata": {
                    "@type": METADATA_TYPE,
                    "resourceNames": ["services/example.googleapis.com"],
                    "progressPercentage": 10,
                },
            }))),
        );

        let client = client(&server).await?;
        let operation = client
            .create_service()
            .set_service(
                model::ManagedService::new()
                    .set_service_name("example.googleapis.com")
                    .set_producer_project_id("my-project"),
            )
            .send()
            .await?;
        assert_eq!(operation.name, "operations/services.example.googleapis.com-1");
        assert!(!operation.done);
        let metadata = operation
            .metadata
            .as_ref()
            .map(|any| any.try_into_message::<model::OperationMetadata>(METADATA_TYPE))
            .transpose()?;
        let want = model::OperationMetadata::new()
            .set_resource_names(["services/example.googleapis.com"])
            .set_progress_percentage(10);
        assert_eq!(metadata, Some(want));
        Ok(())
    }

    #[tokio::test]
    async fn undelete_service() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/v1/services/example.googleapis.com:undelete",
            ))
            .respond_with(json_encoded(json!({"name": "operations/undelete-1"}))),
        );

        let client = client(&server).await?;
        let operation = client
            .undelete_service()
            .set_service_name("example.googleapis.com")
            .send()
            .await?;
        assert_eq!(operation.name, "operations/undelete-1");
        Ok(())
    }

    #[tokio::test]
    async fn get_service_config_view() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/v1/services/example.googleapis.com/configs/2024-01-01r0"
                ),
                request::query(url_decoded(contains(("view", "FULL")))),
            ])
            .respond_with(json_encoded(json!({
                "name": "example.googleapis.com",
                "id": "2024-01-01r0",
                "sourceInfo": {"sourceFiles": []},
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/v1/services/example.googleapis.com/configs/2024-01-01r1"
                ),
                request::query(url_decoded(not(contains(key("view"))))),
            ])
            .respond_with(json_encoded(json!({
                "name": "example.googleapis.com",
                "id": "2024-01-01r1",
            }))),
        );

        let client = client(&server).await?;
        let got = client
            .get_service_config()
            .set_service_name("example.googleapis.com")
            .set_config_id("2024-01-01r0")
            .set_view(model::get_service_config_request::ConfigView::Full)
            .send()
            .await?;
        assert_eq!(got.get("sourceInfo"), Some(&json!({"sourceFiles": []})));

        let got = client
            .get_service_config()
            .set_service_name("example.googleapis.com")
            .set_config_id("2024-01-01r1")
            .send()
            .await?;
        assert_eq!(got.get("id"), Some(&json!("2024-01-01r1")));
        Ok(())
    }

    #[tokio::test]
    async fn list_service_rollouts_by_item() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/services/example.googleapis.com/rollouts"),
                request::query(url_decoded(contains(("filter", "status=SUCCESS")))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({
                "rollouts": [{"rolloutId": "r0", "status": "SUCCESS"}],
                "nextPageToken": "page-2",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/services/example.googleapis.com/rollouts"),
                request::query(url_decoded(contains(("pageToken", "page-2")))),
            ])
            .respond_with(json_encoded(json!({
                "rollouts": [{"rolloutId": "r1", "status": "SUCCESS"}],
            }))),
        );

        let client = client(&server).await?;
        let mut items = client
            .list_service_rollouts()
            .set_service_name("example.googleapis.com")
            .set_filter("status=SUCCESS")
            .by_item();
        let mut ids = Vec::new();
        while let Some(rollout) = items.next().await {
            ids.push(rollout?.rollout_id);
        }
        assert_eq!(ids, vec!["r0", "r1"]);
        Ok(())
    }

    #[tokio::test]
    async fn get_operation_done_with_error() -> Result {
        use gax::error::rpc::Code;

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/op-1"))
                .respond_with(json_encoded(json!({
                    "name": "operations/op-1",
                    "done": true,
                    "error": {"code": 9, "message": "service is not deleted"},
                }))),
        );

        let client = client(&server).await?;
        let operation = client
            .get_operation()
            .set_name("operations/op-1")
            .send()
            .await?;
        assert!(operation.done);
        let error = operation.error.expect("a failed operation carries a status");
        assert_eq!(error.code, Code::FailedPrecondition);
        assert_eq!(error.message, "service is not deleted");
        Ok(())
    }

    #[tokio::test]
    async fn permission_denied() -> Result {
        use gax::error::rpc::Code;

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/v1/services/example.googleapis.com",
            ))
            .respond_with(
                status_code(403)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({"error": {
                            "code": 403,
                            "message": "The caller does not have permission",
                            "status": "PERMISSION_DENIED",
                        }})
                        .to_string(),
                    ),
            ),
        );

        let client = client(&server).await?;
        let err = client
            .delete_service()
            .set_service_name("example.googleapis.com")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(403));
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
        Ok(())
    }
}
