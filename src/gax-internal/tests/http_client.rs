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

#[cfg(test)]
mod tests {
    use gax::options::RequestOptions;
    use google_cloud_gax_internal::api_header::{GAPIC, X_GOOG_API_CLIENT, XGoogApiClient};
    use google_cloud_gax_internal::http::{NoBody, ReqwestClient};
    use google_cloud_gax_internal::options::{Configuration, apply};
    use google_cloud_gax_internal::query_parameter::QueryParameter;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use serde_json::{Value, json};
    use std::time::Duration;

    type TestResult = anyhow::Result<()>;

    const API_CLIENT: XGoogApiClient = XGoogApiClient {
        name: "google-cloud-test-v1",
        version: "1.2.3",
        library_type: GAPIC,
    };

    fn config(server: &Server) -> Configuration {
        let mut config = Configuration::new();
        config
            .set_endpoint(server.url_str("/"))
            .set_credentials(
                auth::credentials::api_key_credentials::Builder::new("test-key").build(),
            );
        config
    }

    async fn client(server: &Server) -> anyhow::Result<ReqwestClient> {
        Ok(ReqwestClient::new(&config(server), "https://test.googleapis.com").await?)
    }

    #[tokio::test]
    async fn path_and_query() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects/p/widgets"),
                request::query(url_decoded(contains(("filter", "color=red")))),
                request::query(url_decoded(contains(("pageSize", "10")))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({"widgets": [{"name": "w1"}]}))),
        );

        let client = client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/projects/p/widgets".into());
        let builder = "color=red".add(builder, "filter");
        let builder = 10_i32.add(builder, "pageSize");
        let builder = "".add(builder, "pageToken");
        let response = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.status_code(), Some(200));
        assert_eq!(response.into_body(), json!({"widgets": [{"name": "w1"}]}));
        Ok(())
    }

    #[tokio::test]
    async fn request_body() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p/widgets"),
                request::body(json_decoded(eq(json!({"name": "w1", "size": 3})))),
            ])
            .respond_with(json_encoded(json!({"name": "w1", "size": 3}))),
        );

        let client = client(&server).await?;
        let builder = client.builder(reqwest::Method::POST, "/v1/projects/p/widgets".into());
        let body = json!({"name": "w1", "size": 3});
        let response = client
            .execute::<Value, Value>(builder, Some(body.clone()), RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), body);
        Ok(())
    }

    #[tokio::test]
    async fn auth_and_client_headers() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/headers"),
                request::headers(contains(("x-goog-api-key", "test-key"))),
                request::headers(contains(("user-agent", "my-agent/1.0"))),
                request::headers(contains(("x-test-header", "abc"))),
                request::headers(contains((
                    X_GOOG_API_CLIENT,
                    matches("^my-lib/2.0 gl-rust/.* gapic/1.2.3$")
                ))),
            ])
            .respond_with(status_code(204)),
        );

        let mut config = config(&server);
        config.set_lib_name("my-lib").set_lib_version("2.0");
        let client = ReqwestClient::new(&config, "https://test.googleapis.com").await?;

        let mut options = RequestOptions::default();
        options.set_user_agent("my-agent/1.0");
        options.insert_header(
            http::HeaderName::from_static("x-test-header"),
            http::HeaderValue::from_static("abc"),
        );
        let options = apply(options, &config, &API_CLIENT);

        let builder = client.builder(reqwest::Method::GET, "/v1/headers".into());
        let response = client
            .execute::<NoBody, Value>(builder, None, options)
            .await?;
        assert_eq!(response.status_code(), Some(204));
        assert_eq!(response.into_body(), Value::Null);
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> TestResult {
        let server = Server::run();
        let status = json!({"error": {
            "code": 404,
            "message": "widget not found",
            "status": "NOT_FOUND",
        }});
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/missing")).respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(status.to_string()),
            ),
        );

        let client = client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/missing".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        let got = err.status();
        assert_eq!(got.map(|s| s.code), Some(gax::error::rpc::Code::NotFound));
        assert_eq!(got.map(|s| s.message.as_str()), Some("widget not found"));
        Ok(())
    }

    #[tokio::test]
    async fn http_error() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/broken"))
                .respond_with(status_code(503).body("try again later")),
        );

        let client = client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/broken".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"try again later"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn timeout() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/slow")).respond_with(
                delay_and_then(Duration::from_secs(5), json_encoded(json!({}))),
            ),
        );

        let client = client(&server).await?;
        let mut options = RequestOptions::default();
        options.set_timeout(Duration::from_millis(100));
        let builder = client.builder(reqwest::Method::GET, "/v1/slow".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn connection_error() -> TestResult {
        let server = Server::run();
        let client = client(&server).await?;
        drop(server);

        let builder = client.builder(reqwest::Method::GET, "/v1/gone".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        Ok(())
    }
}
