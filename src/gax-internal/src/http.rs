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

use crate::options::Configuration;
use auth::credentials::Credentials;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};

pub use reqwest;

/// The HTTP transport shared by all the REST clients.
///
/// Holds the connection pool, the resolved credentials, and the endpoint.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
}

impl ReqwestClient {
    pub async fn new(
        config: &Configuration,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let endpoint = config.endpoint();
        let host = crate::host::host(endpoint.as_deref(), default_endpoint)?;
        let cred = Self::make_credentials(config, &host)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = crate::host::origin(endpoint.as_deref().unwrap_or(default_endpoint));
        tracing::debug!(%endpoint, "created HTTP client");
        Ok(Self {
            inner,
            cred,
            endpoint,
        })
    }

    /// The endpoint, always including a scheme.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        builder = builder.headers(options.headers().clone());
        if let Some(timeout) = options.timeout() {
            builder = builder.timeout(*timeout);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let auth_headers = self.cred.headers().await.map_err(Error::authentication)?;
        let request = builder.headers(auth_headers).build().map_err(Error::ser)?;
        tracing::debug!(method = %request.method(), path = request.url().path(), "sending request");

        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            tracing::warn!(status = response.status().as_u16(), "request failed");
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn make_credentials(
        config: &Configuration,
        host: &str,
    ) -> gax::client_builder::Result<Credentials> {
        let audience = format!("https://{host}/");
        let scopes = config.scopes();
        match config.credentials() {
            Some(source) => source
                .into_credentials(scopes, Some(audience))
                .map_err(BuilderError::cred),
            None => {
                let builder = auth::credentials::Builder::default().with_audience(audience);
                let builder = match scopes {
                    Some(s) => builder.with_scopes(s),
                    None => builder,
                };
                builder.build().map_err(BuilderError::cred)
            }
        }
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

/// The request body for RPCs without one.
#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    // 204 No Content, and some empty responses, have no body to parse.
    let body = match body {
        content if content.is_empty() => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new()
            .set_status_code(status_code)
            .set_headers(parts.headers),
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue};
    use serde_json::{Value, json};
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn response(code: u16, content: &str) -> anyhow::Result<reqwest::Response> {
        let response = http::Response::builder()
            .header("content-type", "application/json")
            .status(code)
            .body(content.to_string())?;
        Ok(response.into())
    }

    fn json_headers() -> HeaderMap {
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        want
    }

    #[tokio::test]
    async fn http_error_bytes() -> TestResult {
        let response = response(400, r#"{"error": "bad request"}"#)?;
        let err = to_http_error::<()>(response).await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert_eq!(err.http_headers(), Some(&json_headers()));
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from(r#"{"error": "bad request"}"#))
        );
        assert!(err.status().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn http_error_with_status() -> TestResult {
        use gax::error::rpc::{Code, Status};
        let body = json!({"error": {
            "code": 404,
            "message": "The thing is not there, oh noes!",
            "status": "NOT_FOUND",
            "details": [{
                "@type": "type.googleapis.com/google.rpc.LocalizedMessage",
                "locale": "en-US",
                "message": "we searched everywhere, honest",
            }]
        }});
        let response = response(404, &body.to_string())?;
        let err = to_http_error::<()>(response).await.unwrap_err();
        let want = Status::default()
            .set_code(Code::NotFound)
            .set_message("The thing is not there, oh noes!")
            .set_details([json!({
                "@type": "type.googleapis.com/google.rpc.LocalizedMessage",
                "locale": "en-US",
                "message": "we searched everywhere, honest",
            })]);
        assert_eq!(err.status(), Some(&want));
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(err.http_headers(), Some(&json_headers()));
        Ok(())
    }

    #[tokio::test]
    #[test_case(200, "{}"; "200 with empty object")]
    #[test_case(200, ""; "200 with empty content")]
    #[test_case(204, "{}"; "204 with empty object")]
    #[test_case(204, ""; "204 with empty content")]
    async fn empty_content(code: u16, content: &str) -> TestResult {
        let response = to_http_response::<Value>(response(code, content)?).await?;
        let want = if content.is_empty() { Value::Null } else { json!({}) };
        assert_eq!(response.status_code(), Some(code));
        assert_eq!(response.into_body(), want);
        Ok(())
    }

    #[tokio::test]
    async fn bad_content() -> TestResult {
        let got = to_http_response::<Value>(response(200, "not json")?).await;
        assert!(
            got.as_ref().is_err_and(|e| e.is_deserialization()),
            "{got:?}"
        );
        Ok(())
    }
}
