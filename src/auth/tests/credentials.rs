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
    use google_cloud_auth::credentials::{
        Credentials, CredentialsSource, access_token, anonymous, api_key_credentials,
    };
    use google_cloud_auth::errors::CredentialsError;
    use http::header::AUTHORIZATION;
    use scoped_env::ScopedEnv;
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    static_assertions::assert_impl_all!(Credentials: Clone, Send, Sync, std::fmt::Debug);
    static_assertions::assert_impl_all!(CredentialsSource: Clone, Send, Sync, std::fmt::Debug);
    static_assertions::assert_impl_all!(CredentialsError: std::error::Error, Send, Sync);

    #[tokio::test]
    async fn builders() -> TestResult {
        let headers = anonymous::Builder::new().build().headers().await?;
        assert!(headers.is_empty(), "{headers:?}");

        let headers = access_token::Builder::new("t").build().headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer t")
        );

        let headers = api_key_credentials::Builder::new("k")
            .build()
            .headers()
            .await?;
        assert_eq!(
            headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()),
            Some("k")
        );
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_credentials_from_env() -> TestResult {
        let file = tempfile::NamedTempFile::new()?;
        let path = file.into_temp_path();
        let contents = json!({
            "type": "api_key",
            "api_key": "from-file",
        });
        std::fs::write(&path, contents.to_string())?;
        let _e = ScopedEnv::set(
            "GOOGLE_APPLICATION_CREDENTIALS",
            path.to_str().unwrap_or_default(),
        );

        let creds = google_cloud_auth::credentials::Builder::default()
            .with_quota_project_id("my-project")
            .build()?;
        let headers = creds.headers().await?;
        assert_eq!(
            headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()),
            Some("from-file")
        );
        assert_eq!(
            headers
                .get("x-goog-user-project")
                .and_then(|v| v.to_str().ok()),
            Some("my-project")
        );
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn default_credentials_malformed() -> TestResult {
        for contents in ["{}", r#"{"type": 42}"#, "not json"] {
            let file = tempfile::NamedTempFile::new()?;
            let path = file.into_temp_path();
            std::fs::write(&path, contents)?;
            let _e = ScopedEnv::set(
                "GOOGLE_APPLICATION_CREDENTIALS",
                path.to_str().unwrap_or_default(),
            );
            let got = google_cloud_auth::credentials::Builder::default().build();
            assert!(got.is_err(), "{contents}");
        }
        Ok(())
    }
}
