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

use crate::Result;
use crate::errors;
use base64::prelude::{BASE64_URL_SAFE_NO_PAD, Engine as _};
use serde::Serialize;
use std::time::Duration;
use time::OffsetDateTime;

// Services reject assertions with `iat` in the future. Create the assertion
// with a 10 second margin to tolerate clock skew between machines.
pub(crate) const CLOCK_SKEW_FUDGE: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_TOKEN_TIMEOUT: Duration = Duration::from_secs(3600);

/// The claims of a self-signed JWT.
#[derive(Serialize)]
pub(crate) struct JwsClaims {
    pub iss: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(with = "time::serde::timestamp")]
    pub exp: OffsetDateTime,
    #[serde(with = "time::serde::timestamp")]
    pub iat: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl JwsClaims {
    pub(crate) fn encode(&self) -> Result<String> {
        if self.exp < self.iat {
            return Err(errors::non_transient_from_msg(format!(
                "expiration time {:?} must be later than issued time {:?}",
                self.exp, self.iat
            )));
        }
        if self.aud.is_some() && self.scope.is_some() {
            return Err(errors::non_transient_from_msg(format!(
                "expected only one of audience ({:?}) or scope ({:?})",
                self.aud, self.scope
            )));
        }
        let json = serde_json::to_string(&self).map_err(errors::non_transient)?;
        Ok(BASE64_URL_SAFE_NO_PAD.encode(json.as_bytes()))
    }
}

/// The header that describes who, what, and how a token was created.
#[derive(Serialize, Debug)]
pub(crate) struct JwsHeader<'a> {
    pub alg: &'a str,
    pub typ: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<&'a str>,
}

impl JwsHeader<'_> {
    pub(crate) fn encode(&self) -> Result<String> {
        let json = serde_json::to_string(&self).map_err(errors::non_transient)?;
        Ok(BASE64_URL_SAFE_NO_PAD.encode(json.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn decode(encoded: &str) -> anyhow::Result<Value> {
        let bytes = BASE64_URL_SAFE_NO_PAD.decode(encoded)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn claims(scope: Option<&str>, aud: Option<&str>, lifetime: i64) -> JwsClaims {
        let now = OffsetDateTime::now_utc();
        JwsClaims {
            iss: "test-iss".to_string(),
            scope: scope.map(str::to_string),
            aud: aud.map(str::to_string),
            exp: now + time::Duration::seconds(lifetime),
            iat: now,
            sub: Some("test-sub".to_string()),
        }
    }

    #[test]
    fn claims_with_audience() -> anyhow::Result<()> {
        let claims = claims(None, Some("https://test.googleapis.com/"), 3600);
        let v = decode(&claims.encode()?)?;
        assert_eq!(v["iss"], "test-iss");
        assert_eq!(v["aud"], "https://test.googleapis.com/");
        assert_eq!(v.get("scope"), None);
        assert_eq!(v["iat"], claims.iat.unix_timestamp());
        assert_eq!(v["exp"], claims.exp.unix_timestamp());
        assert_eq!(v["sub"], "test-sub");
        Ok(())
    }

    #[test]
    fn claims_with_scope() -> anyhow::Result<()> {
        let claims = claims(Some("scope1 scope2"), None, 3600);
        let v = decode(&claims.encode()?)?;
        assert_eq!(v["scope"], "scope1 scope2");
        assert_eq!(v.get("aud"), None);
        Ok(())
    }

    #[test]
    fn claims_exp_before_iat() {
        let claims = claims(None, None, -3600);
        let e = claims.encode().unwrap_err();
        assert!(e.to_string().contains("must be later than"), "{e}");
    }

    #[test]
    fn claims_scope_and_aud() {
        let claims = claims(Some("scope"), Some("aud"), 3600);
        let e = claims.encode().unwrap_err();
        assert!(e.to_string().contains("only one of"), "{e}");
    }

    #[test]
    fn header() -> anyhow::Result<()> {
        let header = JwsHeader {
            alg: "RS256",
            typ: "JWT",
            kid: Some("some-key-id"),
        };
        let v = decode(&header.encode()?)?;
        assert_eq!(v["alg"], "RS256");
        assert_eq!(v["typ"], "JWT");
        assert_eq!(v["kid"], "some-key-id");

        let header = JwsHeader {
            alg: "RS256",
            typ: "JWT",
            kid: None,
        };
        let v = decode(&header.encode()?)?;
        assert_eq!(v.get("kid"), None);
        Ok(())
    }
}
