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

use super::CredentialsError;
use super::rpc::Status;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error type for every RPC in the generated clients.
///
/// An error comes from one of several places: the service rejected the
/// request, the request timed out, the transport failed, or the request could
/// not be built from the application inputs. Use the `is_*` predicates to
/// tell them apart, and [status][Error::status] for service errors.
///
/// # Example
/// ```
/// use google_cloud_gax::error::Error;
/// use google_cloud_gax::error::rpc::{Code, Status};
/// fn describe(e: &Error) -> String {
///     match e.status() {
///         Some(status) => format!("the service returned {:?}", status.code),
///         None if e.is_timeout() => "the request timed out".to_string(),
///         None if e.is_binding() => format!("the request is incomplete: {e}"),
///         None => format!("the request failed: {e}"),
///     }
/// }
/// let e = Error::service(Status::default().set_code(Code::NotFound));
/// assert_eq!(describe(&e), "the service returned NotFound");
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Wraps a [Status] returned by the service.
    ///
    /// ```
    /// # use google_cloud_gax::error::Error;
    /// # use google_cloud_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::Aborted).set_message("try again");
    /// assert_eq!(Error::service(status.clone()).status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_http_metadata(status, None, None)
    }

    /// The request deadline expired before a response arrived.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The client gave up waiting for the response.
    ///
    /// The service may still complete the request.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// The transport failed while sending or receiving.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// The transport failed, the request may or may not have reached the
    /// service.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// The response body is not the expected message.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// A successful response could not be decoded.
    ///
    /// The service completed the request. Check the endpoint if this happens
    /// for every call, a proxy may be answering instead of the service.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// The request could not be encoded.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request was never sent because it could not be encoded, for
    /// example a header value with invalid characters.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The [Status] payload associated with this error.
    ///
    /// Google Cloud services return a [Status] message detailing any problem.
    /// The [Code][crate::error::rpc::Code] is a good starting point to
    /// troubleshoot the problem. The message often names the fields with
    /// missing or invalid values.
    ///
    /// See [AIP-193] for background information about the error model.
    ///
    /// [AIP-193]: https://google.aip.dev/193
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.status),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use google_cloud_gax::error::Error;
    /// let e = Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"));
    /// assert_eq!(e.http_status_code(), Some(404));
    /// ```
    ///
    /// Proxies and load balancers may generate errors without the payload
    /// described in [AIP-193]. In such cases the client library returns the
    /// status code, headers, and payload.
    ///
    /// [AIP-193]: https://google.aip.dev/193
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http(d) => Some(d.status_code),
            ErrorKind::Service(d) => d.status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// Many errors do not have this information, for example errors detected
    /// before the request is sent, or timeouts.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Http(d) => Some(&d.headers),
            ErrorKind::Service(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    ///
    /// Only present when the response body could not be parsed as a [Status].
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Http(d) => Some(&d.payload),
            _ => None,
        }
    }

    /// Used by the generated clients, subject to change.
    ///
    /// Creates service errors including the HTTP metadata.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status,
            status_code,
            headers,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Used by the generated clients, subject to change.
    ///
    /// Creates errors for HTTP responses without a [Status] payload.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = HttpDetails {
            status_code,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Http(Box::new(details)),
            source: None,
        }
    }

    /// Used by the generated clients, subject to change.
    ///
    /// The request cannot be formatted. Either a required field is missing,
    /// or the application provided a field mapping that does not match the
    /// request type.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// The request is missing required parameters, or the parameters provided
    /// do not match the request type.
    ///
    /// This is always generated by the client, and the request was never sent.
    ///
    /// # Troubleshooting
    ///
    /// The error [source][std::error::Error::source] names the missing or
    /// invalid field.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// Used by the generated clients, subject to change.
    ///
    /// Cannot create the authentication headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers for the request.
    ///
    /// The request was never sent. The error [source][std::error::Error::source]
    /// is a [CredentialsError] with more details.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = self
            .source
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_default();
        match &self.kind {
            ErrorKind::Binding => write!(f, "cannot format the request: {source}"),
            ErrorKind::Serialization => write!(f, "cannot serialize the request: {source}"),
            ErrorKind::Deserialization => write!(f, "cannot deserialize the response: {source}"),
            ErrorKind::Authentication => {
                write!(f, "cannot create the authentication headers: {source}")
            }
            ErrorKind::Timeout => write!(f, "the request exceeded the request deadline: {source}"),
            ErrorKind::Io => write!(f, "the transport reports an error: {source}"),
            ErrorKind::Http(d) => match std::str::from_utf8(d.payload.as_ref()) {
                Ok(message) => write!(
                    f,
                    "the HTTP transport reports a [{}] error: {message}",
                    d.status_code
                ),
                Err(_) => write!(
                    f,
                    "the HTTP transport reports a [{}] error: {:?}",
                    d.status_code, d.payload
                ),
            },
            ErrorKind::Service(d) => write!(
                f,
                "the service reports an error with code {} described as: {}",
                d.status.code, d.status.message
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Io,
    Http(Box<HttpDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct HttpDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Code;
    use std::error::Error as _;

    #[test]
    fn service() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("NOT FOUND");
        let error = Error::service(status.clone());
        assert_eq!(error.status(), Some(&status));
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), None);
        assert_eq!(error.http_headers(), None);
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains(Code::NotFound.name()), "{error}");
    }

    #[test]
    fn service_with_metadata() {
        let status = Status::default()
            .set_code(Code::PermissionDenied)
            .set_message("uh-oh");
        let mut headers = HeaderMap::new();
        headers.insert("x-test", http::HeaderValue::from_static("value"));
        let error =
            Error::service_with_http_metadata(status.clone(), Some(403), Some(headers.clone()));
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.http_status_code(), Some(403));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), None);
    }

    #[test]
    fn http() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", http::HeaderValue::from_static("text/plain"));
        let error = Error::http(502, headers.clone(), bytes::Bytes::from_static(b"bad gateway"));
        assert_eq!(error.status(), None);
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(
            error.http_payload(),
            Some(&bytes::Bytes::from_static(b"bad gateway"))
        );
        let fmt = error.to_string();
        assert!(fmt.contains("502") && fmt.contains("bad gateway"), "{fmt}");
    }

    #[test]
    fn predicates() {
        let error = Error::timeout("t");
        assert!(error.is_timeout(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");

        let error = Error::io("i");
        assert!(error.is_io(), "{error:?}");
        assert!(error.to_string().contains("transport"), "{error}");

        let error = Error::ser("s");
        assert!(error.is_serialization(), "{error:?}");

        let error = Error::deser("d");
        assert!(error.is_deserialization(), "{error:?}");

        let error = Error::binding("missing field `name`");
        assert!(error.is_binding(), "{error:?}");
        assert!(error.to_string().contains("`name`"), "{error}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(CredentialsError::from_msg(false, "bad key"));
        assert!(error.is_authentication(), "{error:?}");
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(source.is_some_and(|e| !e.is_transient()), "{error:?}");
        assert!(error.to_string().contains("bad key"), "{error}");
    }
}
