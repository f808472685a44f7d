//! Thin HTTP client for the HR backend
//!
//! One request path, one error kind: every failure surfaces as an
//! [`ApiError`] whose message is either the server's `detail` string or
//! a synthesized status-code message. Callers render it as banner text
//! and cannot distinguish causes beyond that.

mod attendance;
mod employees;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Error returned by every API call: a human-readable message, nothing else.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for ApiError {
    /// Transport failures keep the underlying error text unchanged.
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// HTTP client bound to one backend base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.endpoint(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.endpoint(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.endpoint(path))
    }

    /// Send a request and parse the JSON body into `T`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.check(request).await?;
        Ok(response.json().await?)
    }

    /// Send a request where only the status matters; any body is ignored.
    pub(crate) async fn execute_status(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.check(request).await?;
        Ok(())
    }

    async fn check(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.json::<Value>().await.ok();
        Err(ApiError::new(error_message(status, body.as_ref())))
    }
}

/// Failed responses are expected to carry `{"detail": "..."}`; any other
/// shape degrades to a generic status-code message.
fn error_message(status: StatusCode, body: Option<&Value>) -> String {
    body.and_then(|body| body.get("detail"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_message_prefers_detail_field() {
        let body = json!({ "detail": "duplicate entry" });
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, Some(&body)),
            "duplicate entry"
        );
    }

    #[test]
    fn error_message_falls_back_when_detail_missing() {
        let body = json!({ "message": "nope" });
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, Some(&body)),
            "Request failed with status 500"
        );
    }

    #[test]
    fn error_message_falls_back_when_detail_not_a_string() {
        let body = json!({ "detail": 42 });
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, Some(&body)),
            "Request failed with status 404"
        );
    }

    #[test]
    fn error_message_falls_back_without_body() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, None),
            "Request failed with status 502"
        );
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(
            client.endpoint("/api/employees"),
            "http://localhost:8000/api/employees"
        );
    }

    #[test]
    fn endpoint_trims_trailing_base_slash() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.endpoint("/api/attendance"),
            "http://localhost:8000/api/attendance"
        );
    }
}
