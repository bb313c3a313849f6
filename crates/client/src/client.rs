//! HTTP client for the SpendSmart backend API.
//!
//! Every resource-specific API trait from `spendsmart-core` is implemented on
//! [`SpendSmartApiClient`] in the sibling modules. This module holds the
//! shared request plumbing: URL building, headers, and response parsing.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use spendsmart_core::errors::{ApiError, Error, Result};

use crate::config::ClientConfig;

/// Longest slice of an error body quoted in error messages.
const MAX_ERROR_BODY_CHARS: usize = 200;

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types (internal, for parsing backend error responses)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// SpendSmart API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the SpendSmart backend.
///
/// # Example
///
/// ```ignore
/// let client = SpendSmartApiClient::new(ClientConfig::new("http://localhost:8080"))?;
/// let goals = client.list_goals().await?;
/// ```
#[derive(Debug, Clone)]
pub struct SpendSmartApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
}

impl SpendSmartApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty, the access token contains
    /// characters not allowed in a header, or the HTTP client cannot be
    /// initialized.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::InvalidConfigValue("API base URL is empty".to_string()));
        }

        let auth_header = config
            .access_token
            .as_deref()
            .map(|token| {
                HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                    Error::InvalidConfigValue(format!("Invalid access token format: {}", e))
                })
            })
            .transpose()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            auth_header,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(auth) = &self.auth_header {
            headers.insert(AUTHORIZATION, auth.clone());
        }
        headers
    }

    /// Build a full URL from a path and query parameters.
    pub(crate) fn url(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !params.is_empty() {
            let query: Vec<String> = params
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect();
            url = format!("{}?{}", url, query.join("&"));
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<reqwest::Response> {
        debug!("[SpendSmartApi] {} {}", method, url);

        let mut request = self.client.request(method, url).headers(self.headers());
        if let Some(body) = body {
            request = request.json(&body);
        }
        request
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("{}: {}", url, e)).into())
    }

    fn to_body<B: Serialize>(body: &B) -> Result<Value> {
        serde_json::to_value(body)
            .map_err(|e| Error::Unexpected(format!("Failed to encode request body: {}", e)))
    }

    /// Make a GET request and parse the response.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path, params);
        let response = self.send(Method::GET, &url, None).await?;
        parse_response(&url, response).await
    }

    /// Make a POST request with a JSON body and parse the response.
    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path, &[]);
        let response = self
            .send(Method::POST, &url, Some(Self::to_body(body)?))
            .await?;
        parse_response(&url, response).await
    }

    /// Make a PUT request with a JSON body and parse the response.
    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path, &[]);
        let response = self
            .send(Method::PUT, &url, Some(Self::to_body(body)?))
            .await?;
        parse_response(&url, response).await
    }

    /// Make a DELETE request. Any response body is ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path, &[]);
        let response = self.send(Method::DELETE, &url, None).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(&url, status, &body))
    }
}

/// Percent-encode a single path segment such as a resource id.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Parse an HTTP response, handling errors appropriately.
async fn parse_response<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Request(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        return Err(status_error(url, status, &body));
    }

    parse_body(&body)
}

/// Decode a success body, unwrapping a `{ "data": ... }` envelope if present.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        ApiError::Decode(format!("{} - {}", e, truncate(body)))
    })?;

    if let Some(data) = value.get("data") {
        if let Ok(parsed) = serde_json::from_value::<T>(data.clone()) {
            return Ok(parsed);
        }
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::Decode(format!("{} - {}", e, truncate(body))).into())
}

/// Convert a non-success response into an error, preferring the backend's
/// own message.
pub(crate) fn status_error(url: &str, status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|err| err.message.or(err.error))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("no response body")
                    .to_string()
            } else {
                truncate(body)
            }
        });

    if status == StatusCode::NOT_FOUND {
        return ApiError::NotFound(format!("{} ({})", url, message)).into();
    }
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
    .into()
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
