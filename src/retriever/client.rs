//! HTTP client for the GitHub contents API
//!
//! Each request is attempted exactly once: no retry, no timeout.

use crate::error::{AppError, FetchError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, StatusCode};

/// Default User-Agent header (GitHub rejects requests without one)
const DEFAULT_USER_AGENT: &str = concat!("dep-analyzer/", env!("CARGO_PKG_VERSION"));

/// Media type recommended by the GitHub REST API
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, AppError> {
        Self::with_token(None)
    }

    /// Create a client that authenticates with `token` when given
    pub fn with_token(token: Option<&str>) -> Result<Self, AppError> {
        Self::from_builder(Client::builder(), token)
    }

    /// Finish `builder` with the GitHub headers and an optional bearer token
    pub fn from_builder(builder: ClientBuilder, token: Option<&str>) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                AppError::HttpClient {
                    message: format!("invalid token: {}", e),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = builder
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Perform a GET request and parse the JSON body; only HTTP 200 is accepted
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(url, e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::network(url, e.to_string()))?;

        serde_json::from_slice(&body)
            .map_err(|e| FetchError::invalid_response(url, format!("failed to parse JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn test_http_client_with_token() {
        assert!(HttpClient::with_token(Some("ghp_example")).is_ok());
    }

    #[test]
    fn test_http_client_rejects_invalid_token() {
        let result = HttpClient::with_token(Some("bad\ntoken"));
        assert!(matches!(result, Err(AppError::HttpClient { .. })));
    }

    #[test]
    fn test_default_user_agent() {
        assert!(DEFAULT_USER_AGENT.starts_with("dep-analyzer/"));
    }
}
