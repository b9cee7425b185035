//! HTTP transport for the calculation backend.
//!
//! Thin reqwest wrapper around the two backend endpoints. Interpretation of
//! the `success` envelope is left to [`crate::session::Session`]; this layer
//! only moves bytes and reports transport failures.

use std::time::Duration;

use async_trait::async_trait;

use crate::api::{CalculateRequest, CalculateResponse, HistoryResponse};

/// Errors from the backend transport.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection, timeout, or body decode failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Server answered with a non-success status.
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },
}

/// The two backend operations the session depends on.
///
/// [`CalcClient`] is the real implementation; tests substitute scripted
/// ones to drive the session without a network.
#[async_trait]
pub trait CalculationApi {
    /// Reads the full calculation list.
    async fn fetch_history(&self) -> Result<HistoryResponse, ClientError>;

    /// Submits two operands for addition.
    async fn calculate(&self, num1: f64, num2: f64) -> Result<CalculateResponse, ClientError>;
}

/// HTTP client for the calculation backend.
#[derive(Debug, Clone)]
pub struct CalcClient {
    base_url: String,
    client: reqwest::Client,
}

impl CalcClient {
    /// Coarse safety timeout for backend calls.
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a new client pointing at the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the backend (e.g., `http://localhost:5001`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client with a custom reqwest client (for custom timeouts, etc.).
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CalculationApi for CalcClient {
    async fn fetch_history(&self) -> Result<HistoryResponse, ClientError> {
        let url = format!("{}/api/calculations", self.base_url);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: HistoryResponse = resp.json().await?;
        tracing::debug!(records = response.data.len(), "fetched history");
        Ok(response)
    }

    async fn calculate(&self, num1: f64, num2: f64) -> Result<CalculateResponse, ClientError> {
        let request = CalculateRequest { num1, num2 };
        let url = format!("{}/api/calculate", self.base_url);
        tracing::debug!(num1, num2, "sending calculation");

        let resp = self.client.post(&url).json(&request).send().await?;

        // Status is checked before the body is parsed so a non-2xx never
        // surfaces as a decode error.
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: CalculateResponse = resp.json().await?;
        tracing::debug!(success = response.success, "received calculation response");
        Ok(response)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CalcClient::new("http://localhost:5001");
        assert_eq!(client.base_url(), "http://localhost:5001");
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = CalcClient::new("http://localhost:5001/");
        assert_eq!(client.base_url(), "http://localhost:5001");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let client = CalcClient::with_client("http://example.com/", http);
        assert_eq!(client.base_url(), "http://example.com");
    }

    #[test]
    fn test_api_error_display() {
        let err = ClientError::Api {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error 500: boom");
    }
}
