//! Hugging Face Inference API client module
//!
//! Encapsulates the single summarization call: payload construction, the
//! bearer-authorized POST, and classification of the response into an
//! [`Outcome`].

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::outcome::{Outcome, classify_body};
use crate::core::config::{API_URL, AppConfig};
use crate::errors::SummarizeError;

/// Explicit per-request timeout; worst-case latency is bounded here rather
/// than by the transport default.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct SummaryParameters {
    min_length: u32,
    max_length: u32,
}

#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
    parameters: SummaryParameters,
}

/// Client for the hosted summarization model.
///
/// Holds the resolved credential for the process lifetime; each `summarize`
/// call issues exactly one request and never retries.
pub struct SummaryClient {
    http: Client,
    endpoint: String,
    api_token: String,
}

impl SummaryClient {
    /// Creates a client targeting the fixed production endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, SummarizeError> {
        Self::with_endpoint(config, API_URL)
    }

    /// Same as [`SummaryClient::new`] but targeting an explicit endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_endpoint(config: &AppConfig, endpoint: &str) -> Result<Self, SummarizeError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SummarizeError::HttpError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            api_token: config.api_token.clone(),
        })
    }

    /// Requests a summary for `text` with the given length bounds.
    ///
    /// Bounds are passed through verbatim; `min_length > max_length` is not
    /// rejected here and the remote behavior for that case is undefined.
    /// Every failure is folded into the returned [`Outcome`], never
    /// propagated as an error.
    pub async fn summarize(&self, text: &str, min_length: u32, max_length: u32) -> Outcome {
        let request = SummaryRequest {
            inputs: text,
            parameters: SummaryParameters {
                min_length,
                max_length,
            },
        };

        info!(
            "Requesting summary ({} chars, bounds {}..={})",
            text.chars().count(),
            min_length,
            max_length
        );

        let response = match self.dispatch(&request).await {
            Ok(response) => response,
            Err(e) => {
                return Outcome::TransportFailure {
                    message: e.to_string(),
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response body: {e}"));
            return Outcome::HttpFailure {
                status: status.as_u16(),
                message,
            };
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                return Outcome::TransportFailure {
                    message: SummarizeError::from(e).to_string(),
                };
            }
        };

        debug!("API response body: {body}");
        classify_body(&body)
    }

    async fn dispatch(
        &self,
        request: &SummaryRequest<'_>,
    ) -> Result<reqwest::Response, SummarizeError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(request)
            .send()
            .await
            .map_err(|e| SummarizeError::HttpError(format!("API request failed: {e}")))?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_shape() {
        let request = SummaryRequest {
            inputs: "Some text to summarize.",
            parameters: SummaryParameters {
                min_length: 30,
                max_length: 100,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "inputs": "Some text to summarize.",
                "parameters": {"min_length": 30, "max_length": 100}
            })
        );
    }

    #[test]
    fn test_inverted_bounds_serialize_unmodified() {
        // min > max is a documented pass-through, not a validation error.
        let request = SummaryRequest {
            inputs: "",
            parameters: SummaryParameters {
                min_length: 120,
                max_length: 10,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["parameters"]["min_length"], 120);
        assert_eq!(value["parameters"]["max_length"], 10);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_failure() {
        let config = AppConfig {
            api_token: "test-token".to_string(),
        };
        // Port 1 on loopback is not listening; the connection is refused
        // before any HTTP exchange happens.
        let client = SummaryClient::with_endpoint(&config, "http://127.0.0.1:1/summarize").unwrap();

        let outcome = client.summarize("hello", 30, 100).await;
        match outcome {
            Outcome::TransportFailure { message } => {
                assert!(message.contains("API request failed"));
            }
            other => panic!("expected TransportFailure, got {other:?}"),
        }
    }
}
