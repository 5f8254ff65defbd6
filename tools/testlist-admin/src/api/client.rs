//! HTTP client for the `testcase` resource.

use reqwest::{Client, StatusCode};
use testlist_view::{LoadError, TestDescriptor};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::AdminConfig;

/// Errors that can occur when fetching test cases.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Unexpected status: {0}")]
    Status(StatusCode),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<ApiError> for LoadError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http(e) if e.is_timeout() => LoadError::Transport("request timed out".into()),
            ApiError::Http(e) => LoadError::Transport(e.to_string()),
            ApiError::Connection(msg) => LoadError::Transport(msg),
            ApiError::Status(status) => LoadError::Status {
                code: status.as_u16(),
            },
            ApiError::Parse(msg) => LoadError::Malformed(msg),
        }
    }
}

/// Client for the test case listing.
pub struct TestCaseClient {
    client: Client,
    url: String,
}

impl TestCaseClient {
    /// Create a client for the configured endpoint and resource.
    pub fn new(config: &AdminConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self {
            client,
            url: config.resource_url(),
        })
    }

    /// Full URL of the `testcase` resource.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `GET testcase`: the whole collection, no parameters, no paging.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn get_tests(&self) -> Result<Vec<TestDescriptor>, ApiError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ApiError::Connection(format!("Cannot connect to {}", self.url))
                } else {
                    ApiError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        let tests: Vec<TestDescriptor> =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;

        debug!(count = tests.len(), "Fetched test cases");
        Ok(tests)
    }
}
