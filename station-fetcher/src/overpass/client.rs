//! Overpass interpreter HTTP client.

use std::time::Duration;

use tracing::{debug, warn};

use super::error::OverpassError;
use super::query::CHINA_RAILWAY_QUERY;
use super::types::OverpassResponse;

/// Default public Overpass interpreter.
pub const DEFAULT_BASE_URL: &str = "https://overpass-api.de/api/interpreter";

/// Default client timeout: 15 minutes.
pub const DEFAULT_TIMEOUT_SECS: u64 = 900;

/// How much of an error body to keep in messages.
const ERROR_BODY_LIMIT: usize = 500;

/// Configuration for the Overpass client.
#[derive(Debug, Clone)]
pub struct OverpassConfig {
    /// Interpreter endpoint URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Overpass QL query sent as the `data` form field
    pub query: String,
}

impl OverpassConfig {
    /// Create a config for the public interpreter and the China railway query.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            query: CHINA_RAILWAY_QUERY.to_string(),
        }
    }

    /// Set a custom endpoint (mirrors, or a local server in tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Replace the query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for one Overpass interpreter.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    http: reqwest::Client,
    base_url: String,
    query: String,
    timeout_secs: u64,
}

impl OverpassClient {
    pub fn new(config: OverpassConfig) -> Result<Self, OverpassError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            query: config.query,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Endpoint this client posts to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run the query and return the raw result elements.
    ///
    /// Makes exactly one request. There is no retry.
    pub async fn fetch_elements(&self) -> Result<Vec<serde_json::Value>, OverpassError> {
        debug!(url = %self.base_url, "posting Overpass query");

        let response = self
            .http
            .post(&self.base_url)
            .form(&[("data", self.query.as_str())])
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OverpassError::Api {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;

        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| OverpassError::Json {
                message: e.to_string(),
            })?;

        if let Some(remark) = &parsed.remark {
            warn!(%remark, "Overpass returned a remark; results may be incomplete");
        }

        debug!(count = parsed.elements.len(), "received Overpass elements");
        Ok(parsed.elements)
    }

    fn classify(&self, err: reqwest::Error) -> OverpassError {
        if err.is_timeout() {
            OverpassError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            OverpassError::Http(err)
        }
    }
}
