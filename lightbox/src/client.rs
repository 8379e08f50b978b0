//! HTTP client for the upstream combined geocode service.
//!
//! [`CombinedClient`] forwards [`CombinedParams`] as a query string to a
//! configured URL and turns whatever comes back into a [`LookupResult`].
//! Transport failures are retried; HTTP error statuses are not, they are
//! passed on to the caller as-is.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::{LightboxError, Result};
use crate::lookup::{CombinedLookup, LookupResult, Payload};
use crate::params::CombinedParams;

/// Default timeout for upstream requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries after a transport failure.
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Header carrying the upstream API key.
const API_KEY_HEADER: &str = "x-api-key";

/// Status reported when the upstream could not be reached or answered garbage.
const BAD_GATEWAY: u16 = 502;

/// Status reported when the upstream did not answer in time.
const GATEWAY_TIMEOUT: u16 = 504;

/// Configuration for the upstream combined service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the upstream combined endpoint.
    pub url: String,
    /// API key sent in the `x-api-key` header, if any.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Number of retry attempts on transport failure.
    pub max_retries: u32,
}

impl ClientConfig {
    /// Create a configuration for the given URL with default settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Production [`CombinedLookup`] backed by `reqwest`.
pub struct CombinedClient {
    client: Client,
    config: ClientConfig,
}

impl CombinedClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LightboxError::ClientInit {
                reason: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    /// Create a [`CombinedClientBuilder`] for the given upstream URL.
    pub fn builder(url: impl Into<String>) -> CombinedClientBuilder {
        CombinedClientBuilder::new(url)
    }

    /// Upstream URL this client forwards to.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Whether an API key is attached to upstream requests.
    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Configured request timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.config.timeout_secs
    }

    /// Configured number of retries.
    pub fn max_retries(&self) -> u32 {
        self.config.max_retries
    }

    /// Send the request once, returning the raw status and body bytes.
    async fn send_once(&self, params: &CombinedParams) -> reqwest::Result<(u16, Vec<u8>)> {
        let mut request = self.client.get(&self.config.url).query(params);

        if let Some(key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        Ok((status, bytes.to_vec()))
    }
}

#[async_trait]
impl CombinedLookup for CombinedClient {
    async fn lookup(&self, params: &CombinedParams) -> LookupResult {
        let mut last_error = None;
        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                // Brief delay before retry
                tokio::time::sleep(Duration::from_millis(500 * attempt as u64)).await;
            }

            match self.send_once(params).await {
                Ok((status, body)) => {
                    tracing::debug!(status = status, bytes = body.len(), "Upstream responded");
                    return decode_payload(status, &body);
                }
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt,
                        max_retries = self.config.max_retries,
                        error = %e,
                        "Upstream request failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if e.is_timeout() => {
                LookupResult::detail(GATEWAY_TIMEOUT, "Upstream request timed out")
            }
            Some(e) => LookupResult::detail(BAD_GATEWAY, format!("Upstream request failed: {}", e)),
            None => LookupResult::detail(BAD_GATEWAY, "Upstream request failed"),
        }
    }
}

/// Turn an upstream status and body into a [`LookupResult`].
///
/// A body that is not a JSON object becomes an empty payload. If the upstream
/// claimed success with such a body, the result is reported as a bad gateway
/// instead.
fn decode_payload(status: u16, body: &[u8]) -> LookupResult {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(payload)) => LookupResult::new(payload, status),
        _ if status == 200 => {
            LookupResult::detail(BAD_GATEWAY, "Upstream returned a malformed payload")
        }
        _ => LookupResult::new(Payload::new(), status),
    }
}

/// Builder for creating a [`CombinedClient`] with custom configuration.
///
/// # Example
///
/// ```ignore
/// use lightbox::CombinedClientBuilder;
///
/// let client = CombinedClientBuilder::new("https://api.example.com/combined")
///     .api_key("secret")
///     .timeout_secs(10)
///     .build()?;
/// ```
pub struct CombinedClientBuilder {
    config: ClientConfig,
}

impl CombinedClientBuilder {
    /// Create a new builder for the given upstream URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(url),
        }
    }

    /// Create a builder configured from environment variables.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `LIGHTBOX_COMBINED_URL` | Upstream combined endpoint | Required |
    /// | `LIGHTBOX_API_KEY` | Sent as `x-api-key` header | None |
    /// | `LIGHTBOX_TIMEOUT_SECS` | Request timeout | 30 |
    /// | `LIGHTBOX_MAX_RETRIES` | Retries on transport failure | 2 |
    ///
    /// # Errors
    ///
    /// Returns an error if `LIGHTBOX_COMBINED_URL` is not set, or if a
    /// numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("LIGHTBOX_COMBINED_URL").map_err(|_| {
            LightboxError::MissingConfig {
                var: "LIGHTBOX_COMBINED_URL",
            }
        })?;

        let mut config = ClientConfig::new(url);
        config.api_key = std::env::var("LIGHTBOX_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        if let Some(timeout_secs) = parse_env("LIGHTBOX_TIMEOUT_SECS")? {
            config.timeout_secs = timeout_secs;
        }
        if let Some(max_retries) = parse_env("LIGHTBOX_MAX_RETRIES")? {
            config.max_retries = max_retries;
        }

        Ok(Self { config })
    }

    /// Set the upstream URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Attach an API key to every upstream request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the request timeout in seconds.
    ///
    /// Default is 30 seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Set the maximum number of retries after a transport failure.
    ///
    /// Default is 2.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Build the [`CombinedClient`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created (e.g., due to
    /// TLS initialization failure).
    pub fn build(self) -> Result<CombinedClient> {
        CombinedClient::new(self.config)
    }
}

/// Read and parse an optional environment variable.
fn parse_env<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| LightboxError::InvalidConfig { var, value }),
        Err(_) => Ok(None),
    }
}
