//! HTTP client for pinoymovieshub.ph
//!
//! Thin wrapper over `reqwest` that applies the site's headers and maps
//! non-success statuses to [`PinoyError`]. Requests are never retried.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use reqwest::Response;

use crate::error::{PinoyError, Result};
use crate::url::PINOY_BASE_URL;

/// Default User-Agent mimicking a modern browser
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header, Filipino first
const DEFAULT_ACCEPT_LANGUAGE: &str = "tl-PH,tl;q=0.9,en-US;q=0.8,en;q=0.7";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root (default: `https://pinoymovieshub.ph`)
    pub base_url: String,
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Request timeout in seconds (default: none, the transport decides)
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: PINOY_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

/// HTTP client for Pinoy Movies Hub
pub struct PinoyClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Site root without trailing slash
    base_url: String,
    /// User-Agent, repeated explicitly on AJAX calls
    user_agent: HeaderValue,
}

impl PinoyClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `PinoyError::InvalidHeader` - the user agent is not a valid header value
    /// - `PinoyError::HttpError` - the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| PinoyError::InvalidHeader(config.user_agent.clone()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );

        let mut builder = reqwest::Client::builder()
            .user_agent(user_agent.clone())
            .default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent,
        })
    }

    /// Site root this client talks to, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch HTML from a path relative to the site root (e.g. `"/"`)
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        self.get(&url).await
    }

    /// Fetch the body of an absolute URL
    ///
    /// # Errors
    /// - `PinoyError::HttpError` - network error
    /// - `PinoyError::NotFound` - server returned 404
    /// - `PinoyError::HttpStatus` - any other non-success status
    pub async fn get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        read_body(response, url).await
    }

    /// POST url-encoded form fields the way the site's player script does
    ///
    /// Adds `Sec-Fetch-Mode: cors` and a `Referer` pointing at the site root.
    pub async fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header(USER_AGENT, self.user_agent.clone())
            .header("Sec-Fetch-Mode", "cors")
            .header(REFERER, self.base_url.as_str())
            .form(fields)
            .send()
            .await?;
        read_body(response, url).await
    }
}

async fn read_body(response: Response, url: &str) -> Result<String> {
    let status = response.status();
    tracing::debug!(url, status = status.as_u16(), "response received");

    if status.is_success() {
        return Ok(response.text().await?);
    }

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(PinoyError::NotFound(url.to_string()));
    }

    Err(PinoyError::HttpStatus {
        status: status.as_u16(),
        url: url.to_string(),
    })
}
