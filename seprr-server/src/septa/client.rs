//! SEPTA NextToArrive HTTP client.
//!
//! One request per lookup, no retries. The hackathon API needs no
//! authentication but expects a `User-Agent`.

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, info};

use crate::domain::{ArrivalRecord, StationName};

use super::convert::convert_trains;
use super::error::SeptaError;
use super::types::NextToArriveResponse;

/// Default base URL for the SEPTA hackathon API.
const DEFAULT_BASE_URL: &str = "http://www3.septa.org/hackathon";

/// Default user agent sent with every request.
const DEFAULT_USER_AGENT: &str = concat!("seprr-server/", env!("CARGO_PKG_VERSION"));

/// How much of an unparseable body to keep in errors.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the SEPTA client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeptaConfig {
    /// Base URL for the API
    pub base_url: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl SeptaConfig {
    /// Create a config pointing at the public API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for SeptaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// SEPTA NextToArrive API client.
#[derive(Debug, Clone)]
pub struct SeptaClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SeptaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SeptaConfig) -> Result<Self, SeptaError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| SeptaError::InvalidBaseUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SeptaError::InvalidBaseUrl {
                url: config.base_url,
                message: "cannot be a base URL".to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    /// Build the NextToArrive URL for a pair of stations.
    ///
    /// Station names go in as path segments, so spaces are percent-encoded.
    pub fn next_to_arrive_url(
        &self,
        from: StationName,
        to: StationName,
        count: u8,
    ) -> Result<Url, SeptaError> {
        let mut url = self.base_url.clone();
        let count = count.to_string();
        url.path_segments_mut()
            .map_err(|_| SeptaError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                message: "cannot be a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(["NextToArrive", from.as_str(), to.as_str(), count.as_str()]);
        Ok(url)
    }

    /// Fetch the next `count` trains from `from` to `to`.
    pub async fn next_to_arrive(
        &self,
        from: StationName,
        to: StationName,
        count: u8,
    ) -> Result<Vec<ArrivalRecord>, SeptaError> {
        let url = self.next_to_arrive_url(from, to, count)?;
        debug!(%url, "calling SEPTA NextToArrive");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        info!(%from, %to, status = status.as_u16(), "SEPTA NextToArrive complete");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SeptaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_next_to_arrive(&body)
    }
}

/// Parse a NextToArrive body into arrival records.
pub fn parse_next_to_arrive(body: &str) -> Result<Vec<ArrivalRecord>, SeptaError> {
    let response: NextToArriveResponse =
        serde_json::from_str(body).map_err(|e| SeptaError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })?;

    match response {
        NextToArriveResponse::Trains(trains) => Ok(convert_trains(&trains)),
        NextToArriveResponse::Error { error } => Err(SeptaError::Provider(error)),
    }
}
