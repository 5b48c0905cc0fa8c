//! HTTP client abstraction for testability.

use thiserror::Error;

/// Errors raised by HTTP client operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HttpError {
    /// Request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Request(String),
}

/// Trait for blocking HTTP GET operations.
///
/// The geocoder is the only network consumer in this crate; the trait exists
/// so tests can inject canned responses instead of hitting the network.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request, returning the response body as bytes.
    fn get(&self, url: &str) -> Result<Vec<u8>, HttpError>;
}

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

/// User-Agent sent with geocoding requests.
///
/// Nominatim's usage policy rejects requests without an identifying agent.
const USER_AGENT: &str = concat!("mapmuse/", env!("CARGO_PKG_VERSION"));

impl ReqwestClient {
    /// Creates a new client with the default 10 second timeout.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(10)
    }

    /// Creates a new client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, HttpError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpError::Request(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| HttpError::Request(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(HttpError::Request(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| HttpError::Request(format!("failed to read response: {}", e)))
    }
}
