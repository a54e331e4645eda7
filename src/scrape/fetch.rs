//! Blocking HTTP fetcher with per-attempt client identity rotation.

use crate::scrape::error::FetchError;
use log::debug;
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;

/// Client identities rotated across fetch attempts.
const USER_AGENTS: [&str; 2] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.99 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.99 Safari/537.36",
];

/// Per-request timeout covering connect and body read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues single blocking GETs. One fetcher is shared for the whole run so the
/// underlying connection pool is reused; the user agent is re-picked on every
/// call, not per station.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the response body. Non-success statuses,
    /// network failures and timeouts all map to a [`FetchError`].
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let agent = USER_AGENTS[rand::rng().random_range(0..USER_AGENTS.len())];
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, agent)
            .send()
            .map_err(|e| FetchError::Network(url.to_string(), e))?;

        let response = response.error_for_status().map_err(|e| match e.status() {
            Some(status) => FetchError::Status {
                url: url.to_string(),
                status,
                source: e,
            },
            None => FetchError::Network(url.to_string(), e),
        })?;

        response
            .text()
            .map_err(|e| FetchError::Body(url.to_string(), e))
    }
}
