use thiserror::Error;

/// Failures of a single HTTP fetch attempt. Every variant is retryable.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to construct http client")]
    Client(#[source] reqwest::Error),

    #[error("network request failed for {0}")]
    Network(String, #[source] reqwest::Error),

    #[error("request for {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body for {0}")]
    Body(String, #[source] reqwest::Error),
}

/// Everything a fetch-and-parse attempt can fail with; the retry policy
/// retries any of these. Selector misses are not errors — they degrade to
/// missing fields inside the parser — but a parser implementation may still
/// reject a page whose content cannot be interpreted as values.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not interpret page content: {0}")]
    Parse(String),
}
