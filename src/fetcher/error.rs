#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a complete response: DNS, connection,
    /// TLS, timeout, or a failure while reading the body
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Fetcher was already closed")]
    Closed,
}
