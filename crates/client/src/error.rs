/// Errors from the client layer.
///
/// A non-2xx status is *not* an error here: it is a response like any other.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The body could not be decoded into the requested shape.
    #[error("Response from {url} ({status}) is not the expected JSON: {source}")]
    Decode {
        url: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}
