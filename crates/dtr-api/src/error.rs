use thiserror::Error;

/// Errors returned by the admin API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the credential (HTTP 401).
    #[error("authorization rejected by the attendance backend")]
    Unauthorized,

    /// Any other non-2xx response. `detail` is the backend's human-readable
    /// message, surfaced verbatim so the operator can correct and retry.
    #[error("request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
