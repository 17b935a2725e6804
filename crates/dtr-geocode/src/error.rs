use thiserror::Error;

/// Errors returned by the address search client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Empty or whitespace-only query, rejected before any network call.
    #[error("empty search query")]
    EmptyQuery,

    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// status from the search service.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered, but its first candidate did not carry a usable
    /// coordinate pair.
    #[error("invalid coordinate in search response: lat={lat} lon={lon}")]
    InvalidCoordinate { lat: String, lon: String },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
