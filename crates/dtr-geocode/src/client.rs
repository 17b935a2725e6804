//! HTTP client for the address search service.
//!
//! Wraps `reqwest` with the service's query contract (free-text address,
//! JSON output, result-count limit of 1) and typed outcome decoding.

use std::time::Duration;

use reqwest::{Client, Url};

use dtr_core::Coordinate;

use crate::error::GeocodeError;
use crate::types::{GeocodeOutcome, SearchCandidate};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";

/// Client for single-result forward address lookups.
///
/// Use [`GeocodeClient::new`] for production or
/// [`GeocodeClient::with_base_url`] to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    search_url: Url,
}

impl GeocodeClient {
    /// Creates a new client pointed at the production search service.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GeocodeError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: exactly one trailing slash, so joining the endpoint path
        // appends a segment instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|base| base.join("search"))
            .map_err(|e| GeocodeError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, search_url })
    }

    /// Looks up a free-text address and returns the first match, if any.
    ///
    /// The query is trimmed first; an empty or whitespace-only query is
    /// rejected locally without a network call. Zero matches is
    /// [`GeocodeOutcome::NoMatch`], not an error, so the caller can leave its
    /// current candidate unchanged and show a "nothing found" notice.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::EmptyQuery`] for a blank query.
    /// - [`GeocodeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeocodeError::Deserialize`] if the body is not the expected
    ///   candidate array.
    /// - [`GeocodeError::InvalidCoordinate`] if the first candidate's
    ///   `lat`/`lon` strings do not parse as floats in range.
    pub async fn search(&self, query: &str) -> Result<GeocodeOutcome, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }

        let url = self.build_url(query);
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let candidates: Vec<SearchCandidate> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        let Some(first) = candidates.into_iter().next() else {
            tracing::debug!(query, "address search returned no candidates");
            return Ok(GeocodeOutcome::NoMatch);
        };

        Ok(GeocodeOutcome::Found(Self::parse_candidate(&first)?))
    }

    /// Builds the full request URL with properly percent-encoded parameters.
    fn build_url(&self, query: &str) -> Url {
        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query);
            pairs.append_pair("format", "json");
            pairs.append_pair("limit", "1");
        }
        url
    }

    /// Converts a candidate's string coordinates into a validated
    /// [`Coordinate`].
    fn parse_candidate(candidate: &SearchCandidate) -> Result<Coordinate, GeocodeError> {
        let invalid = || GeocodeError::InvalidCoordinate {
            lat: candidate.lat.clone(),
            lon: candidate.lon.clone(),
        };
        let latitude = candidate.lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let longitude = candidate.lon.trim().parse::<f64>().map_err(|_| invalid())?;
        Coordinate::new(latitude, longitude).map_err(|_| invalid())
    }
}
