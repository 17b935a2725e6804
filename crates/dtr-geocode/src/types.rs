//! Wire types for the address search service.

use dtr_core::Coordinate;
use serde::Deserialize;

/// One candidate row from the search response array.
///
/// The service returns coordinates as JSON strings (`"lat": "14.5995"`),
/// parsed downstream with standard floating-point conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCandidate {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Outcome of a single-result address lookup.
///
/// A query that parses but matches nothing is an ordinary answer, not an
/// error: the caller leaves its current candidate untouched and tells the
/// user, which is a different notice from a failed request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeocodeOutcome {
    /// The first match returned by the service; ties among multiple
    /// candidates are broken by service order, with no re-ranking.
    Found(Coordinate),
    /// The service answered normally with zero candidates.
    NoMatch,
}
