//! Single-result forward geocoding against a Nominatim-style search service.
//!
//! The picker only ever wants one answer per query, so the client pins
//! `limit=1` and reports "no match" and "request failed" as distinct,
//! non-fatal outcomes. Supersession of in-flight searches is cooperative and
//! lives in the picker controller; this client is stateless per request.

pub mod client;
pub mod error;
pub mod types;

pub use client::GeocodeClient;
pub use error::GeocodeError;
pub use types::{GeocodeOutcome, SearchCandidate};
