//! Geographic value types shared across the workspace.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Fallback map center used when no prior coordinate exists (Manila).
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    latitude: 14.5995,
    longitude: 120.9842,
};

/// A WGS84 point in decimal degrees.
///
/// Immutable value type: every update anywhere in the picker produces a new
/// `Coordinate` rather than mutating fields in place, so a stale asynchronous
/// result can be discarded without partially overwriting a newer value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting values outside the valid degree ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LatitudeOutOfRange`] or
    /// [`CoreError::LongitudeOutOfRange`] when either component falls outside
    /// `[-90, 90]` / `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoreError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for Coordinate {
    /// Six decimal places, matching the on-screen crosshair readout.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
