//! Center-tracking adapter over the external map tile renderer.

use dtr_core::Coordinate;

/// Initial zoom level for the picker dialog.
pub const DEFAULT_ZOOM: u8 = 13;

/// Tracks the visual center of the pannable map.
///
/// The crosshair always marks the exact screen center, so the tracked center
/// IS the coordinate under the crosshair; there is no separate marker to keep
/// in sync. The tile renderer itself stays a black box — this type only
/// mirrors the one piece of its state the picker cares about.
#[derive(Debug, Clone)]
pub struct MapInteractionSurface {
    center: Coordinate,
    zoom: u8,
}

impl MapInteractionSurface {
    #[must_use]
    pub fn new(center: Coordinate) -> Self {
        Self {
            center,
            zoom: DEFAULT_ZOOM,
        }
    }

    #[must_use]
    pub fn center(&self) -> Coordinate {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: u8) {
        self.zoom = zoom;
    }

    /// Programmatic recenter, used when the picker is seeded and when a
    /// search succeeds. Does not produce a move event, so a search result can
    /// never masquerade as user panning and feed back into the candidate.
    pub fn recenter(&mut self, center: Coordinate) {
        self.center = center;
    }

    /// Records a user-driven pan and returns the move event for the
    /// controller. Every event is a full replacement of the center, never a
    /// delta, and no debouncing is assumed.
    pub fn pan_to(&mut self, center: Coordinate) -> Coordinate {
        self.center = center;
        self.center
    }

    /// The coordinate readout rendered beside the crosshair, updated
    /// synchronously with each move.
    #[must_use]
    pub fn readout(&self) -> String {
        self.center.to_string()
    }
}
