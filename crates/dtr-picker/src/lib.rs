//! Interactive geofence coordinate picker.
//!
//! Locating a branch takes two very different input sources: panning the map
//! (continuous, synchronous) and searching for an address (discrete,
//! asynchronous, supersedable). The controller reconciles both into one
//! candidate coordinate and hands it to the parent branch form under an
//! explicit confirm/cancel transaction, so a canceled dialog or a failed
//! search can never leak into the draft.
//!
//! Three states stay distinct throughout:
//! - the **displayed** coordinate (the map surface's center),
//! - the **pending** candidate (the controller's, discarded on cancel),
//! - the **persisted** value (the form draft's, written once, on confirm).

pub mod controller;
pub mod form;
pub mod surface;

pub use controller::{CoordinatePickerController, PickerState, SearchResolution, SearchTicket};
pub use form::GeofenceForm;
pub use surface::MapInteractionSurface;
