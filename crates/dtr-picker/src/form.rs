//! The parent branch-editing form.
//!
//! Owns the draft `Branch` while the dialog is open. The picker only ever
//! receives a copy of the draft coordinate as its seed and writes back
//! exactly once, on confirm; everything the picker does in between is
//! invisible here.

use dtr_api::{AccessToken, AdminApiClient, ApiError};
use dtr_core::{Branch, Coordinate, CoreError};

use crate::controller::CoordinatePickerController;

/// Draft editor for one branch, covering both the create and edit flows.
#[derive(Debug, Clone)]
pub struct GeofenceForm {
    draft: Branch,
}

impl GeofenceForm {
    /// Starts editing an existing branch. The draft is a local copy; the
    /// stored record is untouched until a save round-trips.
    #[must_use]
    pub fn open_edit(branch: Branch) -> Self {
        Self { draft: branch }
    }

    /// Starts drafting a new branch: empty fields, the fixed default center,
    /// and a 100 m geofence.
    #[must_use]
    pub fn open_new() -> Self {
        Self {
            draft: Branch::draft(),
        }
    }

    #[must_use]
    pub fn draft(&self) -> &Branch {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.draft.address = address.into();
    }

    /// Sets the geofence radius, keeping the positivity invariant.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ZeroRadius`] for `0`; the draft keeps its
    /// previous radius.
    pub fn set_radius(&mut self, radius_meters: u32) -> Result<(), CoreError> {
        if radius_meters == 0 {
            return Err(CoreError::ZeroRadius);
        }
        self.draft.radius_meters = radius_meters;
        Ok(())
    }

    /// Opens the coordinate picker, seeded from the draft's coordinate. Both
    /// the edit flow (stored coordinate) and the create flow (fixed default,
    /// already in the draft) converge here.
    #[must_use]
    pub fn open_picker(&self) -> CoordinatePickerController {
        CoordinatePickerController::open(Some(self.draft.coordinate))
    }

    /// Writes a confirmed picker coordinate into the draft. This is the only
    /// write path for the draft coordinate; a canceled picker never gets here.
    pub fn apply_picker(&mut self, confirmed: Coordinate) {
        self.draft.coordinate = confirmed;
    }

    /// Persists the draft: POST for a branch the backend has never seen,
    /// PATCH otherwise. On success the draft takes the stored record
    /// (including a newly assigned id). On rejection the draft is left
    /// untouched for correction and the backend's detail message rides the
    /// error.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; [`ApiError::Rejected`] carries the server's
    /// human-readable detail verbatim.
    pub async fn save(
        &mut self,
        api: &AdminApiClient,
        token: &AccessToken,
    ) -> Result<&Branch, ApiError> {
        let stored = match self.draft.id {
            Some(id) => api.update_branch(token, id, &self.draft).await?,
            None => api.create_branch(token, &self.draft).await?,
        };
        self.draft = stored;
        Ok(&self.draft)
    }
}
