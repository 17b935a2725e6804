//! The picker's state machine.
//!
//! Lifecycle: `Seeded → Editing → {confirmed, canceled}`. The terminal
//! transitions are consuming methods, so the transient state cannot outlive
//! the dialog and the parent draft cannot be touched more than once.
//!
//! Concurrency model: map moves apply in the order received; every dispatched
//! search carries a monotonically increasing sequence number, and only the
//! resolution presenting the latest number may touch the candidate. A result
//! for a superseded search is dropped on the floor — cancellation is
//! cooperative, nothing is aborted in flight.

use dtr_core::{Coordinate, DEFAULT_CENTER};
use dtr_geocode::{GeocodeClient, GeocodeError, GeocodeOutcome};

use crate::surface::MapInteractionSurface;

/// Sequence number for one dispatched search. A resolution must present its
/// ticket; only the most recently issued ticket is still live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// What became of one search, for the host dialog to render.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResolution {
    /// The candidate was replaced and the map recentred.
    Applied(Coordinate),
    /// Blank query, rejected before dispatch. Candidate unchanged.
    EmptyQuery,
    /// The result belonged to a superseded search and was dropped.
    Stale,
    /// The service found nothing. Candidate unchanged; tell the user.
    NoMatch,
    /// The search failed. Candidate unchanged; retrying is the user's call.
    Failed(String),
}

/// Snapshot of the transient dialog state, for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    pub candidate: Coordinate,
    pub search_text: String,
    pub is_searching: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Seeded,
    Editing,
}

/// Owns the candidate coordinate while the picker dialog is open.
///
/// Only this type mutates the picker state; the surface and the geocode
/// client are a pure event source and request issuer respectively.
#[derive(Debug)]
pub struct CoordinatePickerController {
    candidate: Coordinate,
    search_text: String,
    phase: Phase,
    /// Sequence of the most recently dispatched search.
    dispatched: u64,
    /// Sequence of the most recently resolved live search.
    resolved: u64,
    surface: MapInteractionSurface,
}

impl CoordinatePickerController {
    /// Opens the picker seeded from the form's current coordinate, or the
    /// fixed default when drafting a brand-new branch with no prior location.
    #[must_use]
    pub fn open(seed: Option<Coordinate>) -> Self {
        let candidate = seed.unwrap_or(DEFAULT_CENTER);
        Self {
            candidate,
            search_text: String::new(),
            phase: Phase::Seeded,
            dispatched: 0,
            resolved: 0,
            surface: MapInteractionSurface::new(candidate),
        }
    }

    #[must_use]
    pub fn candidate(&self) -> Coordinate {
        self.candidate
    }

    #[must_use]
    pub fn surface(&self) -> &MapInteractionSurface {
        &self.surface
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.phase == Phase::Editing
    }

    /// True while the most recently dispatched search has not resolved.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.resolved < self.dispatched
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Snapshot for rendering the dialog.
    #[must_use]
    pub fn state(&self) -> PickerState {
        PickerState {
            candidate: self.candidate,
            search_text: self.search_text.clone(),
            is_searching: self.is_searching(),
        }
    }

    /// A user pan: the new map center replaces the candidate wholesale.
    pub fn note_move(&mut self, center: Coordinate) {
        let center = self.surface.pan_to(center);
        self.candidate = center;
        self.phase = Phase::Editing;
    }

    /// Registers a search dispatch. Issuing a new ticket supersedes every
    /// earlier in-flight search for this picker instance.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.phase = Phase::Editing;
        self.dispatched += 1;
        SearchTicket(self.dispatched)
    }

    /// Applies the outcome of one search, if its ticket is still live.
    ///
    /// Anything else — stale ticket, no match, failure — leaves the candidate
    /// exactly as it was. An applied result also recenters the map surface,
    /// without producing a move event.
    pub fn resolve_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<GeocodeOutcome, GeocodeError>,
    ) -> SearchResolution {
        if ticket.0 != self.dispatched {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.dispatched,
                "dropping stale geocode result"
            );
            return SearchResolution::Stale;
        }
        self.resolved = ticket.0;

        match outcome {
            Ok(GeocodeOutcome::Found(coordinate)) => {
                self.candidate = coordinate;
                self.surface.recenter(coordinate);
                SearchResolution::Applied(coordinate)
            }
            Ok(GeocodeOutcome::NoMatch) => SearchResolution::NoMatch,
            Err(e) => {
                tracing::warn!(error = %e, "address search failed");
                SearchResolution::Failed(e.to_string())
            }
        }
    }

    /// Dispatches the current search text and resolves it in one step.
    ///
    /// The map stays interactive while the lookup runs; if another search is
    /// issued before this one returns, the slower result resolves as
    /// [`SearchResolution::Stale`].
    pub async fn search(&mut self, client: &GeocodeClient) -> SearchResolution {
        let query = self.search_text.trim().to_owned();
        if query.is_empty() {
            return SearchResolution::EmptyQuery;
        }
        let ticket = self.begin_search();
        let outcome = client.search(&query).await;
        self.resolve_search(ticket, outcome)
    }

    /// Commits the picker: the candidate at this moment is the confirmed
    /// location, handed back verbatim for the parent form to persist.
    /// Consumes the controller; the transient state is discarded.
    #[must_use]
    pub fn confirm(self) -> Coordinate {
        self.candidate
    }

    /// Dismisses the picker. Everything transient is discarded; the parent
    /// draft never saw any of it.
    pub fn cancel(self) {}
}
