//! Typed client for the attendance backend's admin REST surface.
//!
//! Covers the three admin workflows: the registration approval queue,
//! branch/geofence management, and the attendance review feed. The access
//! credential is an explicit parameter on every call — nothing here reads
//! ambient process-wide storage, so each piece stays independently testable.

pub mod client;
pub mod error;
pub mod queue;
mod retry;
pub mod token;

pub use client::AdminApiClient;
pub use error::ApiError;
pub use queue::pending_only;
pub use token::AccessToken;
