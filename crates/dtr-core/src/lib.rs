pub mod app_config;
pub mod attendance;
pub mod branch;
pub mod config;
pub mod geo;
pub mod user;

use thiserror::Error;

pub use app_config::AppConfig;
pub use attendance::{AttendanceLog, LogKind};
pub use branch::{Branch, DEFAULT_RADIUS_METERS};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{Coordinate, DEFAULT_CENTER};
pub use user::{UserAccount, UserStatus};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("geofence radius must be a positive number of meters")]
    ZeroRadius,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
