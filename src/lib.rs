//! # Shot Tracker
//!
//! Elevation and wind corrections for a rifle and shot scenario, using a
//! no-drag flat-gravity trajectory and an empirically calibrated wind drift
//! curve. Also provides a rifle profile registry and a REST API over both.

// Re-export the main types and functions
pub use calculator::{calculate_corrections, CorrectionResult, RifleProfile, ShotScenario};
pub use drop::{compute_drop, DropCorrection};
pub use error::{BallisticsError, BallisticsResult};
pub use time_of_flight::time_of_flight;
pub use wind::{compute_wind_drift, compute_wind_drift_with_model, DriftCorrection, WindDriftModel};

// Module declarations
pub mod angle_calculations;
pub mod calculator;
pub mod config;
pub mod constants;
pub mod drop;
pub mod error;
pub mod rifles;
pub mod time_of_flight;
pub mod wind;

#[cfg(feature = "http-server")]
pub mod http;
