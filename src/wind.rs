use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::angle_calculations::inches_to_moa;
use crate::constants::{
    DRIFT_BASE_CONSTANT, DRIFT_REFERENCE_VELOCITY_FPS, DRIFT_VELOCITY_EXPONENT,
    INCHES_PER_METER, MPH_TO_MPS,
};
use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, BallisticsError, BallisticsResult};
use crate::time_of_flight::time_of_flight;

/// Lateral correction. Positive drifts right, negative drifts left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftCorrection {
    pub drift_inches: f64,
    pub drift_moa: f64,
}

/// Wind drift strategy
///
/// The two models give materially different numbers for the same shot, so
/// the choice is made explicitly by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum WindDriftModel {
    /// Empirical curve: drift grows with distance² and falls with velocity^0.8
    #[default]
    Calibrated,
    /// Crosswind speed times no-drag time of flight
    TimeOfFlight,
}

impl WindDriftModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindDriftModel::Calibrated => "calibrated",
            WindDriftModel::TimeOfFlight => "time_of_flight",
        }
    }
}

impl fmt::Display for WindDriftModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindDriftModel {
    type Err = BallisticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "calibrated" | "empirical" => Ok(WindDriftModel::Calibrated),
            "time_of_flight" | "tof" | "simple" => Ok(WindDriftModel::TimeOfFlight),
            other => Err(BallisticsError::invalid_input(
                "wind_model",
                format!("unknown model '{other}', expected calibrated or time_of_flight"),
            )),
        }
    }
}

impl TryFrom<String> for WindDriftModel {
    type Error = BallisticsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Compute wind drift with the default (calibrated) model.
pub fn compute_wind_drift(
    distance_yards: f64,
    muzzle_velocity_fps: f64,
    wind_speed_mph: f64,
    wind_angle_deg: f64,
) -> BallisticsResult<DriftCorrection> {
    compute_wind_drift_with_model(
        WindDriftModel::default(),
        distance_yards,
        muzzle_velocity_fps,
        wind_speed_mph,
        wind_angle_deg,
    )
}

/// Compute wind drift with an explicit model.
///
/// `wind_angle_deg` is measured between the shot direction and the wind:
/// 0/180 are head/tail winds with no drift, 90 pushes the bullet right and
/// 270 (or -90) pushes it left.
pub fn compute_wind_drift_with_model(
    model: WindDriftModel,
    distance_yards: f64,
    muzzle_velocity_fps: f64,
    wind_speed_mph: f64,
    wind_angle_deg: f64,
) -> BallisticsResult<DriftCorrection> {
    ensure_positive("distance_yards", distance_yards)?;
    ensure_positive("muzzle_velocity_fps", muzzle_velocity_fps)?;
    ensure_non_negative("wind_speed_mph", wind_speed_mph)?;
    ensure_finite("wind_angle_deg", wind_angle_deg)?;

    let drift_inches = match model {
        WindDriftModel::Calibrated => {
            calibrated_drift_inches(distance_yards, muzzle_velocity_fps, wind_speed_mph, wind_angle_deg)
        }
        WindDriftModel::TimeOfFlight => {
            time_of_flight_drift_inches(distance_yards, muzzle_velocity_fps, wind_speed_mph, wind_angle_deg)?
        }
    };

    Ok(DriftCorrection {
        drift_inches,
        drift_moa: inches_to_moa(drift_inches, distance_yards)?,
    })
}

fn calibrated_drift_inches(
    distance_yards: f64,
    muzzle_velocity_fps: f64,
    wind_speed_mph: f64,
    wind_angle_deg: f64,
) -> f64 {
    let sin_angle = wind_angle_deg.to_radians().sin();

    // 0 = no effect, 1 = full crosswind
    let wind_value = sin_angle.abs();
    let wind_direction = if sin_angle >= 0.0 { 1.0 } else { -1.0 };

    let distance_hundreds = distance_yards / 100.0;
    let velocity_normalized = muzzle_velocity_fps / DRIFT_REFERENCE_VELOCITY_FPS;
    let velocity_factor = velocity_normalized.powf(DRIFT_VELOCITY_EXPONENT);

    let drift_inches = wind_speed_mph * distance_hundreds.powi(2) * wind_value * DRIFT_BASE_CONSTANT
        / velocity_factor;

    drift_inches * wind_direction
}

fn time_of_flight_drift_inches(
    distance_yards: f64,
    muzzle_velocity_fps: f64,
    wind_speed_mph: f64,
    wind_angle_deg: f64,
) -> BallisticsResult<f64> {
    let crosswind_mps = wind_speed_mph * MPH_TO_MPS * wind_angle_deg.to_radians().sin();
    let tof = time_of_flight(distance_yards, muzzle_velocity_fps)?;
    Ok(crosswind_mps * tof * INCHES_PER_METER)
}
