//! Shot-level API: rifle and scenario types plus the merged correction.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::drop::compute_drop;
use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, BallisticsResult};
use crate::wind::{compute_wind_drift_with_model, WindDriftModel};

/// Ballistic identity of a rifle for the no-drag model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RifleProfile {
    pub name: String,
    pub zero_yards: f64,
    pub muzzle_velocity_fps: f64,
}

impl RifleProfile {
    pub fn new(name: impl Into<String>, zero_yards: f64, muzzle_velocity_fps: f64) -> Self {
        Self {
            name: name.into(),
            zero_yards,
            muzzle_velocity_fps,
        }
    }

    pub fn validate(&self) -> BallisticsResult<()> {
        ensure_positive("zero_yards", self.zero_yards)?;
        ensure_positive("muzzle_velocity_fps", self.muzzle_velocity_fps)?;
        Ok(())
    }
}

/// One shot to correct for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotScenario {
    pub distance_yards: f64,
    pub wind_speed_mph: f64,
    /// Angle between shot direction and wind (90 = full crosswind)
    pub wind_angle_deg: f64,
    pub rifle: RifleProfile,
}

impl ShotScenario {
    pub fn validate(&self) -> BallisticsResult<()> {
        ensure_positive("distance_yards", self.distance_yards)?;
        ensure_non_negative("wind_speed_mph", self.wind_speed_mph)?;
        ensure_finite("wind_angle_deg", self.wind_angle_deg)?;
        self.rifle.validate()
    }
}

/// Elevation and wind holds for a shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    pub distance_yards: f64,
    pub wind_speed_mph: f64,
    pub wind_angle_deg: f64,
    pub drop_inches: f64,
    pub drop_moa: f64,
    pub drift_inches: f64,
    pub drift_moa: f64,
}

/// Run the drop and wind drift estimators for a scenario and merge them.
pub fn calculate_corrections(
    scenario: &ShotScenario,
    wind_model: WindDriftModel,
) -> BallisticsResult<CorrectionResult> {
    scenario.validate()?;

    let rifle = &scenario.rifle;
    let drop = compute_drop(scenario.distance_yards, rifle.muzzle_velocity_fps, rifle.zero_yards)?;
    let drift = compute_wind_drift_with_model(
        wind_model,
        scenario.distance_yards,
        rifle.muzzle_velocity_fps,
        scenario.wind_speed_mph,
        scenario.wind_angle_deg,
    )?;

    debug!(
        rifle = %rifle.name,
        distance_yards = scenario.distance_yards,
        %wind_model,
        drop_moa = drop.drop_moa,
        drift_moa = drift.drift_moa,
        "calculated corrections"
    );

    Ok(CorrectionResult {
        distance_yards: scenario.distance_yards,
        wind_speed_mph: scenario.wind_speed_mph,
        wind_angle_deg: scenario.wind_angle_deg,
        drop_inches: drop.drop_inches,
        drop_moa: drop.drop_moa,
        drift_inches: drift.drift_inches,
        drift_moa: drift.drift_moa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wind::compute_wind_drift;

    fn scenario() -> ShotScenario {
        ShotScenario {
            distance_yards: 300.0,
            wind_speed_mph: 10.0,
            wind_angle_deg: 90.0,
            rifle: RifleProfile::new("6.5 CM - 143gr ELD-X", 200.0, 2700.0),
        }
    }

    #[test]
    fn test_calculate_merges_estimators() {
        let s = scenario();
        let result = calculate_corrections(&s, WindDriftModel::Calibrated).unwrap();
        let drop = compute_drop(300.0, 2700.0, 200.0).unwrap();
        let drift = compute_wind_drift(300.0, 2700.0, 10.0, 90.0).unwrap();

        assert_eq!(result.distance_yards, 300.0);
        assert_eq!(result.wind_speed_mph, 10.0);
        assert_eq!(result.wind_angle_deg, 90.0);
        assert_eq!(result.drop_inches, drop.drop_inches);
        assert_eq!(result.drop_moa, drop.drop_moa);
        assert_eq!(result.drift_inches, drift.drift_inches);
        assert_eq!(result.drift_moa, drift.drift_moa);
    }

    #[test]
    fn test_model_changes_only_drift() {
        let s = scenario();
        let calibrated = calculate_corrections(&s, WindDriftModel::Calibrated).unwrap();
        let tof = calculate_corrections(&s, WindDriftModel::TimeOfFlight).unwrap();
        assert_eq!(calibrated.drop_inches, tof.drop_inches);
        assert_ne!(calibrated.drift_inches, tof.drift_inches);
    }

    #[test]
    fn test_validation() {
        let mut s = scenario();
        s.rifle.muzzle_velocity_fps = 0.0;
        assert_eq!(
            calculate_corrections(&s, WindDriftModel::Calibrated).unwrap_err().field(),
            "muzzle_velocity_fps"
        );

        let mut s = scenario();
        s.rifle.zero_yards = 0.0;
        assert_eq!(s.validate().unwrap_err().field(), "zero_yards");

        let mut s = scenario();
        s.distance_yards = -5.0;
        assert_eq!(s.validate().unwrap_err().field(), "distance_yards");

        let mut s = scenario();
        s.wind_speed_mph = -1.0;
        assert_eq!(s.validate().unwrap_err().field(), "wind_speed_mph");
    }

    #[test]
    fn test_near_zero_distance_is_rejected() {
        let mut s = scenario();
        s.distance_yards = 1e-307;
        let err = calculate_corrections(&s, WindDriftModel::Calibrated).unwrap_err();
        assert_eq!(err.field(), "distance_yards");
    }

    #[test]
    fn test_scenario_json_shape() {
        let json = r#"{
            "distance_yards": 300,
            "wind_speed_mph": 12,
            "wind_angle_deg": 90,
            "rifle": {"name": "6.5 CM", "zero_yards": 200, "muzzle_velocity_fps": 2700}
        }"#;
        let s: ShotScenario = serde_json::from_str(json).unwrap();
        assert_eq!(s.rifle.zero_yards, 200.0);

        let result = calculate_corrections(&s, WindDriftModel::default()).unwrap();
        let value = serde_json::to_value(result).unwrap();
        for key in [
            "distance_yards",
            "wind_speed_mph",
            "wind_angle_deg",
            "drop_inches",
            "drop_moa",
            "drift_inches",
            "drift_moa",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
