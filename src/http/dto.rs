//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::calculator::ShotScenario;
use crate::wind::WindDriftModel;

pub use crate::calculator::{CorrectionResult as ShotCalculationResponse, RifleProfile as RifleCreate};
pub use crate::rifles::Rifle;

/// Request body for `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotCalculationRequest {
    #[serde(flatten)]
    pub scenario: ShotScenario,
    /// Overrides the server's default wind drift model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_model: Option<WindDriftModel>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub registry: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_model() {
        let req: ShotCalculationRequest = serde_json::from_str(
            r#"{"distance_yards": 300, "wind_speed_mph": 12, "wind_angle_deg": 90,
                "rifle": {"name": "6.5 CM", "zero_yards": 200, "muzzle_velocity_fps": 2700}}"#,
        )
        .unwrap();
        assert_eq!(req.scenario.distance_yards, 300.0);
        assert_eq!(req.wind_model, None);
    }

    #[test]
    fn test_request_with_model() {
        let req: ShotCalculationRequest = serde_json::from_str(
            r#"{"distance_yards": 300, "wind_speed_mph": 12, "wind_angle_deg": 90,
                "rifle": {"name": "6.5 CM", "zero_yards": 200, "muzzle_velocity_fps": 2700},
                "wind_model": "time_of_flight"}"#,
        )
        .unwrap();
        assert_eq!(req.wind_model, Some(WindDriftModel::TimeOfFlight));
    }

    #[test]
    fn test_request_model_alias() {
        let req: ShotCalculationRequest = serde_json::from_str(
            r#"{"distance_yards": 300, "wind_speed_mph": 12, "wind_angle_deg": 90,
                "rifle": {"name": "6.5 CM", "zero_yards": 200, "muzzle_velocity_fps": 2700},
                "wind_model": "simple"}"#,
        )
        .unwrap();
        assert_eq!(req.wind_model, Some(WindDriftModel::TimeOfFlight));
    }

    #[test]
    fn test_request_missing_rifle() {
        let res = serde_json::from_str::<ShotCalculationRequest>(
            r#"{"distance_yards": 300, "wind_speed_mph": 12, "wind_angle_deg": 90}"#,
        );
        assert!(res.is_err());
    }
}
