use serde::{Deserialize, Serialize};

use crate::angle_calculations::inches_to_moa;
use crate::constants::{G, INCHES_PER_METER};
use crate::error::{ensure_positive, BallisticsResult};
use crate::time_of_flight::time_of_flight;

/// Elevation correction relative to the zeroed point of impact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropCorrection {
    pub drop_inches: f64,
    pub drop_moa: f64,
}

/// Free-fall distance in meters after `time_s` seconds.
fn gravity_drop_m(time_s: f64) -> f64 {
    0.5 * G * time_s * time_s
}

/// Compute bullet drop at `distance_yards` relative to the zero range.
///
/// The sight line is assumed to cross the trajectory at `zero_yards`, so the
/// correction is how much farther the bullet has fallen at the target than
/// at the zero. Targets closer than the zero give a negative drop.
pub fn compute_drop(
    distance_yards: f64,
    muzzle_velocity_fps: f64,
    zero_yards: f64,
) -> BallisticsResult<DropCorrection> {
    ensure_positive("distance_yards", distance_yards)?;
    ensure_positive("zero_yards", zero_yards)?;

    let t_zero = time_of_flight(zero_yards, muzzle_velocity_fps)?;
    let t_target = time_of_flight(distance_yards, muzzle_velocity_fps)?;

    let relative_drop_m = gravity_drop_m(t_target) - gravity_drop_m(t_zero);
    let drop_inches = relative_drop_m * INCHES_PER_METER;

    Ok(DropCorrection {
        drop_inches,
        drop_moa: inches_to_moa(drop_inches, distance_yards)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MOA_PER_INCH_AT_100YD;
    use crate::error::BallisticsError;

    #[test]
    fn test_drop_300_zeroed_200() {
        let drop = compute_drop(300.0, 2700.0, 200.0).unwrap();
        assert!((drop.drop_inches - 11.9204).abs() < 1e-3);
        assert!((drop.drop_moa - 3.7951).abs() < 1e-3);
        assert_eq!(drop.drop_moa, drop.drop_inches * MOA_PER_INCH_AT_100YD / 3.0);
    }

    #[test]
    fn test_drop_at_zero_range() {
        let drop = compute_drop(250.0, 2900.0, 250.0).unwrap();
        assert!(drop.drop_inches.abs() < 1e-12);
        assert!(drop.drop_moa.abs() < 1e-12);
    }

    #[test]
    fn test_drop_inside_zero_is_negative() {
        let drop = compute_drop(100.0, 2700.0, 200.0).unwrap();
        assert!(drop.drop_inches < 0.0);
        assert!(drop.drop_moa < 0.0);
    }

    #[test]
    fn test_drop_increases_with_distance() {
        let mut last = f64::NEG_INFINITY;
        for d in [150.0, 300.0, 450.0, 600.0, 1000.0] {
            let drop = compute_drop(d, 2700.0, 100.0).unwrap();
            assert!(drop.drop_inches > last);
            last = drop.drop_inches;
        }
    }

    #[test]
    fn test_faster_bullet_drops_less() {
        let slow = compute_drop(500.0, 2400.0, 100.0).unwrap();
        let fast = compute_drop(500.0, 3200.0, 100.0).unwrap();
        assert!(fast.drop_inches < slow.drop_inches);
    }

    #[test]
    fn test_drop_rejects_bad_input() {
        assert_eq!(compute_drop(300.0, 0.0, 200.0).unwrap_err().field(), "muzzle_velocity_fps");
        assert_eq!(compute_drop(0.0, 2700.0, 200.0).unwrap_err().field(), "distance_yards");
        assert_eq!(compute_drop(-300.0, 2700.0, 200.0).unwrap_err().field(), "distance_yards");
        assert_eq!(compute_drop(300.0, 2700.0, -100.0).unwrap_err().field(), "zero_yards");
        assert!(matches!(
            compute_drop(f64::NAN, 2700.0, 100.0),
            Err(BallisticsError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_drop_rejects_non_finite_corrections() {
        // Tiny distance: the MOA divisor underflows toward zero
        let err = compute_drop(1e-307, 2700.0, 200.0).unwrap_err();
        assert!(matches!(err, BallisticsError::InvalidInput { field: "distance_yards", .. }));

        // Huge distance: t² overflows
        assert!(matches!(
            compute_drop(1e200, 2700.0, 200.0),
            Err(BallisticsError::InvalidInput { .. })
        ));
    }
}
