use crate::constants::{FPS_TO_MPS, YARDS_TO_METERS};
use crate::error::{ensure_finite, BallisticsError, BallisticsResult};

/// Time of flight in seconds, ignoring drag.
///
/// Velocity is held at the muzzle value for the whole flight, so this
/// underestimates flight time at long range. Distance is only checked for
/// being finite; the estimators that divide by it enforce `> 0`.
pub fn time_of_flight(distance_yards: f64, muzzle_velocity_fps: f64) -> BallisticsResult<f64> {
    ensure_finite("distance_yards", distance_yards)?;

    let distance_m = distance_yards * YARDS_TO_METERS;
    let velocity_mps = muzzle_velocity_fps * FPS_TO_MPS;

    // Negated comparison so NaN is rejected too
    if !(velocity_mps > 0.0 && velocity_mps.is_finite()) {
        return Err(BallisticsError::invalid_input(
            "muzzle_velocity_fps",
            format!("must be > 0, got {muzzle_velocity_fps}"),
        ));
    }

    Ok(distance_m / velocity_mps)
}
