use crate::constants::MOA_PER_INCH_AT_100YD;
use crate::error::{BallisticsError, BallisticsResult};

/// Convert a linear offset at the target into minutes of angle.
///
/// One MOA covers ~1.047 inches per 100 yards, so the same offset needs a
/// smaller angular correction the farther away the target is. Distances so
/// small or so large that the offset or the angle leaves the finite range
/// are rejected rather than returned as `inf`/`NaN`.
pub fn inches_to_moa(inches: f64, distance_yards: f64) -> BallisticsResult<f64> {
    if !inches.is_finite() {
        return Err(BallisticsError::invalid_input(
            "distance_yards",
            format!("{distance_yards} gives a non-finite offset ({inches} in)"),
        ));
    }

    let distance_factor = distance_yards / 100.0;
    let moa = inches * MOA_PER_INCH_AT_100YD / distance_factor;

    if !moa.is_finite() {
        return Err(BallisticsError::invalid_input(
            "distance_yards",
            format!("{distance_yards} gives a non-finite angle ({moa} MOA)"),
        ));
    }
    Ok(moa)
}
