/// Physical constants and unit conversions used in correction calculations

/// Gravitational acceleration in m/s²
///
/// Flat-fire approximation: gravity is constant and acts only on the
/// vertical axis for the whole flight.
pub const G: f64 = 9.81;

/// Conversion factor: yards to meters
pub const YARDS_TO_METERS: f64 = 0.9144;

/// Conversion factor: feet per second to meters per second
pub const FPS_TO_MPS: f64 = 0.3048;

/// Conversion factor: miles per hour to meters per second
pub const MPH_TO_MPS: f64 = 0.44704;

/// Conversion factor: meters to inches
pub const INCHES_PER_METER: f64 = 39.3701;

/// Linear size of one minute of angle at 100 yards, in inches
pub const INCHES_PER_MOA_AT_100YD: f64 = 1.047;

/// Minutes of angle subtended by one inch at 100 yards
pub const MOA_PER_INCH_AT_100YD: f64 = 1.0 / INCHES_PER_MOA_AT_100YD;

// Calibrated wind drift constants
//
// Tuned so a 10 mph full crosswind at 300 yards with a 2700 fps muzzle
// velocity drifts roughly 15 inches.

/// Reference muzzle velocity the drift curve is normalized to (fps)
pub const DRIFT_REFERENCE_VELOCITY_FPS: f64 = 2700.0;

/// Exponent applied to the normalized velocity
pub const DRIFT_VELOCITY_EXPONENT: f64 = 0.8;

/// Inches of drift per mph per (hundreds of yards)² at the reference velocity
pub const DRIFT_BASE_CONSTANT: f64 = 0.167;
