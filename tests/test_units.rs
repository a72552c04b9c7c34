// Unit conversion checks against hand-computed reference values

use shot_tracker::angle_calculations::inches_to_moa;
use shot_tracker::constants::*;
use shot_tracker::{compute_drop, time_of_flight};

#[test]
fn test_conversion_constants() {
    assert_eq!(G, 9.81);
    assert_eq!(YARDS_TO_METERS, 0.9144);
    assert_eq!(FPS_TO_MPS, 0.3048);
    assert_eq!(MPH_TO_MPS, 0.44704);
    assert_eq!(INCHES_PER_METER, 39.3701);
    assert_eq!(MOA_PER_INCH_AT_100YD, 1.0 / 1.047);
}

#[test]
fn test_time_of_flight_units() {
    // 1000 yd = 914.4 m, 3000 fps = 914.4 m/s
    let t = time_of_flight(1000.0, 3000.0).unwrap();
    assert!((t - 1.0).abs() < 1e-12);
}

#[test]
fn test_drop_units() {
    // A zero this close is effectively the muzzle; 1000 yd at 3000 fps is 1 s of fall
    let drop = compute_drop(1000.0, 3000.0, 1e-6).unwrap();
    let expected_inches = 0.5 * G * INCHES_PER_METER;
    assert!((drop.drop_inches - expected_inches).abs() < 1e-6);
    assert!((drop.drop_moa - inches_to_moa(expected_inches, 1000.0).unwrap()).abs() < 1e-6);
}

#[test]
fn test_moa_units() {
    // 10.47 inches at 1000 yd is exactly 1 MOA
    assert!((inches_to_moa(10.47, 1000.0).unwrap() - 1.0).abs() < 1e-12);
}
