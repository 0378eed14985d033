//! Angle conversion helpers.

use std::f64::consts::PI;

/// Degrees to half-angle radians, as needed by quaternion construction.
pub const EULER_TO_HALF_RADIANS: f64 = PI / 360.0;

pub const DEGREES_TO_RADIANS: f64 = PI / 180.0;

pub const RADIANS_TO_DEGREES: f64 = 180.0 / PI;

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEGREES_TO_RADIANS
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RADIANS_TO_DEGREES
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn converts_both_ways() {
        assert_abs_diff_eq!(degrees_to_radians(180.0), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(radians_to_degrees(PI / 2.0), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(radians_to_degrees(degrees_to_radians(-37.5)), -37.5, epsilon = 1e-12);
    }

    #[test]
    fn half_angle_constant_is_half_of_dtr() {
        assert_abs_diff_eq!(EULER_TO_HALF_RADIANS * 2.0, DEGREES_TO_RADIANS, epsilon = 1e-15);
    }
}
