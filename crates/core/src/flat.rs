//! Single-point axonometric projection without a scene graph.
//!
//! Here z is the up axis and x/y span the ground plane.

use crate::math::{degrees_to_radians, radians_to_degrees};
use crate::{DVec2, DVec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatProjection {
    origin: DVec2,
    /// Stored negated, in radians.
    rotation_angle: f64,
    /// Folded into [-90, 90], in degrees.
    pitch_angle: f64,
    pitch_ratio: f64,
    z_ratio: f64,
}

impl FlatProjection {
    pub fn new(pitch_degrees: f64, rotation_degrees: f64) -> Self {
        let mut projection = Self {
            origin: DVec2::ZERO,
            rotation_angle: 0.0,
            pitch_angle: 0.0,
            pitch_ratio: 0.0,
            z_ratio: 1.0,
        };
        projection.set_pitch(pitch_degrees);
        projection.set_rotation(rotation_degrees);
        projection
    }

    /// Updates whichever origin components are given and returns the origin.
    pub fn set_origin(&mut self, x: Option<f64>, y: Option<f64>) -> DVec2 {
        if let Some(x) = x {
            self.origin.x = x;
        }
        if let Some(y) = y {
            self.origin.y = y;
        }
        self.origin
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Sets the pitch and returns the folded angle in degrees.
    ///
    /// The magnitude is reflected into [0, 90] every half turn and takes the
    /// sign of sin(degrees), so 120 becomes 60 and 200 becomes -20.
    pub fn set_pitch(&mut self, degrees: f64) -> f64 {
        let sine = degrees_to_radians(degrees).sin();
        let sign = if sine == 0.0 { 0.0 } else { sine.signum() };
        let modulo = degrees.abs() % 180.0 - 90.0;
        let slope = if modulo > 0.0 { 90.0 - modulo } else { 90.0 + modulo };
        let angle = slope * sign;

        let (sin, cos) = degrees_to_radians(angle).sin_cos();
        self.pitch_angle = angle;
        self.pitch_ratio = sin;
        self.z_ratio = cos;
        angle
    }

    #[inline]
    pub fn pitch(&self) -> f64 {
        self.pitch_angle
    }

    /// Sets the rotation and returns the stored (negated) angle in radians.
    pub fn set_rotation(&mut self, degrees: f64) -> f64 {
        self.rotation_angle = degrees_to_radians(-degrees);
        self.rotation_angle
    }

    /// Rotation in degrees as passed to `set_rotation`.
    #[inline]
    pub fn rotation(&self) -> f64 {
        -radians_to_degrees(self.rotation_angle)
    }

    pub fn project(&self, point: DVec3) -> DVec2 {
        let (sin, cos) = self.rotation_angle.sin_cos();
        let x = point.x * cos - point.y * sin;
        let y = (point.x * sin + point.y * cos) * self.pitch_ratio - point.z * self.z_ratio;
        DVec2::new(x, y) + self.origin
    }
}

impl Default for FlatProjection {
    fn default() -> Self {
        Self::new(35.0, 45.0)
    }
}
