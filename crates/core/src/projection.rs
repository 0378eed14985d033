//! Axonometric view parameters shared by every node of a scene.

use crate::math::degrees_to_radians;
use crate::{DVec2, DVec3};

/// Cached trig ratios for a pitch/rotation pair plus the 2D origin offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axonometric {
    pitch_degrees: f64,
    rotation_degrees: f64,
    /// sin(pitch)
    pitch_ratio: f64,
    /// cos(pitch)
    y_ratio: f64,
    sin_rotation: f64,
    cos_rotation: f64,
    origin: DVec2,
}

/// Output of projecting one vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Projected {
    pub point: DVec2,
    pub depth: f64,
}

impl Axonometric {
    pub fn new(pitch_degrees: f64, rotation_degrees: f64) -> Self {
        let mut view = Self {
            pitch_degrees: 0.0,
            rotation_degrees: 0.0,
            pitch_ratio: 0.0,
            y_ratio: 1.0,
            sin_rotation: 0.0,
            cos_rotation: 1.0,
            origin: DVec2::ZERO,
        };
        view.set_pitch(pitch_degrees);
        view.set_rotation(rotation_degrees);
        view
    }

    pub fn set_pitch(&mut self, degrees: f64) {
        let (sin, cos) = degrees_to_radians(degrees).sin_cos();
        self.pitch_degrees = degrees;
        self.pitch_ratio = sin;
        self.y_ratio = cos;
    }

    pub fn set_rotation(&mut self, degrees: f64) {
        let (sin, cos) = degrees_to_radians(degrees).sin_cos();
        self.rotation_degrees = degrees;
        self.sin_rotation = sin;
        self.cos_rotation = cos;
    }

    #[inline]
    pub fn set_origin(&mut self, origin: DVec2) -> DVec2 {
        self.origin = origin;
        origin
    }

    #[inline]
    pub fn pitch(&self) -> f64 {
        self.pitch_degrees
    }

    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation_degrees
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Projects a scene-space vertex (y up) onto the screen plane.
    ///
    /// `z_offset` is added to the depth only.
    pub fn project(&self, v: DVec3, z_offset: f64) -> Projected {
        // Position along the ground plane after spinning about y.
        let ground = v.x * self.sin_rotation + v.z * self.cos_rotation;

        let x = v.x * self.cos_rotation - v.z * self.sin_rotation;
        let y = ground * self.pitch_ratio - v.y * self.y_ratio;
        let depth = ground * self.y_ratio + v.y * self.pitch_ratio + z_offset;

        Projected {
            point: DVec2::new(x, y) + self.origin,
            depth,
        }
    }
}

impl Default for Axonometric {
    fn default() -> Self {
        Self::new(35.0, 45.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn flat_view_maps_y_to_screen_and_z_to_depth() {
        let view = Axonometric::new(0.0, 0.0);
        for (x, y, z) in [(1.0, 2.0, 3.0), (-4.0, 0.5, 10.0), (0.0, -7.0, -2.0)] {
            let p = view.project(DVec3::new(x, y, z), 0.0);
            assert_abs_diff_eq!(p.point.x, x, epsilon = 1e-12);
            assert_abs_diff_eq!(p.point.y, -y, epsilon = 1e-12);
            assert_abs_diff_eq!(p.depth, z, epsilon = 1e-12);
        }
    }

    #[test]
    fn top_down_view_maps_z_to_screen_and_y_to_depth() {
        let view = Axonometric::new(90.0, 0.0);
        let p = view.project(DVec3::new(1.0, 2.0, 3.0), 0.0);
        assert_abs_diff_eq!(p.point.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.point.y, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.depth, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_spins_about_vertical_axis() {
        let view = Axonometric::new(0.0, 90.0);
        let p = view.project(DVec3::new(1.0, 0.0, 0.0), 0.0);
        assert_abs_diff_eq!(p.point.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.depth, 1.0, epsilon = 1e-12);

        let p = view.project(DVec3::new(0.0, 0.0, 1.0), 0.0);
        assert_abs_diff_eq!(p.point.x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.depth, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn origin_and_offset_are_applied() {
        let mut view = Axonometric::new(35.0, 45.0);
        let base = view.project(DVec3::new(3.0, 4.0, 5.0), 0.0);
        assert_eq!(view.set_origin(DVec2::new(100.0, 50.0)), DVec2::new(100.0, 50.0));
        let moved = view.project(DVec3::new(3.0, 4.0, 5.0), 2.5);
        assert_abs_diff_eq!(moved.point.x, base.point.x + 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(moved.point.y, base.point.y + 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(moved.depth, base.depth + 2.5, epsilon = 1e-12);
    }

    #[test]
    fn default_angles() {
        let view = Axonometric::default();
        assert_eq!(view.pitch(), 35.0);
        assert_eq!(view.rotation(), 45.0);
        assert_eq!(view.origin(), DVec2::ZERO);
    }
}
