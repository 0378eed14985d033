//! Rotation quaternions (`DQuat`, components x, y, z, w).
//!
//! `from_euler` and `to_matrix` use a fixed axis convention that the
//! projection output depends on; both are written out component by component.

use crate::math::EULER_TO_HALF_RADIANS;
use crate::{DMat4, DQuat};

#[inline]
pub fn identity() -> DQuat {
    DQuat::IDENTITY
}

/// Hamilton product `a ⊗ b`.
#[inline]
pub fn multiply(a: DQuat, b: DQuat) -> DQuat {
    DQuat::from_xyzw(
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
}

/// Builds a rotation from Euler angles in degrees.
///
/// The z angle is negated before the half-angle trig.
pub fn from_euler(x: f64, y: f64, z: f64) -> DQuat {
    let ax = x * EULER_TO_HALF_RADIANS;
    let ay = y * EULER_TO_HALF_RADIANS;
    let az = z * EULER_TO_HALF_RADIANS;

    let (sx, cx) = ax.sin_cos();
    let (sy, cy) = ay.sin_cos();
    let (sz, cz) = (-az).sin_cos();

    let cycz = cy * cz;
    let sysz = sy * sz;

    DQuat::from_xyzw(
        cycz * sx + sysz * cx,
        sy * cz * cx + cy * sz * sx,
        cy * sz * cx - sy * cz * sx,
        cycz * cx - sysz * sx,
    )
}

/// Rotation matrix for `q`. Only the upper 3x3 block differs from identity.
pub fn to_matrix(q: DQuat) -> DMat4 {
    let xs = q.x * q.x;
    let ys = q.y * q.y;
    let zs = q.z * q.z;
    let ws = q.w * q.w;

    let x2 = q.x * 2.0;
    let y2 = q.y * 2.0;
    let w2 = q.w * 2.0;

    let xy = q.y * x2;
    let xz = q.z * x2;
    let yz = q.z * y2;
    let wx = q.x * w2;
    let wy = q.y * w2;
    let wz = q.z * w2;

    #[rustfmt::skip]
    let m = DMat4::from_cols_array(&[
        ws + xs - ys - zs, xy - wz,           xz + wy,           0.0,
        xy + wz,           ws - xs + ys - zs, yz - wx,           0.0,
        xz - wy,           yz + wx,           ws - xs - ys + zs, 0.0,
        0.0,               0.0,               0.0,               1.0,
    ]);
    m
}
